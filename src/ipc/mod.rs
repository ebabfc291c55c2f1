//! One-shot delivery over the inherited IPC channel
//!
//! The parent orchestrator opens the channel before spawning this process
//! and advertises its file descriptor number through `NODE_CHANNEL_FD`. The
//! protocol is fire-and-forget: one line of UTF-8 JSON terminated by `\n`,
//! no framing, no acknowledgement, no retry.

use crate::extract::schema::StepConfig;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::os::unix::io::{FromRawFd, RawFd};
use thiserror::Error;
use tracing::debug;

/// Environment variable naming the inherited channel descriptor.
pub const CHANNEL_FD_ENV: &str = "NODE_CHANNEL_FD";

#[derive(Debug, Error)]
pub enum IpcError {
    #[error("{CHANNEL_FD_ENV} is not set")]
    ChannelUnavailable,
    #[error("{CHANNEL_FD_ENV} is not a valid descriptor number: {0}")]
    BadChannelFd(String),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write to IPC channel: {0}")]
    Write(#[from] io::Error),
}

/// Write-only capability over a descriptor inherited from the parent.
///
/// Constructed once per process from the environment-supplied descriptor
/// number and used for exactly one `write_line`. The descriptor is closed
/// when the sink drops, on every exit path.
#[derive(Debug)]
pub struct InheritedSink {
    channel: File,
}

impl InheritedSink {
    /// Opens the channel named by [`CHANNEL_FD_ENV`].
    pub fn from_env() -> Result<Self, IpcError> {
        let raw = env::var(CHANNEL_FD_ENV).map_err(|_| IpcError::ChannelUnavailable)?;
        let fd = match raw.parse::<RawFd>() {
            // Inherited descriptors are non-negative by construction.
            Ok(fd) if fd >= 0 => fd,
            _ => return Err(IpcError::BadChannelFd(raw)),
        };

        // SAFETY: the descriptor was opened by the parent process and is
        // inherited exclusively by this sink, which closes it on drop.
        let channel = unsafe { File::from_raw_fd(fd) };
        Ok(Self { channel })
    }

    /// Writes `payload` followed by a single newline as one buffer.
    pub fn write_line(&mut self, payload: &[u8]) -> io::Result<()> {
        let mut line = Vec::with_capacity(payload.len() + 1);
        line.extend_from_slice(payload);
        line.push(b'\n');

        self.channel.write_all(&line)?;
        self.channel.flush()
    }
}

/// Serializes `config` and delivers it to the parent over the inherited
/// channel. Attempted exactly once; any failure is terminal.
pub fn send_config(config: &StepConfig) -> Result<(), IpcError> {
    let payload = serde_json::to_vec(config)?;

    let mut sink = InheritedSink::from_env()?;
    debug!(bytes = payload.len(), "sending config over IPC channel");
    sink.write_line(&payload)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment mutation is process-global; serialize the tests touching it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_missing_channel_variable() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var(CHANNEL_FD_ENV);

        let err = InheritedSink::from_env().unwrap_err();
        assert!(matches!(err, IpcError::ChannelUnavailable));
        assert!(err.to_string().contains("NODE_CHANNEL_FD"));
    }

    #[test]
    fn test_non_numeric_channel_variable() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var(CHANNEL_FD_ENV, "not-a-number");

        let err = InheritedSink::from_env().unwrap_err();
        assert!(matches!(err, IpcError::BadChannelFd(_)));
        assert!(err.to_string().contains("not-a-number"));

        env::remove_var(CHANNEL_FD_ENV);
    }

    #[test]
    fn test_negative_channel_fd_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var(CHANNEL_FD_ENV, "-1");

        // A negative descriptor is a configuration failure, not a write
        // failure surfacing later as EBADF.
        let err = InheritedSink::from_env().unwrap_err();
        assert!(matches!(err, IpcError::BadChannelFd(_)));
        assert!(err.to_string().contains("-1"));

        env::remove_var(CHANNEL_FD_ENV);
    }

    #[test]
    fn test_send_fails_before_any_write_when_channel_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var(CHANNEL_FD_ENV);

        let config = StepConfig {
            name: "x".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            send_config(&config),
            Err(IpcError::ChannelUnavailable)
        ));
    }
}
