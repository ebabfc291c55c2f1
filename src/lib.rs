//! stepconf - static step-config extraction for flow runtimes
//!
//! This library extracts the `config` declaration from a step source file
//! without executing it, then delivers the result as a single JSON line to a
//! parent orchestrator over an inherited IPC file descriptor.
//!
//! # Core Concepts
//!
//! - **Step file**: a Rust source file declaring a top-level `static`/`const`
//!   named `config` whose initializer is a struct literal describing a unit
//!   of work (name, subscribed triggers, emitted events, flows)
//! - **Locator**: parses the file into an AST with `syn` and projects the
//!   winning `config` literal into a [`StepConfig`] record
//! - **Channel emitter**: writes the serialized record, newline-terminated,
//!   to the file descriptor named by `NODE_CHANNEL_FD`
//!
//! # Example Usage
//!
//! ```
//! use stepconf::extract::locate;
//!
//! let source = r#"
//!     #[allow(non_upper_case_globals)]
//!     pub static config: StepConfig = StepConfig {
//!         name: "create-user",
//!         subscribes: &["user.requested"],
//!         emits: &["user.created"],
//!         input: None,
//!         flows: &["signup"],
//!     };
//! "#;
//!
//! let config = locate(source).unwrap();
//! assert_eq!(config.name, "create-user");
//! assert_eq!(config.flows, Some(vec!["signup".to_string()]));
//! ```
//!
//! # Project Structure
//!
//! - [`extract`]: AST locator and the extracted record schema
//! - [`ipc`]: one-shot delivery over the inherited channel
//! - [`cli`]: argument parsing and the extraction pipeline
//! - [`util`]: logging setup

// Public modules
pub mod cli;
pub mod extract;
pub mod ipc;
pub mod util;

// Re-export key types for convenient access
pub use cli::handlers::ExtractError;
pub use extract::locator::{locate, LocateError};
pub use extract::schema::StepConfig;
pub use ipc::{send_config, InheritedSink, IpcError, CHANNEL_FD_ENV};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_stepconf() {
        assert_eq!(NAME, "stepconf");
    }
}
