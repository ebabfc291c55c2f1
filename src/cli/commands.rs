use clap::Parser;
use std::path::PathBuf;

/// Static step-config extractor for flow runtimes
#[derive(Parser, Debug)]
#[command(
    name = "stepconf",
    about = "Extract a step's config declaration and send it to the parent process",
    version,
    long_about = "stepconf statically analyzes a step source file, extracts the top-level \
                  `config` declaration without executing the file, and delivers it as a \
                  single JSON line over the IPC channel named by NODE_CHANNEL_FD."
)]
pub struct CliArgs {
    /// Path to the step source file to analyze. Required; kept optional at
    /// the clap level so a missing argument exits with code 1 rather than
    /// clap's default of 2.
    #[arg(value_name = "PATH", help = "Path to the step source file")]
    pub path: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error logging"
    )]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        // Verify that CLI structure is valid
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_positional_path() {
        let args = CliArgs::parse_from(["stepconf", "/tmp/step.rs"]);
        assert_eq!(args.path, Some(PathBuf::from("/tmp/step.rs")));
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_missing_path_parses() {
        // Missing argument is reported by the handler, not by clap
        let args = CliArgs::parse_from(["stepconf"]);
        assert!(args.path.is_none());
    }

    #[test]
    fn test_global_verbose_flag() {
        let args = CliArgs::parse_from(["stepconf", "-v", "/tmp/step.rs"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_global_quiet_flag() {
        let args = CliArgs::parse_from(["stepconf", "-q", "/tmp/step.rs"]);
        assert!(args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["stepconf", "--log-level", "debug", "/tmp/step.rs"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
