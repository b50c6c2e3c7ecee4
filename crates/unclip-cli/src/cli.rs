//! CLI argument parsing using clap.

use clap::Parser;
use clap::ValueEnum;

/// Extract txtar-formatted clipboard contents into the current directory.
#[derive(Parser)]
#[command(name = "unclip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shape of log output
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Show verbose debug information, each -v bumps the log level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log line shape emitted to stderr.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-oriented text lines
    Text,
    /// One JSON object per line
    Json,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["unclip"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_log_format_json() {
        let cli = Cli::try_parse_from(["unclip", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_log_format_rejects_unknown_value() {
        assert!(Cli::try_parse_from(["unclip", "--log-format", "yaml"]).is_err());
    }

    #[test]
    fn test_verbose_occurrences_accumulate() {
        let cli = Cli::try_parse_from(["unclip", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["unclip", "-v", "--verbose", "-v"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["unclip", "--bogus"]).is_err());
    }
}
