use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Initialise leveled diagnostics on stderr so stdout only carries the
/// formatted result. `RUST_LOG` takes precedence over `--log-level`.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parses_case_insensitively() {
        assert_eq!(LogLevel::from_str("DEBUG", true).unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("warn", true).unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose", true).is_err());
    }

    #[test]
    fn test_directives_are_valid_filters() {
        for level in LogLevel::value_variants() {
            assert!(EnvFilter::try_new(level.directive()).is_ok());
        }
    }
}
