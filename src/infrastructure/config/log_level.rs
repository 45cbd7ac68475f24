//! Log verbosity setting.

use std::fmt;

use tracing_subscriber::filter::LevelFilter;

/// Verbosity of the `zulip` binary's log output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }

    /// Filter used when `RUST_LOG` is not set.
    #[must_use]
    pub fn default_filter(self) -> LevelFilter {
        LevelFilter::from_level(self.to_tracing_level())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(LogLevel::Trace, LevelFilter::TRACE)]
    #[test_case(LogLevel::Debug, LevelFilter::DEBUG)]
    #[test_case(LogLevel::Info, LevelFilter::INFO)]
    #[test_case(LogLevel::Warn, LevelFilter::WARN)]
    #[test_case(LogLevel::Error, LevelFilter::ERROR)]
    fn test_default_filter(level: LogLevel, expected: LevelFilter) {
        assert_eq!(level.default_filter(), expected);
        assert_eq!(level.to_string(), expected.to_string().to_lowercase());
    }

    #[test]
    fn test_default_is_warn() {
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }
}
