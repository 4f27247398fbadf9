use uwu_config::{LogLevel, LoggingConfig};

/// Environment variable that overrides `logging.level`.
pub const LOG_ENV: &str = "UWU_LOG";

/// Level requested through `UWU_LOG`, if any.
///
/// An unknown level is reported on stderr and ignored, leaving the configured
/// level in place.
pub fn level_override() -> Option<LogLevel> {
    parse_override(&std::env::var(LOG_ENV).ok()?)
}

fn parse_override(value: &str) -> Option<LogLevel> {
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(level) => Some(level),
        Err(e) => {
            eprintln!("uwu: ignoring {}: {}", LOG_ENV, e);
            None
        }
    }
}

fn to_tracing_level(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Trace => tracing::Level::TRACE,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Error => tracing::Level::ERROR,
    }
}

/// Install the stderr subscriber. Stdout carries only transformed text.
pub fn init(config: &LoggingConfig) {
    let level = to_tracing_level(config.level);
    let verbose = level >= tracing::Level::DEBUG;

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(to_tracing_level(LogLevel::Warn), tracing::Level::WARN);
        assert_eq!(to_tracing_level(LogLevel::Trace), tracing::Level::TRACE);
    }

    #[test]
    fn test_parse_override() {
        assert_eq!(parse_override("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_override("TRACE"), Some(LogLevel::Trace));
        assert_eq!(parse_override(""), None);
        assert_eq!(parse_override("chatty"), None);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        let config = LoggingConfig {
            level: LogLevel::Error,
        };
        init(&config);
        init(&config);
    }
}
