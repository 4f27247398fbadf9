//! Shared configuration loader for the uwu tools.
//!
//! `defaults/uwu.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer a user file on top of those
//! defaults via [`Loader`] before deserializing into [`UwuConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

pub use config::ConfigError as Error;

const DEFAULT_TOML: &str = include_str!("../defaults/uwu.default.toml");

/// Environment variable naming an optional user configuration file.
pub const CONFIG_ENV: &str = "UWU_CONFIG";

/// Top-level configuration consumed by the uwu driver.
#[derive(Debug, Clone, Deserialize)]
pub struct UwuConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Verbosity of the diagnostic log written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Case-insensitive, accepting the same names as the config file.
impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::Message(format!(
                "unknown log level {s:?} (expected trace, debug, info, warn or error)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub flush_each_line: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer the file named by `UWU_CONFIG`, if the variable is set.
    pub fn with_env_file(self) -> Self {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => self.with_file(path),
            _ => self,
        }
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<UwuConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.output.flush_each_line);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("logging.level", "debug")
            .expect("override to apply")
            .set_override("output.flush_each_line", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(!config.output.flush_each_line);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[logging]\nlevel = \"trace\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.logging.level, LogLevel::Trace);
        assert!(config.output.flush_each_line);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new()
            .with_file("/nonexistent/uwu.toml")
            .build()
            .is_err());
    }

    #[test]
    fn parses_level_names() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::Trace.as_str().parse::<LogLevel>().unwrap(), LogLevel::Trace);
        let err = "chatty".parse::<LogLevel>().unwrap_err();
        assert!(err.to_string().contains("chatty"));
    }

    #[test]
    fn rejects_unknown_level() {
        let result = Loader::new()
            .set_override("logging.level", "chatty")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
