use thiserror::Error;

/// Errors the driver can hit. The transformation itself never fails.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] uwu_config::Error),
}

impl CliError {
    /// The reader of our stdout went away (e.g. `uwu | head -1`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CliError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type CliResult<T> = Result<T, CliError>;
