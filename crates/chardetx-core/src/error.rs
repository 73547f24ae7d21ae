use std::fmt;

use chardetx_stats::TableError;

#[derive(Debug)]
pub enum DetectError {
    /// Caller-supplied bounds or sizes that cannot be honoured.
    InvalidArgument(String),
    /// No decoder exists for the detected charset, or nothing was detected.
    UnsupportedEncoding(String),
    Io(std::io::Error),
    Config(String),
    /// A statistical table with the wrong shape or value range.
    Model(String),
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            DetectError::UnsupportedEncoding(name) => write!(f, "unsupported encoding: {name}"),
            DetectError::Io(e) => write!(f, "i/o error: {e}"),
            DetectError::Config(msg) => write!(f, "configuration error: {msg}"),
            DetectError::Model(msg) => write!(f, "model error: {msg}"),
        }
    }
}

impl std::error::Error for DetectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DetectError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DetectError {
    fn from(e: std::io::Error) -> Self {
        DetectError::Io(e)
    }
}

impl From<toml::de::Error> for DetectError {
    fn from(e: toml::de::Error) -> Self {
        DetectError::Config(e.to_string())
    }
}

impl From<TableError> for DetectError {
    fn from(e: TableError) -> Self {
        DetectError::Model(e.to_string())
    }
}
