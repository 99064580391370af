//! Error types for level map conversion

use std::fmt;
use std::io;

/// Errors raised around the rectangle extraction
///
/// The extraction itself is total; every variant here comes from the
/// surrounding I/O, configuration or command-line handling.
#[derive(Debug)]
pub enum ExtractError {
    /// Wrong number of command-line arguments or an unknown flag
    InvalidArguments(String),
    /// Input path unreadable or not a decodable image
    ImageOpenFailure {
        path: String,
        reason: String,
    },
    /// I/O error
    IoError(io::Error),
    /// Configuration file could not be read or parsed
    ConfigError(String),
    /// Rectangles could not be rendered as JSON
    SerializationError(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InvalidArguments(msg) => write!(f, "Error - {}", msg),
            ExtractError::ImageOpenFailure { path, .. } => {
                write!(f, "Error - Failed to open: {}", path)
            }
            ExtractError::IoError(e) => write!(f, "Error - I/O error: {}", e),
            ExtractError::ConfigError(msg) => {
                write!(f, "Error - Invalid configuration: {}", msg)
            }
            ExtractError::SerializationError(msg) => {
                write!(f, "Error - Serialization failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExtractError {
    fn from(error: io::Error) -> Self {
        ExtractError::IoError(error)
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(error: serde_json::Error) -> Self {
        ExtractError::SerializationError(error.to_string())
    }
}

impl From<toml::de::Error> for ExtractError {
    fn from(error: toml::de::Error) -> Self {
        ExtractError::ConfigError(error.to_string())
    }
}

impl ExtractError {
    /// Build an `ImageOpenFailure` for `path`
    pub fn open_failure(path: &str, reason: impl fmt::Display) -> Self {
        ExtractError::ImageOpenFailure {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_failure_names_path() {
        let err = ExtractError::open_failure("levels/a.bmp", "no such file");
        assert_eq!(err.to_string(), "Error - Failed to open: levels/a.bmp");
    }

    #[test]
    fn test_io_error_has_source() {
        let err: ExtractError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
