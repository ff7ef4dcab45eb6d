//! Error types for the colorama library

use std::path::PathBuf;

use thiserror::Error;

use crate::color::Space;

/// Result type alias for colorama operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for color parsing, mutation and configuration
///
/// Out-of-range numeric channels are not an error: every value is clamped
/// into its space's domain before it is accepted.
#[derive(Error, Debug)]
pub enum ColorError {
    /// Input matched none of the recognized string grammars or structured keys
    #[error("Invalid color format: {input:?}")]
    InvalidColorFormat { input: String },

    /// Positional channel array is too short for its color space
    #[error("Invalid channel count for {space}: expected {expected}, got {actual}")]
    InvalidChannelCount {
        space: Space,
        expected: usize,
        actual: usize,
    },

    /// Name is not one of the supported spaces or output formats
    #[error("Unknown color format: {name:?}")]
    UnknownFormat { name: String },

    /// Configuration file could not be read or written
    #[error("Configuration I/O error: {}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be (de)serialized
    #[error("Configuration parse error: {source}")]
    ConfigParse {
        #[from]
        source: serde_json::Error,
    },
}

impl ColorError {
    /// Create an invalid format error for the given input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
        }
    }

    /// Create a configuration I/O error with the offending path
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Check if this error was caused by the shape of caller-provided input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidColorFormat { .. }
                | ColorError::InvalidChannelCount { .. }
                | ColorError::UnknownFormat { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message() {
        let err = ColorError::invalid_format("not-a-color");
        assert_eq!(err.to_string(), "Invalid color format: \"not-a-color\"");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_channel_count_message() {
        let err = ColorError::InvalidChannelCount {
            space: Space::Cmyk,
            expected: 4,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid channel count for cmyk: expected 4, got 2"
        );
    }

    #[test]
    fn test_config_errors_are_not_input_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ColorError::config_io("palette.json", io);
        assert!(!err.is_input_error());
        assert!(std::error::Error::source(&err).is_some());
    }
}
