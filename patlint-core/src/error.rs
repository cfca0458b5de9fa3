//! Typed error handling for patlint.
//!
//! Errors only occur at the I/O boundary (model files, settings, tool
//! config). Analysis queries themselves never fail: an inconclusive class
//! simply classifies as "not a match" and an unresolved type degrades to a
//! none result.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for patlint operations.
///
/// Provides typed errors that library consumers can match on, unlike opaque
/// `anyhow::Error` values.
#[derive(Error, Debug)]
pub enum PatlintError {
    /// I/O error when reading or writing files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Malformed class-model file
    #[error("Model error in {path}: {message}")]
    Model { path: PathBuf, message: String },

    /// Persisted settings errors
    #[error("Settings error at {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// Tool configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PatlintError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a model error for a given file.
    pub fn model(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Model {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a settings error.
    pub fn settings(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Settings {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (analysis can continue with
    /// the remaining inputs).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Model { .. } | Self::Settings { .. } | Self::Config { .. }
        )
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Model { path, .. } => Some(path),
            Self::Settings { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for patlint results.
pub type PatlintResult<T> = Result<T, PatlintError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> PatlintResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> PatlintResult<T> {
        self.map_err(|e| PatlintError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = PatlintError::io(
            PathBuf::from("/test/model.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, PatlintError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/test/model.json")));
        assert!(err.to_string().contains("/test/model.json"));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(PatlintError::model("/m.json", "bad").is_recoverable());
        assert!(PatlintError::settings("/s.toml", "bad").is_recoverable());
        assert!(PatlintError::config("/c.toml", "bad").is_recoverable());
        assert!(!PatlintError::invalid_argument("nope").is_recoverable());
        assert!(!PatlintError::internal("oops").is_recoverable());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let patlint_result = result.with_path("/missing/model.json");
        assert!(patlint_result.is_err());
    }
}
