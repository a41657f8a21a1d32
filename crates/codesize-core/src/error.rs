//! Error types for counting operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while counting.
#[derive(Debug, Error)]
pub enum CountError {
    /// The root or some excluded paths do not exist.
    #[error("The following paths are not valid: {}", format_paths(.paths))]
    InvalidPaths { paths: Vec<PathBuf> },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {}", slash_path(.path))]
    NotADirectory { path: PathBuf },

    /// File content is not valid UTF-8 text.
    #[error("Cannot decode {} as text", slash_path(.path))]
    Undecodable { path: PathBuf },

    /// Permission denied for a path.
    #[error("Permission denied: {}", slash_path(.path))]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {}", slash_path(.path))]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {}: {source}", slash_path(.path))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CountError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::InvalidData => Self::Undecodable { path },
            _ => Self::Io { path, source },
        }
    }

    /// Whether the scan can skip the offending file and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Undecodable { .. })
    }
}

impl From<crate::config::CountConfigBuilderError> for CountError {
    fn from(err: crate::config::CountConfigBuilderError) -> Self {
        Self::InvalidConfig {
            message: err.to_string(),
        }
    }
}

/// Render a path with forward slashes regardless of platform.
pub fn slash_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn format_paths(paths: &[PathBuf]) -> String {
    let quoted: Vec<String> = paths
        .iter()
        .map(|path| format!("'{}'", slash_path(path)))
        .collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CountConfig;

    #[test]
    fn test_count_error_io() {
        let err = CountError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, CountError::PermissionDenied { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_invalid_data_is_undecodable() {
        let err = CountError::io(
            "/test/image.png",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8"),
        );
        assert!(matches!(err, CountError::Undecodable { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_invalid_paths_lists_every_path() {
        let err = CountError::InvalidPaths {
            paths: vec![PathBuf::from("a\\missing"), PathBuf::from("/b/gone")],
        };
        assert_eq!(
            err.to_string(),
            "The following paths are not valid: ['a/missing', '/b/gone']"
        );
    }

    #[test]
    fn test_builder_error_conversion() {
        let err: CountError = CountConfig::builder().build().unwrap_err().into();
        assert!(matches!(err, CountError::InvalidConfig { .. }));
    }
}
