//! Error types for the pkgq library.
//!
//! This module provides the error hierarchy for all operations in the pkgq
//! library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pkgq error.
///
/// # Examples
///
/// ```
/// use pkgq::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pkgq library.
///
/// This enum encompasses all possible error conditions that can occur while
/// resolving paths or parsing package strings.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller violated an API contract with a malformed input value.
    ///
    /// This is a programming error, not an environment condition; callers
    /// should fail fast rather than retry.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// The reason the argument is invalid.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A package atom could not be parsed.
    #[error("invalid atom '{atom}': {reason}")]
    InvalidAtom {
        /// The atom string that failed to parse.
        atom: String,
        /// The reason the atom is invalid.
        reason: String,
    },

    /// A package version could not be parsed.
    #[error("invalid version '{version}': {reason}")]
    InvalidVersion {
        /// The version string that failed to parse.
        version: String,
        /// The reason the version is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgq::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgq::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error is a caller contract violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgq::Error;
    ///
    /// let err = Error::InvalidArgument { reason: "expected an array".to_string() };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = Error::InvalidArgument {
            reason: "expected an ordered sequence of strings".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid argument"));
        assert!(display.contains("ordered sequence"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "contains invalid UTF-8".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
    }

    #[test]
    fn test_path_not_found_error() {
        let err = Error::PathNotFound {
            path: PathBuf::from("/nonexistent"),
        };
        assert!(err.is_not_found());
        assert!(!err.is_permission_denied());
        assert!(format!("{err}").contains("path not found"));
    }

    #[test]
    fn test_invalid_atom_error() {
        let err = Error::InvalidAtom {
            atom: "portage".to_string(),
            reason: "missing category separator".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid atom"));
        assert!(display.contains("portage"));
        assert!(display.contains("missing category separator"));
    }

    #[test]
    fn test_invalid_version_error() {
        let err = Error::InvalidVersion {
            version: "abc".to_string(),
            reason: "must start with a digit".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid version"));
        assert!(display.contains("abc"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Err(Error::InvalidArgument {
                reason: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
