//! Error types for the pathnames library.
//!
//! This module provides the error hierarchy for path parsing, path algebra
//! and grammar configuration, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathnames error.
///
/// # Examples
///
/// ```
/// use pathnames::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathnames library.
#[derive(Debug, Error)]
pub enum Error {
    /// A segment of the input failed the grammar's validity check.
    #[error("invalid path element '{}' in '{}'", segment.escape_debug(), input.escape_debug())]
    InvalidPath {
        /// The complete raw input that was being parsed.
        input: String,
        /// The first offending segment.
        segment: String,
    },

    /// Resolution against a path carrying a root without being absolute.
    #[error("cannot resolve against non-absolute path with root '{root}'")]
    UnsupportedCombination {
        /// The root of the offending path.
        root: String,
    },

    /// Relativization between two paths with different roots.
    #[error(
        "cannot relativize between roots {} and {}",
        base.as_deref().unwrap_or("<none>"),
        other.as_deref().unwrap_or("<none>")
    )]
    IncompatibleRoots {
        /// Root of the base path.
        base: Option<String>,
        /// Root of the target path.
        other: Option<String>,
    },

    /// A grammar configuration value was rejected.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file path could not be expanded.
    #[error("invalid configuration path {}: {reason}", path.display())]
    ConfigPath {
        /// The path as given.
        path: PathBuf,
        /// The reason the path is unusable.
        reason: String,
    },

    /// A YAML configuration could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON configuration could not be parsed.
    #[error("configuration error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error is a structural-parse failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::Error;
    ///
    /// let err = Error::InvalidPath {
    ///     input: "a/\0/b".to_string(),
    ///     segment: "\0".to_string(),
    /// };
    /// assert!(err.is_parse_failure());
    /// ```
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Check if error reports a path combination with no defined meaning.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::Error;
    ///
    /// let err = Error::UnsupportedCombination { root: "C:".to_string() };
    /// assert!(err.is_unsupported());
    /// ```
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedCombination { .. } | Self::IncompatibleRoots { .. }
        )
    }
}
