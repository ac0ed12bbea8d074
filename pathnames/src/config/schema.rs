//! Grammar configuration schema.
//!
//! This module defines the serializable description of a delimiter-based
//! path grammar.

use serde::{Deserialize, Serialize};

/// Default separator between segments.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Default current-directory marker.
pub const DEFAULT_SELF_NAME: &str = ".";

/// Default parent-directory marker.
pub const DEFAULT_PARENT_NAME: &str = "..";

/// Description of a delimiter-based path grammar.
///
/// Every field has a default, so a configuration file only needs to list
/// what differs from a relative-only `/`-separated grammar.
///
/// # Examples
///
/// ```
/// use pathnames::config::GrammarConfig;
///
/// let config = GrammarConfig {
///     root_marker: Some("C:".to_string()),
///     root_separator: "\\".to_string(),
///     separator: "\\".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(config.self_name, ".");
/// assert_eq!(config.forbidden, vec!['\0']);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct GrammarConfig {
    /// Prefix marking a rooted path; rooted paths are absolute.
    pub root_marker: Option<String>,

    /// Written between the root and the first segment.
    pub root_separator: String,

    /// Written between segments and used to split them.
    pub separator: String,

    /// Current-directory marker.
    pub self_name: String,

    /// Parent-directory marker.
    pub parent_name: String,

    /// Characters no segment may contain, on top of the separator.
    pub forbidden: Vec<char>,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            root_marker: None,
            root_separator: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            self_name: DEFAULT_SELF_NAME.to_string(),
            parent_name: DEFAULT_PARENT_NAME.to_string(),
            forbidden: vec!['\0'],
        }
    }
}

impl GrammarConfig {
    /// Settings equivalent to [`UnixSyntax`](crate::UnixSyntax).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::config::GrammarConfig;
    ///
    /// let unix = GrammarConfig::unix();
    /// assert_eq!(unix.root_marker.as_deref(), Some("/"));
    /// assert_eq!(unix.root_separator, "");
    /// ```
    #[must_use]
    pub fn unix() -> Self {
        Self {
            root_marker: Some(DEFAULT_SEPARATOR.to_string()),
            ..Self::default()
        }
    }
}
