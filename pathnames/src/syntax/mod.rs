//! Path grammars.
//!
//! A grammar is a [`PathSyntax`] implementation: a handful of pure hooks
//! telling the [`PathEngine`](crate::PathEngine) how to split raw strings,
//! which segments are acceptable, and which segments are the self and parent
//! markers. The engine's algorithms are written once against this trait.
//!
//! Two grammars ship with the crate:
//!
//! - [`UnixSyntax`]: `/`-rooted, `/`-separated paths.
//! - [`DelimitedSyntax`]: the same shape with every token taken from a
//!   [`GrammarConfig`](crate::config::GrammarConfig).

mod delimited;
mod unix;

pub use delimited::DelimitedSyntax;
pub use unix::UnixSyntax;

use crate::names::PathNames;

/// The two strings used to join a path back together.
///
/// # Examples
///
/// ```
/// use pathnames::Separators;
///
/// let separators = Separators::new("", "/");
/// assert_eq!(separators.root(), "");
/// assert_eq!(separators.name(), "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Separators {
    root: String,
    name: String,
}

impl Separators {
    /// Create separators from the root separator and the plain separator.
    #[must_use]
    pub fn new(root: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }

    /// Emitted between a root and the first segment.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Emitted between two segments.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The syntax hooks of one path grammar.
///
/// Implementations must be deterministic and free of side effects; a single
/// instance is shared by every caller of the engine that owns it.
#[cfg_attr(test, mockall::automock)]
pub trait PathSyntax {
    /// Split a raw string into its root token, if any, and the unparsed rest.
    fn root_and_names(&self, raw: &str) -> (Option<String>, String);

    /// Split the rest of a raw string into raw segments.
    fn split_names(&self, names: &str) -> Vec<String>;

    /// Whether `name` is acceptable as a single path segment.
    fn is_valid_name(&self, name: &str) -> bool;

    /// Whether `name` is the current-directory marker.
    fn is_self(&self, name: &str) -> bool;

    /// Whether `name` is the parent-directory marker.
    fn is_parent(&self, name: &str) -> bool;

    /// Whether `path` is absolute in this grammar.
    fn is_absolute(&self, path: &PathNames) -> bool;

    /// The separators used when rendering.
    fn separators(&self) -> Separators;

    /// The segment written for each upward step when relativizing.
    fn parent_token(&self) -> String;
}
