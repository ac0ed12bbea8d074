//! The Unix path grammar.

use super::{PathSyntax, Separators};
use crate::names::PathNames;

const ROOT: &str = "/";
const SEPARATOR: char = '/';
const SELF_NAME: &str = ".";
const PARENT_NAME: &str = "..";

/// `/`-rooted, `/`-separated paths.
///
/// - A leading `/` is the root; any further leading slashes are ignored.
/// - Empty segments are dropped, so `a//b/` splits into `a` and `b`.
/// - A segment is valid unless it contains `/` or NUL.
/// - `.` is the self marker and `..` the parent marker.
/// - A path is absolute exactly when it has a root.
///
/// # Examples
///
/// ```
/// use pathnames::{PathSyntax, UnixSyntax};
///
/// let syntax = UnixSyntax;
/// assert_eq!(
///     syntax.root_and_names("/usr/lib"),
///     (Some("/".to_string()), "usr/lib".to_string())
/// );
/// assert_eq!(syntax.split_names("usr//lib/"), vec!["usr", "lib"]);
/// assert!(!syntax.is_valid_name("a\0b"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnixSyntax;

impl PathSyntax for UnixSyntax {
    fn root_and_names(&self, raw: &str) -> (Option<String>, String) {
        match raw.strip_prefix(SEPARATOR) {
            Some(rest) => (Some(ROOT.to_string()), rest.to_string()),
            None => (None, raw.to_string()),
        }
    }

    fn split_names(&self, names: &str) -> Vec<String> {
        names
            .split(SEPARATOR)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn is_valid_name(&self, name: &str) -> bool {
        !name.is_empty() && !name.contains([SEPARATOR, '\0'])
    }

    fn is_self(&self, name: &str) -> bool {
        name == SELF_NAME
    }

    fn is_parent(&self, name: &str) -> bool {
        name == PARENT_NAME
    }

    fn is_absolute(&self, path: &PathNames) -> bool {
        path.root().is_some()
    }

    fn separators(&self) -> Separators {
        // The root already ends in the separator.
        Separators::new("", ROOT)
    }

    fn parent_token(&self) -> String {
        PARENT_NAME.to_string()
    }
}
