//! A grammar assembled from configuration.

use super::{PathSyntax, Separators};
use crate::config::validator::stays_apart;
use crate::config::{ConfigValidator, GrammarConfig};
use crate::error::Result;
use crate::names::PathNames;

/// A delimiter-based grammar whose tokens come from a [`GrammarConfig`].
///
/// The rules mirror [`UnixSyntax`](super::UnixSyntax) with every token
/// configurable:
///
/// - A raw string starting with the root marker is rooted; the root
///   separator directly after the marker is skipped.
/// - The rest is split on the separator, dropping empty pieces.
/// - A segment is valid unless it is empty, contains the separator or a
///   forbidden character, would merge with an adjacent separator (`a:`
///   next to `::`), or (for a rooted grammar) starts with the root marker,
///   which would read back as a root.
/// - A path is absolute exactly when it has a root.
///
/// # Examples
///
/// ```
/// use pathnames::config::GrammarConfig;
/// use pathnames::{DelimitedSyntax, PathEngine};
///
/// let config = GrammarConfig {
///     root_marker: Some("crate".to_string()),
///     root_separator: "::".to_string(),
///     separator: "::".to_string(),
///     ..Default::default()
/// };
/// let engine = PathEngine::new(DelimitedSyntax::new(config).unwrap());
///
/// let path = engine.parse("crate::engine::PathEngine").unwrap();
/// assert_eq!(path.root(), Some("crate"));
/// assert_eq!(path.segments(), ["engine", "PathEngine"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedSyntax {
    config: GrammarConfig,
}

impl DelimitedSyntax {
    /// Build a grammar from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configuration is rejected by
    /// [`ConfigValidator`].
    pub fn new(config: GrammarConfig) -> Result<Self> {
        ConfigValidator::validate(&config)?;
        log::trace!(
            "Built delimited grammar: root {:?}, separator {:?}",
            config.root_marker,
            config.separator
        );
        Ok(Self { config })
    }

    /// The configuration this grammar was built from.
    #[must_use]
    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }
}

impl PathSyntax for DelimitedSyntax {
    fn root_and_names(&self, raw: &str) -> (Option<String>, String) {
        let Some(marker) = self.config.root_marker.as_deref() else {
            return (None, raw.to_string());
        };
        match raw.strip_prefix(marker) {
            Some(rest) => {
                let rest = rest
                    .strip_prefix(self.config.root_separator.as_str())
                    .unwrap_or(rest);
                (Some(marker.to_string()), rest.to_string())
            }
            None => (None, raw.to_string()),
        }
    }

    fn split_names(&self, names: &str) -> Vec<String> {
        names
            .split(self.config.separator.as_str())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn is_valid_name(&self, name: &str) -> bool {
        if name.is_empty() || !stays_apart(name, &self.config.separator) {
            return false;
        }
        if name.chars().any(|c| self.config.forbidden.contains(&c)) {
            return false;
        }
        match self.config.root_marker.as_deref() {
            Some(marker) => !name.starts_with(marker),
            None => true,
        }
    }

    fn is_self(&self, name: &str) -> bool {
        name == self.config.self_name
    }

    fn is_parent(&self, name: &str) -> bool {
        name == self.config.parent_name
    }

    fn is_absolute(&self, path: &PathNames) -> bool {
        path.root().is_some()
    }

    fn separators(&self) -> Separators {
        Separators::new(
            self.config.root_separator.as_str(),
            self.config.separator.as_str(),
        )
    }

    fn parent_token(&self) -> String {
        self.config.parent_name.clone()
    }
}
