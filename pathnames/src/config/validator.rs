//! Grammar configuration validation.
//!
//! A configuration is only turned into a grammar once it passes these
//! checks, so that every [`DelimitedSyntax`](crate::DelimitedSyntax) can
//! parse its own rendered output.

use crate::config::schema::GrammarConfig;
use crate::error::{Error, Result};

/// Validates grammar configurations.
///
/// # Examples
///
/// ```
/// use pathnames::config::{ConfigValidator, GrammarConfig};
///
/// ConfigValidator::validate(&GrammarConfig::unix()).unwrap();
///
/// let broken = GrammarConfig {
///     separator: String::new(),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&broken).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete grammar configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &GrammarConfig) -> Result<()> {
        if config.separator.is_empty() {
            return Err(Error::Validation {
                field: "separator".into(),
                message: "must be non-empty".into(),
            });
        }

        if let Some(ref marker) = config.root_marker {
            if marker.is_empty() {
                return Err(Error::Validation {
                    field: "root_marker".into(),
                    message: "must be non-empty when present".into(),
                });
            }
        }

        Self::validate_marker("self_name", &config.self_name, config)?;
        Self::validate_marker("parent_name", &config.parent_name, config)?;

        if config.self_name == config.parent_name {
            return Err(Error::Validation {
                field: "parent_name".into(),
                message: format!(
                    "must differ from self_name (both are '{}')",
                    config.parent_name
                ),
            });
        }

        Ok(())
    }

    /// Self and parent markers must themselves be valid segments.
    fn validate_marker(field: &str, value: &str, config: &GrammarConfig) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "must be non-empty".into(),
            });
        }
        if !stays_apart(value, &config.separator) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "must not contain or run into the separator '{}'",
                    config.separator
                ),
            });
        }
        if let Some(c) = value.chars().find(|c| config.forbidden.contains(c)) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("contains forbidden character {c:?}"),
            });
        }
        Ok(())
    }
}

/// Whether `name` placed between two separators still splits back into
/// `name` alone.
///
/// False when `name` contains `sep`, and for a multi-character separator
/// also when the edges of `name` would merge with it: `a:` followed by `::`
/// reads as `a` and `::`.
pub(crate) fn stays_apart(name: &str, sep: &str) -> bool {
    format!("{name}{sep}").find(sep) == Some(name.len())
        && format!("{sep}{name}").rfind(sep) == Some(0)
}
