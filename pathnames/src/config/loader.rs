//! Grammar configuration loading.
//!
//! Configurations come from YAML or JSON, either in memory or from a file.
//! Every loaded configuration is validated before it is returned.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::schema::GrammarConfig;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Loads grammar configurations.
///
/// # Examples
///
/// ```
/// use pathnames::config::ConfigLoader;
///
/// let config = ConfigLoader::from_yaml_str("root_marker: /\n").unwrap();
/// assert_eq!(config.root_marker.as_deref(), Some("/"));
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse and validate a YAML configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or the configuration fails
    /// validation.
    pub fn from_yaml_str(contents: &str) -> Result<GrammarConfig> {
        let config: GrammarConfig = serde_yaml::from_str(contents)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or the configuration fails
    /// validation.
    pub fn from_json_str(contents: &str) -> Result<GrammarConfig> {
        let config: GrammarConfig = serde_json::from_str(contents)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load, parse and validate a configuration file.
    ///
    /// A leading `~` is expanded to the home directory. Files ending in
    /// `.json` are read as JSON, anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be expanded, the file cannot be
    /// read, its contents are invalid, or the configuration fails validation.
    pub fn load_file(path: &Path) -> Result<GrammarConfig> {
        let path = expand_tilde(path)?;
        let contents = fs::read_to_string(&path)?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        log::debug!(
            "Loading {} grammar configuration from {}",
            if is_json { "JSON" } else { "YAML" },
            path.display()
        );

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }
}

/// Resolve a configuration path whose first component is `~` against the
/// home directory.
///
/// Only a bare `~` first component is expanded; `~user` is rejected. Paths
/// not starting with `~` are returned as given, whatever their encoding.
///
/// # Errors
///
/// Returns [`Error::ConfigPath`] if the home directory is unknown or the
/// first component is `~user`.
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    let first = match components.next() {
        Some(Component::Normal(first)) => first,
        _ => return Ok(path.to_path_buf()),
    };

    if first != "~" {
        if first.to_string_lossy().starts_with('~') {
            return Err(Error::ConfigPath {
                path: path.to_path_buf(),
                reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
            });
        }
        return Ok(path.to_path_buf());
    }

    let mut expanded = home::home_dir().ok_or_else(|| Error::ConfigPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;
    expanded.extend(components);
    Ok(expanded)
}
