//! Grammar configuration.
//!
//! A delimiter-based grammar can be described in YAML or JSON instead of
//! code, then turned into a [`DelimitedSyntax`](crate::DelimitedSyntax).
//! Configurations are always validated on load.
//!
//! # Examples
//!
//! Describing a drive-letter grammar:
//!
//! ```
//! use pathnames::config::ConfigLoader;
//! use pathnames::{DelimitedSyntax, PathEngine};
//!
//! let config = ConfigLoader::from_yaml_str(
//!     r#"
//! root_marker: "C:"
//! root_separator: "\\"
//! separator: "\\"
//! forbidden: ["\0", "<", ">", "|"]
//! "#,
//! )
//! .unwrap();
//!
//! let engine = PathEngine::new(DelimitedSyntax::new(config).unwrap());
//! let path = engine.parse("C:\\Users\\.\\me").unwrap();
//! assert_eq!(engine.render(&engine.normalize(&path)), "C:\\Users\\me");
//! ```
//!
//! Loading from a file:
//!
//! ```no_run
//! use pathnames::config::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load_file(Path::new("~/.config/grammar.yaml")).unwrap();
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use loader::{expand_tilde, ConfigLoader};
pub use schema::GrammarConfig;
pub use validator::ConfigValidator;
