#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathnames
//!
//! A grammar-agnostic engine for parsing, normalizing and composing
//! hierarchical path names.
//!
//! A custom filesystem (archive-backed, network-backed, in-memory) plugs a
//! path grammar into this crate and gets consistent parse, normalize,
//! resolve, resolve-sibling, relativize and render operations. Nothing here
//! performs I/O on the paths themselves: the algebra is purely lexical.
//!
//! ## Core Types
//!
//! - [`PathNames`]: the parsed value, an optional root plus segments
//! - [`PathSyntax`]: the hooks a grammar supplies, with [`UnixSyntax`] and
//!   the configurable [`DelimitedSyntax`] provided
//! - [`PathEngine`]: the algorithms, written once against [`PathSyntax`]
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use pathnames::PathEngine;
//!
//! let engine = PathEngine::unix();
//!
//! let base = engine.parse("/home/user/docs").unwrap();
//! let other = engine.parse("../music/./album").unwrap();
//!
//! let resolved = engine.normalize(&engine.resolve(&base, &other).unwrap());
//! assert_eq!(engine.render(&resolved), "/home/user/music/album");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod names;
pub mod syntax;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use config::{ConfigLoader, GrammarConfig};
pub use engine::PathEngine;
pub use error::{Error, Result};
pub use names::PathNames;
pub use syntax::{DelimitedSyntax, PathSyntax, Separators, UnixSyntax};
