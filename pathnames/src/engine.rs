//! The path engine.
//!
//! [`PathEngine`] turns raw strings into [`PathNames`] values and back, and
//! implements the lexical path algebra on top of them: normalization,
//! resolution against a base, resolution against a sibling, and
//! relativization. Every algorithm is written against the [`PathSyntax`]
//! hooks only, so the same engine serves any grammar.
//!
//! None of the operations touch a filesystem. `..` is collapsed lexically,
//! symbolic links are never consulted.

use crate::error::{Error, Result};
use crate::names::PathNames;
use crate::syntax::{PathSyntax, Separators, UnixSyntax};

/// Parses, normalizes, composes and renders paths for one grammar.
///
/// The engine holds no mutable state and can be shared freely between
/// threads when its grammar can.
///
/// # Examples
///
/// ```
/// use pathnames::PathEngine;
///
/// let engine = PathEngine::unix();
///
/// let path = engine.parse("a/./b/../c").unwrap();
/// assert_eq!(engine.render(&engine.normalize(&path)), "a/c");
///
/// let base = engine.parse("/srv/www").unwrap();
/// let joined = engine.resolve(&base, &engine.parse("site/index.html").unwrap()).unwrap();
/// assert_eq!(engine.render(&joined), "/srv/www/site/index.html");
/// ```
#[derive(Debug, Clone)]
pub struct PathEngine<S> {
    syntax: S,
    separators: Separators,
    parent_token: String,
}

impl PathEngine<UnixSyntax> {
    /// An engine for Unix paths.
    #[must_use]
    pub fn unix() -> Self {
        Self::new(UnixSyntax)
    }
}

impl Default for PathEngine<UnixSyntax> {
    fn default() -> Self {
        Self::unix()
    }
}

impl<S: PathSyntax> PathEngine<S> {
    /// Create an engine for the given grammar.
    ///
    /// The grammar's separators and parent token are read once here.
    #[must_use]
    pub fn new(syntax: S) -> Self {
        let separators = syntax.separators();
        let parent_token = syntax.parent_token();
        Self {
            syntax,
            separators,
            parent_token,
        }
    }

    /// The grammar this engine was built with.
    #[must_use]
    pub fn syntax(&self) -> &S {
        &self.syntax
    }

    /// The separators used by [`render`](Self::render).
    #[must_use]
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Parse a raw string into a path value.
    ///
    /// Segments are kept verbatim, including self and parent markers; call
    /// [`normalize`](Self::normalize) to collapse them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] carrying the input and the first
    /// segment, left to right, that the grammar rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::PathEngine;
    ///
    /// let engine = PathEngine::unix();
    ///
    /// let path = engine.parse("/usr/../lib").unwrap();
    /// assert_eq!(path.root(), Some("/"));
    /// assert_eq!(path.segments(), ["usr", "..", "lib"]);
    ///
    /// let err = engine.parse("a/\0/b").unwrap_err();
    /// assert!(err.is_parse_failure());
    /// ```
    pub fn parse(&self, raw: &str) -> Result<PathNames> {
        let (root, names) = self.syntax.root_and_names(raw);
        let segments = self.syntax.split_names(&names);

        if let Some(invalid) = segments
            .iter()
            .find(|name| !self.syntax.is_valid_name(name))
        {
            return Err(Error::InvalidPath {
                input: raw.to_string(),
                segment: invalid.clone(),
            });
        }

        Ok(PathNames::new(root, segments))
    }

    /// Collapse self and parent markers in a single pass.
    ///
    /// Self markers are dropped. A parent marker removes the segment kept
    /// just before it; when nothing has been kept yet the parent marker is
    /// dropped as well, whether or not the path has a root. So `../a`
    /// normalizes to `a`, never to `../a`.
    ///
    /// Normalizing a normalized path returns an equal path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::PathEngine;
    ///
    /// let engine = PathEngine::unix();
    ///
    /// let path = engine.normalize(&engine.parse("/a/b/../../../c/.").unwrap());
    /// assert_eq!(engine.render(&path), "/c");
    ///
    /// let leading = engine.normalize(&engine.parse("../a").unwrap());
    /// assert_eq!(leading.segments(), ["a"]);
    /// ```
    #[must_use]
    pub fn normalize(&self, path: &PathNames) -> PathNames {
        let mut kept: Vec<String> = Vec::with_capacity(path.name_count());

        for name in path.segments() {
            if self.syntax.is_parent(name) {
                kept.pop();
                continue;
            }
            if !self.syntax.is_self(name) {
                kept.push(name.clone());
            }
        }

        PathNames::new(path.root().map(str::to_string), kept)
    }

    /// Resolve `other` against `base`.
    ///
    /// - An absolute `other` is returned unchanged.
    /// - An `other` without segments returns `base` unchanged.
    /// - Otherwise the segments of `other` are appended to those of `base`,
    ///   under the root of `base`. Nothing is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCombination`] if `other` has a root but
    /// the grammar does not consider it absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::PathEngine;
    ///
    /// let engine = PathEngine::unix();
    /// let base = engine.parse("/x").unwrap();
    ///
    /// let joined = engine.resolve(&base, &engine.parse("y/..").unwrap()).unwrap();
    /// assert_eq!(engine.render(&joined), "/x/y/..");
    ///
    /// let replaced = engine.resolve(&base, &engine.parse("/z").unwrap()).unwrap();
    /// assert_eq!(engine.render(&replaced), "/z");
    /// ```
    pub fn resolve(&self, base: &PathNames, other: &PathNames) -> Result<PathNames> {
        if self.syntax.is_absolute(other) {
            return Ok(other.clone());
        }

        if let Some(root) = other.root() {
            return Err(Error::UnsupportedCombination {
                root: root.to_string(),
            });
        }

        if other.segments().is_empty() {
            return Ok(base.clone());
        }

        let mut segments = Vec::with_capacity(base.name_count() + other.name_count());
        segments.extend_from_slice(base.segments());
        segments.extend_from_slice(other.segments());

        Ok(PathNames::new(base.root().map(str::to_string), segments))
    }

    /// Resolve `other` against the parent of `base`.
    ///
    /// When `base` has no parent (no segments) `other` is returned unchanged.
    ///
    /// # Errors
    ///
    /// Fails as [`resolve`](Self::resolve) does.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::PathEngine;
    ///
    /// let engine = PathEngine::unix();
    /// let base = engine.parse("a/b/c").unwrap();
    /// let sibling = engine.resolve_sibling(&base, &engine.parse("d").unwrap()).unwrap();
    /// assert_eq!(engine.render(&sibling), "a/b/d");
    /// ```
    pub fn resolve_sibling(&self, base: &PathNames, other: &PathNames) -> Result<PathNames> {
        match base.parent() {
            Some(parent) => self.resolve(&parent, other),
            None => Ok(other.clone()),
        }
    }

    /// Compute the rootless path leading from `base` to `other`.
    ///
    /// One parent token is emitted for every segment of `base` past the
    /// common prefix, followed by the remaining segments of `other`. The
    /// inputs are compared as given, so normalize them first for lexical
    /// semantics. For normalized inputs,
    /// `normalize(resolve(base, relativize(base, other)))` equals `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleRoots`] unless both paths carry the same
    /// root or both carry none.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::PathEngine;
    ///
    /// let engine = PathEngine::unix();
    /// let base = engine.parse("/srv/www/site").unwrap();
    /// let other = engine.parse("/srv/logs").unwrap();
    ///
    /// let relative = engine.relativize(&base, &other).unwrap();
    /// assert_eq!(engine.render(&relative), "../../logs");
    /// ```
    pub fn relativize(&self, base: &PathNames, other: &PathNames) -> Result<PathNames> {
        if base.root() != other.root() {
            return Err(Error::IncompatibleRoots {
                base: base.root().map(str::to_string),
                other: other.root().map(str::to_string),
            });
        }

        let common = base
            .segments()
            .iter()
            .zip(other.segments())
            .take_while(|(a, b)| a == b)
            .count();

        let mut segments = vec![self.parent_token.clone(); base.name_count() - common];
        segments.extend_from_slice(&other.segments()[common..]);

        Ok(PathNames::new(None, segments))
    }

    /// Whether `path` is absolute in this engine's grammar.
    #[must_use]
    pub fn is_absolute(&self, path: &PathNames) -> bool {
        self.syntax.is_absolute(path)
    }

    /// Render a path value back into a string.
    ///
    /// The root comes first, then the root separator if there are segments,
    /// then the segments joined by the separator. Only the separators are
    /// used; the grammar hooks are not consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::{PathEngine, PathNames};
    ///
    /// let engine = PathEngine::unix();
    /// assert_eq!(engine.render(&PathNames::new(Some("/".into()), vec![])), "/");
    /// assert_eq!(engine.render(&PathNames::relative(["a", "b"])), "a/b");
    /// assert_eq!(engine.render(&PathNames::default()), "");
    /// ```
    #[must_use]
    pub fn render(&self, path: &PathNames) -> String {
        let mut out = String::new();

        if let Some(root) = path.root() {
            out.push_str(root);
        }

        let Some((first, rest)) = path.segments().split_first() else {
            return out;
        };

        if path.root().is_some() {
            out.push_str(self.separators.root());
        }
        out.push_str(first);

        for name in rest {
            out.push_str(self.separators.name());
            out.push_str(name);
        }

        out
    }
}
