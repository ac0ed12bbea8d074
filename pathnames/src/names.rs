//! The structural path value.
//!
//! A [`PathNames`] is the parsed form of a path: an optional root token and
//! an ordered list of name segments. It knows nothing about separators or
//! grammars; turning it back into a string is the job of
//! [`PathEngine::render`](crate::PathEngine::render).

/// An immutable parsed path: optional root plus ordered segments.
///
/// Equality and hashing are structural over the root and the segments.
///
/// # Examples
///
/// ```
/// use pathnames::PathNames;
///
/// let path = PathNames::new(Some("/".to_string()), vec!["usr".into(), "lib".into()]);
/// assert_eq!(path.root(), Some("/"));
/// assert_eq!(path.file_name(), Some("lib"));
///
/// let parent = path.parent().unwrap();
/// assert_eq!(parent.segments(), ["usr"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathNames {
    root: Option<String>,
    segments: Vec<String>,
}

impl PathNames {
    /// Create a path value from a root and its segments.
    ///
    /// An empty root string is treated as no root at all. Segments are taken
    /// as given; validating them against a grammar is done by
    /// [`PathEngine::parse`](crate::PathEngine::parse).
    #[must_use]
    pub fn new(root: Option<String>, segments: Vec<String>) -> Self {
        Self {
            root: root.filter(|r| !r.is_empty()),
            segments,
        }
    }

    /// Create a rootless path value from its segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::PathNames;
    ///
    /// let path = PathNames::relative(["a", "b"]);
    /// assert_eq!(path.root(), None);
    /// assert_eq!(path.name_count(), 2);
    /// ```
    #[must_use]
    pub fn relative<I, T>(segments: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(None, segments.into_iter().map(Into::into).collect())
    }

    /// The root token, if this path has one.
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// The segments, root to leaf.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this path has neither a root nor any segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.segments.len()
    }

    /// The segment at `index`, counting from the root side.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// The last segment, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The path with the same root and all but the last segment.
    ///
    /// Returns `None` when there is no segment to drop, including for a
    /// root-only path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::PathNames;
    ///
    /// let path = PathNames::relative(["a"]);
    /// assert_eq!(path.parent(), Some(PathNames::relative(Vec::<String>::new())));
    ///
    /// let root_only = PathNames::new(Some("/".to_string()), vec![]);
    /// assert_eq!(root_only.parent(), None);
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            root: self.root.clone(),
            segments: init.to_vec(),
        })
    }

    /// A rootless path holding the segments in `begin..end`.
    ///
    /// Returns `None` if the range is empty or reaches past the last segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnames::PathNames;
    ///
    /// let path = PathNames::new(Some("/".to_string()), vec!["a".into(), "b".into(), "c".into()]);
    /// assert_eq!(path.subpath(1, 3), Some(PathNames::relative(["b", "c"])));
    /// assert_eq!(path.subpath(2, 2), None);
    /// ```
    #[must_use]
    pub fn subpath(&self, begin: usize, end: usize) -> Option<Self> {
        if begin >= end || end > self.segments.len() {
            return None;
        }
        Some(Self {
            root: None,
            segments: self.segments[begin..end].to_vec(),
        })
    }

    /// Whether `other` is a structural prefix of this path.
    ///
    /// Roots must be equal; the segments of `other` must lead this path's
    /// segments. A rootless empty `other` only prefixes a rootless empty path.
    #[must_use]
    pub fn starts_with(&self, other: &Self) -> bool {
        if self.root != other.root {
            return false;
        }
        if other.is_empty() {
            return self.is_empty();
        }
        self.segments.starts_with(&other.segments)
    }

    /// Whether `other` is a structural suffix of this path.
    ///
    /// A rooted `other` must equal this path. A rootless `other` must trail
    /// this path's segments; a rootless empty `other` only ends a rootless
    /// empty path.
    #[must_use]
    pub fn ends_with(&self, other: &Self) -> bool {
        if other.root.is_some() {
            return self == other;
        }
        if other.segments.is_empty() {
            return self.is_empty();
        }
        self.segments.ends_with(&other.segments)
    }

    /// Split into the root and the segments.
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, Vec<String>) {
        (self.root, self.segments)
    }
}
