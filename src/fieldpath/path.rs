//! Path segment and path types.

use std::fmt;

/// Segment represents one level of path navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// Field name of a plain object.
    Name(String),
    /// Array or list position. Display-only: skipped when matching dotted
    /// patterns.
    Index(usize),
    /// Map key. Display-only: skipped when matching dotted patterns.
    Key(String),
    /// A single-value wrapper level (Optional/AtomicReference-like). Invisible
    /// to dotted patterns and to the display string, but still a real level of
    /// the traversal.
    Transparent,
}

impl Segment {
    /// Creates a new field name segment.
    pub fn name(name: impl Into<String>) -> Self {
        Segment::Name(name.into())
    }

    /// Creates a new index segment.
    pub fn index(i: usize) -> Self {
        Segment::Index(i)
    }

    /// Creates a new map key segment.
    pub fn key(key: impl Into<String>) -> Self {
        Segment::Key(key.into())
    }

    /// Returns the field name if this is a name segment.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Segment::Name(name) => Some(name),
            _ => None,
        }
    }
}

/// FieldPath represents a complete path from the comparison root to a node.
/// Equality is structural over all segments, transparent ones included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Creates the root (empty) path.
    pub fn root() -> Self {
        FieldPath {
            segments: Vec::new(),
        }
    }

    /// Creates a path from a vector of segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        FieldPath { segments }
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over all segments.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Returns the last segment.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Creates a new path with the given segment appended.
    pub fn with(&self, segment: Segment) -> Self {
        let mut appended = self.clone();
        appended.segments.push(segment);
        appended
    }

    /// Returns the `Name` segments in order, skipping transparent and
    /// display-only segments. This is the view dotted patterns match against.
    pub fn names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| segment.as_name())
            .collect()
    }

    /// Returns true if the path matches the dotted pattern string exactly,
    /// transparently skipping wrapper, index, and key segments. So pattern
    /// `"players.salary"` matches the concrete path produced for a salary
    /// reached through `players` being a list, set, array, or wrapper.
    pub fn matches_pattern(&self, dotted: &str) -> bool {
        let names = self.names();
        let pattern: Vec<&str> = dotted.split('.').collect();
        names == pattern
    }

    /// Renders the user-facing path string: names joined by `.`, indexes as
    /// `[i]`, keys as `["k"]`, transparent segments omitted. The root path
    /// renders as the empty string.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<Segment> for FieldPath {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        FieldPath {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldPath {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote_name = false;
        for segment in &self.segments {
            match segment {
                Segment::Name(name) => {
                    if wrote_name {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                    wrote_name = true;
                }
                Segment::Index(i) => write!(f, "[{}]", i)?,
                Segment::Key(k) => write!(f, "[{:?}]", k)?,
                Segment::Transparent => {}
            }
        }
        Ok(())
    }
}
