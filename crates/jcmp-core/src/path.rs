//! Dot/bracket paths addressing locations inside a JSON document.
//!
//! A rendered path is built from two kinds of segment:
//! - an object member is its bare key for the leading segment, `.key` after
//!   (`user.name`);
//! - an array element is `[i]` with a zero-based index, appended without a
//!   separator and chainable (`matrix[2][0]`, `items[0].id`).
//!
//! The root of the document renders as the empty string. Keys are taken
//! verbatim, so a key containing `.` or `[`, or an empty key (whose rendering
//! collides with the root's), cannot be rendered unambiguously and will not
//! survive a round trip; enumeration and resolution share this one grammar,
//! which keeps the two from drifting apart.
//!
//! Equality and hashing are over segments, not over the rendered string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::PathError;

/// One step of a [`Path`]: an object member or an array element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Access an object member by key.
    Key(String),
    /// Access an array element by zero-based index.
    Index(usize),
}

/// The address of one location inside a JSON document.
///
/// The root path has no segments and renders as the empty string. Paths are
/// cheap to extend and compare; serde represents them as their rendered
/// string form.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The root path (no segments).
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns `true` if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments of this path, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// This path extended by an object key.
    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self { segments }
    }

    /// This path extended by an array index.
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Resolve this path against a JSON document.
    ///
    /// `Key` segments step into objects and `Index` segments step into
    /// arrays; any other pairing, or a missing member or index, yields
    /// `None`. Absence is distinct from a present JSON `null`, which
    /// resolves to `Some(Value::Null)`. The root path resolves to `root`
    /// itself.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in &self.segments {
            current = match segment {
                PathSegment::Key(key) => current.as_object()?.get(key)?,
                PathSegment::Index(index) => current.as_array()?.get(*index)?,
            };
        }
        Some(current)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({:?})", self.to_string())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        let mut rest = s;
        let mut offset = 0;

        while let Some(ch) = rest.chars().next() {
            match ch {
                '[' => {
                    let tail = &rest[1..];
                    let close = tail
                        .find(']')
                        .ok_or(PathError::UnclosedBracket { at: offset })?;
                    let digits = &tail[..close];
                    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                        return Err(PathError::InvalidIndex {
                            at: offset,
                            index: digits.to_string(),
                        });
                    }
                    let index = digits.parse().map_err(|_| PathError::InvalidIndex {
                        at: offset,
                        index: digits.to_string(),
                    })?;
                    segments.push(PathSegment::Index(index));
                    offset += 1 + close + 1;
                    rest = &tail[close + 1..];
                }
                '.' => {
                    let tail = &rest[1..];
                    let end = tail.find(|c| c == '.' || c == '[').unwrap_or(tail.len());
                    if segments.is_empty() || end == 0 {
                        return Err(PathError::EmptyKey { at: offset });
                    }
                    segments.push(PathSegment::Key(tail[..end].to_string()));
                    offset += 1 + end;
                    rest = &tail[end..];
                }
                // A bare key is only valid as the leading segment.
                _ if segments.is_empty() => {
                    let end = rest.find(|c| c == '.' || c == '[').unwrap_or(rest.len());
                    segments.push(PathSegment::Key(rest[..end].to_string()));
                    offset += end;
                    rest = &rest[end..];
                }
                _ => return Err(PathError::UnexpectedCharacter { at: offset, ch }),
            }
        }

        Ok(Self { segments })
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
