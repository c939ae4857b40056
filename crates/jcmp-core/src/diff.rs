//! Document-level diff: compare two JSON documents by their path sets.
//!
//! Each document is flattened with [`enumerate_paths`] and every path is
//! classified by membership: present only in the second document (added),
//! present only in the first (removed), or present in both with values that
//! are not structurally equal (changed).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enumerate::enumerate_paths;
use crate::path::Path;

/// The result of comparing two JSON documents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDiff {
    /// Paths present only in the second document, in its document order.
    pub added: Vec<Path>,
    /// Paths present only in the first document, in its document order.
    pub removed: Vec<Path>,
    /// Paths present in both documents whose values differ, in the first
    /// document's order.
    pub changed: Vec<ChangedValue>,
}

impl DocumentDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the documents were identical.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Total number of reported differences.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}

/// A path present in both documents whose values differ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedValue {
    /// The common path.
    pub path: Path,
    /// The value at `path` in the first document.
    pub value1: Value,
    /// The value at `path` in the second document.
    pub value2: Value,
}

/// Structural equality over JSON values.
///
/// Unlike `Value`'s `PartialEq`, numbers compare by numeric value, so `1`
/// and `1.0` are equal. Object member order is irrelevant; array order is
/// not.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(vx, vy)| deep_equal(vx, vy))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, vx)| y.get(key).is_some_and(|vy| deep_equal(vx, vy)))
        }
        _ => false,
    }
}

/// Numeric comparison across integer and float representations.
fn numbers_equal(x: &serde_json::Number, y: &serde_json::Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Compare two JSON documents.
///
/// Paths unique to `doc2` are reported as added, paths unique to `doc1` as
/// removed, and paths present in both sides with unequal values as changed,
/// carrying both values. Ordering within each list follows document order,
/// so output is deterministic for a given pair of inputs.
///
/// # Examples
///
/// ```
/// use jcmp_core::diff_documents;
/// use serde_json::json;
///
/// let diff = diff_documents(&json!({"a": 1, "b": 2}), &json!({"a": 5, "c": 2}));
/// assert_eq!(diff.added[0].to_string(), "c");
/// assert_eq!(diff.removed[0].to_string(), "b");
/// assert_eq!(diff.changed[0].path.to_string(), "a");
/// ```
pub fn diff_documents(doc1: &Value, doc2: &Value) -> DocumentDiff {
    let paths1 = enumerate_paths(doc1);
    let paths2 = enumerate_paths(doc2);

    let in_first: HashSet<&Path> = paths1.iter().collect();
    let in_second: HashSet<&Path> = paths2.iter().collect();

    let added = paths2
        .iter()
        .filter(|p| !in_first.contains(*p))
        .cloned()
        .collect();
    let removed = paths1
        .iter()
        .filter(|p| !in_second.contains(*p))
        .cloned()
        .collect();

    // Paths on both sides, in the first document's order.
    let mut changed = Vec::new();
    for path in paths1.iter().filter(|p| in_second.contains(*p)) {
        let value1 = path.resolve(doc1);
        let value2 = path.resolve(doc2);
        let equal = match (value1, value2) {
            (Some(a), Some(b)) => deep_equal(a, b),
            (None, None) => true,
            _ => false,
        };
        if !equal {
            changed.push(ChangedValue {
                path: path.clone(),
                value1: value1.cloned().unwrap_or(Value::Null),
                value2: value2.cloned().unwrap_or(Value::Null),
            });
        }
    }

    DocumentDiff {
        added,
        removed,
        changed,
    }
}
