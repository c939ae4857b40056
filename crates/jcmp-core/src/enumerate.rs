//! Flattening a JSON document into the set of paths it contains.
//!
//! The rules are asymmetric between containers: arrays contribute a path
//! for themselves and objects do not. Classification downstream keys off
//! exactly this shape, so replacing an object with a scalar surfaces as an
//! added path rather than a changed one.

use serde_json::Value;

use crate::path::Path;

/// Enumerate every addressable path in `value`, in document order.
///
/// - a scalar (including `null`) contributes its own path;
/// - an array contributes its own path, then each element in index order;
/// - an object contributes each member in source order, and no path for
///   itself.
///
/// The root renders as the empty path, so enumerating a bare scalar or an
/// empty array yields `[""]` while enumerating an empty object yields
/// nothing at all.
///
/// # Examples
///
/// ```
/// use jcmp_core::enumerate_paths;
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1}, "c": [true, false]});
/// let paths: Vec<String> = enumerate_paths(&doc)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(paths, ["a.b", "c", "c[0]", "c[1]"]);
/// ```
pub fn enumerate_paths(value: &Value) -> Vec<Path> {
    let mut paths = Vec::new();
    collect(value, Path::root(), &mut paths);
    paths
}

fn collect(value: &Value, base: Path, paths: &mut Vec<Path>) {
    match value {
        Value::Object(members) => {
            for (key, member) in members {
                collect(member, base.child_key(key), paths);
            }
        }
        Value::Array(items) => {
            paths.push(base.clone());
            for (index, item) in items.iter().enumerate() {
                collect(item, base.child_index(index), paths);
            }
        }
        _ => paths.push(base),
    }
}
