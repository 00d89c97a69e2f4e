//! Key-path walks over `serde_json::Value` trees.

use serde_json::{Map, Value};

/// Resolves a key path through a nested value.
///
/// Walks `path` one object key at a time, returning `None` as soon as a
/// segment is missing or the current value is not an object. The empty path
/// resolves to `root` itself.
///
/// # Arguments
///
/// * `root` - The value to walk
/// * `path` - The key sequence to follow
///
/// # Returns
///
/// A reference to the value at the path, or `None` if the path does not
/// resolve
///
/// # Example
///
/// ```
/// use flatlens::value::value_at;
/// use serde_json::json;
///
/// let data = json!({ "a": { "b": 1 } });
///
/// assert_eq!(
///     value_at(&data, &["a".to_string(), "b".to_string()]),
///     Some(&json!(1))
/// );
/// assert_eq!(value_at(&data, &["a".to_string(), "missing".to_string()]), None);
/// assert_eq!(value_at(&data, &[]), Some(&data));
/// ```
#[must_use]
pub fn value_at<'a>(root: &'a Value, path: &[String]) -> Option<&'a Value> {
    path.iter()
        .try_fold(root, |cursor, key| cursor.get(key.as_str()))
}

/// Writes `leaf` at `path` inside `root`, rebuilding only the spine.
///
/// Consumes `root` and returns the updated value. Intermediate object nodes
/// are created when a segment is missing; an intermediate that exists but is
/// not an object is replaced by a fresh object. Sibling keys keep their
/// values and their relative order. The empty path replaces the whole value
/// with `leaf`.
///
/// Callers that need the original afterwards clone before calling; the input
/// is never observed half-updated.
///
/// # Arguments
///
/// * `root` - The value to update (consumed)
/// * `path` - The key sequence addressing the write target
/// * `leaf` - The value to write
///
/// # Returns
///
/// The updated value
///
/// # Example
///
/// ```
/// use flatlens::value::assoc_path;
/// use serde_json::json;
///
/// let data = json!({ "c": 2 });
/// let updated = assoc_path(data, &["a".to_string(), "b".to_string()], json!(1));
///
/// assert_eq!(updated, json!({ "c": 2, "a": { "b": 1 } }));
/// ```
#[must_use]
pub fn assoc_path(mut root: Value, path: &[String], leaf: Value) -> Value {
    assoc_into(&mut root, path, leaf);
    root
}

fn assoc_into(slot: &mut Value, path: &[String], leaf: Value) {
    match path.split_first() {
        None => *slot = leaf,
        Some((head, rest)) => {
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(entries) = slot {
                let child = entries.entry(head.as_str()).or_insert(Value::Null);
                assoc_into(child, rest, leaf);
            }
        }
    }
}
