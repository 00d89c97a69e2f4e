//! Reshaping lenses between nested records and flat views.

use serde_json::{Map, Value};

use crate::pattern::{PathIndex, Pattern, PatternError};
use crate::value::{assoc_path, value_at};

use super::lens::Lens;

/// Pulls the flat view of `nested` out through a path index.
///
/// Every indexed field resolves by safe navigation; a path that does not
/// reach a value surfaces as `Value::Null` rather than an error. Output keys
/// follow the index enumeration order. The input is never modified.
///
/// # Example
///
/// ```
/// use flatlens::optics::project;
/// use flatlens::pattern;
/// use flatlens::pattern::PathIndex;
/// use serde_json::json;
///
/// let index = PathIndex::from_pattern(&pattern!({ a: { b: "x" }, c: "y" }));
/// let nested = json!({ "a": { "b": 1 }, "c": 2, "extra": true });
///
/// assert_eq!(project(&index, &nested), json!({ "x": 1, "y": 2 }));
/// ```
#[must_use]
pub fn project(index: &PathIndex, nested: &Value) -> Value {
    let mut flat = Map::new();
    for (name, path) in index.iter() {
        let value = value_at(nested, path).cloned().unwrap_or(Value::Null);
        flat.insert(name.to_owned(), value);
    }
    Value::Object(flat)
}

/// Writes a flat record back into a copy of `nested` through a path index.
///
/// Writes happen in index enumeration order, so entries sharing a path
/// prefix compose left to right. A name missing from `flat` writes
/// `Value::Null` at its location. Fields outside the index keep their
/// original values; neither input is modified.
///
/// # Example
///
/// ```
/// use flatlens::optics::inject;
/// use flatlens::pattern;
/// use flatlens::pattern::PathIndex;
/// use serde_json::json;
///
/// let index = PathIndex::from_pattern(&pattern!({ a: { b: "x" }, c: "y" }));
/// let nested = json!({ "a": { "b": 1 }, "c": 2, "extra": true });
///
/// assert_eq!(
///     inject(&index, &json!({ "x": 9, "y": 8 }), &nested),
///     json!({ "a": { "b": 9 }, "c": 8, "extra": true })
/// );
/// ```
#[must_use]
pub fn inject(index: &PathIndex, flat: &Value, nested: &Value) -> Value {
    inject_into(index, flat, nested.clone())
}

/// Owned-input core of [`inject`]; also backs the lens setter.
fn inject_into(index: &PathIndex, flat: &Value, nested: Value) -> Value {
    index.iter().fold(nested, |result, (name, path)| {
        let incoming = flat.get(name).cloned().unwrap_or(Value::Null);
        assoc_path(result, path, incoming)
    })
}

/// Builds a standalone getter closure from a path index.
///
/// The closure projects any nested value into the flat shape described by
/// the index; see [`project`].
#[must_use]
pub fn make_getter(index: PathIndex) -> impl Fn(&Value) -> Value {
    move |nested| project(&index, nested)
}

/// Builds a standalone setter closure from a path index.
///
/// The closure takes `(flat, nested)` and returns the new nested value; the
/// supplied `nested` is never modified. See [`inject`].
#[must_use]
pub fn make_setter(index: PathIndex) -> impl Fn(&Value, &Value) -> Value {
    move |flat, nested| inject(&index, flat, nested)
}

/// A lens between a nested record and the flat view described by a pattern.
///
/// `get` projects the nested record into the flat shape; `set` injects a
/// flat record back, leaving every field the pattern does not address
/// untouched. The lens laws hold for the addressed fields: what the getter
/// reads, the setter writes back in place, and vice versa.
///
/// # Example
///
/// ```
/// use flatlens::optics::{Lens, ReshapeLens};
/// use flatlens::pattern;
/// use serde_json::json;
///
/// let lens = ReshapeLens::from_pattern(&pattern!({
///     a: "alph",
///     c: { x: "xena" },
/// }));
///
/// let nested = json!({ "a": 1, "c": { "x": 3, "z": 77 } });
///
/// assert_eq!(lens.get(&nested), json!({ "alph": 1, "xena": 3 }));
///
/// let updated = lens.set(nested, json!({ "alph": 9, "xena": 7 }));
/// assert_eq!(updated, json!({ "a": 9, "c": { "x": 7, "z": 77 } }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReshapeLens {
    index: PathIndex,
}

impl ReshapeLens {
    /// Creates a lens over an already-compiled path index.
    #[must_use]
    pub const fn new(index: PathIndex) -> Self {
        Self { index }
    }

    /// Compiles `pattern` and creates the lens for it.
    #[must_use]
    pub fn from_pattern(pattern: &Pattern) -> Self {
        Self::new(PathIndex::from_pattern(pattern))
    }

    /// Creates the lens for a pattern supplied as a dynamic JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the root of `value` is not an object.
    pub fn from_value(value: &Value) -> Result<Self, PatternError> {
        Ok(Self::from_pattern(&Pattern::from_value(value)?))
    }

    /// The compiled path index backing this lens.
    #[must_use]
    pub const fn index(&self) -> &PathIndex {
        &self.index
    }
}

impl Lens<Value, Value> for ReshapeLens {
    fn get(&self, source: &Value) -> Value {
        project(&self.index, source)
    }

    fn set(&self, source: Value, value: Value) -> Value {
        inject_into(&self.index, &value, source)
    }
}

/// Derives the paired get/set lens for `pattern`.
///
/// This is [`ReshapeLens::from_pattern`] under a name that reads well next
/// to [`over`](super::lens::over):
///
/// ```
/// use flatlens::optics::{Lens, lens_from_pattern};
/// use flatlens::pattern;
/// use serde_json::json;
///
/// let lens = lens_from_pattern(&pattern!({ location: { x: "x", y: "y" } }));
/// let entity = json!({ "location": { "x": 5, "y": 9 }, "tag": "npc" });
///
/// assert_eq!(lens.get(&entity), json!({ "x": 5, "y": 9 }));
/// ```
#[must_use]
pub fn lens_from_pattern(pattern: &Pattern) -> ReshapeLens {
    ReshapeLens::from_pattern(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity_index() -> PathIndex {
        PathIndex::from_pattern(&crate::pattern!({
            a: "alph",
            b: "better",
            c: { x: "xena", y: "yee" },
        }))
    }

    fn entity() -> Value {
        json!({
            "a": 1,
            "b": 2,
            "c": { "x": 3, "y": { "yeeeah": 4 }, "z": 77, "zz": {} },
        })
    }

    #[test]
    fn test_project_builds_flat_view() {
        let flat = project(&entity_index(), &entity());
        assert_eq!(
            flat,
            json!({ "alph": 1, "better": 2, "xena": 3, "yee": { "yeeeah": 4 } })
        );
    }

    #[test]
    fn test_project_missing_path_is_null() {
        let index = PathIndex::from_pattern(&crate::pattern!({ nope: { nothing: "gone" } }));
        assert_eq!(project(&index, &entity()), json!({ "gone": null }));
    }

    #[test]
    fn test_inject_preserves_untouched_fields() {
        let updated = inject(
            &entity_index(),
            &json!({ "alph": 9, "better": 8, "xena": 7, "yee": { "yeeeah": 6 } }),
            &entity(),
        );
        assert_eq!(
            updated,
            json!({
                "a": 9,
                "b": 8,
                "c": { "x": 7, "y": { "yeeeah": 6 }, "z": 77, "zz": {} },
            })
        );
    }

    #[test]
    fn test_inject_missing_flat_field_writes_null() {
        let updated = inject(&entity_index(), &json!({ "alph": 9 }), &entity());
        assert_eq!(updated["a"], json!(9));
        assert_eq!(updated["b"], Value::Null);
        assert_eq!(updated["c"]["x"], Value::Null);
    }

    #[test]
    fn test_lens_get_set_round_trip() {
        let lens = ReshapeLens::new(entity_index());
        let nested = entity();
        let flat = lens.get(&nested);
        assert_eq!(lens.set(nested.clone(), flat), nested);
    }

    #[test]
    fn test_from_value_rejects_bad_root() {
        assert!(ReshapeLens::from_value(&json!("nope")).is_err());
    }
}
