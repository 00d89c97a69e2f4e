//! Pattern trees describing flat views of nested records.

use indexmap::IndexMap;
use serde_json::Value;

/// A declarative mapping between a nested record shape and a flat one.
///
/// Each node follows one key into the nested record; each leaf names the flat
/// field exposed at that location. Patterns are immutable after construction
/// and cheap to share by reference.
///
/// # Example
///
/// ```
/// use flatlens::pattern::Pattern;
///
/// let pattern = Pattern::node([
///     ("a".to_string(), Pattern::leaf("alph")),
///     (
///         "c".to_string(),
///         Pattern::node([("x".to_string(), Pattern::leaf("xena"))]),
///     ),
/// ]);
///
/// assert!(matches!(pattern, Pattern::Node(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Names the flat field bound to the current location.
    Leaf(String),
    /// Mapping from nested-record key to sub-pattern, in declaration order.
    Node(IndexMap<String, Pattern>),
}

impl Pattern {
    /// Creates a leaf naming a flat field.
    #[must_use]
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::Leaf(name.into())
    }

    /// Creates a node from `(key, sub-pattern)` entries.
    ///
    /// Entry order is the declaration order used for every traversal of the
    /// pattern. A key supplied twice keeps its first position with the last
    /// sub-pattern.
    #[must_use]
    pub fn node<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Self)>,
    {
        Self::Node(entries.into_iter().collect())
    }

    /// Builds a pattern from a dynamic JSON value.
    ///
    /// String values become leaves and objects become nodes, recursively.
    /// Values of any other type (numbers, booleans, null, arrays) describe
    /// nothing and are silently skipped; arrays in particular are never
    /// traversed.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::RootNotObject`] when `value` itself is not an
    /// object.
    ///
    /// # Example
    ///
    /// ```
    /// use flatlens::pattern;
    /// use flatlens::pattern::Pattern;
    /// use serde_json::json;
    ///
    /// let pattern = Pattern::from_value(&json!({
    ///     "a": { "b": "x" },
    ///     "c": "y",
    ///     "ignored": 42,
    /// }))?;
    ///
    /// assert_eq!(pattern, pattern!({ a: { b: "x" }, c: "y" }));
    /// # Ok::<(), flatlens::pattern::PatternError>(())
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, PatternError> {
        match value {
            Value::Object(entries) => Ok(Self::node_from_object(entries)),
            other => Err(PatternError::RootNotObject {
                found: json_type_name(other),
            }),
        }
    }

    fn node_from_object(entries: &serde_json::Map<String, Value>) -> Self {
        let converted: IndexMap<String, Self> = entries
            .iter()
            .filter_map(|(key, value)| match value {
                Value::String(name) => Some((key.clone(), Self::Leaf(name.clone()))),
                Value::Object(inner) => Some((key.clone(), Self::node_from_object(inner))),
                _ => None,
            })
            .collect();
        Self::Node(converted)
    }
}

/// Error raised when a dynamic value cannot serve as a pattern.
///
/// # Examples
///
/// ```rust
/// use flatlens::pattern::PatternError;
///
/// let error = PatternError::RootNotObject { found: "number" };
/// assert_eq!(
///     format!("{}", error),
///     "pattern root must be an object, found number"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The root of the supplied value was not a key-value mapping.
    RootNotObject {
        /// JSON type name of the rejected root.
        found: &'static str,
    },
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootNotObject { found } => {
                write!(formatter, "pattern root must be an object, found {found}")
            }
        }
    }
}

impl std::error::Error for PatternError {}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builds a [`Pattern`] literal.
///
/// # Syntax
///
/// ```text
/// pattern!({ key: "flat_name", other: { nested: "another_name" } })
/// ```
///
/// Keys may be identifiers or string literals; values are either a string
/// literal (a leaf naming a flat field) or a braced group (a nested node).
///
/// # Example
///
/// ```
/// use flatlens::pattern;
/// use flatlens::pattern::Pattern;
///
/// let pattern = pattern!({
///     a: "alph",
///     c: { x: "xena", y: "yee" },
///     "dashed-key": "dash",
/// });
///
/// assert!(matches!(pattern, Pattern::Node(_)));
/// ```
#[macro_export]
macro_rules! pattern {
    (@key $key:ident) => {
        ::std::string::String::from(::std::stringify!($key))
    };
    (@key $key:literal) => {
        ::std::string::String::from($key)
    };
    (@value { $($inner:tt)* }) => {
        $crate::pattern!({ $($inner)* })
    };
    (@value $name:literal) => {
        $crate::pattern::Pattern::leaf($name)
    };
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::pattern::Pattern::node([
            $( ($crate::pattern!(@key $key), $crate::pattern!(@value $value)) ),*
        ])
    };
}


#[cfg(feature = "serde")]
mod serde_impls {
    use super::Pattern;
    use indexmap::IndexMap;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Pattern {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                Self::Leaf(name) => serializer.serialize_str(name),
                Self::Node(entries) => {
                    let mut map = serializer.serialize_map(Some(entries.len()))?;
                    for (key, child) in entries {
                        map.serialize_entry(key, child)?;
                    }
                    map.end()
                }
            }
        }
    }

    impl<'de> Deserialize<'de> for Pattern {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(PatternVisitor)
        }
    }

    struct PatternVisitor;

    impl<'de> Visitor<'de> for PatternVisitor {
        type Value = Pattern;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string leaf or a map of sub-patterns")
        }

        fn visit_str<E>(self, name: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Pattern::Leaf(name.to_owned()))
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, child)) = access.next_entry::<String, Pattern>()? {
                entries.insert(key, child);
            }
            Ok(Pattern::Node(entries))
        }
    }
}
