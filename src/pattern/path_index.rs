//! Compiled path tables mapping flat field names into a nested shape.

use indexmap::IndexMap;
use smallvec::SmallVec;

use super::tree::Pattern;

/// Ordered key sequence locating one flat field inside the nested shape.
///
/// Paths are short in practice, so a few segments are stored inline.
pub type KeyPath = SmallVec<[String; 4]>;

/// Mapping from flat field name to the key path addressing it.
///
/// Built once per pattern and immutable afterwards, so one index may drive
/// any number of getters, setters, and lenses, from any number of threads.
///
/// # Example
///
/// ```
/// use flatlens::pattern;
/// use flatlens::pattern::PathIndex;
///
/// let index = PathIndex::from_pattern(&pattern!({ a: { b: "x" }, c: "y" }));
///
/// assert_eq!(index.len(), 2);
/// assert_eq!(
///     index.get("x").unwrap().as_slice(),
///     ["a".to_string(), "b".to_string()]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathIndex {
    paths: IndexMap<String, KeyPath>,
}

impl PathIndex {
    /// Compiles a pattern into its path table.
    ///
    /// The pattern is walked depth-first, visiting each node's entries in
    /// declaration order and extending the carried path by one key per level.
    /// Every leaf records `name -> path`. When two leaves share a flat name,
    /// the later-visited one wins while the enumeration position of the first
    /// occurrence is retained.
    ///
    /// A bare leaf at the root maps its name to the empty path, the
    /// degenerate focus on the whole value.
    #[must_use]
    pub fn from_pattern(pattern: &Pattern) -> Self {
        let paths = match pattern {
            Pattern::Leaf(name) => IndexMap::from([(name.clone(), KeyPath::new())]),
            Pattern::Node(entries) => collect_paths(entries, &KeyPath::new(), IndexMap::new()),
        };
        Self { paths }
    }

    /// Key path registered for a flat field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&KeyPath> {
        self.paths.get(name)
    }

    /// Iterates `(flat name, key path)` entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeyPath)> {
        self.paths.iter().map(|(name, path)| (name.as_str(), path))
    }

    /// Flat field names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    /// Number of flat fields addressed by the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the index addresses no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Depth-first fold accumulating `name -> path` entries.
fn collect_paths(
    entries: &IndexMap<String, Pattern>,
    prefix: &KeyPath,
    paths: IndexMap<String, KeyPath>,
) -> IndexMap<String, KeyPath> {
    entries.iter().fold(paths, |mut collected, (key, child)| {
        let mut path = prefix.clone();
        path.push(key.clone());
        match child {
            Pattern::Leaf(name) => {
                collected.insert(name.clone(), path);
                collected
            }
            Pattern::Node(inner) => collect_paths(inner, &path, collected),
        }
    })
}
