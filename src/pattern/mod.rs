//! Declarative patterns and their compiled path tables.
//!
//! A [`Pattern`] describes which parts of a nested record to expose as a flat
//! record: internal nodes follow keys into the nested shape, and each string
//! leaf names the flat field bound to that location. Compiling a pattern with
//! [`PathIndex::from_pattern`] yields the table that the reshaping optics in
//! [`crate::optics`] are driven by.
//!
//! # Example
//!
//! ```
//! use flatlens::pattern;
//! use flatlens::pattern::PathIndex;
//!
//! let index = PathIndex::from_pattern(&pattern!({
//!     a: { b: "x" },
//!     c: "y",
//! }));
//!
//! assert_eq!(
//!     index.get("x").unwrap().as_slice(),
//!     ["a".to_string(), "b".to_string()]
//! );
//! assert_eq!(index.get("y").unwrap().as_slice(), ["c".to_string()]);
//! ```

mod path_index;
mod tree;

pub use path_index::KeyPath;
pub use path_index::PathIndex;

pub use tree::Pattern;
pub use tree::PatternError;
