//! Path-addressed access and update for JSON-like values.
//!
//! This module provides the two structural primitives the reshaping optics
//! are built from:
//!
//! - [`value_at`]: resolve a key path through a nested value with
//!   safe-navigation semantics (`None` instead of an error when a segment is
//!   missing).
//! - [`assoc_path`]: write a value at a key path, rebuilding only the spine
//!   from the root to the target and creating intermediate nodes as needed.
//!
//! # Example
//!
//! ```
//! use flatlens::value::{assoc_path, value_at};
//! use serde_json::json;
//!
//! let data = json!({ "a": { "b": 1 }, "c": 2 });
//! let path = ["a".to_string(), "b".to_string()];
//!
//! assert_eq!(value_at(&data, &path), Some(&json!(1)));
//!
//! let updated = assoc_path(data, &path, json!(9));
//! assert_eq!(updated, json!({ "a": { "b": 9 }, "c": 2 }));
//! ```

mod path;

pub use path::assoc_path;
pub use path::value_at;
