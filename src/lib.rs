//! # flatlens
//!
//! Pattern-derived lenses between nested and flat record shapes.
//!
//! ## Overview
//!
//! A *pattern* is a declarative tree whose leaves name flat fields and whose
//! nodes mirror the keys of a nested record. From one pattern this crate
//! derives a bidirectional accessor: a getter that projects the nested record
//! into the flat shape, and a setter that injects a flat record back while
//! leaving every unaddressed field untouched. The two are paired into a lens
//! usable with an `over`-style update combinator.
//!
//! - **Patterns**: [`pattern::Pattern`] trees, built with the [`pattern!`]
//!   macro or from dynamic JSON values.
//! - **Path indexes**: [`pattern::PathIndex`], the compiled table mapping each
//!   flat field name to its key path through the nested shape.
//! - **Value primitives**: [`value::value_at`] and [`value::assoc_path`] for
//!   path-addressed reads and spine-rebuilding writes.
//! - **Optics**: the [`optics::Lens`] trait, [`optics::ReshapeLens`], and the
//!   [`optics::over`] combinator.
//!
//! ## Example
//!
//! ```rust
//! use flatlens::optics::{lens_from_pattern, over};
//! use flatlens::pattern;
//! use serde_json::json;
//!
//! // Expose a nested location as a flat `{x, y}` record.
//! let location_lens = lens_from_pattern(&pattern!({
//!     location: { x: "x", y: "y" },
//! }));
//!
//! let player = json!({ "type": "player", "location": { "x": 5, "y": 9 } });
//!
//! let moved = over(
//!     &location_lens,
//!     |position| {
//!         json!({
//!             "x": position["x"].as_i64().unwrap() + 1,
//!             "y": position["y"].as_i64().unwrap() - 2,
//!         })
//!     },
//!     player,
//! );
//!
//! assert_eq!(
//!     moved,
//!     json!({ "type": "player", "location": { "x": 6, "y": 7 } })
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use flatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;
    pub use crate::pattern::*;
    pub use crate::value::*;
}

pub mod optics;

pub mod pattern;

pub mod value;
