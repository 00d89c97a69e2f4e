//! Optics for reshaping nested records into flat views.
//!
//! This module provides composable accessors between a nested record and a
//! flat record derived from it. The core abstraction is the [`Lens`] trait: a
//! paired getter and setter whose view is *computed* from the source, which
//! is what allows a whole reshaped record to act as the focus.
//!
//! # Available pieces
//!
//! - [`Lens`]: the get/set/modify/compose contract
//! - [`FunctionLens`]: lens from a getter/setter closure pair
//! - [`ComposedLens`]: nested-focus composition of two lenses
//! - [`over`]: free-function update-in-place combinator
//! - [`ReshapeLens`] and [`lens_from_pattern`]: the pattern-derived lens
//! - [`project`], [`inject`], [`make_getter`], [`make_setter`]: the
//!   underlying projection and injection halves
//!
//! # Example
//!
//! ```
//! use flatlens::optics::{lens_from_pattern, over};
//! use flatlens::pattern;
//! use serde_json::json;
//!
//! let lens = lens_from_pattern(&pattern!({
//!     a: "alph",
//!     c: { x: "xena", y: "yee" },
//! }));
//!
//! let data = json!({
//!     "a": 1,
//!     "c": { "x": 3, "y": { "yeeeah": 4 }, "z": 77 },
//! });
//!
//! let updated = over(
//!     &lens,
//!     |flat| {
//!         json!({
//!             "alph": flat["alph"].as_i64().unwrap() + 1,
//!             "xena": flat["xena"].as_i64().unwrap() + 1,
//!             "yee": flat["yee"].clone(),
//!         })
//!     },
//!     data,
//! );
//!
//! assert_eq!(
//!     updated,
//!     json!({
//!         "a": 2,
//!         "c": { "x": 4, "y": { "yeeeah": 4 }, "z": 77 },
//!     })
//! );
//! ```
//!
//! # Lens Laws
//!
//! Every Lens must satisfy two laws over the fields it addresses:
//!
//! 1. **GetSet Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source)) == source
//!    ```
//!
//! 2. **SetGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == value
//!    ```
//!
//! For a [`ReshapeLens`] the GetSet law covers every field its pattern
//! addresses; fields outside the pattern are untouched by construction.

mod lens;
mod reshape;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::over;

// Re-export the pattern-derived reshaping optics
pub use reshape::ReshapeLens;
pub use reshape::inject;
pub use reshape::lens_from_pattern;
pub use reshape::make_getter;
pub use reshape::make_setter;
pub use reshape::project;
