//! Lens optics for bidirectional access to derived views.
//!
//! A Lens pairs a getter and a setter between a source shape and a focused
//! view of it. The view here is *computed* from the source rather than
//! borrowed out of it, so `get` returns an owned value; this is what lets a
//! lens expose a reshaped record that does not exist as a field anywhere in
//! the source.
//!
//! # Laws
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
//! # Examples
//!
//! ```
//! use flatlens::optics::{FunctionLens, Lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = FunctionLens::new(
//!     |point: &Point| point.x,
//!     |point: Point, x: i32| Point { x, ..point },
//! );
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated.x, 100);
//! ```

use std::marker::PhantomData;

/// A bidirectional accessor between a source shape and a computed view.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The view type (the focused value)
///
/// # Laws
///
/// 1. **GetSet Law**: `lens.set(source.clone(), lens.get(&source)) == source`
/// 2. **SetGet Law**: `lens.get(&lens.set(source, value)) == value`
pub trait Lens<S, A> {
    /// Computes the view of `source`.
    fn get(&self, source: &S) -> A;

    /// Writes `value` back into `source`, returning the new source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the view
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the view by applying a function.
    ///
    /// Equivalent to getting the current view, applying the function, and
    /// setting the result.
    ///
    /// # Example
    ///
    /// ```
    /// use flatlens::optics::{FunctionLens, Lens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = FunctionLens::new(
    ///     |point: &Point| point.x,
    ///     |point: Point, x: i32| Point { x, ..point },
    /// );
    ///
    /// let point = Point { x: 10, y: 20 };
    /// let doubled = x_lens.modify(point, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let value = self.get(&source);
        self.set(source, function(value))
    }

    /// Composes this lens with a lens focused inside this lens's view.
    ///
    /// # Type Parameters
    ///
    /// - `B`: The view type of the other lens
    /// - `L`: The type of the other lens
    ///
    /// # Example
    ///
    /// ```
    /// use flatlens::optics::{FunctionLens, Lens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Inner { value: i32 }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Outer { inner: Inner }
    ///
    /// let inner_lens = FunctionLens::new(
    ///     |outer: &Outer| outer.inner.clone(),
    ///     |_outer: Outer, inner: Inner| Outer { inner },
    /// );
    /// let value_lens = FunctionLens::new(
    ///     |inner: &Inner| inner.value,
    ///     |_inner: Inner, value: i32| Inner { value },
    /// );
    /// let outer_value = inner_lens.compose(value_lens);
    ///
    /// let data = Outer { inner: Inner { value: 42 } };
    /// assert_eq!(outer_value.get(&data), 42);
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// Applies `function` to the lens view of `source` and writes it back.
///
/// This is `set(function(get(source)), source)` as a free combinator, for
/// call sites that read better applicative-style than method-chained.
///
/// # Example
///
/// ```
/// use flatlens::optics::{lens_from_pattern, over};
/// use flatlens::pattern;
/// use serde_json::json;
///
/// let lens = lens_from_pattern(&pattern!({ a: "alph" }));
/// let data = json!({ "a": 1, "b": 2 });
///
/// let bumped = over(
///     &lens,
///     |flat| json!({ "alph": flat["alph"].as_i64().unwrap() + 1 }),
///     data,
/// );
///
/// assert_eq!(bumped, json!({ "a": 2, "b": 2 }));
/// ```
pub fn over<S, A, L, F>(lens: &L, function: F, source: S) -> S
where
    L: Lens<S, A>,
    F: FnOnce(A) -> A,
{
    lens.modify(source, function)
}

/// A lens built from a getter and setter function pair.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The view type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use flatlens::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, age: u32 }
///
/// let name_lens = FunctionLens::new(
///     |person: &Person| person.name.clone(),
///     |person: Person, name: String| Person { name, ..person },
/// );
///
/// let person = Person { name: "alice".to_string(), age: 30 };
/// assert_eq!(name_lens.get(&person), "alice");
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - A function computing the view from the source
    /// * `setter` - A function creating a new source with the view replaced
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// The outer lens computes an intermediate view, the inner lens focuses
/// within it. Setting rebuilds the intermediate view and writes it back out.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate view type (view of L1, source of L2)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer lens (computes the intermediate view)
    /// * `second` - The inner lens (focuses within the intermediate view)
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let view = self.first.get(&source);
        let view = self.second.set(view, value);
        self.first.set(source, view)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
