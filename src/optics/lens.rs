//! Lens optics for focusing on struct fields.
//!
//! A Lens provides total get/set access to a part of a larger structure.
//! Lenses here are polymorphic: writing a `B` into an `S` may produce a
//! differently typed `T`. The monomorphic [`Lens<S, A>`] is the common case
//! `T = S`, `B = A`.
//!
//! # Laws
//!
//! 1. **GetPut Law**: `lens.set(source.clone(), lens.get(&source)) == source`
//! 2. **PutGet Law**: `lens.get(&lens.set(source, value.clone())) == value`
//! 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! # Examples
//!
//! ```
//! use scopic::optics::PLens;
//! use scopic::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::marker::PhantomData;

use super::optional::POptional;
use crate::control::Either;

/// A polymorphic Lens focusing on a single, always-present part of `S`.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The source type after a write
/// - `A`: The focused type
/// - `B`: The type written back
pub trait PLens<S, T, A, B> {
    /// Reads the focused part.
    fn get(&self, source: &S) -> A;

    /// Replaces the focused part, producing the updated source.
    fn set(&self, source: S, value: B) -> T;

    /// Modifies the focused part with a function.
    ///
    /// # Example
    ///
    /// ```
    /// use scopic::optics::PLens;
    /// use scopic::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }

    /// Composes this lens with another lens to focus on a nested part.
    ///
    /// # Example
    ///
    /// ```
    /// use scopic::optics::PLens;
    /// use scopic::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Inner { value: i32 }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Outer { inner: Inner }
    ///
    /// let outer_value = lens!(Outer, inner).compose(lens!(Inner, value));
    ///
    /// let data = Outer { inner: Inner { value: 42 } };
    /// assert_eq!(outer_value.get(&data), 42);
    /// assert_eq!(outer_value.set(data, 7).inner.value, 7);
    /// ```
    fn compose<U, V, L>(self, other: L) -> ComposedLens<Self, L, A, B>
    where
        Self: Sized,
        L: PLens<A, B, U, V>,
    {
        ComposedLens::new(self, other)
    }

    /// Views this lens as an Optional that always matches.
    fn to_optional(self) -> LensAsOptional<Self>
    where
        Self: Sized,
    {
        LensAsOptional::new(self)
    }
}

/// A monomorphic Lens: writes do not change the source or target type.
pub trait Lens<S, A>: PLens<S, S, A, A> {}

impl<S, A, L> Lens<S, A> for L where L: PLens<S, S, A, A> {}

/// A lens implemented using getter and setter functions.
///
/// The `lens!` macro generates a `FunctionLens` internally.
///
/// # Example
///
/// ```
/// use scopic::optics::{FunctionLens, PLens};
///
/// // Polymorphic: replacing the first component changes its type.
/// let first = FunctionLens::new(
///     |pair: &(i32, char)| pair.0,
///     |pair: (i32, char), label: String| (label, pair.1),
/// );
///
/// assert_eq!(first.get(&(1, 'a')), 1);
/// assert_eq!(first.set((1, 'a'), "one".to_string()), ("one".to_string(), 'a'));
/// ```
pub struct FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, G, St> FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, St> PLens<S, T, A, B> for FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: B) -> T {
        (self.setter)(source, value)
    }
}

impl<S, T, A, B, G, St> Clone for FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, B) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, St> std::fmt::Debug for FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// `A` and `B` are the intermediate types (target of the outer lens).
pub struct ComposedLens<L1, L2, A, B> {
    first: L1,
    second: L2,
    _marker: PhantomData<(A, B)>,
}

impl<L1, L2, A, B> ComposedLens<L1, L2, A, B> {
    /// Creates a new composed lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, L1, L2> PLens<S, T, U, V> for ComposedLens<L1, L2, A, B>
where
    L1: PLens<S, T, A, B>,
    L2: PLens<A, B, U, V>,
{
    fn get(&self, source: &S) -> U {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: S, value: V) -> T {
        let intermediate = self.first.get(&source);
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A, B> Clone for ComposedLens<L1, L2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A, B> std::fmt::Debug for ComposedLens<L1, L2, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A lens viewed as an Optional that always matches.
#[derive(Clone, Debug)]
pub struct LensAsOptional<L> {
    lens: L,
}

impl<L> LensAsOptional<L> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self { lens }
    }
}

impl<S, T, A, B, L> POptional<S, T, A, B> for LensAsOptional<L>
where
    L: PLens<S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        Either::Right(self.lens.get(&source))
    }

    fn set(&self, source: S, value: B) -> T {
        self.lens.set(source, value)
    }
}

/// Creates a monomorphic lens for a struct field.
///
/// The field type must implement `Clone`, since [`PLens::get`] returns an
/// owned value.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(StructType<T, ...>, field_name)
/// ```
///
/// # Example
///
/// ```
/// use scopic::optics::PLens;
/// use scopic::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let y_lens = lens!(Point, y);
/// let updated = y_lens.set(Point { x: 10, y: 20 }, 0);
/// assert_eq!(updated, Point { x: 10, y: 0 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| source.$field.clone(),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_function_lens_get_and_set() {
        let x_lens = FunctionLens::new(
            |point: &Point| point.x,
            |point: Point, x: i32| Point { x, ..point },
        );

        let point = Point { x: 10, y: 20 };
        assert_eq!(x_lens.get(&point), 10);

        let updated = x_lens.set(point, 100);
        assert_eq!(updated, Point { x: 100, y: 20 });
    }

    #[test]
    fn test_lens_modify() {
        let x_lens = lens!(Point, x);
        let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
        assert_eq!(doubled.x, 20);
    }

    #[test]
    fn test_polymorphic_compose() {
        let outer = FunctionLens::new(
            |pair: &((i32, bool), char)| pair.0,
            |pair: ((i32, bool), char), inner: (String, bool)| (inner, pair.1),
        );
        let inner = FunctionLens::new(
            |pair: &(i32, bool)| pair.0,
            |pair: (i32, bool), label: String| (label, pair.1),
        );
        let composed = outer.compose(inner);

        let source = ((3, true), 'z');
        assert_eq!(composed.get(&source), 3);
        assert_eq!(
            composed.set(source, "three".to_string()),
            (("three".to_string(), true), 'z')
        );
    }

    #[test]
    fn test_lens_as_optional_always_matches() {
        let optional = lens!(Point, y).to_optional();
        let point = Point { x: 1, y: 2 };
        assert_eq!(optional.get_option(point.clone()), Some(2));
        assert_eq!(optional.set(point, 5), Point { x: 1, y: 5 });
    }
}
