//! Prism optics for focusing on enum variants.
//!
//! A Prism focuses on one variant of a sum type. Reading may fail, in which
//! case the (possibly retyped) source is handed back; constructing the source
//! from the variant's payload always succeeds.
//!
//! # Laws
//!
//! 1. **Partial round trip**: if `prism.get_or_modify(s)` is `Left(t)` then
//!    `t == s`; if it is `Right(a)` then `prism.reverse_get(a) == s`.
//! 2. **Round trip**: `prism.get_or_modify(prism.reverse_get(a)) == Right(a)`.
//!
//! # Examples
//!
//! ```
//! use scopic::optics::PPrism;
//! use scopic::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! assert_eq!(circle_prism.get_option(Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle_prism.get_option(Shape::Square(3.0)), None);
//! assert_eq!(circle_prism.reverse_get(10.0), Shape::Circle(10.0));
//! ```

use std::marker::PhantomData;

use super::eprism::{PrismAsEPrism, PrismWithError};
use super::optional::POptional;
use crate::control::Either;

/// A polymorphic Prism.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole sum type)
/// - `T`: The source type after a write
/// - `A`: The payload of the focused variant
/// - `B`: The payload written back
pub trait PPrism<S, T, A, B> {
    /// Matches the variant, or hands back the retyped source.
    fn get_or_modify(&self, source: S) -> Either<T, A>;

    /// Builds the source from a payload. Always succeeds.
    fn reverse_get(&self, value: B) -> T;

    /// Returns the payload if the variant matches.
    fn get_option(&self, source: S) -> Option<A> {
        self.get_or_modify(source).right()
    }

    /// Modifies the payload if the variant matches, otherwise returns the
    /// fallback unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use scopic::optics::PPrism;
    /// use scopic::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    /// assert_eq!(circle_prism.modify(Shape::Circle(2.0), |r| r * 2.0), Shape::Circle(4.0));
    /// assert_eq!(circle_prism.modify(Shape::Square(2.0), |r| r * 2.0), Shape::Square(2.0));
    /// ```
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        match self.get_or_modify(source) {
            Either::Left(fallback) => fallback,
            Either::Right(value) => self.reverse_get(function(value)),
        }
    }

    /// Modifies the payload if the variant matches, `None` otherwise.
    fn modify_option<F>(&self, source: S, function: F) -> Option<T>
    where
        F: FnOnce(A) -> B,
    {
        self.get_option(source)
            .map(|value| self.reverse_get(function(value)))
    }

    /// Replaces the payload if the variant matches.
    fn set(&self, source: S, value: B) -> T {
        self.modify(source, |_| value)
    }

    /// Replaces the payload if the variant matches, `None` otherwise.
    fn set_option(&self, source: S, value: B) -> Option<T> {
        self.modify_option(source, |_| value)
    }

    /// Returns `true` if the variant matches.
    fn is_matching(&self, source: &S) -> bool
    where
        S: Clone,
    {
        self.get_or_modify(source.clone()).is_right()
    }

    /// Composes this prism with another prism to focus on a nested variant.
    fn compose<U, V, P>(self, other: P) -> ComposedPrism<Self, P, A, B>
    where
        Self: Sized,
        P: PPrism<A, B, U, V>,
    {
        ComposedPrism::new(self, other)
    }

    /// Views this prism as an Optional.
    fn to_optional(self) -> PrismAsOptional<Self>
    where
        Self: Sized,
    {
        PrismAsOptional::new(self)
    }

    /// Views this prism as an error-reporting prism with a unit diagnostic.
    fn to_eprism(self) -> PrismAsEPrism<Self>
    where
        Self: Sized,
    {
        PrismAsEPrism::new(self)
    }

    /// Attaches a diagnostic computed from the fallback on mismatch.
    ///
    /// # Example
    ///
    /// ```
    /// use scopic::optics::{EPPrism, PPrism};
    /// use scopic::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle = prism!(Shape, Circle).with_error(|shape: &Shape| format!("not a circle: {shape:?}"));
    /// assert_eq!(
    ///     circle.get_or_error(Shape::Square(1.0)),
    ///     Err("not a circle: Square(1.0)".to_string())
    /// );
    /// ```
    fn with_error<E, M>(self, diagnose: M) -> PrismWithError<Self, M>
    where
        Self: Sized,
        M: Fn(&T) -> E,
    {
        PrismWithError::new(self, diagnose)
    }
}

/// A monomorphic Prism.
pub trait Prism<S, A>: PPrism<S, S, A, A> {}

impl<S, A, P> Prism<S, A> for P where P: PPrism<S, S, A, A> {}

/// A prism implemented using a matching function and a constructor.
///
/// The `prism!` macro generates a `FunctionPrism` internally.
///
/// # Example
///
/// ```
/// use scopic::control::Either;
/// use scopic::optics::{FunctionPrism, PPrism};
///
/// let positive = FunctionPrism::new(
///     |n: i32| if n > 0 { Either::Right(n as u32) } else { Either::Left(n) },
///     |n: u32| n as i32,
/// );
///
/// assert_eq!(positive.get_option(7), Some(7));
/// assert_eq!(positive.get_option(-7), None);
/// ```
pub struct FunctionPrism<S, T, A, B, G, R>
where
    G: Fn(S) -> Either<T, A>,
    R: Fn(B) -> T,
{
    get_or_modify_function: G,
    reverse_get_function: R,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, G, R> FunctionPrism<S, T, A, B, G, R>
where
    G: Fn(S) -> Either<T, A>,
    R: Fn(B) -> T,
{
    /// Creates a new `FunctionPrism`.
    #[must_use]
    pub const fn new(get_or_modify_function: G, reverse_get_function: R) -> Self {
        Self {
            get_or_modify_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, R> PPrism<S, T, A, B> for FunctionPrism<S, T, A, B, G, R>
where
    G: Fn(S) -> Either<T, A>,
    R: Fn(B) -> T,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        (self.get_or_modify_function)(source)
    }

    fn reverse_get(&self, value: B) -> T {
        (self.reverse_get_function)(value)
    }
}

impl<S, T, A, B, G, R> Clone for FunctionPrism<S, T, A, B, G, R>
where
    G: Fn(S) -> Either<T, A> + Clone,
    R: Fn(B) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_or_modify_function: self.get_or_modify_function.clone(),
            reverse_get_function: self.reverse_get_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, R> std::fmt::Debug for FunctionPrism<S, T, A, B, G, R>
where
    G: Fn(S) -> Either<T, A>,
    R: Fn(B) -> T,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
///
/// When the inner prism does not match, its fallback is rebuilt into the
/// outer source with the outer prism's `reverse_get`.
pub struct ComposedPrism<P1, P2, A, B> {
    first: P1,
    second: P2,
    _marker: PhantomData<(A, B)>,
}

impl<P1, P2, A, B> ComposedPrism<P1, P2, A, B> {
    /// Creates a new composed prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, P1, P2> PPrism<S, T, U, V> for ComposedPrism<P1, P2, A, B>
where
    P1: PPrism<S, T, A, B>,
    P2: PPrism<A, B, U, V>,
{
    fn get_or_modify(&self, source: S) -> Either<T, U> {
        self.first.get_or_modify(source).flat_map(|intermediate| {
            self.second
                .get_or_modify(intermediate)
                .map_left(|fallback| self.first.reverse_get(fallback))
        })
    }

    fn reverse_get(&self, value: V) -> T {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<P1: Clone, P2: Clone, A, B> Clone for ComposedPrism<P1, P2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A, B> std::fmt::Debug for ComposedPrism<P1, P2, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A prism viewed as an Optional.
///
/// `set` only replaces the payload of an already matching variant.
#[derive(Clone, Debug)]
pub struct PrismAsOptional<P> {
    prism: P,
}

impl<P> PrismAsOptional<P> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self { prism }
    }
}

impl<S, T, A, B, P> POptional<S, T, A, B> for PrismAsOptional<P>
where
    P: PPrism<S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.prism.get_or_modify(source)
    }

    fn set(&self, source: S, value: B) -> T {
        self.prism.set(source, value)
    }
}

/// Creates a monomorphic prism for a single-field tuple variant.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// For unit, multi-field or struct variants use `#[derive(Prisms)]` or
/// [`FunctionPrism::new`] directly.
///
/// # Example
///
/// ```
/// use scopic::optics::PPrism;
/// use scopic::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum MyOption<T> {
///     Some(T),
///     None,
/// }
///
/// let some_prism = prism!(MyOption<i32>, Some);
///
/// assert_eq!(some_prism.get_option(MyOption::Some(42)), Some(42));
/// assert_eq!(some_prism.get_option(MyOption::None), None);
/// assert_eq!(some_prism.reverse_get(100), MyOption::Some(100));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type| match source {
                $enum_type::$variant(value) => $crate::control::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::control::Either::Left(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => $crate::control::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::control::Either::Left(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type| match source {
                <$enum_type>::$variant(value) => $crate::control::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::control::Either::Left(other),
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Shape {
        Circle(f64),
        Rectangle(f64, f64),
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Outer {
        Inner(Inner),
        Empty,
    }

    #[derive(Clone, PartialEq, Debug)]
    enum Inner {
        Value(i32),
        Nothing,
    }

    #[test]
    fn test_function_prism_match_and_mismatch() {
        let circle_prism = prism!(Shape, Circle);

        assert_eq!(circle_prism.get_option(Shape::Circle(5.0)), Some(5.0));
        assert_eq!(
            circle_prism.get_or_modify(Shape::Rectangle(3.0, 4.0)),
            Either::Left(Shape::Rectangle(3.0, 4.0))
        );
    }

    #[test]
    fn test_prism_modify_option() {
        let circle_prism = prism!(Shape, Circle);
        assert_eq!(
            circle_prism.modify_option(Shape::Circle(5.0), |r| r * 2.0),
            Some(Shape::Circle(10.0))
        );
        assert_eq!(
            circle_prism.modify_option(Shape::Rectangle(1.0, 1.0), |r| r * 2.0),
            None
        );
    }

    #[test]
    fn test_prism_set_does_not_insert() {
        let circle_prism = prism!(Shape, Circle);
        let rectangle = Shape::Rectangle(1.0, 2.0);
        assert_eq!(circle_prism.set(rectangle.clone(), 9.0), rectangle);
        assert_eq!(circle_prism.set_option(rectangle, 9.0), None);
    }

    #[test]
    fn test_composed_prism_rebuilds_outer_on_inner_mismatch() {
        let composed = prism!(Outer, Inner).compose(prism!(Inner, Value));

        assert_eq!(composed.get_option(Outer::Inner(Inner::Value(42))), Some(42));
        assert_eq!(
            composed.get_or_modify(Outer::Inner(Inner::Nothing)),
            Either::Left(Outer::Inner(Inner::Nothing))
        );
        assert_eq!(
            composed.get_or_modify(Outer::Empty),
            Either::Left(Outer::Empty)
        );
        assert_eq!(composed.reverse_get(7), Outer::Inner(Inner::Value(7)));
    }

    #[test]
    fn test_prism_is_matching() {
        let circle_prism = prism!(Shape, Circle);
        assert!(circle_prism.is_matching(&Shape::Circle(1.0)));
        assert!(!circle_prism.is_matching(&Shape::Rectangle(1.0, 1.0)));
    }
}
