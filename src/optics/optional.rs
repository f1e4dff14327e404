//! Optional optics for focusing on elements that may or may not exist.
//!
//! An Optional reads a target that may be absent and only replaces it when it
//! is present: `set` on a non-matching source returns the source unchanged.
//! This is what sets it apart from a Scope, whose write always succeeds.
//!
//! # Laws
//!
//! 1. **`GetOptionSet` Law**: if `optional.get_or_modify(s)` is `Right(a)`,
//!    then `optional.set(s, a) == s`; if it is `Left(t)` then `t == s`.
//! 2. **`SetGetOption` Law**:
//!    `optional.get_option(optional.set(s, a)) == optional.get_option(s).map(|_| a)`
//!
//! # Examples
//!
//! ```
//! use scopic::optics::{PLens, POptional};
//! use scopic::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum MyOption<T> { Some(T), None }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Container { maybe_value: MyOption<i32> }
//!
//! let optional = lens!(Container, maybe_value)
//!     .to_optional()
//!     .compose_prism(prism!(MyOption<i32>, Some));
//!
//! let some_container = Container { maybe_value: MyOption::Some(42) };
//! assert_eq!(optional.get_option(some_container), Some(42));
//!
//! let none_container = Container { maybe_value: MyOption::None };
//! assert_eq!(optional.set(none_container.clone(), 1), none_container);
//! ```

use std::marker::PhantomData;

use super::lens::{LensAsOptional, PLens};
use super::prism::{PPrism, PrismAsOptional};
use super::traversal::{PTraversal, TraversalAsFold, TraversalAsSetter};
use crate::control::Either;

/// A polymorphic Optional.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The source type after a write
/// - `A`: The focused type, if present
/// - `B`: The type written back
pub trait POptional<S, T, A, B> {
    /// Reads the target, or hands back the retyped source.
    fn get_or_modify(&self, source: S) -> Either<T, A>;

    /// Replaces the target if it is present.
    fn set(&self, source: S, value: B) -> T;

    /// Returns the target if present.
    fn get_option(&self, source: S) -> Option<A> {
        self.get_or_modify(source).right()
    }

    /// Modifies the target if present, otherwise returns the fallback.
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
        S: Clone,
    {
        match self.get_or_modify(source.clone()) {
            Either::Left(fallback) => fallback,
            Either::Right(value) => self.set(source, function(value)),
        }
    }

    /// Modifies the target if present, `None` otherwise.
    fn modify_option<F>(&self, source: S, function: F) -> Option<T>
    where
        F: FnOnce(A) -> B,
        S: Clone,
    {
        self.get_option(source.clone())
            .map(|value| self.set(source, function(value)))
    }

    /// Returns `true` if the target is present.
    fn is_matching(&self, source: &S) -> bool
    where
        S: Clone,
    {
        self.get_or_modify(source.clone()).is_right()
    }

    /// Composes this optional with another optional.
    fn compose_optional<U, V, O>(self, other: O) -> ComposedOptional<Self, O, A, B>
    where
        Self: Sized,
        O: POptional<A, B, U, V>,
    {
        ComposedOptional::new(self, other)
    }

    /// Composes this optional with a lens.
    fn compose_lens<U, V, L>(self, lens: L) -> ComposedOptional<Self, LensAsOptional<L>, A, B>
    where
        Self: Sized,
        L: PLens<A, B, U, V>,
    {
        ComposedOptional::new(self, LensAsOptional::new(lens))
    }

    /// Composes this optional with a prism.
    fn compose_prism<U, V, P>(self, prism: P) -> ComposedOptional<Self, PrismAsOptional<P>, A, B>
    where
        Self: Sized,
        P: PPrism<A, B, U, V>,
    {
        ComposedOptional::new(self, PrismAsOptional::new(prism))
    }

    /// Views this optional as a Traversal of zero or one element.
    fn to_traversal(self) -> OptionalAsTraversal<Self>
    where
        Self: Sized,
    {
        OptionalAsTraversal::new(self)
    }

    /// Views this optional as a Setter.
    fn to_setter(self) -> TraversalAsSetter<OptionalAsTraversal<Self>>
    where
        Self: Sized,
        S: Clone,
    {
        TraversalAsSetter::new(OptionalAsTraversal::new(self))
    }

    /// Views this optional as a Fold.
    fn to_fold(self) -> TraversalAsFold<OptionalAsTraversal<Self>, T, B>
    where
        Self: Sized,
        S: Clone,
    {
        TraversalAsFold::new(OptionalAsTraversal::new(self))
    }
}

/// A monomorphic Optional.
pub trait Optional<S, A>: POptional<S, S, A, A> {}

impl<S, A, O> Optional<S, A> for O where O: POptional<S, S, A, A> {}

/// An optional implemented using a read-or-fallback function and a setter.
///
/// # Example
///
/// ```
/// use scopic::control::Either;
/// use scopic::optics::{FunctionOptional, POptional};
///
/// let head = FunctionOptional::new(
///     |values: Vec<i32>| match values.first() {
///         Some(&first) => Either::Right(first),
///         None => Either::Left(values),
///     },
///     |mut values: Vec<i32>, value: i32| {
///         if let Some(first) = values.first_mut() {
///             *first = value;
///         }
///         values
///     },
/// );
///
/// assert_eq!(head.set(vec![1, 2], 9), vec![9, 2]);
/// assert_eq!(head.set(vec![], 9), Vec::<i32>::new());
/// ```
pub struct FunctionOptional<S, T, A, B, G, St>
where
    G: Fn(S) -> Either<T, A>,
    St: Fn(S, B) -> T,
{
    get_or_modify_function: G,
    set_function: St,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, G, St> FunctionOptional<S, T, A, B, G, St>
where
    G: Fn(S) -> Either<T, A>,
    St: Fn(S, B) -> T,
{
    /// Creates a new `FunctionOptional`.
    #[must_use]
    pub const fn new(get_or_modify_function: G, set_function: St) -> Self {
        Self {
            get_or_modify_function,
            set_function,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, St> POptional<S, T, A, B> for FunctionOptional<S, T, A, B, G, St>
where
    G: Fn(S) -> Either<T, A>,
    St: Fn(S, B) -> T,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        (self.get_or_modify_function)(source)
    }

    fn set(&self, source: S, value: B) -> T {
        (self.set_function)(source, value)
    }
}

impl<S, T, A, B, G, St> Clone for FunctionOptional<S, T, A, B, G, St>
where
    G: Fn(S) -> Either<T, A> + Clone,
    St: Fn(S, B) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_or_modify_function: self.get_or_modify_function.clone(),
            set_function: self.set_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, St> std::fmt::Debug for FunctionOptional<S, T, A, B, G, St>
where
    G: Fn(S) -> Either<T, A>,
    St: Fn(S, B) -> T,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionOptional")
            .finish_non_exhaustive()
    }
}

/// An optional composed of two optionals.
///
/// `A` and `B` are the intermediate types. Both operations clone the source,
/// since the outer optional is consulted twice.
pub struct ComposedOptional<O1, O2, A, B> {
    first: O1,
    second: O2,
    _marker: PhantomData<(A, B)>,
}

impl<O1, O2, A, B> ComposedOptional<O1, O2, A, B> {
    /// Creates a new composed optional.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, O1, O2> POptional<S, T, U, V> for ComposedOptional<O1, O2, A, B>
where
    O1: POptional<S, T, A, B>,
    O2: POptional<A, B, U, V>,
    S: Clone,
{
    fn get_or_modify(&self, source: S) -> Either<T, U> {
        match self.first.get_or_modify(source.clone()) {
            Either::Left(fallback) => Either::Left(fallback),
            Either::Right(intermediate) => self
                .second
                .get_or_modify(intermediate)
                .map_left(|inner_fallback| self.first.set(source, inner_fallback)),
        }
    }

    fn set(&self, source: S, value: V) -> T {
        match self.first.get_or_modify(source.clone()) {
            Either::Left(fallback) => fallback,
            Either::Right(intermediate) => {
                self.first.set(source, self.second.set(intermediate, value))
            }
        }
    }
}

impl<O1: Clone, O2: Clone, A, B> Clone for ComposedOptional<O1, O2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A, B> std::fmt::Debug
    for ComposedOptional<O1, O2, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An optional viewed as a Traversal of zero or one element.
#[derive(Clone, Debug)]
pub struct OptionalAsTraversal<O> {
    optional: O,
}

impl<O> OptionalAsTraversal<O> {
    /// Wraps an optional.
    #[must_use]
    pub const fn new(optional: O) -> Self {
        Self { optional }
    }
}

impl<S, T, A, B, O> PTraversal<S, T, A, B> for OptionalAsTraversal<O>
where
    O: POptional<S, T, A, B>,
    S: Clone,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        self.optional.get_option(source.clone()).into_iter().collect()
    }

    fn modify_all<F>(&self, source: S, function: F) -> T
    where
        F: FnMut(A) -> B,
    {
        self.optional.modify(source, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lens, prism};

    #[derive(Clone, PartialEq, Debug)]
    enum MyOption<T> {
        Some(T),
        None,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Container {
        maybe_value: MyOption<i32>,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Wrapper {
        container: MyOption<Container>,
    }

    #[test]
    fn test_lens_prism_optional_get_option() {
        let optional = lens!(Container, maybe_value)
            .to_optional()
            .compose_prism(prism!(MyOption<i32>, Some));

        assert_eq!(
            optional.get_option(Container {
                maybe_value: MyOption::Some(42)
            }),
            Some(42)
        );
        assert_eq!(
            optional.get_option(Container {
                maybe_value: MyOption::None
            }),
            None
        );
    }

    #[test]
    fn test_set_on_absent_target_is_noop() {
        let optional = lens!(Container, maybe_value)
            .to_optional()
            .compose_prism(prism!(MyOption<i32>, Some));
        let empty = Container {
            maybe_value: MyOption::None,
        };

        assert_eq!(optional.set(empty.clone(), 5), empty);
        assert_eq!(optional.modify_option(empty, |value| value + 1), None);
    }

    #[test]
    fn test_nested_optional_rebuilds_fallback() {
        let optional = lens!(Wrapper, container)
            .to_optional()
            .compose_prism(prism!(MyOption<Container>, Some))
            .compose_lens(lens!(Container, maybe_value))
            .compose_prism(prism!(MyOption<i32>, Some));

        let source = Wrapper {
            container: MyOption::Some(Container {
                maybe_value: MyOption::None,
            }),
        };
        assert_eq!(
            optional.get_or_modify(source.clone()),
            Either::Left(source.clone())
        );
        assert!(!optional.is_matching(&source));
    }

    #[test]
    fn test_optional_as_traversal() {
        let traversal = prism!(MyOption<i32>, Some).to_optional().to_traversal();

        assert_eq!(traversal.get_all(&MyOption::Some(3)), vec![3]);
        assert!(traversal.get_all(&MyOption::None).is_empty());
        assert_eq!(
            traversal.modify_all(MyOption::Some(3), |value| value * 10),
            MyOption::Some(30)
        );
    }
}
