//! Standard optics that are commonly used.
//!
//! This module provides pre-defined optics for tuples, `Either`, `Option`,
//! and the identity scope.

use std::marker::PhantomData;

use super::{FunctionIso, FunctionPrism, Iso, PPrism, PScope};
use crate::control::Either;

/// Creates an identity Iso that doesn't transform the value.
///
/// # Example
///
/// ```
/// use scopic::optics::{PIso, iso_identity};
///
/// let identity_iso = iso_identity::<i32>();
///
/// assert_eq!(identity_iso.get(42), 42);
/// assert_eq!(identity_iso.reverse_get(42), 42);
/// ```
#[must_use]
pub fn iso_identity<T>() -> impl Iso<T, T> + Clone {
    FunctionIso::new(|x: T| x, |x: T| x)
}

/// Creates an Iso that swaps the elements of a tuple.
///
/// # Example
///
/// ```
/// use scopic::optics::{PIso, iso_swap};
///
/// let swap_iso = iso_swap::<i32, String>();
///
/// let swapped = swap_iso.get((42, "hello".to_string()));
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// assert_eq!(swap_iso.reverse_get(swapped), (42, "hello".to_string()));
/// ```
#[must_use]
pub fn iso_swap<A, B>() -> impl Iso<(A, B), (B, A)> + Clone {
    FunctionIso::new(|(a, b): (A, B)| (b, a), |(b, a): (B, A)| (a, b))
}

/// The identity scope: always reads the whole source, and a write replaces it.
pub struct IdentityScope<S, T = S> {
    _marker: PhantomData<fn(S) -> T>,
}

impl<S, T> IdentityScope<S, T> {
    /// Creates a polymorphic identity scope.
    #[must_use]
    pub const fn polymorphic() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S, T> PScope<S, T, S, T> for IdentityScope<S, T> {
    fn get_or_modify(&self, source: S) -> Either<T, S> {
        Either::Right(source)
    }

    fn put(&self, _source: S, value: T) -> T {
        value
    }
}

impl<S, T> Clone for IdentityScope<S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T> Copy for IdentityScope<S, T> {}

impl<S, T> Default for IdentityScope<S, T> {
    fn default() -> Self {
        Self::polymorphic()
    }
}

impl<S, T> std::fmt::Debug for IdentityScope<S, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("IdentityScope")
    }
}

static_assertions::assert_impl_all!(IdentityScope<std::rc::Rc<i32>>: Send, Sync, Copy);

/// Creates the monomorphic identity scope on `S`.
///
/// # Example
///
/// ```
/// use scopic::optics::{PScope, scope_identity};
///
/// let identity = scope_identity::<i32>();
/// assert_eq!(identity.get_option(3), Some(3));
/// assert_eq!(identity.put(3, 4), 4);
/// ```
#[must_use]
pub const fn scope_identity<S>() -> IdentityScope<S> {
    IdentityScope::polymorphic()
}

/// Creates a prism focusing on the `Left` branch of an `Either`.
///
/// Writing a new left value may change its type from `L` to `M`.
///
/// # Example
///
/// ```
/// use scopic::control::Either;
/// use scopic::optics::{PPrism, either_left_prism};
///
/// let left = either_left_prism::<i32, String, i32>();
/// assert_eq!(left.get_option(Either::Left(1)), Some(1));
/// assert_eq!(left.get_option(Either::Right("no".to_string())), None);
/// assert_eq!(left.reverse_get(2), Either::Left(2));
/// ```
#[must_use]
pub fn either_left_prism<L, R, M>() -> impl PPrism<Either<L, R>, Either<M, R>, L, M> + Clone {
    FunctionPrism::new(
        |source: Either<L, R>| match source {
            Either::Left(value) => Either::Right(value),
            Either::Right(other) => Either::Left(Either::Right(other)),
        },
        Either::<M, R>::Left,
    )
}

/// Creates a prism focusing on the `Right` branch of an `Either`.
#[must_use]
pub fn either_right_prism<L, R, M>() -> impl PPrism<Either<L, R>, Either<L, M>, R, M> + Clone {
    FunctionPrism::new(
        |source: Either<L, R>| match source {
            Either::Left(other) => Either::Left(Either::Left(other)),
            Either::Right(value) => Either::Right(value),
        },
        Either::<L, M>::Right,
    )
}

/// Creates a prism focusing on the contents of `Some`.
///
/// # Example
///
/// ```
/// use scopic::optics::{PPrism, some_prism};
///
/// let some = some_prism::<i32, i32>();
/// assert_eq!(some.modify(Some(2), |n| n * 5), Some(10));
/// assert_eq!(some.modify(None, |n| n * 5), None);
/// ```
#[must_use]
pub fn some_prism<A, B>() -> impl PPrism<Option<A>, Option<B>, A, B> + Clone {
    FunctionPrism::new(
        |source: Option<A>| match source {
            Some(value) => Either::Right(value),
            None => Either::Left(None),
        },
        Some::<B>,
    )
}
