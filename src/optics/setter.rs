//! Setter optics: write-only access to zero or more elements.
//!
//! A Setter can only rewrite its focus. It is the weakest writing optic and
//! the common target of every write-capable optic's demotion.
//!
//! # Laws
//!
//! 1. **Identity**: `setter.modify(s, |a| a) == s`
//! 2. **Composition**: `setter.modify(setter.modify(s, f), g) == setter.modify(s, |a| g(f(a)))`

use std::marker::PhantomData;

/// A polymorphic Setter.
pub trait PSetter<S, T, A, B> {
    /// Rewrites every focused element with a function.
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnMut(A) -> B;

    /// Replaces every focused element with the same value.
    fn set(&self, source: S, value: B) -> T
    where
        B: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Composes this setter with another setter.
    fn compose_setter<U, V, X>(self, other: X) -> ComposedSetter<Self, X, A, B>
    where
        Self: Sized,
        X: PSetter<A, B, U, V>,
    {
        ComposedSetter::new(self, other)
    }
}

/// A monomorphic Setter.
pub trait Setter<S, A>: PSetter<S, S, A, A> {}

impl<S, A, X> Setter<S, A> for X where X: PSetter<S, S, A, A> {}

/// A setter built from a function that threads the update through the source.
///
/// # Example
///
/// ```
/// use scopic::optics::{FunctionSetter, PSetter};
///
/// let both = FunctionSetter::new(|(a, b): (i32, i32), update: &mut dyn FnMut(i32) -> i32| {
///     (update(a), update(b))
/// });
///
/// assert_eq!(both.modify((1, 2), |n| n * 3), (3, 6));
/// assert_eq!(both.set((1, 2), 0), (0, 0));
/// ```
pub struct FunctionSetter<S, T, A, B, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> B) -> T,
{
    modify_function: M,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, M> FunctionSetter<S, T, A, B, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> B) -> T,
{
    /// Creates a new `FunctionSetter`.
    #[must_use]
    pub const fn new(modify_function: M) -> Self {
        Self {
            modify_function,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, M> PSetter<S, T, A, B> for FunctionSetter<S, T, A, B, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> B) -> T,
{
    fn modify<F>(&self, source: S, mut function: F) -> T
    where
        F: FnMut(A) -> B,
    {
        (self.modify_function)(source, &mut function)
    }
}

impl<S, T, A, B, M> Clone for FunctionSetter<S, T, A, B, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> B) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.modify_function.clone())
    }
}

impl<S, T, A, B, M> std::fmt::Debug for FunctionSetter<S, T, A, B, M>
where
    M: Fn(S, &mut dyn FnMut(A) -> B) -> T,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionSetter")
            .finish_non_exhaustive()
    }
}

/// A setter composed of two setters.
pub struct ComposedSetter<X1, X2, A, B> {
    first: X1,
    second: X2,
    _marker: PhantomData<(A, B)>,
}

impl<X1, X2, A, B> ComposedSetter<X1, X2, A, B> {
    /// Creates a new composed setter.
    #[must_use]
    pub const fn new(first: X1, second: X2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, X1, X2> PSetter<S, T, U, V> for ComposedSetter<X1, X2, A, B>
where
    X1: PSetter<S, T, A, B>,
    X2: PSetter<A, B, U, V>,
{
    fn modify<F>(&self, source: S, mut function: F) -> T
    where
        F: FnMut(U) -> V,
    {
        self.first.modify(source, |intermediate| {
            self.second.modify(intermediate, &mut function)
        })
    }
}

impl<X1: Clone, X2: Clone, A, B> Clone for ComposedSetter<X1, X2, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<X1: std::fmt::Debug, X2: std::fmt::Debug, A, B> std::fmt::Debug
    for ComposedSetter<X1, X2, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedSetter")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composed_setter() {
        let pair = FunctionSetter::new(
            |(a, b): (Vec<i32>, Vec<i32>), update: &mut dyn FnMut(Vec<i32>) -> Vec<i32>| {
                (update(a), update(b))
            },
        );
        let each = FunctionSetter::new(|values: Vec<i32>, update: &mut dyn FnMut(i32) -> i32| {
            values.into_iter().map(update).collect::<Vec<_>>()
        });

        let composed = pair.compose_setter(each);
        assert_eq!(
            composed.modify((vec![1], vec![2, 3]), |n| n + 1),
            (vec![2], vec![3, 4])
        );
    }
}
