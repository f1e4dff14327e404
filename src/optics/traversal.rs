//! Traversal optics for focusing on zero or more elements.
//!
//! A Traversal reads every focused element and rewrites all of them with a
//! single function.
//!
//! # Laws
//!
//! 1. **Identity**: `traversal.modify_all(s, |a| a) == s`
//! 2. **Composition**:
//!    `traversal.modify_all(traversal.modify_all(s, f), g) == traversal.modify_all(s, |a| g(f(a)))`
//!
//! # Examples
//!
//! ```
//! use scopic::optics::{PTraversal, VecTraversal};
//!
//! let each = VecTraversal::new();
//! assert_eq!(each.get_all(&vec![1, 2, 3]), vec![1, 2, 3]);
//! assert_eq!(each.modify_all(vec![1, 2, 3], |n| n * 10), vec![10, 20, 30]);
//! ```

use std::marker::PhantomData;

use super::fold::Fold;
use super::setter::PSetter;

/// A polymorphic Traversal.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The source type after a write
/// - `A`: The focused element type
/// - `B`: The element type written back
pub trait PTraversal<S, T, A, B> {
    /// Collects every focused element.
    fn get_all(&self, source: &S) -> Vec<A>;

    /// Rewrites every focused element with a function.
    fn modify_all<F>(&self, source: S, function: F) -> T
    where
        F: FnMut(A) -> B;

    /// Replaces every focused element with the same value.
    fn set_all(&self, source: S, value: B) -> T
    where
        B: Clone,
    {
        self.modify_all(source, |_| value.clone())
    }

    /// Composes this traversal with another traversal.
    ///
    /// # Example
    ///
    /// ```
    /// use scopic::optics::{PTraversal, VecTraversal};
    ///
    /// let nested = VecTraversal::new().compose_traversal(VecTraversal::new());
    /// let grid = vec![vec![1, 2], vec![3]];
    /// assert_eq!(nested.get_all(&grid), vec![1, 2, 3]);
    /// assert_eq!(nested.modify_all(grid, |n| n + 1), vec![vec![2, 3], vec![4]]);
    /// ```
    fn compose_traversal<U, V, X>(self, other: X) -> ComposedTraversal<Self, X, A, B>
    where
        Self: Sized,
        X: PTraversal<A, B, U, V>,
    {
        ComposedTraversal::new(self, other)
    }

    /// Views this traversal as a Setter.
    fn to_setter(self) -> TraversalAsSetter<Self>
    where
        Self: Sized,
    {
        TraversalAsSetter::new(self)
    }

    /// Views this traversal as a Fold.
    fn to_fold(self) -> TraversalAsFold<Self, T, B>
    where
        Self: Sized,
    {
        TraversalAsFold::new(self)
    }
}

/// A monomorphic Traversal.
pub trait Traversal<S, A>: PTraversal<S, S, A, A> {}

impl<S, A, X> Traversal<S, A> for X where X: PTraversal<S, S, A, A> {}

/// A traversal over every element of a `Vec`.
pub struct VecTraversal<A, B = A> {
    _marker: PhantomData<fn(A) -> B>,
}

impl<A> VecTraversal<A> {
    /// Creates a monomorphic `Vec` traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A, B> VecTraversal<A, B> {
    /// Creates a `Vec` traversal whose writes change the element type.
    #[must_use]
    pub const fn polymorphic() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for VecTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Clone for VecTraversal<A, B> {
    fn clone(&self) -> Self {
        Self::polymorphic()
    }
}

impl<A, B> std::fmt::Debug for VecTraversal<A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("VecTraversal").finish()
    }
}

impl<A: Clone, B> PTraversal<Vec<A>, Vec<B>, A, B> for VecTraversal<A, B> {
    fn get_all(&self, source: &Vec<A>) -> Vec<A> {
        source.clone()
    }

    fn modify_all<F>(&self, source: Vec<A>, function: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        source.into_iter().map(function).collect()
    }
}

/// A traversal over the value of an `Option`, if any.
pub struct OptionTraversal<A, B = A> {
    _marker: PhantomData<fn(A) -> B>,
}

impl<A> OptionTraversal<A> {
    /// Creates a monomorphic `Option` traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A, B> OptionTraversal<A, B> {
    /// Creates an `Option` traversal whose writes change the value type.
    #[must_use]
    pub const fn polymorphic() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for OptionTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Clone for OptionTraversal<A, B> {
    fn clone(&self) -> Self {
        Self::polymorphic()
    }
}

impl<A, B> std::fmt::Debug for OptionTraversal<A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("OptionTraversal").finish()
    }
}

impl<A: Clone, B> PTraversal<Option<A>, Option<B>, A, B> for OptionTraversal<A, B> {
    fn get_all(&self, source: &Option<A>) -> Vec<A> {
        source.iter().cloned().collect()
    }

    fn modify_all<F>(&self, source: Option<A>, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        source.map(function)
    }
}

/// A traversal composed of two traversals.
pub struct ComposedTraversal<X1, X2, A, B> {
    first: X1,
    second: X2,
    _marker: PhantomData<(A, B)>,
}

impl<X1, X2, A, B> ComposedTraversal<X1, X2, A, B> {
    /// Creates a new composed traversal.
    #[must_use]
    pub const fn new(first: X1, second: X2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, X1, X2> PTraversal<S, T, U, V> for ComposedTraversal<X1, X2, A, B>
where
    X1: PTraversal<S, T, A, B>,
    X2: PTraversal<A, B, U, V>,
{
    fn get_all(&self, source: &S) -> Vec<U> {
        self.first
            .get_all(source)
            .iter()
            .flat_map(|intermediate| self.second.get_all(intermediate))
            .collect()
    }

    fn modify_all<F>(&self, source: S, mut function: F) -> T
    where
        F: FnMut(U) -> V,
    {
        self.first.modify_all(source, |intermediate| {
            self.second.modify_all(intermediate, &mut function)
        })
    }
}

impl<X1: Clone, X2: Clone, A, B> Clone for ComposedTraversal<X1, X2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<X1: std::fmt::Debug, X2: std::fmt::Debug, A, B> std::fmt::Debug
    for ComposedTraversal<X1, X2, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedTraversal")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A traversal viewed as a Setter.
#[derive(Clone, Debug)]
pub struct TraversalAsSetter<X> {
    traversal: X,
}

impl<X> TraversalAsSetter<X> {
    /// Wraps a traversal.
    #[must_use]
    pub const fn new(traversal: X) -> Self {
        Self { traversal }
    }
}

impl<S, T, A, B, X> PSetter<S, T, A, B> for TraversalAsSetter<X>
where
    X: PTraversal<S, T, A, B>,
{
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnMut(A) -> B,
    {
        self.traversal.modify_all(source, function)
    }
}

/// A traversal viewed as a Fold.
///
/// `T` and `B` are the write types the Fold does not expose.
pub struct TraversalAsFold<X, T, B> {
    traversal: X,
    _marker: PhantomData<fn(B) -> T>,
}

impl<X, T, B> TraversalAsFold<X, T, B> {
    /// Wraps a traversal.
    #[must_use]
    pub const fn new(traversal: X) -> Self {
        Self {
            traversal,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, X> Fold<S, A> for TraversalAsFold<X, T, B>
where
    X: PTraversal<S, T, A, B>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        self.traversal.get_all(source)
    }
}

impl<X: Clone, T, B> Clone for TraversalAsFold<X, T, B> {
    fn clone(&self) -> Self {
        Self::new(self.traversal.clone())
    }
}

impl<X: std::fmt::Debug, T, B> std::fmt::Debug for TraversalAsFold<X, T, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TraversalAsFold")
            .field("traversal", &self.traversal)
            .finish()
    }
}
