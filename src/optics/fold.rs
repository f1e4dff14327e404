//! Fold optics for read-only access to multiple elements.
//!
//! A Fold focuses on zero or more elements and cannot write. Every Traversal,
//! Optional and Scope can be demoted to a Fold.
//!
//! # Examples
//!
//! ```
//! use scopic::optics::{Fold, FunctionFold};
//!
//! let evens = FunctionFold::new(|values: &Vec<i32>| {
//!     values.iter().copied().filter(|n| n % 2 == 0).collect()
//! });
//!
//! let data = vec![1, 2, 3, 4, 5];
//! assert_eq!(evens.get_all(&data), vec![2, 4]);
//! assert_eq!(evens.fold(&data, 0, |sum, n| sum + n), 6);
//! ```

use std::marker::PhantomData;

use super::getter::{Getter, GetterAsFold};

/// A read-only optic focusing on zero or more elements.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focused element type
pub trait Fold<S, A> {
    /// Collects every focused element.
    fn get_all(&self, source: &S) -> Vec<A>;

    /// Folds over every focused element, left to right.
    fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.get_all(source).into_iter().fold(initial, function)
    }

    /// Counts the focused elements.
    fn length(&self, source: &S) -> usize {
        self.get_all(source).len()
    }

    /// Returns `true` if every focused element satisfies the predicate.
    fn for_all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(A) -> bool,
    {
        self.get_all(source).into_iter().all(predicate)
    }

    /// Returns `true` if any focused element satisfies the predicate.
    fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(A) -> bool,
    {
        self.get_all(source).into_iter().any(predicate)
    }

    /// Returns the first focused element.
    fn head_option(&self, source: &S) -> Option<A> {
        self.get_all(source).into_iter().next()
    }

    /// Returns the last focused element.
    fn last_option(&self, source: &S) -> Option<A> {
        self.get_all(source).pop()
    }

    /// Returns `true` if nothing is focused.
    fn is_empty(&self, source: &S) -> bool {
        self.get_all(source).is_empty()
    }

    /// Composes this fold with another fold.
    fn compose_fold<B, F2>(self, other: F2) -> ComposedFold<Self, F2, A>
    where
        Self: Sized,
        F2: Fold<A, B>,
    {
        ComposedFold::new(self, other)
    }

    /// Composes this fold with a getter.
    fn compose_getter<B, G>(self, getter: G) -> ComposedFold<Self, GetterAsFold<G>, A>
    where
        Self: Sized,
        G: Getter<A, B>,
    {
        ComposedFold::new(self, GetterAsFold::new(getter))
    }
}

/// A fold implemented using a function that collects the focused elements.
pub struct FunctionFold<S, A, G>
where
    G: Fn(&S) -> Vec<A>,
{
    get_all_function: G,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G> FunctionFold<S, A, G>
where
    G: Fn(&S) -> Vec<A>,
{
    /// Creates a new `FunctionFold`.
    #[must_use]
    pub const fn new(get_all_function: G) -> Self {
        Self {
            get_all_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> Fold<S, A> for FunctionFold<S, A, G>
where
    G: Fn(&S) -> Vec<A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        (self.get_all_function)(source)
    }
}

impl<S, A, G> Clone for FunctionFold<S, A, G>
where
    G: Fn(&S) -> Vec<A> + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.get_all_function.clone())
    }
}

impl<S, A, G> std::fmt::Debug for FunctionFold<S, A, G>
where
    G: Fn(&S) -> Vec<A>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionFold").finish_non_exhaustive()
    }
}

/// A fold composed of two folds.
///
/// `A` is the intermediate element type.
pub struct ComposedFold<F1, F2, A> {
    first: F1,
    second: F2,
    _marker: PhantomData<A>,
}

impl<F1, F2, A> ComposedFold<F1, F2, A> {
    /// Creates a new composed fold.
    #[must_use]
    pub const fn new(first: F1, second: F2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, F1, F2> Fold<S, B> for ComposedFold<F1, F2, A>
where
    F1: Fold<S, A>,
    F2: Fold<A, B>,
{
    fn get_all(&self, source: &S) -> Vec<B> {
        self.first
            .get_all(source)
            .iter()
            .flat_map(|intermediate| self.second.get_all(intermediate))
            .collect()
    }
}

impl<F1: Clone, F2: Clone, A> Clone for ComposedFold<F1, F2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<F1: std::fmt::Debug, F2: std::fmt::Debug, A> std::fmt::Debug for ComposedFold<F1, F2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedFold")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::FunctionGetter;
    use rstest::rstest;

    fn vec_fold() -> impl Fold<Vec<i32>, i32> + Clone {
        FunctionFold::new(|values: &Vec<i32>| values.clone())
    }

    #[rstest]
    #[case(vec![], 0, true, false)]
    #[case(vec![2, 4], 2, true, false)]
    #[case(vec![2, 3], 2, false, true)]
    fn test_fold_queries(
        #[case] data: Vec<i32>,
        #[case] length: usize,
        #[case] all_even: bool,
        #[case] any_odd: bool,
    ) {
        let fold = vec_fold();
        assert_eq!(fold.length(&data), length);
        assert_eq!(fold.for_all(&data, |n| n % 2 == 0), all_even);
        assert_eq!(fold.exists(&data, |n| n % 2 != 0), any_odd);
        assert_eq!(fold.is_empty(&data), data.is_empty());
    }

    #[rstest]
    fn test_head_and_last_option() {
        let fold = vec_fold();
        assert_eq!(fold.head_option(&vec![1, 2, 3]), Some(1));
        assert_eq!(fold.last_option(&vec![1, 2, 3]), Some(3));
        assert_eq!(fold.head_option(&vec![]), None);
    }

    #[rstest]
    fn test_compose_fold_and_getter() {
        let nested = FunctionFold::new(|grid: &Vec<Vec<i32>>| grid.clone()).compose_fold(vec_fold());
        assert_eq!(nested.get_all(&vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);

        let doubled = vec_fold().compose_getter(FunctionGetter::new(|n: &i32| n * 2));
        assert_eq!(doubled.get_all(&vec![1, 2]), vec![2, 4]);
    }
}
