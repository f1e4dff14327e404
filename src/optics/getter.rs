//! Getter optics: a read-only view of exactly one element.

use std::marker::PhantomData;

use super::fold::Fold;

/// A read-only optic focusing on exactly one element.
pub trait Getter<S, A> {
    /// Reads the focused element.
    fn get(&self, source: &S) -> A;

    /// Views this getter as a Fold of one element.
    fn to_fold(self) -> GetterAsFold<Self>
    where
        Self: Sized,
    {
        GetterAsFold::new(self)
    }

    /// Composes this getter with another getter.
    ///
    /// # Example
    ///
    /// ```
    /// use scopic::optics::{FunctionGetter, Getter};
    ///
    /// let length = FunctionGetter::new(|s: &String| s.len());
    /// let is_long = length.compose_getter(FunctionGetter::new(|n: &usize| *n > 3));
    /// assert!(is_long.get(&"hello".to_string()));
    /// ```
    fn compose_getter<B, G>(self, other: G) -> ComposedGetter<Self, G, A>
    where
        Self: Sized,
        G: Getter<A, B>,
    {
        ComposedGetter::new(self, other)
    }
}

/// A getter implemented using a function.
pub struct FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    get_function: G,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G> FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    /// Creates a new `FunctionGetter`.
    #[must_use]
    pub const fn new(get_function: G) -> Self {
        Self {
            get_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G> Getter<S, A> for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    fn get(&self, source: &S) -> A {
        (self.get_function)(source)
    }
}

impl<S, A, G> Clone for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.get_function.clone())
    }
}

impl<S, A, G> std::fmt::Debug for FunctionGetter<S, A, G>
where
    G: Fn(&S) -> A,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionGetter")
            .finish_non_exhaustive()
    }
}

/// A getter viewed as a Fold of exactly one element.
#[derive(Clone, Debug)]
pub struct GetterAsFold<G> {
    getter: G,
}

impl<G> GetterAsFold<G> {
    /// Wraps a getter.
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self { getter }
    }
}

impl<S, A, G> Fold<S, A> for GetterAsFold<G>
where
    G: Getter<S, A>,
{
    fn get_all(&self, source: &S) -> Vec<A> {
        vec![self.getter.get(source)]
    }
}

/// A getter composed of two getters.
pub struct ComposedGetter<G1, G2, A> {
    first: G1,
    second: G2,
    _marker: PhantomData<A>,
}

impl<G1, G2, A> ComposedGetter<G1, G2, A> {
    /// Creates a new composed getter.
    #[must_use]
    pub const fn new(first: G1, second: G2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, G1, G2> Getter<S, B> for ComposedGetter<G1, G2, A>
where
    G1: Getter<S, A>,
    G2: Getter<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }
}

impl<G1: Clone, G2: Clone, A> Clone for ComposedGetter<G1, G2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<G1: std::fmt::Debug, G2: std::fmt::Debug, A> std::fmt::Debug for ComposedGetter<G1, G2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedGetter")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getter_as_fold_has_one_element() {
        let fold = FunctionGetter::new(|pair: &(i32, char)| pair.1).to_fold();
        assert_eq!(fold.get_all(&(1, 'a')), vec!['a']);
        assert_eq!(fold.length(&(1, 'a')), 1);
    }
}
