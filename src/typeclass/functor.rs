//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use scopic::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let values = vec![1, 2, 3];
//! assert_eq!(values.fmap(|n| n * 10), vec![10, 20, 30]);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their contents.
///
/// The mapping function is `FnMut` so that multi-element containers such as
/// `Vec` apply it to every element. Optics rely on this: an effectful update
/// in the list functor re-applies the write once per produced value.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces the value(s) inside the functor with a constant.
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(|_| value.clone())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(function(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_fmap_doubles(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|value| value * 2), expected);
    }

    #[rstest]
    fn vec_fmap_visits_every_element() {
        let mut visited = 0;
        let result = vec![1, 2, 3].fmap(|value| {
            visited += 1;
            value + 1
        });
        assert_eq!(result, vec![2, 3, 4]);
        assert_eq!(visited, 3);
    }

    #[rstest]
    fn result_fmap_keeps_error() {
        let failed: Result<i32, String> = Err("boom".to_string());
        assert_eq!(failed.fmap(|value| value + 1), Err("boom".to_string()));
    }

    #[rstest]
    fn identity_replace() {
        assert_eq!(Identity(1).replace('x'), Identity('x'));
    }
}
