//! Applicative type class - lifting pure values into a context.
//!
//! Only `pure` is required here: together with [`Functor::fmap`] it is the
//! full capability an effectful optic update needs. A failed read is lifted
//! with `pure`, a successful one is mapped with `fmap`.
//!
//! # Laws
//!
//! ```text
//! pure(x).fmap(f) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use scopic::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let y: Vec<&str> = <Vec<()>>::pure("one");
//! assert_eq!(y, vec!["one"]);
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for types that support lifting values into their context.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }
}

impl<T> Applicative for Vec<T> {
    #[inline]
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn option_pure_then_fmap_is_pure_of_application(value in any::<i32>()) {
            let lifted: Option<i32> = <Option<()>>::pure(value);
            prop_assert_eq!(
                lifted.fmap(|x| x.wrapping_mul(3)),
                <Option<()>>::pure(value.wrapping_mul(3))
            );
        }

        #[test]
        fn vec_pure_is_singleton(value in any::<u8>()) {
            let lifted: Vec<u8> = <Vec<()>>::pure(value);
            prop_assert_eq!(lifted, vec![value]);
        }
    }

    #[test]
    fn result_and_identity_pure() {
        let result: Result<char, String> = <Result<(), String>>::pure('a');
        assert_eq!(result, Ok('a'));
        assert_eq!(<Identity<()>>::pure(5), Identity(5));
    }
}
