//! Law witnesses for scopes and error-reporting optics.
//!
//! Each law method returns an [`IsEq`] pairing the two sides of an equation,
//! so any property-testing harness can check a user-defined accessor:
//!
//! ```
//! use scopic::optics::{scope, ScopeLaws};
//!
//! let present = scope(|slot: &Option<i32>| *slot, |_, n: i32| Some(n));
//!
//! for source in [None, Some(0), Some(7)] {
//!     assert!(present.get_put_law(source).holds());
//!     assert!(present.put_get_law(source, 4).holds());
//!     assert!(present.put_put_law(source, 1, 2).holds());
//! }
//! ```
//!
//! A write that the read then rejects breaks put-get, and the witness reports it.

use super::eprism::EPrism;
use super::escope::EScope;
use super::scope::Scope;
use crate::typeclass::Identity;

/// The two sides of a law.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsEq<A> {
    /// The left-hand side.
    pub lhs: A,
    /// The right-hand side.
    pub rhs: A,
}

impl<A> IsEq<A> {
    /// Pairs the two sides of a law.
    #[must_use]
    pub const fn new(lhs: A, rhs: A) -> Self {
        Self { lhs, rhs }
    }
}

impl<A: PartialEq> IsEq<A> {
    /// Returns `true` if both sides are equal.
    #[must_use]
    pub fn holds(&self) -> bool {
        self.lhs == self.rhs
    }
}

/// Laws every monomorphic [`Scope`] satisfies.
pub trait ScopeLaws<S, A>: Scope<S, A> {
    /// `get_option(put(s, b)) == Some(b)`
    fn put_get_law(&self, source: S, value: A) -> IsEq<Option<A>>
    where
        A: Clone,
    {
        IsEq::new(
            self.get_option(self.put(source, value.clone())),
            Some(value),
        )
    }

    /// Reading then writing back what was read (or keeping the fallback)
    /// leaves the source unchanged.
    fn get_put_law(&self, source: S) -> IsEq<S>
    where
        S: Clone,
    {
        let restored = self
            .get_or_modify(source.clone())
            .fold(|fallback| fallback, |value| self.put(source.clone(), value));
        IsEq::new(restored, source)
    }

    /// `put(put(s, a), b) == put(s, b)`
    fn put_put_law(&self, source: S, first: A, second: A) -> IsEq<S>
    where
        S: Clone,
        A: Clone,
    {
        IsEq::new(
            self.put(self.put(source.clone(), first), second.clone()),
            self.put(source, second),
        )
    }

    /// `get_or_modify` and `get_option` agree.
    fn get_option_law(&self, source: S) -> IsEq<Option<A>>
    where
        S: Clone,
    {
        IsEq::new(
            self.get_or_modify(source.clone()).right(),
            self.get_option(source),
        )
    }

    /// Modifying with the identity function changes nothing.
    fn modify_identity_law(&self, source: S) -> IsEq<S>
    where
        S: Clone,
    {
        IsEq::new(self.modify(source.clone(), |value| value), source)
    }

    /// `modify_option` is `modify` on matching sources and `None` otherwise.
    fn modify_option_law<F>(&self, source: S, function: F) -> IsEq<Option<S>>
    where
        S: Clone,
        F: Fn(A) -> A,
    {
        let expected = if self.is_matching(&source) {
            Some(self.modify(source.clone(), &function))
        } else {
            None
        };
        IsEq::new(self.modify_option(source, &function), expected)
    }

    /// `modify_f` in the identity functor equals `modify`.
    fn modify_f_identity_law<F>(&self, source: S, function: F) -> IsEq<S>
    where
        S: Clone,
        F: Fn(A) -> A,
    {
        let Identity(modified) = self.modify_f(source.clone(), |value| Identity(function(value)));
        IsEq::new(modified, self.modify(source, &function))
    }
}

impl<S, A, X> ScopeLaws<S, A> for X where X: Scope<S, A> {}

/// Laws every monomorphic [`EPrism`] satisfies.
pub trait EPrismLaws<E, S, A>: EPrism<E, S, A> {
    /// `get_option(reverse_get(a)) == Some(a)`
    fn reverse_get_law(&self, value: A) -> IsEq<Option<A>>
    where
        A: Clone,
    {
        IsEq::new(self.get_option(self.reverse_get(value.clone())), Some(value))
    }

    /// A match rebuilds the source and a miss hands it back unchanged.
    fn get_reverse_law(&self, source: S) -> IsEq<S>
    where
        S: Clone,
    {
        let restored = self
            .get_or_modify(source.clone())
            .fold(|fallback| fallback, |value| self.reverse_get(value));
        IsEq::new(restored, source)
    }

    /// The diagnostic is reported exactly when the match fails.
    fn error_consistency_law(&self, source: S) -> IsEq<Option<A>>
    where
        S: Clone,
    {
        IsEq::new(
            self.get_or_error(source.clone()).ok(),
            self.get_option(source),
        )
    }
}

impl<E, S, A, X> EPrismLaws<E, S, A> for X where X: EPrism<E, S, A> {}

/// Laws every monomorphic [`EScope`] satisfies.
pub trait EScopeLaws<E, S, A>: EScope<E, S, A> {
    /// `get_option(put(s, b)) == Some(b)`
    fn put_get_law(&self, source: S, value: A) -> IsEq<Option<A>>
    where
        A: Clone,
    {
        IsEq::new(
            self.get_option(self.put(source, value.clone())),
            Some(value),
        )
    }

    /// Reading then writing back what was read (or keeping the fallback)
    /// leaves the source unchanged.
    fn get_put_law(&self, source: S) -> IsEq<S>
    where
        S: Clone,
    {
        let restored = self
            .get_or_modify(source.clone())
            .fold(|fallback| fallback, |value| self.put(source.clone(), value));
        IsEq::new(restored, source)
    }

    /// `put(put(s, a), b) == put(s, b)`
    fn put_put_law(&self, source: S, first: A, second: A) -> IsEq<S>
    where
        S: Clone,
        A: Clone,
    {
        IsEq::new(
            self.put(self.put(source.clone(), first), second.clone()),
            self.put(source, second),
        )
    }

    /// The diagnostic is reported exactly when the read fails.
    fn error_consistency_law(&self, source: S) -> IsEq<Option<A>>
    where
        S: Clone,
    {
        IsEq::new(
            self.get_or_error(source.clone()).ok(),
            self.get_option(source),
        )
    }
}

impl<E, S, A, X> EScopeLaws<E, S, A> for X where X: EScope<E, S, A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use crate::optics::{either_left_prism, escope, eprism, scope_identity, PScope};
    use rstest::rstest;

    #[rstest]
    fn test_is_eq_holds() {
        assert!(IsEq::new(1, 1).holds());
        assert!(!IsEq::new(1, 2).holds());
    }

    #[rstest]
    #[case(Either::Left("a".to_string()))]
    #[case(Either::Right(3))]
    fn test_scope_laws_for_prism_composition(#[case] source: Either<String, i32>) {
        let label = scope_identity::<Either<String, i32>>().compose_prism(either_left_prism());
        assert!(label.get_put_law(source.clone()).holds());
        assert!(label.put_get_law(source.clone(), "b".to_string()).holds());
        assert!(label.put_put_law(source.clone(), "b".to_string(), "c".to_string()).holds());
        assert!(label.get_option_law(source.clone()).holds());
        assert!(label.modify_identity_law(source.clone()).holds());
        assert!(label.modify_option_law(source.clone(), |text: String| text + "!").holds());
        assert!(label.modify_f_identity_law(source, |text: String| text + "?").holds());
    }

    #[rstest]
    fn test_put_get_fails_for_rejected_value() {
        let positive = crate::optics::scope(|n: &i32| (*n > 0).then_some(*n), |_, n: i32| n);
        assert!(!positive.put_get_law(1, -1).holds());
    }

    #[rstest]
    #[case(4)]
    #[case(5)]
    fn test_eprism_laws(#[case] source: i32) {
        let even = eprism(
            |n: &i32| if n % 2 == 0 { Ok(*n) } else { Err("odd") },
            |n: i32| n,
        );
        assert!(even.get_reverse_law(source).holds());
        assert!(even.reverse_get_law(8).holds());
        assert!(even.error_consistency_law(source).holds());
    }

    #[rstest]
    fn test_escope_laws() {
        let short = escope(
            |text: &String| {
                if text.len() < 4 {
                    Ok(text.clone())
                } else {
                    Err(text.len())
                }
            },
            |_, text: String| text,
        );
        for source in ["ab".to_string(), "abcdef".to_string()] {
            assert!(short.get_put_law(source.clone()).holds());
            assert!(short.put_get_law(source.clone(), "xy".to_string()).holds());
            assert!(short.put_put_law(source.clone(), "x".to_string(), "y".to_string()).holds());
            assert!(short.error_consistency_law(source).holds());
        }
    }
}
