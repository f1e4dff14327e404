//! Error-reporting prisms.
//!
//! An `EPPrism` is a Prism whose failed match carries a diagnostic `E` next to
//! the fallback source. Erasing the diagnostic gives back an ordinary prism,
//! and every prism can be given a diagnostic with
//! [`PPrism::with_error`](super::PPrism::with_error).
//!
//! # Laws
//!
//! 1. **Partial round trip**: if `get_or_modify_with_error(s)` is
//!    `Left((e, t))` then `t == s`; if it is `Right(a)` then
//!    `reverse_get(a) == s`.
//! 2. **Round trip**: `get_or_modify_with_error(reverse_get(a)) == Right(a)`.
//!
//! # Examples
//!
//! ```
//! use scopic::optics::{eprism, EPPrism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Value {
//!     IntValue(i64),
//!     StringValue(String),
//! }
//!
//! let int_value = eprism(
//!     |value: &Value| match value {
//!         Value::IntValue(n) => Ok(*n),
//!         Value::StringValue(_) => Err("Expected IntValue, found StringValue".to_string()),
//!     },
//!     Value::IntValue,
//! );
//!
//! assert_eq!(int_value.get_or_error(Value::IntValue(3)), Ok(3));
//! assert_eq!(
//!     int_value.get_or_error(Value::StringValue("x".to_string())),
//!     Err("Expected IntValue, found StringValue".to_string())
//! );
//! ```

use std::marker::PhantomData;

use super::escope::EPScope;
use super::optional::OptionalAsTraversal;
use super::prism::{PPrism, PrismAsOptional};
use super::scope::PScope;
use super::traversal::{TraversalAsFold, TraversalAsSetter};
use crate::control::Either;
use crate::typeclass::Applicative;

/// A polymorphic prism reporting a diagnostic `E` on mismatch.
///
/// # Type Parameters
///
/// - `E`: The diagnostic type
/// - `S`: The source type
/// - `T`: The source type after a write
/// - `A`: The payload of the focused variant
/// - `B`: The payload written back
pub trait EPPrism<E, S, T, A, B> {
    /// Matches the variant, or reports why not together with the fallback.
    fn get_or_modify_with_error(&self, source: S) -> Either<(E, T), A>;

    /// Builds the source from a payload. Always succeeds.
    fn reverse_get(&self, value: B) -> T;

    /// Matches the variant, discarding the diagnostic on mismatch.
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.get_or_modify_with_error(source)
            .map_left(|(_, fallback)| fallback)
    }

    /// Returns the payload or the diagnostic.
    ///
    /// # Errors
    ///
    /// Returns `Err(E)` when the source is not the expected variant.
    fn get_or_error(&self, source: S) -> Result<A, E> {
        self.get_or_modify_with_error(source)
            .map_left(|(error, _)| error)
            .into()
    }

    /// Returns the payload if the variant matches.
    fn get_option(&self, source: S) -> Option<A> {
        self.get_or_modify_with_error(source).right()
    }

    /// Modifies the payload if the variant matches, otherwise returns the
    /// fallback.
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        match self.get_or_modify_with_error(source) {
            Either::Left((_, fallback)) => fallback,
            Either::Right(value) => self.reverse_get(function(value)),
        }
    }

    /// Modifies the payload with an effectful function.
    fn modify_f<FB, F>(&self, source: S, function: F) -> FB::WithType<T>
    where
        F: FnOnce(A) -> FB,
        FB: Applicative<Inner = B>,
    {
        match self.get_or_modify_with_error(source) {
            Either::Left((_, fallback)) => FB::pure(fallback),
            Either::Right(value) => {
                function(value).fmap(|new_value| self.reverse_get(new_value))
            }
        }
    }

    /// Modifies the payload, or returns the diagnostic.
    ///
    /// # Errors
    ///
    /// Returns `Err(E)` when the source is not the expected variant.
    fn modify_or_error<F>(&self, source: S, function: F) -> Result<T, E>
    where
        F: FnOnce(A) -> B,
    {
        self.get_or_error(source)
            .map(|value| self.reverse_get(function(value)))
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

    /// Replaces the payload, or returns the diagnostic.
    ///
    /// # Errors
    ///
    /// Returns `Err(E)` when the source is not the expected variant.
    fn set_or_error(&self, source: S, value: B) -> Result<T, E> {
        self.modify_or_error(source, |_| value)
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
        self.get_or_modify_with_error(source.clone()).is_right()
    }

    /// Transforms the diagnostic, leaving matching untouched.
    fn map_error<F, M>(self, function: M) -> MapErrorEPrism<Self, M, E>
    where
        Self: Sized,
        M: Fn(E) -> F,
    {
        MapErrorEPrism::new(self, function)
    }

    /// Composes with another error-reporting prism.
    ///
    /// The diagnostic says which side missed: `Left(e)` for this prism,
    /// `Right(f)` for the inner one.
    fn compose_eprism<F, U, V, P>(self, other: P) -> EPrismComposition<Self, P, A, B>
    where
        Self: Sized,
        P: EPPrism<F, A, B, U, V>,
    {
        EPrismComposition::new(self, other)
    }

    /// Composes with another error-reporting prism, keeping only this
    /// prism's diagnostic.
    fn compose_eprism_left<F, U, V, P>(
        self,
        other: P,
    ) -> MapErrorEPrism<EPrismComposition<Self, P, A, B>, fn(Either<E, F>) -> Option<E>, Either<E, F>>
    where
        Self: Sized,
        P: EPPrism<F, A, B, U, V>,
    {
        MapErrorEPrism::new(
            EPrismComposition::new(self, other),
            Either::left as fn(Either<E, F>) -> Option<E>,
        )
    }

    /// Composes with another error-reporting prism, keeping only the inner
    /// prism's diagnostic.
    fn compose_eprism_right<F, U, V, P>(
        self,
        other: P,
    ) -> MapErrorEPrism<EPrismComposition<Self, P, A, B>, fn(Either<E, F>) -> Option<F>, Either<E, F>>
    where
        Self: Sized,
        P: EPPrism<F, A, B, U, V>,
    {
        MapErrorEPrism::new(
            EPrismComposition::new(self, other),
            Either::right as fn(Either<E, F>) -> Option<F>,
        )
    }

    /// Drops the diagnostic, giving a plain prism.
    fn to_prism(self) -> EPrismAsPrism<Self, E>
    where
        Self: Sized,
    {
        EPrismAsPrism::new(self)
    }

    /// Views this prism as an Optional.
    fn to_optional(self) -> EPrismAsOptional<Self, E>
    where
        Self: Sized,
    {
        PrismAsOptional::new(EPrismAsPrism::new(self))
    }

    /// Views this prism as a Traversal of zero or one element.
    fn to_traversal(self) -> EPrismAsTraversal<Self, E>
    where
        Self: Sized,
    {
        OptionalAsTraversal::new(self.to_optional())
    }

    /// Views this prism as a Setter.
    fn to_setter(self) -> EPrismAsSetter<Self, E>
    where
        Self: Sized,
    {
        TraversalAsSetter::new(self.to_traversal())
    }

    /// Views this prism as a Fold.
    fn to_fold(self) -> EPrismAsFold<Self, E, T, B>
    where
        Self: Sized,
    {
        TraversalAsFold::new(self.to_traversal())
    }

    /// Promotes this prism to a Scope, as the identity scope composed with it.
    ///
    /// The resulting `put` ignores the source and builds the variant.
    fn to_scope(self) -> EPrismAsScope<Self, E>
    where
        Self: Sized,
    {
        EPrismAsScope::new(self)
    }

    /// Promotes this prism to an error-reporting Scope.
    fn to_escope(self) -> EPrismAsEScope<Self>
    where
        Self: Sized,
    {
        EPrismAsEScope::new(self)
    }

    /// Lifts this prism to the first component of a pair.
    fn first(self) -> FirstEPrism<Self>
    where
        Self: Sized,
    {
        FirstEPrism::new(self)
    }

    /// Lifts this prism to the second component of a pair.
    fn second(self) -> SecondEPrism<Self>
    where
        Self: Sized,
    {
        SecondEPrism::new(self)
    }

    /// Lifts this prism to the left branch of an `Either`. A right branch
    /// always matches and passes through.
    fn left(self) -> LeftEPrism<Self>
    where
        Self: Sized,
    {
        LeftEPrism::new(self)
    }

    /// Lifts this prism to the right branch of an `Either`. A left branch
    /// always matches and passes through.
    fn right(self) -> RightEPrism<Self>
    where
        Self: Sized,
    {
        RightEPrism::new(self)
    }
}

/// A monomorphic error-reporting prism.
pub trait EPrism<E, S, A>: EPPrism<E, S, S, A, A> {}

impl<E, S, A, P> EPrism<E, S, A> for P where P: EPPrism<E, S, S, A, A> {}

/// An error-reporting prism viewed as an Optional.
pub type EPrismAsOptional<X, E> = PrismAsOptional<EPrismAsPrism<X, E>>;

/// An error-reporting prism viewed as a Traversal.
pub type EPrismAsTraversal<X, E> = OptionalAsTraversal<EPrismAsOptional<X, E>>;

/// An error-reporting prism viewed as a Setter.
pub type EPrismAsSetter<X, E> = TraversalAsSetter<EPrismAsTraversal<X, E>>;

/// An error-reporting prism viewed as a Fold.
pub type EPrismAsFold<X, E, T, B> = TraversalAsFold<EPrismAsTraversal<X, E>, T, B>;

/// An error-reporting prism built from a matching function and a constructor.
pub struct FunctionEPrism<E, S, T, A, B, G, R>
where
    G: Fn(S) -> Either<(E, T), A>,
    R: Fn(B) -> T,
{
    get_or_modify_with_error_function: G,
    reverse_get_function: R,
    _marker: PhantomData<(E, S, T, A, B)>,
}

impl<E, S, T, A, B, G, R> FunctionEPrism<E, S, T, A, B, G, R>
where
    G: Fn(S) -> Either<(E, T), A>,
    R: Fn(B) -> T,
{
    /// Creates a new `FunctionEPrism`.
    #[must_use]
    pub const fn new(get_or_modify_with_error_function: G, reverse_get_function: R) -> Self {
        Self {
            get_or_modify_with_error_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }
}

impl<E, S, T, A, B, G, R> EPPrism<E, S, T, A, B> for FunctionEPrism<E, S, T, A, B, G, R>
where
    G: Fn(S) -> Either<(E, T), A>,
    R: Fn(B) -> T,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(E, T), A> {
        (self.get_or_modify_with_error_function)(source)
    }

    fn reverse_get(&self, value: B) -> T {
        (self.reverse_get_function)(value)
    }
}

impl<E, S, T, A, B, G, R> Clone for FunctionEPrism<E, S, T, A, B, G, R>
where
    G: Fn(S) -> Either<(E, T), A> + Clone,
    R: Fn(B) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self::new(
            self.get_or_modify_with_error_function.clone(),
            self.reverse_get_function.clone(),
        )
    }
}

impl<E, S, T, A, B, G, R> std::fmt::Debug for FunctionEPrism<E, S, T, A, B, G, R>
where
    G: Fn(S) -> Either<(E, T), A>,
    R: Fn(B) -> T,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionEPrism").finish_non_exhaustive()
    }
}

/// Creates a monomorphic error-reporting prism from a fallible read and a
/// constructor.
pub fn eprism<E, S, A, G, R>(
    get_or_error: G,
    reverse_get: R,
) -> FunctionEPrism<E, S, S, A, A, impl Fn(S) -> Either<(E, S), A> + Clone, R>
where
    G: Fn(&S) -> Result<A, E> + Clone,
    R: Fn(A) -> S,
{
    FunctionEPrism::new(
        move |source: S| {
            get_or_error(&source).map_or_else(|error| Either::Left((error, source)), Either::Right)
        },
        reverse_get,
    )
}

/// A plain prism viewed as an error-reporting prism with a unit diagnostic.
#[derive(Clone, Debug)]
pub struct PrismAsEPrism<P> {
    prism: P,
}

impl<P> PrismAsEPrism<P> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self { prism }
    }
}

impl<S, T, A, B, P> EPPrism<(), S, T, A, B> for PrismAsEPrism<P>
where
    P: PPrism<S, T, A, B>,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<((), T), A> {
        self.prism
            .get_or_modify(source)
            .map_left(|fallback| ((), fallback))
    }

    fn reverse_get(&self, value: B) -> T {
        self.prism.reverse_get(value)
    }
}

/// A plain prism with a diagnostic computed from the fallback.
#[derive(Clone)]
pub struct PrismWithError<P, M> {
    prism: P,
    diagnose: M,
}

impl<P, M> PrismWithError<P, M> {
    /// Pairs a prism with a diagnostic function.
    #[must_use]
    pub const fn new(prism: P, diagnose: M) -> Self {
        Self { prism, diagnose }
    }
}

impl<E, S, T, A, B, P, M> EPPrism<E, S, T, A, B> for PrismWithError<P, M>
where
    P: PPrism<S, T, A, B>,
    M: Fn(&T) -> E,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(E, T), A> {
        self.prism
            .get_or_modify(source)
            .map_left(|fallback| ((self.diagnose)(&fallback), fallback))
    }

    fn reverse_get(&self, value: B) -> T {
        self.prism.reverse_get(value)
    }
}

impl<P: std::fmt::Debug, M> std::fmt::Debug for PrismWithError<P, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismWithError")
            .field("prism", &self.prism)
            .finish_non_exhaustive()
    }
}

/// An error-reporting prism whose diagnostic has been transformed.
///
/// `E` is the original diagnostic type.
pub struct MapErrorEPrism<X, M, E> {
    eprism: X,
    function: M,
    _marker: PhantomData<fn(E)>,
}

impl<X, M, E> MapErrorEPrism<X, M, E> {
    /// Wraps a prism with a diagnostic transformation.
    #[must_use]
    pub const fn new(eprism: X, function: M) -> Self {
        Self {
            eprism,
            function,
            _marker: PhantomData,
        }
    }
}

impl<E, F, S, T, A, B, X, M> EPPrism<F, S, T, A, B> for MapErrorEPrism<X, M, E>
where
    X: EPPrism<E, S, T, A, B>,
    M: Fn(E) -> F,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(F, T), A> {
        self.eprism
            .get_or_modify_with_error(source)
            .map_left(|(error, fallback)| ((self.function)(error), fallback))
    }

    fn reverse_get(&self, value: B) -> T {
        self.eprism.reverse_get(value)
    }
}

impl<X: Clone, M: Clone, E> Clone for MapErrorEPrism<X, M, E> {
    fn clone(&self) -> Self {
        Self::new(self.eprism.clone(), self.function.clone())
    }
}

impl<X: std::fmt::Debug, M, E> std::fmt::Debug for MapErrorEPrism<X, M, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MapErrorEPrism")
            .field("eprism", &self.eprism)
            .finish_non_exhaustive()
    }
}

/// Two error-reporting prisms composed; the diagnostic is `Either<E, F>`.
pub struct EPrismComposition<P1, P2, A, B> {
    first: P1,
    second: P2,
    _marker: PhantomData<(A, B)>,
}

impl<P1, P2, A, B> EPrismComposition<P1, P2, A, B> {
    /// Creates a new composition.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<E, F, S, T, A, B, U, V, P1, P2> EPPrism<Either<E, F>, S, T, U, V>
    for EPrismComposition<P1, P2, A, B>
where
    P1: EPPrism<E, S, T, A, B>,
    P2: EPPrism<F, A, B, U, V>,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(Either<E, F>, T), U> {
        match self.first.get_or_modify_with_error(source) {
            Either::Left((error, fallback)) => Either::Left((Either::Left(error), fallback)),
            Either::Right(intermediate) => self
                .second
                .get_or_modify_with_error(intermediate)
                .map_left(|(error, inner_fallback)| {
                    (Either::Right(error), self.first.reverse_get(inner_fallback))
                }),
        }
    }

    fn reverse_get(&self, value: V) -> T {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<P1: Clone, P2: Clone, A, B> Clone for EPrismComposition<P1, P2, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A, B> std::fmt::Debug
    for EPrismComposition<P1, P2, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("EPrismComposition")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An error-reporting prism with its diagnostic erased.
pub struct EPrismAsPrism<X, E> {
    eprism: X,
    _marker: PhantomData<fn() -> E>,
}

impl<X, E> EPrismAsPrism<X, E> {
    /// Wraps an error-reporting prism.
    #[must_use]
    pub const fn new(eprism: X) -> Self {
        Self {
            eprism,
            _marker: PhantomData,
        }
    }
}

impl<E, S, T, A, B, X> PPrism<S, T, A, B> for EPrismAsPrism<X, E>
where
    X: EPPrism<E, S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.eprism.get_or_modify(source)
    }

    fn reverse_get(&self, value: B) -> T {
        self.eprism.reverse_get(value)
    }
}

impl<X: Clone, E> Clone for EPrismAsPrism<X, E> {
    fn clone(&self) -> Self {
        Self::new(self.eprism.clone())
    }
}

impl<X: std::fmt::Debug, E> std::fmt::Debug for EPrismAsPrism<X, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("EPrismAsPrism")
            .field("eprism", &self.eprism)
            .finish()
    }
}

/// An error-reporting prism promoted to a Scope.
pub struct EPrismAsScope<X, E> {
    eprism: X,
    _marker: PhantomData<fn() -> E>,
}

impl<X, E> EPrismAsScope<X, E> {
    /// Wraps an error-reporting prism.
    #[must_use]
    pub const fn new(eprism: X) -> Self {
        Self {
            eprism,
            _marker: PhantomData,
        }
    }
}

impl<E, S, T, A, B, X> PScope<S, T, A, B> for EPrismAsScope<X, E>
where
    X: EPPrism<E, S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.eprism.get_or_modify(source)
    }

    fn put(&self, _source: S, value: B) -> T {
        self.eprism.reverse_get(value)
    }
}

impl<X: Clone, E> Clone for EPrismAsScope<X, E> {
    fn clone(&self) -> Self {
        Self::new(self.eprism.clone())
    }
}

impl<X: std::fmt::Debug, E> std::fmt::Debug for EPrismAsScope<X, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("EPrismAsScope")
            .field("eprism", &self.eprism)
            .finish()
    }
}

/// An error-reporting prism promoted to an error-reporting Scope.
#[derive(Clone, Debug)]
pub struct EPrismAsEScope<X> {
    eprism: X,
}

impl<X> EPrismAsEScope<X> {
    /// Wraps an error-reporting prism.
    #[must_use]
    pub const fn new(eprism: X) -> Self {
        Self { eprism }
    }
}

impl<E, S, T, A, B, X> EPScope<E, S, T, A, B> for EPrismAsEScope<X>
where
    X: EPPrism<E, S, T, A, B>,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(E, T), A> {
        self.eprism.get_or_modify_with_error(source)
    }

    fn put(&self, _source: S, value: B) -> T {
        self.eprism.reverse_get(value)
    }
}

/// An error-reporting prism lifted to the first component of a pair.
#[derive(Clone, Debug)]
pub struct FirstEPrism<X> {
    eprism: X,
}

impl<X> FirstEPrism<X> {
    /// Wraps an error-reporting prism.
    #[must_use]
    pub const fn new(eprism: X) -> Self {
        Self { eprism }
    }
}

impl<E, S, T, A, B, C, X> EPPrism<E, (S, C), (T, C), (A, C), (B, C)> for FirstEPrism<X>
where
    X: EPPrism<E, S, T, A, B>,
{
    fn get_or_modify_with_error(&self, (source, carried): (S, C)) -> Either<(E, (T, C)), (A, C)> {
        match self.eprism.get_or_modify_with_error(source) {
            Either::Left((error, fallback)) => Either::Left((error, (fallback, carried))),
            Either::Right(value) => Either::Right((value, carried)),
        }
    }

    fn reverse_get(&self, (value, carried): (B, C)) -> (T, C) {
        (self.eprism.reverse_get(value), carried)
    }
}

/// An error-reporting prism lifted to the second component of a pair.
#[derive(Clone, Debug)]
pub struct SecondEPrism<X> {
    eprism: X,
}

impl<X> SecondEPrism<X> {
    /// Wraps an error-reporting prism.
    #[must_use]
    pub const fn new(eprism: X) -> Self {
        Self { eprism }
    }
}

impl<E, S, T, A, B, C, X> EPPrism<E, (C, S), (C, T), (C, A), (C, B)> for SecondEPrism<X>
where
    X: EPPrism<E, S, T, A, B>,
{
    fn get_or_modify_with_error(&self, (carried, source): (C, S)) -> Either<(E, (C, T)), (C, A)> {
        match self.eprism.get_or_modify_with_error(source) {
            Either::Left((error, fallback)) => Either::Left((error, (carried, fallback))),
            Either::Right(value) => Either::Right((carried, value)),
        }
    }

    fn reverse_get(&self, (carried, value): (C, B)) -> (C, T) {
        (carried, self.eprism.reverse_get(value))
    }
}

/// An error-reporting prism lifted to the left branch of an `Either`.
#[derive(Clone, Debug)]
pub struct LeftEPrism<X> {
    eprism: X,
}

impl<X> LeftEPrism<X> {
    /// Wraps an error-reporting prism.
    #[must_use]
    pub const fn new(eprism: X) -> Self {
        Self { eprism }
    }
}

impl<E, S, T, A, B, C, X> EPPrism<E, Either<S, C>, Either<T, C>, Either<A, C>, Either<B, C>>
    for LeftEPrism<X>
where
    X: EPPrism<E, S, T, A, B>,
{
    fn get_or_modify_with_error(
        &self,
        source: Either<S, C>,
    ) -> Either<(E, Either<T, C>), Either<A, C>> {
        match source {
            Either::Left(source) => match self.eprism.get_or_modify_with_error(source) {
                Either::Left((error, fallback)) => Either::Left((error, Either::Left(fallback))),
                Either::Right(value) => Either::Right(Either::Left(value)),
            },
            Either::Right(other) => Either::Right(Either::Right(other)),
        }
    }

    fn reverse_get(&self, value: Either<B, C>) -> Either<T, C> {
        value.map_left(|value| self.eprism.reverse_get(value))
    }
}

/// An error-reporting prism lifted to the right branch of an `Either`.
#[derive(Clone, Debug)]
pub struct RightEPrism<X> {
    eprism: X,
}

impl<X> RightEPrism<X> {
    /// Wraps an error-reporting prism.
    #[must_use]
    pub const fn new(eprism: X) -> Self {
        Self { eprism }
    }
}

impl<E, S, T, A, B, C, X> EPPrism<E, Either<C, S>, Either<C, T>, Either<C, A>, Either<C, B>>
    for RightEPrism<X>
where
    X: EPPrism<E, S, T, A, B>,
{
    fn get_or_modify_with_error(
        &self,
        source: Either<C, S>,
    ) -> Either<(E, Either<C, T>), Either<C, A>> {
        match source {
            Either::Left(other) => Either::Right(Either::Left(other)),
            Either::Right(source) => match self.eprism.get_or_modify_with_error(source) {
                Either::Left((error, fallback)) => Either::Left((error, Either::Right(fallback))),
                Either::Right(value) => Either::Right(Either::Right(value)),
            },
        }
    }

    fn reverse_get(&self, value: Either<C, B>) -> Either<C, T> {
        value.map_right(|value| self.eprism.reverse_get(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{FunctionPrism, POptional, PTraversal};
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    enum Token {
        Number(i64),
        Word(String),
    }

    fn number() -> impl EPrism<String, Token, i64> + Clone {
        eprism(
            |token: &Token| match token {
                Token::Number(n) => Ok(*n),
                Token::Word(word) => Err(format!("not a number: {word}")),
            },
            Token::Number,
        )
    }

    fn even() -> impl EPrism<u8, i64, i64> + Clone {
        eprism(
            |n: &i64| if n % 2 == 0 { Ok(*n) } else { Err(1) },
            |n: i64| n,
        )
    }

    #[rstest]
    fn test_get_or_modify_with_error_returns_diagnostic_and_fallback() {
        let word = Token::Word("hi".to_string());
        assert_eq!(
            number().get_or_modify_with_error(word.clone()),
            Either::Left(("not a number: hi".to_string(), word))
        );
    }

    #[rstest]
    #[case(Token::Number(2), Ok(Token::Number(3)))]
    #[case(Token::Word("a".to_string()), Err("not a number: a".to_string()))]
    fn test_modify_or_error(#[case] source: Token, #[case] expected: Result<Token, String>) {
        assert_eq!(number().modify_or_error(source, |n| n + 1), expected);
    }

    #[rstest]
    fn test_set_variants() {
        let word = Token::Word("a".to_string());
        assert_eq!(number().set(word.clone(), 1), word);
        assert_eq!(number().set_option(word.clone(), 1), None);
        assert_eq!(number().set_or_error(Token::Number(0), 1), Ok(Token::Number(1)));
    }

    #[rstest]
    fn test_map_error_preserves_matching() {
        let lengths = number().map_error(|message: String| message.len());
        assert_eq!(lengths.get_or_error(Token::Word("ab".to_string())), Err(16));
        assert_eq!(lengths.get_or_error(Token::Number(1)), Ok(1));
    }

    #[rstest]
    fn test_compose_eprism_tags_failure_side() {
        let even_number = number().compose_eprism(even());

        assert_eq!(even_number.get_or_error(Token::Number(4)), Ok(4));
        assert_eq!(
            even_number.get_or_error(Token::Word("x".to_string())),
            Err(Either::Left("not a number: x".to_string()))
        );
        assert_eq!(
            even_number.get_or_modify_with_error(Token::Number(3)),
            Either::Left((Either::Right(1), Token::Number(3)))
        );
    }

    #[rstest]
    fn test_compose_eprism_projections() {
        assert_eq!(
            number().compose_eprism_left(even()).get_or_error(Token::Number(3)),
            Err(None)
        );
        assert_eq!(
            number().compose_eprism_right(even()).get_or_error(Token::Number(3)),
            Err(Some(1))
        );
    }

    #[rstest]
    fn test_prism_round_trip_through_to_prism_and_with_error() {
        let plain = number().to_prism();
        assert_eq!(plain.get_option(Token::Number(8)), Some(8));

        let rebuilt = FunctionPrism::new(
            |token: Token| match token {
                Token::Number(n) => Either::Right(n),
                other @ Token::Word(_) => Either::Left(other),
            },
            Token::Number,
        )
        .with_error(|_: &Token| "mismatch");
        assert_eq!(rebuilt.get_or_error(Token::Word(String::new())), Err("mismatch"));

        let unit = plain.to_eprism();
        assert_eq!(unit.get_or_error(Token::Word(String::new())), Err(()));
    }

    #[rstest]
    fn test_to_scope_put_builds_variant() {
        let scope = number().to_scope();
        assert_eq!(scope.put(Token::Word("w".to_string()), 5), Token::Number(5));

        let escope = number().to_escope();
        assert_eq!(escope.put(Token::Word("w".to_string()), 5), Token::Number(5));
        assert!(escope.get_or_error(Token::Word("w".to_string())).is_err());
    }

    #[rstest]
    fn test_structural_lifts() {
        assert_eq!(
            number().first().get_or_error((Token::Number(1), 'c')),
            Ok((1, 'c'))
        );
        assert_eq!(
            number().second().reverse_get(('c', 2)),
            ('c', Token::Number(2))
        );
        assert_eq!(
            number().left().get_or_error(Either::<Token, char>::Right('r')),
            Ok(Either::Right('r'))
        );
        assert_eq!(
            number()
                .right()
                .get_or_error(Either::<char, Token>::Right(Token::Word("w".to_string()))),
            Err("not a number: w".to_string())
        );
    }

    #[rstest]
    fn test_demotions() {
        assert_eq!(number().to_traversal().get_all(&Token::Number(3)), vec![3]);
        assert_eq!(
            number().to_optional().set(Token::Word("w".to_string()), 3),
            Token::Word("w".to_string())
        );
    }
}
