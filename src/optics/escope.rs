//! Error-reporting scopes.
//!
//! An `EPScope` keeps the total write of a [`PScope`] and reports a
//! diagnostic `E` together with the fallback when a read misses. It obeys
//! the same three laws as a Scope; erasing the diagnostic with
//! [`EPScope::to_scope`] gives back a Scope.
//!
//! # Examples
//!
//! ```
//! use scopic::optics::{escope, EPScope};
//!
//! let port = escope(
//!     |address: &String| {
//!         address
//!             .rsplit_once(':')
//!             .and_then(|(_, port)| port.parse::<u16>().ok())
//!             .ok_or_else(|| format!("no port in {address}"))
//!     },
//!     |address: String, port: u16| {
//!         let host = address.rsplit_once(':').map_or(address.as_str(), |(host, _)| host);
//!         format!("{host}:{port}")
//!     },
//! );
//!
//! assert_eq!(port.get_or_error("localhost:80".to_string()), Ok(80));
//! assert_eq!(
//!     port.get_or_error("localhost".to_string()),
//!     Err("no port in localhost".to_string())
//! );
//! assert_eq!(port.put("localhost".to_string(), 8080), "localhost:8080");
//! ```

use std::marker::PhantomData;

use super::eprism::{EPPrism, PrismAsEPrism};
use super::fold::{ComposedFold, Fold};
use super::getter::{Getter, GetterAsFold};
use super::iso::PIso;
use super::lens::{LensAsOptional, PLens};
use super::optional::{ComposedOptional, POptional};
use super::prism::PPrism;
use super::scope::{PScope, ScopeAsFold, ScopeAsOptional, ScopeAsSetter, ScopeAsTraversal};
use super::setter::{ComposedSetter, PSetter};
use super::traversal::{ComposedTraversal, PTraversal};
use crate::control::Either;
use crate::typeclass::Applicative;

/// A polymorphic Scope reporting a diagnostic `E` on a failed read.
///
/// # Type Parameters
///
/// - `E`: The diagnostic type
/// - `S`: The source type
/// - `T`: The source type after a write
/// - `A`: The focused type
/// - `B`: The type written back
pub trait EPScope<E, S, T, A, B> {
    /// Reads the target, or reports why not together with the fallback.
    fn get_or_modify_with_error(&self, source: S) -> Either<(E, T), A>;

    /// Writes a target into the source. Always succeeds.
    fn put(&self, source: S, value: B) -> T;

    /// Reads the target, discarding the diagnostic on a miss.
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.get_or_modify_with_error(source)
            .map_left(|(_, fallback)| fallback)
    }

    /// Returns the target or the diagnostic.
    ///
    /// # Errors
    ///
    /// Returns `Err(E)` when the target is absent from the source.
    fn get_or_error(&self, source: S) -> Result<A, E> {
        self.get_or_modify_with_error(source)
            .map_left(|(error, _)| error)
            .into()
    }

    /// Returns the target if the source matches.
    fn get_option(&self, source: S) -> Option<A> {
        self.get_or_modify_with_error(source).right()
    }

    /// Modifies the target if the source matches, otherwise returns the
    /// fallback.
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
        S: Clone,
    {
        match self.get_or_modify_with_error(source.clone()) {
            Either::Left((_, fallback)) => fallback,
            Either::Right(value) => self.put(source, function(value)),
        }
    }

    /// Modifies the target with an effectful function.
    fn modify_f<FB, F>(&self, source: S, function: F) -> FB::WithType<T>
    where
        F: FnOnce(A) -> FB,
        FB: Applicative<Inner = B>,
        S: Clone,
    {
        match self.get_or_modify_with_error(source.clone()) {
            Either::Left((_, fallback)) => FB::pure(fallback),
            Either::Right(value) => {
                function(value).fmap(|new_value| self.put(source.clone(), new_value))
            }
        }
    }

    /// Modifies the target, or returns the diagnostic.
    ///
    /// # Errors
    ///
    /// Returns `Err(E)` when the target is absent from the source.
    fn modify_or_error<F>(&self, source: S, function: F) -> Result<T, E>
    where
        F: FnOnce(A) -> B,
        S: Clone,
    {
        self.get_or_error(source.clone())
            .map(|value| self.put(source, function(value)))
    }

    /// Modifies the target if the source matches, `None` otherwise.
    fn modify_option<F>(&self, source: S, function: F) -> Option<T>
    where
        F: FnOnce(A) -> B,
        S: Clone,
    {
        self.get_option(source.clone())
            .map(|value| self.put(source, function(value)))
    }

    /// Replaces the target if the source matches.
    fn set(&self, source: S, value: B) -> T
    where
        S: Clone,
    {
        self.modify(source, |_| value)
    }

    /// Replaces the target, or returns the diagnostic.
    ///
    /// # Errors
    ///
    /// Returns `Err(E)` when the target is absent from the source.
    fn set_or_error(&self, source: S, value: B) -> Result<T, E>
    where
        S: Clone,
    {
        self.modify_or_error(source, |_| value)
    }

    /// Replaces the target if the source matches, `None` otherwise.
    fn set_option(&self, source: S, value: B) -> Option<T>
    where
        S: Clone,
    {
        self.modify_option(source, |_| value)
    }

    /// Returns `true` if the source matches.
    fn is_matching(&self, source: &S) -> bool
    where
        S: Clone,
    {
        self.get_or_modify_with_error(source.clone()).is_right()
    }

    /// Combines two error-reporting scopes sharing a target into one on
    /// `Either`. A write keeps the branch of its source.
    fn choice<S1, T1, X>(self, other: X) -> EChoiceScope<Self, X>
    where
        Self: Sized,
        X: EPScope<E, S1, T1, A, B>,
    {
        EChoiceScope::new(self, other)
    }

    /// Lifts this scope to the first component of a pair.
    fn first(self) -> FirstEScope<Self>
    where
        Self: Sized,
    {
        FirstEScope::new(self)
    }

    /// Lifts this scope to the second component of a pair.
    fn second(self) -> SecondEScope<Self>
    where
        Self: Sized,
    {
        SecondEScope::new(self)
    }

    /// Transforms the diagnostic.
    fn map_error<F, M>(self, function: M) -> MapErrorEScope<Self, M, E>
    where
        Self: Sized,
        M: Fn(E) -> F,
    {
        MapErrorEScope::new(self, function)
    }

    /// Composes with an iso on the target.
    fn compose_iso<U, V, I>(self, iso: I) -> EScopeIsoComposition<Self, I, A, B>
    where
        Self: Sized,
        I: PIso<A, B, U, V>,
    {
        EScopeIsoComposition::new(self, iso)
    }

    /// Composes with an error-reporting prism. The diagnostic says which side
    /// missed.
    fn compose_eprism<F, U, V, P>(self, eprism: P) -> EScopeEPrismComposition<Self, P, A, B>
    where
        Self: Sized,
        P: EPPrism<F, A, B, U, V>,
    {
        EScopeEPrismComposition::new(self, eprism)
    }

    /// Composes with an error-reporting prism, keeping only this scope's
    /// diagnostic.
    fn compose_eprism_left<F, U, V, P>(
        self,
        eprism: P,
    ) -> MapErrorEScope<
        EScopeEPrismComposition<Self, P, A, B>,
        fn(Either<E, F>) -> Option<E>,
        Either<E, F>,
    >
    where
        Self: Sized,
        P: EPPrism<F, A, B, U, V>,
    {
        MapErrorEScope::new(
            EScopeEPrismComposition::new(self, eprism),
            Either::left as fn(Either<E, F>) -> Option<E>,
        )
    }

    /// Composes with an error-reporting prism, keeping only the prism's
    /// diagnostic.
    fn compose_eprism_right<F, U, V, P>(
        self,
        eprism: P,
    ) -> MapErrorEScope<
        EScopeEPrismComposition<Self, P, A, B>,
        fn(Either<E, F>) -> Option<F>,
        Either<E, F>,
    >
    where
        Self: Sized,
        P: EPPrism<F, A, B, U, V>,
    {
        MapErrorEScope::new(
            EScopeEPrismComposition::new(self, eprism),
            Either::right as fn(Either<E, F>) -> Option<F>,
        )
    }

    /// Composes with a plain prism. The diagnostic is `Some(error)` when this
    /// scope missed and `None` when the prism did.
    fn compose_prism<U, V, P>(
        self,
        prism: P,
    ) -> MapErrorEScope<
        EScopeEPrismComposition<Self, PrismAsEPrism<P>, A, B>,
        fn(Either<E, ()>) -> Option<E>,
        Either<E, ()>,
    >
    where
        Self: Sized,
        P: PPrism<A, B, U, V>,
    {
        self.compose_eprism_left(PrismAsEPrism::new(prism))
    }

    /// Composes with an optional, demoting to an Optional.
    fn compose_optional<U, V, O>(
        self,
        optional: O,
    ) -> ComposedOptional<ScopeAsOptional<EScopeAsScope<Self, E>>, O, A, B>
    where
        Self: Sized,
        O: POptional<A, B, U, V>,
    {
        ComposedOptional::new(ScopeAsOptional::new(EScopeAsScope::new(self)), optional)
    }

    /// Composes with a lens, demoting to an Optional.
    fn compose_lens<U, V, L>(
        self,
        lens: L,
    ) -> ComposedOptional<ScopeAsOptional<EScopeAsScope<Self, E>>, LensAsOptional<L>, A, B>
    where
        Self: Sized,
        L: PLens<A, B, U, V>,
    {
        ComposedOptional::new(
            ScopeAsOptional::new(EScopeAsScope::new(self)),
            LensAsOptional::new(lens),
        )
    }

    /// Composes with a traversal, demoting to a Traversal.
    fn compose_traversal<U, V, X>(
        self,
        traversal: X,
    ) -> ComposedTraversal<ScopeAsTraversal<EScopeAsScope<Self, E>>, X, A, B>
    where
        Self: Sized,
        X: PTraversal<A, B, U, V>,
    {
        ComposedTraversal::new(self.to_traversal(), traversal)
    }

    /// Composes with a setter, demoting to a Setter.
    fn compose_setter<U, V, X>(
        self,
        setter: X,
    ) -> ComposedSetter<ScopeAsSetter<EScopeAsScope<Self, E>>, X, A, B>
    where
        Self: Sized,
        X: PSetter<A, B, U, V>,
    {
        ComposedSetter::new(self.to_setter(), setter)
    }

    /// Composes with a fold, demoting to a Fold.
    fn compose_fold<U, F>(
        self,
        fold: F,
    ) -> ComposedFold<ScopeAsFold<EScopeAsScope<Self, E>, T, B>, F, A>
    where
        Self: Sized,
        F: Fold<A, U>,
    {
        ComposedFold::new(self.to_fold(), fold)
    }

    /// Composes with a getter, demoting to a Fold.
    fn compose_getter<U, G>(
        self,
        getter: G,
    ) -> ComposedFold<ScopeAsFold<EScopeAsScope<Self, E>, T, B>, GetterAsFold<G>, A>
    where
        Self: Sized,
        G: Getter<A, U>,
    {
        ComposedFold::new(self.to_fold(), GetterAsFold::new(getter))
    }

    /// Erases the diagnostic, giving a plain Scope.
    fn to_scope(self) -> EScopeAsScope<Self, E>
    where
        Self: Sized,
    {
        EScopeAsScope::new(self)
    }

    /// Views this scope as an Optional.
    fn to_optional(self) -> ScopeAsOptional<EScopeAsScope<Self, E>>
    where
        Self: Sized,
    {
        ScopeAsOptional::new(EScopeAsScope::new(self))
    }

    /// Views this scope as a Traversal of zero or one element.
    fn to_traversal(self) -> ScopeAsTraversal<EScopeAsScope<Self, E>>
    where
        Self: Sized,
    {
        PScope::<S, T, A, B>::to_traversal(EScopeAsScope::<Self, E>::new(self))
    }

    /// Views this scope as a Setter.
    fn to_setter(self) -> ScopeAsSetter<EScopeAsScope<Self, E>>
    where
        Self: Sized,
    {
        PScope::<S, T, A, B>::to_setter(EScopeAsScope::<Self, E>::new(self))
    }

    /// Views this scope as a Fold.
    fn to_fold(self) -> ScopeAsFold<EScopeAsScope<Self, E>, T, B>
    where
        Self: Sized,
    {
        PScope::<S, T, A, B>::to_fold(EScopeAsScope::<Self, E>::new(self))
    }
}

/// A monomorphic error-reporting Scope.
pub trait EScope<E, S, A>: EPScope<E, S, S, A, A> {}

impl<E, S, A, X> EScope<E, S, A> for X where X: EPScope<E, S, S, A, A> {}

/// An error-reporting scope built from a read-or-diagnose function and a
/// total write.
pub struct FunctionEScope<E, S, T, A, B, G, P>
where
    G: Fn(S) -> Either<(E, T), A>,
    P: Fn(S, B) -> T,
{
    get_or_modify_with_error_function: G,
    put_function: P,
    _marker: PhantomData<(E, S, T, A, B)>,
}

impl<E, S, T, A, B, G, P> FunctionEScope<E, S, T, A, B, G, P>
where
    G: Fn(S) -> Either<(E, T), A>,
    P: Fn(S, B) -> T,
{
    /// Creates a new `FunctionEScope`.
    #[must_use]
    pub const fn new(get_or_modify_with_error_function: G, put_function: P) -> Self {
        Self {
            get_or_modify_with_error_function,
            put_function,
            _marker: PhantomData,
        }
    }
}

impl<E, S, T, A, B, G, P> EPScope<E, S, T, A, B> for FunctionEScope<E, S, T, A, B, G, P>
where
    G: Fn(S) -> Either<(E, T), A>,
    P: Fn(S, B) -> T,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(E, T), A> {
        (self.get_or_modify_with_error_function)(source)
    }

    fn put(&self, source: S, value: B) -> T {
        (self.put_function)(source, value)
    }
}

impl<E, S, T, A, B, G, P> Clone for FunctionEScope<E, S, T, A, B, G, P>
where
    G: Fn(S) -> Either<(E, T), A> + Clone,
    P: Fn(S, B) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self::new(
            self.get_or_modify_with_error_function.clone(),
            self.put_function.clone(),
        )
    }
}

impl<E, S, T, A, B, G, P> std::fmt::Debug for FunctionEScope<E, S, T, A, B, G, P>
where
    G: Fn(S) -> Either<(E, T), A>,
    P: Fn(S, B) -> T,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionEScope").finish_non_exhaustive()
    }
}

/// Creates a monomorphic error-reporting scope from a fallible read and a
/// total write.
pub fn escope<E, S, A, G, P>(
    get_or_error: G,
    put: P,
) -> FunctionEScope<E, S, S, A, A, impl Fn(S) -> Either<(E, S), A> + Clone, P>
where
    G: Fn(&S) -> Result<A, E> + Clone,
    P: Fn(S, A) -> S,
{
    FunctionEScope::new(
        move |source: S| {
            get_or_error(&source).map_or_else(|error| Either::Left((error, source)), Either::Right)
        },
        put,
    )
}

/// A plain scope viewed as an error-reporting scope with a unit diagnostic.
#[derive(Clone, Debug)]
pub struct ScopeAsEScope<X> {
    scope: X,
}

impl<X> ScopeAsEScope<X> {
    /// Wraps a scope.
    #[must_use]
    pub const fn new(scope: X) -> Self {
        Self { scope }
    }
}

impl<S, T, A, B, X> EPScope<(), S, T, A, B> for ScopeAsEScope<X>
where
    X: PScope<S, T, A, B>,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<((), T), A> {
        self.scope
            .get_or_modify(source)
            .map_left(|fallback| ((), fallback))
    }

    fn put(&self, source: S, value: B) -> T {
        self.scope.put(source, value)
    }
}

/// A plain scope with a diagnostic computed from the fallback.
#[derive(Clone)]
pub struct ScopeWithError<X, M> {
    scope: X,
    diagnose: M,
}

impl<X, M> ScopeWithError<X, M> {
    /// Pairs a scope with a diagnostic function.
    #[must_use]
    pub const fn new(scope: X, diagnose: M) -> Self {
        Self { scope, diagnose }
    }
}

impl<E, S, T, A, B, X, M> EPScope<E, S, T, A, B> for ScopeWithError<X, M>
where
    X: PScope<S, T, A, B>,
    M: Fn(&T) -> E,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(E, T), A> {
        self.scope
            .get_or_modify(source)
            .map_left(|fallback| ((self.diagnose)(&fallback), fallback))
    }

    fn put(&self, source: S, value: B) -> T {
        self.scope.put(source, value)
    }
}

impl<X: std::fmt::Debug, M> std::fmt::Debug for ScopeWithError<X, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ScopeWithError")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// An error-reporting scope with its diagnostic erased.
pub struct EScopeAsScope<X, E> {
    escope: X,
    _marker: PhantomData<fn() -> E>,
}

impl<X, E> EScopeAsScope<X, E> {
    /// Wraps an error-reporting scope.
    #[must_use]
    pub const fn new(escope: X) -> Self {
        Self {
            escope,
            _marker: PhantomData,
        }
    }
}

impl<E, S, T, A, B, X> PScope<S, T, A, B> for EScopeAsScope<X, E>
where
    X: EPScope<E, S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.escope.get_or_modify(source)
    }

    fn put(&self, source: S, value: B) -> T {
        self.escope.put(source, value)
    }
}

impl<X: Clone, E> Clone for EScopeAsScope<X, E> {
    fn clone(&self) -> Self {
        Self::new(self.escope.clone())
    }
}

impl<X: std::fmt::Debug, E> std::fmt::Debug for EScopeAsScope<X, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("EScopeAsScope")
            .field("escope", &self.escope)
            .finish()
    }
}

/// An error-reporting scope whose diagnostic has been transformed.
pub struct MapErrorEScope<X, M, E> {
    escope: X,
    function: M,
    _marker: PhantomData<fn(E)>,
}

impl<X, M, E> MapErrorEScope<X, M, E> {
    /// Wraps a scope with a diagnostic transformation.
    #[must_use]
    pub const fn new(escope: X, function: M) -> Self {
        Self {
            escope,
            function,
            _marker: PhantomData,
        }
    }
}

impl<E, F, S, T, A, B, X, M> EPScope<F, S, T, A, B> for MapErrorEScope<X, M, E>
where
    X: EPScope<E, S, T, A, B>,
    M: Fn(E) -> F,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(F, T), A> {
        self.escope
            .get_or_modify_with_error(source)
            .map_left(|(error, fallback)| ((self.function)(error), fallback))
    }

    fn put(&self, source: S, value: B) -> T {
        self.escope.put(source, value)
    }
}

impl<X: Clone, M: Clone, E> Clone for MapErrorEScope<X, M, E> {
    fn clone(&self) -> Self {
        Self::new(self.escope.clone(), self.function.clone())
    }
}

impl<X: std::fmt::Debug, M, E> std::fmt::Debug for MapErrorEScope<X, M, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MapErrorEScope")
            .field("escope", &self.escope)
            .finish_non_exhaustive()
    }
}

/// Two error-reporting scopes sharing a target, dispatched on `Either`.
#[derive(Clone, Debug)]
pub struct EChoiceScope<X, Y> {
    left: X,
    right: Y,
}

impl<X, Y> EChoiceScope<X, Y> {
    /// Creates a new choice scope.
    #[must_use]
    pub const fn new(left: X, right: Y) -> Self {
        Self { left, right }
    }
}

impl<E, S, S1, T, T1, A, B, X, Y> EPScope<E, Either<S, S1>, Either<T, T1>, A, B>
    for EChoiceScope<X, Y>
where
    X: EPScope<E, S, T, A, B>,
    Y: EPScope<E, S1, T1, A, B>,
{
    fn get_or_modify_with_error(&self, source: Either<S, S1>) -> Either<(E, Either<T, T1>), A> {
        match source {
            Either::Left(source) => self
                .left
                .get_or_modify_with_error(source)
                .map_left(|(error, fallback)| (error, Either::Left(fallback))),
            Either::Right(source) => self
                .right
                .get_or_modify_with_error(source)
                .map_left(|(error, fallback)| (error, Either::Right(fallback))),
        }
    }

    fn put(&self, source: Either<S, S1>, value: B) -> Either<T, T1> {
        match source {
            Either::Left(source) => Either::Left(self.left.put(source, value)),
            Either::Right(source) => Either::Right(self.right.put(source, value)),
        }
    }
}

/// An error-reporting scope lifted to the first component of a pair.
#[derive(Clone, Debug)]
pub struct FirstEScope<X> {
    escope: X,
}

impl<X> FirstEScope<X> {
    /// Wraps an error-reporting scope.
    #[must_use]
    pub const fn new(escope: X) -> Self {
        Self { escope }
    }
}

impl<E, S, T, A, B, C, X> EPScope<E, (S, C), (T, C), (A, C), (B, C)> for FirstEScope<X>
where
    X: EPScope<E, S, T, A, B>,
{
    fn get_or_modify_with_error(&self, (source, carried): (S, C)) -> Either<(E, (T, C)), (A, C)> {
        match self.escope.get_or_modify_with_error(source) {
            Either::Left((error, fallback)) => Either::Left((error, (fallback, carried))),
            Either::Right(value) => Either::Right((value, carried)),
        }
    }

    fn put(&self, (source, _): (S, C), (value, carried): (B, C)) -> (T, C) {
        (self.escope.put(source, value), carried)
    }
}

/// An error-reporting scope lifted to the second component of a pair.
#[derive(Clone, Debug)]
pub struct SecondEScope<X> {
    escope: X,
}

impl<X> SecondEScope<X> {
    /// Wraps an error-reporting scope.
    #[must_use]
    pub const fn new(escope: X) -> Self {
        Self { escope }
    }
}

impl<E, S, T, A, B, C, X> EPScope<E, (C, S), (C, T), (C, A), (C, B)> for SecondEScope<X>
where
    X: EPScope<E, S, T, A, B>,
{
    fn get_or_modify_with_error(&self, (carried, source): (C, S)) -> Either<(E, (C, T)), (C, A)> {
        match self.escope.get_or_modify_with_error(source) {
            Either::Left((error, fallback)) => Either::Left((error, (carried, fallback))),
            Either::Right(value) => Either::Right((carried, value)),
        }
    }

    fn put(&self, (_, source): (C, S), (carried, value): (C, B)) -> (C, T) {
        (carried, self.escope.put(source, value))
    }
}

/// An error-reporting scope composed with an iso on its target.
pub struct EScopeIsoComposition<X, I, A, B> {
    escope: X,
    iso: I,
    _marker: PhantomData<(A, B)>,
}

impl<X, I, A, B> EScopeIsoComposition<X, I, A, B> {
    /// Creates a new composition.
    #[must_use]
    pub const fn new(escope: X, iso: I) -> Self {
        Self {
            escope,
            iso,
            _marker: PhantomData,
        }
    }
}

impl<E, S, T, A, B, U, V, X, I> EPScope<E, S, T, U, V> for EScopeIsoComposition<X, I, A, B>
where
    X: EPScope<E, S, T, A, B>,
    I: PIso<A, B, U, V>,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(E, T), U> {
        self.escope
            .get_or_modify_with_error(source)
            .map_right(|value| self.iso.get(value))
    }

    fn put(&self, source: S, value: V) -> T {
        self.escope.put(source, self.iso.reverse_get(value))
    }
}

impl<X: Clone, I: Clone, A, B> Clone for EScopeIsoComposition<X, I, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.escope.clone(), self.iso.clone())
    }
}

impl<X: std::fmt::Debug, I: std::fmt::Debug, A, B> std::fmt::Debug
    for EScopeIsoComposition<X, I, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("EScopeIsoComposition")
            .field("escope", &self.escope)
            .field("iso", &self.iso)
            .finish()
    }
}

/// An error-reporting scope composed with an error-reporting prism; the
/// diagnostic is `Either<E, F>`.
///
/// When the prism misses, its fallback is written back through the scope.
pub struct EScopeEPrismComposition<X, P, A, B> {
    escope: X,
    eprism: P,
    _marker: PhantomData<(A, B)>,
}

impl<X, P, A, B> EScopeEPrismComposition<X, P, A, B> {
    /// Creates a new composition.
    #[must_use]
    pub const fn new(escope: X, eprism: P) -> Self {
        Self {
            escope,
            eprism,
            _marker: PhantomData,
        }
    }
}

impl<E, F, S, T, A, B, U, V, X, P> EPScope<Either<E, F>, S, T, U, V>
    for EScopeEPrismComposition<X, P, A, B>
where
    X: EPScope<E, S, T, A, B>,
    P: EPPrism<F, A, B, U, V>,
    S: Clone,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(Either<E, F>, T), U> {
        match self.escope.get_or_modify_with_error(source.clone()) {
            Either::Left((error, fallback)) => Either::Left((Either::Left(error), fallback)),
            Either::Right(value) => self
                .eprism
                .get_or_modify_with_error(value)
                .map_left(|(error, inner_fallback)| {
                    (Either::Right(error), self.escope.put(source, inner_fallback))
                }),
        }
    }

    fn put(&self, source: S, value: V) -> T {
        self.escope.put(source, self.eprism.reverse_get(value))
    }
}

impl<X: Clone, P: Clone, A, B> Clone for EScopeEPrismComposition<X, P, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.escope.clone(), self.eprism.clone())
    }
}

impl<X: std::fmt::Debug, P: std::fmt::Debug, A, B> std::fmt::Debug
    for EScopeEPrismComposition<X, P, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("EScopeEPrismComposition")
            .field("escope", &self.escope)
            .field("eprism", &self.eprism)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{EPrism, FunctionIso, eprism, scope};
    use rstest::rstest;

    fn non_empty() -> impl EScope<&'static str, Vec<i32>, Vec<i32>> + Clone {
        escope(
            |values: &Vec<i32>| {
                if values.is_empty() {
                    Err("empty")
                } else {
                    Ok(values.clone())
                }
            },
            |_, values: Vec<i32>| values,
        )
    }

    fn head() -> impl EPrism<String, Vec<i32>, i32> + Clone {
        eprism(
            |values: &Vec<i32>| match values.as_slice() {
                [single] => Ok(*single),
                _ => Err(format!("{} elements", values.len())),
            },
            |value: i32| vec![value],
        )
    }

    #[rstest]
    #[case(vec![], Err("empty"))]
    #[case(vec![1], Ok(vec![1]))]
    fn test_get_or_error(#[case] source: Vec<i32>, #[case] expected: Result<Vec<i32>, &'static str>) {
        assert_eq!(non_empty().get_or_error(source), expected);
    }

    #[rstest]
    fn test_put_on_failed_read() {
        assert_eq!(non_empty().put(vec![], vec![3]), vec![3]);
        assert_eq!(non_empty().set(vec![], vec![3]), Vec::<i32>::new());
        assert_eq!(non_empty().set_or_error(vec![], vec![3]), Err("empty"));
    }

    #[rstest]
    fn test_compose_eprism_reports_side_and_rebuilds_fallback() {
        let single = non_empty().compose_eprism(head());

        assert_eq!(single.get_or_error(vec![7]), Ok(7));
        assert_eq!(single.get_or_error(vec![]), Err(Either::Left("empty")));
        assert_eq!(
            single.get_or_modify_with_error(vec![1, 2]),
            Either::Left((Either::Right("2 elements".to_string()), vec![1, 2]))
        );
        assert_eq!(single.put(vec![], 4), vec![4]);
    }

    #[rstest]
    fn test_compose_eprism_projections_and_prism() {
        assert_eq!(
            non_empty().compose_eprism_left(head()).get_or_error(vec![1, 2]),
            Err(None)
        );
        assert_eq!(
            non_empty().compose_eprism_right(head()).get_or_error(vec![]),
            Err(None)
        );

        let plain_head = head().to_prism();
        let composed = non_empty().compose_prism(plain_head);
        assert_eq!(composed.get_or_error(vec![]), Err(Some("empty")));
        assert_eq!(composed.get_or_error(vec![1, 2]), Err(None));
    }

    #[rstest]
    fn test_map_error_and_to_scope() {
        let coded = non_empty().map_error(str::len);
        assert_eq!(coded.get_or_error(vec![]), Err(5));

        let plain = non_empty().to_scope();
        assert_eq!(plain.get_option(vec![]), None);
        assert_eq!(plain.put(vec![], vec![1]), vec![1]);
    }

    #[rstest]
    fn test_choice_first_second() {
        let either = non_empty().choice(non_empty());
        assert_eq!(
            either.get_or_error(Either::Right(vec![])),
            Err("empty")
        );
        assert_eq!(either.put(Either::Left(vec![]), vec![2]), Either::Left(vec![2]));

        assert_eq!(
            non_empty().first().put((vec![], 'a'), (vec![1], 'b')),
            (vec![1], 'b')
        );
        assert_eq!(
            non_empty().second().get_or_error(('a', vec![])),
            Err("empty")
        );
    }

    #[rstest]
    fn test_compose_iso_and_scope_conversions() {
        let total = non_empty().compose_iso(FunctionIso::new(
            |values: Vec<i32>| values.into_iter().sum::<i32>(),
            |sum: i32| vec![sum],
        ));
        assert_eq!(total.get_or_error(vec![1, 2]), Ok(3));
        assert_eq!(total.put(vec![], 9), vec![9]);

        let present = scope(|slot: &Option<i32>| *slot, |_, n: i32| Some(n));
        assert_eq!(present.clone().to_escope().get_or_error(None), Err(()));
        let described = present.with_error(|slot: &Option<i32>| format!("{slot:?} is empty"));
        assert_eq!(described.get_or_error(None), Err("None is empty".to_string()));
        assert_eq!(described.get_or_error(Some(2)), Ok(2));
    }

    #[rstest]
    fn test_demotions() {
        assert_eq!(non_empty().to_traversal().get_all(&vec![1]), vec![vec![1]]);
        assert_eq!(
            non_empty().to_optional().set(vec![], vec![1]),
            Vec::<i32>::new()
        );
        assert!(non_empty().to_fold().is_empty(&vec![]));
        assert_eq!(
            non_empty()
                .compose_traversal(crate::optics::VecTraversal::new())
                .get_all(&vec![1, 2]),
            vec![1, 2]
        );
    }
}
