//! Glue between scopes and the other optics.
//!
//! Lenses, isos and prisms can be viewed as scopes, and lenses and isos
//! compose with a scope on their right while staying a scope. Every weaker
//! optic composes with a scope by demoting the scope to its own kind:
//!
//! ```text
//! Lens      . Scope -> Scope
//! Iso       . Scope -> Scope
//! Prism     . Scope -> Optional
//! Optional  . Scope -> Optional
//! Traversal . Scope -> Traversal
//! Setter    . Scope -> Setter
//! Fold      . Scope -> Fold
//! Getter    . Scope -> Fold
//! ```
//!
//! # Example
//!
//! ```
//! use scopic::optics::{IsoScopeExtension, LensScopeExtension, PScope, scope, FunctionIso};
//! use scopic::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Account { owner: String, limit: Option<i64> }
//!
//! let limit = lens!(Account, limit).compose_scope(scope(
//!     |limit: &Option<i64>| *limit,
//!     |_, limit: i64| Some(limit),
//! ));
//!
//! let unlimited = Account { owner: "ann".to_string(), limit: None };
//! assert_eq!(limit.get_option(unlimited.clone()), None);
//! assert_eq!(limit.put(unlimited, 10).limit, Some(10));
//!
//! let cents = FunctionIso::new(|euros: i64| euros * 100, |cents: i64| cents / 100).to_scope();
//! assert_eq!(cents.get_option(3), Some(300));
//! ```

use std::marker::PhantomData;

use super::escope::EPScope;
use super::fold::{ComposedFold, Fold};
use super::getter::{Getter, GetterAsFold};
use super::iso::PIso;
use super::lens::PLens;
use super::optional::{ComposedOptional, POptional};
use super::prism::{PPrism, PrismAsOptional};
use super::scope::{PScope, ScopeAsFold, ScopeAsOptional, ScopeAsSetter, ScopeAsTraversal};
use super::setter::{ComposedSetter, PSetter};
use super::traversal::{ComposedTraversal, PTraversal};
use crate::control::Either;

// =============================================================================
// Lens
// =============================================================================

/// Scope glue for lenses.
pub trait LensScopeExtension<S, T, A, B>: PLens<S, T, A, B> {
    /// Views this lens as a scope that always matches.
    fn to_scope(self) -> LensAsScope<Self>
    where
        Self: Sized,
    {
        LensAsScope::new(self)
    }

    /// Composes this lens with a scope on its target.
    ///
    /// When the scope misses, its fallback is written back through the lens.
    fn compose_scope<U, V, X>(self, scope: X) -> LensScopeComposition<Self, X, A, B>
    where
        Self: Sized,
        X: PScope<A, B, U, V>,
    {
        LensScopeComposition::new(self, scope)
    }

    /// Composes this lens with an error-reporting scope on its target.
    fn compose_escope<E, U, V, X>(self, escope: X) -> LensEScopeComposition<Self, X, A, B>
    where
        Self: Sized,
        X: EPScope<E, A, B, U, V>,
    {
        LensEScopeComposition::new(self, escope)
    }
}

impl<S, T, A, B, L> LensScopeExtension<S, T, A, B> for L where L: PLens<S, T, A, B> {}

/// A lens viewed as a scope.
#[derive(Clone, Debug)]
pub struct LensAsScope<L> {
    lens: L,
}

impl<L> LensAsScope<L> {
    /// Wraps a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self { lens }
    }
}

impl<S, T, A, B, L> PScope<S, T, A, B> for LensAsScope<L>
where
    L: PLens<S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        Either::Right(self.lens.get(&source))
    }

    fn put(&self, source: S, value: B) -> T {
        self.lens.set(source, value)
    }
}

/// A lens followed by a scope.
pub struct LensScopeComposition<L, X, A, B> {
    lens: L,
    scope: X,
    _marker: PhantomData<(A, B)>,
}

impl<L, X, A, B> LensScopeComposition<L, X, A, B> {
    /// Creates a new composition.
    #[must_use]
    pub const fn new(lens: L, scope: X) -> Self {
        Self {
            lens,
            scope,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, L, X> PScope<S, T, U, V> for LensScopeComposition<L, X, A, B>
where
    L: PLens<S, T, A, B>,
    X: PScope<A, B, U, V>,
{
    fn get_or_modify(&self, source: S) -> Either<T, U> {
        let focus = self.lens.get(&source);
        match self.scope.get_or_modify(focus) {
            Either::Left(fallback) => Either::Left(self.lens.set(source, fallback)),
            Either::Right(value) => Either::Right(value),
        }
    }

    fn put(&self, source: S, value: V) -> T {
        let focus = self.lens.get(&source);
        self.lens.set(source, self.scope.put(focus, value))
    }
}

impl<L: Clone, X: Clone, A, B> Clone for LensScopeComposition<L, X, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone(), self.scope.clone())
    }
}

impl<L: std::fmt::Debug, X: std::fmt::Debug, A, B> std::fmt::Debug
    for LensScopeComposition<L, X, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensScopeComposition")
            .field("lens", &self.lens)
            .field("scope", &self.scope)
            .finish()
    }
}

/// A lens followed by an error-reporting scope.
pub struct LensEScopeComposition<L, X, A, B> {
    lens: L,
    escope: X,
    _marker: PhantomData<(A, B)>,
}

impl<L, X, A, B> LensEScopeComposition<L, X, A, B> {
    /// Creates a new composition.
    #[must_use]
    pub const fn new(lens: L, escope: X) -> Self {
        Self {
            lens,
            escope,
            _marker: PhantomData,
        }
    }
}

impl<E, S, T, A, B, U, V, L, X> EPScope<E, S, T, U, V> for LensEScopeComposition<L, X, A, B>
where
    L: PLens<S, T, A, B>,
    X: EPScope<E, A, B, U, V>,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(E, T), U> {
        let focus = self.lens.get(&source);
        match self.escope.get_or_modify_with_error(focus) {
            Either::Left((error, fallback)) => Either::Left((error, self.lens.set(source, fallback))),
            Either::Right(value) => Either::Right(value),
        }
    }

    fn put(&self, source: S, value: V) -> T {
        let focus = self.lens.get(&source);
        self.lens.set(source, self.escope.put(focus, value))
    }
}

impl<L: Clone, X: Clone, A, B> Clone for LensEScopeComposition<L, X, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone(), self.escope.clone())
    }
}

impl<L: std::fmt::Debug, X: std::fmt::Debug, A, B> std::fmt::Debug
    for LensEScopeComposition<L, X, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensEScopeComposition")
            .field("lens", &self.lens)
            .field("escope", &self.escope)
            .finish()
    }
}

// =============================================================================
// Iso
// =============================================================================

/// Scope glue for isos.
pub trait IsoScopeExtension<S, T, A, B>: PIso<S, T, A, B> {
    /// Views this iso as a scope that always matches.
    fn to_scope(self) -> IsoAsScope<Self>
    where
        Self: Sized,
    {
        IsoAsScope::new(self)
    }

    /// Composes this iso with a scope on its target.
    fn compose_scope<U, V, X>(self, scope: X) -> IsoScopeComposition<Self, X, A, B>
    where
        Self: Sized,
        X: PScope<A, B, U, V>,
    {
        IsoScopeComposition::new(self, scope)
    }

    /// Composes this iso with an error-reporting scope on its target.
    fn compose_escope<E, U, V, X>(self, escope: X) -> IsoEScopeComposition<Self, X, A, B>
    where
        Self: Sized,
        X: EPScope<E, A, B, U, V>,
    {
        IsoEScopeComposition::new(self, escope)
    }
}

impl<S, T, A, B, I> IsoScopeExtension<S, T, A, B> for I where I: PIso<S, T, A, B> {}

/// An iso viewed as a scope.
#[derive(Clone, Debug)]
pub struct IsoAsScope<I> {
    iso: I,
}

impl<I> IsoAsScope<I> {
    /// Wraps an iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, T, A, B, I> PScope<S, T, A, B> for IsoAsScope<I>
where
    I: PIso<S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        Either::Right(self.iso.get(source))
    }

    fn put(&self, _source: S, value: B) -> T {
        self.iso.reverse_get(value)
    }
}

/// An iso followed by a scope.
pub struct IsoScopeComposition<I, X, A, B> {
    iso: I,
    scope: X,
    _marker: PhantomData<(A, B)>,
}

impl<I, X, A, B> IsoScopeComposition<I, X, A, B> {
    /// Creates a new composition.
    #[must_use]
    pub const fn new(iso: I, scope: X) -> Self {
        Self {
            iso,
            scope,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, I, X> PScope<S, T, U, V> for IsoScopeComposition<I, X, A, B>
where
    I: PIso<S, T, A, B>,
    X: PScope<A, B, U, V>,
{
    fn get_or_modify(&self, source: S) -> Either<T, U> {
        self.scope
            .get_or_modify(self.iso.get(source))
            .map_left(|fallback| self.iso.reverse_get(fallback))
    }

    fn put(&self, source: S, value: V) -> T {
        self.iso
            .reverse_get(self.scope.put(self.iso.get(source), value))
    }
}

impl<I: Clone, X: Clone, A, B> Clone for IsoScopeComposition<I, X, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.iso.clone(), self.scope.clone())
    }
}

impl<I: std::fmt::Debug, X: std::fmt::Debug, A, B> std::fmt::Debug
    for IsoScopeComposition<I, X, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IsoScopeComposition")
            .field("iso", &self.iso)
            .field("scope", &self.scope)
            .finish()
    }
}

/// An iso followed by an error-reporting scope.
pub struct IsoEScopeComposition<I, X, A, B> {
    iso: I,
    escope: X,
    _marker: PhantomData<(A, B)>,
}

impl<I, X, A, B> IsoEScopeComposition<I, X, A, B> {
    /// Creates a new composition.
    #[must_use]
    pub const fn new(iso: I, escope: X) -> Self {
        Self {
            iso,
            escope,
            _marker: PhantomData,
        }
    }
}

impl<E, S, T, A, B, U, V, I, X> EPScope<E, S, T, U, V> for IsoEScopeComposition<I, X, A, B>
where
    I: PIso<S, T, A, B>,
    X: EPScope<E, A, B, U, V>,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(E, T), U> {
        self.escope
            .get_or_modify_with_error(self.iso.get(source))
            .map_left(|(error, fallback)| (error, self.iso.reverse_get(fallback)))
    }

    fn put(&self, source: S, value: V) -> T {
        self.iso
            .reverse_get(self.escope.put(self.iso.get(source), value))
    }
}

impl<I: Clone, X: Clone, A, B> Clone for IsoEScopeComposition<I, X, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.iso.clone(), self.escope.clone())
    }
}

impl<I: std::fmt::Debug, X: std::fmt::Debug, A, B> std::fmt::Debug
    for IsoEScopeComposition<I, X, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IsoEScopeComposition")
            .field("iso", &self.iso)
            .field("escope", &self.escope)
            .finish()
    }
}

// =============================================================================
// Prism
// =============================================================================

/// Scope glue for prisms.
pub trait PrismScopeExtension<S, T, A, B>: PPrism<S, T, A, B> {
    /// Views this prism as a scope: a write always builds the focused variant.
    fn to_scope(self) -> PrismAsScope<Self>
    where
        Self: Sized,
    {
        PrismAsScope::new(self)
    }

    /// Composes this prism with a scope, demoting to an Optional.
    ///
    /// A write has no source to put into when the prism misses, so the
    /// result cannot stay a scope.
    fn compose_scope<U, V, X>(
        self,
        scope: X,
    ) -> ComposedOptional<PrismAsOptional<Self>, ScopeAsOptional<X>, A, B>
    where
        Self: Sized,
        X: PScope<A, B, U, V>,
    {
        ComposedOptional::new(PrismAsOptional::new(self), ScopeAsOptional::new(scope))
    }
}

impl<S, T, A, B, P> PrismScopeExtension<S, T, A, B> for P where P: PPrism<S, T, A, B> {}

/// A prism viewed as a scope.
#[derive(Clone, Debug)]
pub struct PrismAsScope<P> {
    prism: P,
}

impl<P> PrismAsScope<P> {
    /// Wraps a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self { prism }
    }
}

impl<S, T, A, B, P> PScope<S, T, A, B> for PrismAsScope<P>
where
    P: PPrism<S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.prism.get_or_modify(source)
    }

    fn put(&self, _source: S, value: B) -> T {
        self.prism.reverse_get(value)
    }
}

// =============================================================================
// Weaker optics
// =============================================================================

/// Scope composition for optionals.
pub trait OptionalScopeExtension<S, T, A, B>: POptional<S, T, A, B> {
    /// Composes this optional with a scope, staying an Optional.
    fn compose_scope<U, V, X>(self, scope: X) -> ComposedOptional<Self, ScopeAsOptional<X>, A, B>
    where
        Self: Sized,
        X: PScope<A, B, U, V>,
    {
        ComposedOptional::new(self, ScopeAsOptional::new(scope))
    }
}

impl<S, T, A, B, O> OptionalScopeExtension<S, T, A, B> for O where O: POptional<S, T, A, B> {}

/// Scope composition for traversals.
pub trait TraversalScopeExtension<S, T, A, B>: PTraversal<S, T, A, B> {
    /// Composes this traversal with a scope, staying a Traversal.
    fn compose_scope<U, V, X>(self, scope: X) -> ComposedTraversal<Self, ScopeAsTraversal<X>, A, B>
    where
        Self: Sized,
        X: PScope<A, B, U, V>,
    {
        ComposedTraversal::new(self, scope.to_traversal())
    }
}

impl<S, T, A, B, X> TraversalScopeExtension<S, T, A, B> for X where X: PTraversal<S, T, A, B> {}

/// Scope composition for setters.
pub trait SetterScopeExtension<S, T, A, B>: PSetter<S, T, A, B> {
    /// Composes this setter with a scope, staying a Setter.
    fn compose_scope<U, V, X>(self, scope: X) -> ComposedSetter<Self, ScopeAsSetter<X>, A, B>
    where
        Self: Sized,
        X: PScope<A, B, U, V>,
    {
        ComposedSetter::new(self, scope.to_setter())
    }
}

impl<S, T, A, B, X> SetterScopeExtension<S, T, A, B> for X where X: PSetter<S, T, A, B> {}

/// Scope composition for folds.
pub trait FoldScopeExtension<S, A>: Fold<S, A> {
    /// Composes this fold with a scope, staying a Fold.
    fn compose_scope<U, X>(self, scope: X) -> ComposedFold<Self, ScopeAsFold<X, A, U>, A>
    where
        Self: Sized,
        X: PScope<A, A, U, U>,
    {
        ComposedFold::new(self, scope.to_fold())
    }
}

impl<S, A, F> FoldScopeExtension<S, A> for F where F: Fold<S, A> {}

/// Scope composition for getters.
pub trait GetterScopeExtension<S, A>: Getter<S, A> {
    /// Composes this getter with a scope, demoting to a Fold.
    fn compose_scope<U, X>(
        self,
        scope: X,
    ) -> ComposedFold<GetterAsFold<Self>, ScopeAsFold<X, A, U>, A>
    where
        Self: Sized,
        X: PScope<A, A, U, U>,
    {
        ComposedFold::new(GetterAsFold::new(self), scope.to_fold())
    }
}

impl<S, A, G> GetterScopeExtension<S, A> for G where G: Getter<S, A> {}
