//! Scope optics: an accessor whose read may fail but whose write always
//! succeeds.
//!
//! A Scope sits between an Optional and a Lens. Like an Optional, reading may
//! miss and hand back the (possibly retyped) source. Unlike an Optional,
//! [`PScope::put`] is total: it writes the new target whether or not the
//! source matched before, switching the source into the focused shape if
//! necessary.
//!
//! The canonical Scope is a Lens composed with a Prism: the lens selects a
//! field holding a sum type, the prism selects a variant, and writing through
//! the Scope replaces the field with the chosen variant.
//!
//! # Laws
//!
//! For every `s`, `a` and `b`:
//!
//! 1. **put-get**: `scope.get_option(scope.put(s, b)) == Some(b)`
//! 2. **get-put**: if `scope.get_or_modify(s)` is `Left(t)` then `t == s`;
//!    if it is `Right(a)` then `scope.put(s, a) == s`
//! 3. **put-put**: `scope.put(scope.put(s, b), a) == scope.put(s, a)`
//!
//! # Composition
//!
//! A Scope composes on the right with isos, prisms and error-reporting
//! prisms, staying a Scope. Composing with a lens, optional, traversal,
//! setter, fold or getter demotes it to that weaker optic. Lenses and isos
//! compose on the left through [`LensScopeExtension`](super::LensScopeExtension)
//! and [`IsoScopeExtension`](super::IsoScopeExtension).
//!
//! There is no Scope-after-Scope composition: the inner write would need a
//! target to write into even when the outer read missed.
//!
//! ```compile_fail
//! use scopic::optics::*;
//!
//! let outer = scope(|n: &i32| Some(*n), |_, n: i32| n);
//! let inner = scope(|n: &i32| Some(*n), |_, n: i32| n);
//! let _ = outer.compose_scope(inner);
//! ```
//!
//! # Examples
//!
//! ```
//! use scopic::control::Either;
//! use scopic::optics::{either_left_prism, LensScopeExtension, PScope, PrismScopeExtension};
//! use scopic::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Slot { id: i32, content: Either<String, i32> }
//!
//! let label = lens!(Slot, content).compose_scope(either_left_prism().to_scope());
//!
//! let numbered = Slot { id: 5, content: Either::Right(42) };
//! assert_eq!(label.get_option(numbered.clone()), None);
//!
//! let labelled = label.put(numbered, "X".to_string());
//! assert_eq!(labelled, Slot { id: 5, content: Either::Left("X".to_string()) });
//! ```

use std::marker::PhantomData;

use super::eprism::EPPrism;
use super::escope::{EPScope, ScopeAsEScope, ScopeWithError};
use super::fold::{ComposedFold, Fold};
use super::getter::{Getter, GetterAsFold};
use super::iso::PIso;
use super::lens::{LensAsOptional, PLens};
use super::optional::{ComposedOptional, OptionalAsTraversal, POptional};
use super::prism::PPrism;
use super::setter::{ComposedSetter, PSetter};
use super::traversal::{ComposedTraversal, PTraversal, TraversalAsFold, TraversalAsSetter};
use crate::control::Either;
use crate::typeclass::Applicative;

/// A polymorphic Scope.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The source type after a write
/// - `A`: The focused type
/// - `B`: The type written back
///
/// Only [`get_or_modify`](Self::get_or_modify) and [`put`](Self::put) are
/// required; everything else is derived from them.
pub trait PScope<S, T, A, B> {
    /// Reads the target, or hands back the retyped source when it does not
    /// match.
    fn get_or_modify(&self, source: S) -> Either<T, A>;

    /// Writes a target into the source. Always succeeds.
    fn put(&self, source: S, value: B) -> T;

    /// Returns the target if the source matches.
    fn get_option(&self, source: S) -> Option<A> {
        self.get_or_modify(source).right()
    }

    /// Modifies the target if the source matches, otherwise returns the
    /// fallback.
    ///
    /// Unlike [`put`](Self::put), a non-matching source is left alone.
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
        S: Clone,
    {
        match self.get_or_modify(source.clone()) {
            Either::Left(fallback) => fallback,
            Either::Right(value) => self.put(source, function(value)),
        }
    }

    /// Modifies the target with an effectful function.
    ///
    /// A non-matching source is lifted with [`Applicative::pure`]; a matching
    /// one maps `put` over the function's result.
    ///
    /// # Example
    ///
    /// ```
    /// use scopic::optics::{scope, PScope};
    ///
    /// let head = scope(
    ///     |values: &Vec<i32>| values.first().copied(),
    ///     |mut values: Vec<i32>, head: i32| {
    ///         match values.first_mut() {
    ///             Some(first) => *first = head,
    ///             None => values.push(head),
    ///         }
    ///         values
    ///     },
    /// );
    /// let halve = |n: i32| (n % 2 == 0).then_some(n / 2);
    ///
    /// assert_eq!(head.modify_f(vec![8, 1], halve), Some(vec![4, 1]));
    /// assert_eq!(head.modify_f(vec![3, 1], halve), None);
    /// assert_eq!(head.modify_f(vec![], halve), Some(vec![]));
    /// ```
    fn modify_f<FB, F>(&self, source: S, function: F) -> FB::WithType<T>
    where
        F: FnOnce(A) -> FB,
        FB: Applicative<Inner = B>,
        S: Clone,
    {
        match self.get_or_modify(source.clone()) {
            Either::Left(fallback) => FB::pure(fallback),
            Either::Right(value) => {
                function(value).fmap(|new_value| self.put(source.clone(), new_value))
            }
        }
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
    ///
    /// Use [`put`](Self::put) to write regardless of the current shape.
    fn set(&self, source: S, value: B) -> T
    where
        S: Clone,
    {
        self.modify(source, |_| value)
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
        self.get_option(source.clone()).is_some()
    }

    /// Combines two scopes sharing a target into a scope on `Either`.
    ///
    /// A write keeps the branch of the source it is applied to.
    ///
    /// # Example
    ///
    /// ```
    /// use scopic::control::Either;
    /// use scopic::optics::{scope, PScope};
    ///
    /// let from_slot = scope(|slot: &Option<String>| slot.clone(), |_, label: String| Some(label));
    /// let from_text = scope(|text: &String| Some(text.clone()), |_, label: String| label);
    ///
    /// let either = from_slot.choice(from_text);
    /// assert_eq!(
    ///     either.put(Either::Left(None), "hi".to_string()),
    ///     Either::Left(Some("hi".to_string()))
    /// );
    /// assert_eq!(either.get_option(Either::Left(None)), None);
    /// assert_eq!(
    ///     either.get_option(Either::Right("yo".to_string())),
    ///     Some("yo".to_string())
    /// );
    /// ```
    fn choice<S1, T1, X>(self, other: X) -> ChoiceScope<Self, X>
    where
        Self: Sized,
        X: PScope<S1, T1, A, B>,
    {
        ChoiceScope::new(self, other)
    }

    /// Lifts this scope to the first component of a pair.
    ///
    /// On write the carried second component is taken from the written pair.
    fn first(self) -> FirstScope<Self>
    where
        Self: Sized,
    {
        FirstScope::new(self)
    }

    /// Lifts this scope to the second component of a pair.
    ///
    /// On write the carried first component is taken from the written pair.
    fn second(self) -> SecondScope<Self>
    where
        Self: Sized,
    {
        SecondScope::new(self)
    }

    /// Composes with an iso on the target. The result is a Scope.
    fn compose_iso<U, V, I>(self, iso: I) -> ScopeIsoComposition<Self, I, A, B>
    where
        Self: Sized,
        I: PIso<A, B, U, V>,
    {
        ScopeIsoComposition::new(self, iso)
    }

    /// Composes with a prism on the target. The result is a Scope.
    ///
    /// When the prism does not match, its fallback is written back through
    /// this scope's `put`. Writing builds the variant with the prism and puts
    /// it.
    fn compose_prism<U, V, P>(self, prism: P) -> ScopePrismComposition<Self, P, A, B>
    where
        Self: Sized,
        P: PPrism<A, B, U, V>,
    {
        ScopePrismComposition::new(self, prism)
    }

    /// Composes with an error-reporting prism. The result reports
    /// `Some(error)` when the prism missed and `None` when this scope did.
    fn compose_eprism<E, U, V, P>(self, eprism: P) -> ScopeEPrismComposition<Self, P, A, B>
    where
        Self: Sized,
        P: EPPrism<E, A, B, U, V>,
    {
        ScopeEPrismComposition::new(self, eprism)
    }

    /// Composes with an optional, demoting to an Optional.
    fn compose_optional<U, V, O>(self, optional: O) -> ComposedOptional<ScopeAsOptional<Self>, O, A, B>
    where
        Self: Sized,
        O: POptional<A, B, U, V>,
    {
        ComposedOptional::new(ScopeAsOptional::new(self), optional)
    }

    /// Composes with a lens, demoting to an Optional.
    fn compose_lens<U, V, L>(
        self,
        lens: L,
    ) -> ComposedOptional<ScopeAsOptional<Self>, LensAsOptional<L>, A, B>
    where
        Self: Sized,
        L: PLens<A, B, U, V>,
    {
        ComposedOptional::new(ScopeAsOptional::new(self), LensAsOptional::new(lens))
    }

    /// Composes with a traversal, demoting to a Traversal.
    fn compose_traversal<U, V, X>(
        self,
        traversal: X,
    ) -> ComposedTraversal<ScopeAsTraversal<Self>, X, A, B>
    where
        Self: Sized,
        X: PTraversal<A, B, U, V>,
    {
        ComposedTraversal::new(scope_as_traversal(self), traversal)
    }

    /// Composes with a setter, demoting to a Setter.
    fn compose_setter<U, V, X>(self, setter: X) -> ComposedSetter<ScopeAsSetter<Self>, X, A, B>
    where
        Self: Sized,
        X: PSetter<A, B, U, V>,
    {
        ComposedSetter::new(TraversalAsSetter::new(scope_as_traversal(self)), setter)
    }

    /// Composes with a fold, demoting to a Fold.
    fn compose_fold<U, F>(self, fold: F) -> ComposedFold<ScopeAsFold<Self, T, B>, F, A>
    where
        Self: Sized,
        F: Fold<A, U>,
    {
        ComposedFold::new(TraversalAsFold::new(scope_as_traversal(self)), fold)
    }

    /// Composes with a getter, demoting to a Fold.
    fn compose_getter<U, G>(
        self,
        getter: G,
    ) -> ComposedFold<ScopeAsFold<Self, T, B>, GetterAsFold<G>, A>
    where
        Self: Sized,
        G: Getter<A, U>,
    {
        ComposedFold::new(
            TraversalAsFold::new(scope_as_traversal(self)),
            GetterAsFold::new(getter),
        )
    }

    /// Views this scope as an error-reporting scope with a unit diagnostic.
    fn to_escope(self) -> ScopeAsEScope<Self>
    where
        Self: Sized,
    {
        ScopeAsEScope::new(self)
    }

    /// Attaches a diagnostic computed from the fallback on a failed read.
    fn with_error<E, M>(self, diagnose: M) -> ScopeWithError<Self, M>
    where
        Self: Sized,
        M: Fn(&T) -> E,
    {
        ScopeWithError::new(self, diagnose)
    }

    /// Views this scope as an Optional. The Optional's `set` only replaces a
    /// matching target.
    fn to_optional(self) -> ScopeAsOptional<Self>
    where
        Self: Sized,
    {
        ScopeAsOptional::new(self)
    }

    /// Views this scope as a Traversal of zero or one element.
    fn to_traversal(self) -> ScopeAsTraversal<Self>
    where
        Self: Sized,
    {
        scope_as_traversal(self)
    }

    /// Views this scope as a Setter.
    fn to_setter(self) -> ScopeAsSetter<Self>
    where
        Self: Sized,
    {
        TraversalAsSetter::new(scope_as_traversal(self))
    }

    /// Views this scope as a Fold.
    fn to_fold(self) -> ScopeAsFold<Self, T, B>
    where
        Self: Sized,
    {
        TraversalAsFold::new(scope_as_traversal(self))
    }
}

/// A monomorphic Scope.
pub trait Scope<S, A>: PScope<S, S, A, A> {}

impl<S, A, X> Scope<S, A> for X where X: PScope<S, S, A, A> {}

/// A scope viewed as a Traversal.
pub type ScopeAsTraversal<X> = OptionalAsTraversal<ScopeAsOptional<X>>;

/// A scope viewed as a Setter.
pub type ScopeAsSetter<X> = TraversalAsSetter<ScopeAsTraversal<X>>;

/// A scope viewed as a Fold. `T` and `B` are the scope's write types.
pub type ScopeAsFold<X, T, B> = TraversalAsFold<ScopeAsTraversal<X>, T, B>;

const fn scope_as_traversal<X>(scope: X) -> ScopeAsTraversal<X> {
    OptionalAsTraversal::new(ScopeAsOptional::new(scope))
}

/// A scope implemented using a read-or-fallback function and a total write.
///
/// # Example
///
/// ```
/// use scopic::control::Either;
/// use scopic::optics::{FunctionScope, PScope};
///
/// // Focus on the text of a result, turning any error into a retyped fallback.
/// let message = FunctionScope::new(
///     |source: Result<String, u16>| match source {
///         Ok(text) => Either::Right(text),
///         Err(code) => Either::Left(Err(code)),
///     },
///     |_source: Result<String, u16>, length: usize| Ok::<usize, u16>(length),
/// );
///
/// assert_eq!(message.get_option(Ok("hi".to_string())), Some("hi".to_string()));
/// assert_eq!(message.put(Err(404), 3), Ok(3));
/// ```
pub struct FunctionScope<S, T, A, B, G, P>
where
    G: Fn(S) -> Either<T, A>,
    P: Fn(S, B) -> T,
{
    get_or_modify_function: G,
    put_function: P,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, G, P> FunctionScope<S, T, A, B, G, P>
where
    G: Fn(S) -> Either<T, A>,
    P: Fn(S, B) -> T,
{
    /// Creates a new `FunctionScope`.
    #[must_use]
    pub const fn new(get_or_modify_function: G, put_function: P) -> Self {
        Self {
            get_or_modify_function,
            put_function,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, P> PScope<S, T, A, B> for FunctionScope<S, T, A, B, G, P>
where
    G: Fn(S) -> Either<T, A>,
    P: Fn(S, B) -> T,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        (self.get_or_modify_function)(source)
    }

    fn put(&self, source: S, value: B) -> T {
        (self.put_function)(source, value)
    }
}

impl<S, T, A, B, G, P> Clone for FunctionScope<S, T, A, B, G, P>
where
    G: Fn(S) -> Either<T, A> + Clone,
    P: Fn(S, B) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.get_or_modify_function.clone(), self.put_function.clone())
    }
}

impl<S, T, A, B, G, P> std::fmt::Debug for FunctionScope<S, T, A, B, G, P>
where
    G: Fn(S) -> Either<T, A>,
    P: Fn(S, B) -> T,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionScope").finish_non_exhaustive()
    }
}

/// Creates a monomorphic scope from an optional read and a total write.
///
/// # Example
///
/// ```
/// use scopic::optics::{scope, PScope};
///
/// let head = scope(
///     |values: &Vec<i32>| values.first().copied(),
///     |mut values: Vec<i32>, head: i32| {
///         match values.first_mut() {
///             Some(first) => *first = head,
///             None => values.push(head),
///         }
///         values
///     },
/// );
///
/// assert_eq!(head.get_option(vec![]), None);
/// assert_eq!(head.put(vec![], 7), vec![7]);
/// assert_eq!(head.put(vec![1, 2], 7), vec![7, 2]);
/// ```
pub fn scope<S, A, G, P>(
    get_option: G,
    put: P,
) -> FunctionScope<S, S, A, A, impl Fn(S) -> Either<S, A> + Clone, P>
where
    G: Fn(&S) -> Option<A> + Clone,
    P: Fn(S, A) -> S,
{
    FunctionScope::new(
        move |source: S| get_option(&source).map_or_else(|| Either::Left(source), Either::Right),
        put,
    )
}

/// A scope on `Either<S, S1>` dispatching to one of two scopes.
#[derive(Clone, Debug)]
pub struct ChoiceScope<X, Y> {
    left: X,
    right: Y,
}

impl<X, Y> ChoiceScope<X, Y> {
    /// Creates a new choice scope.
    #[must_use]
    pub const fn new(left: X, right: Y) -> Self {
        Self { left, right }
    }
}

impl<S, S1, T, T1, A, B, X, Y> PScope<Either<S, S1>, Either<T, T1>, A, B> for ChoiceScope<X, Y>
where
    X: PScope<S, T, A, B>,
    Y: PScope<S1, T1, A, B>,
{
    fn get_or_modify(&self, source: Either<S, S1>) -> Either<Either<T, T1>, A> {
        match source {
            Either::Left(source) => self.left.get_or_modify(source).map_left(Either::Left),
            Either::Right(source) => self.right.get_or_modify(source).map_left(Either::Right),
        }
    }

    fn put(&self, source: Either<S, S1>, value: B) -> Either<T, T1> {
        match source {
            Either::Left(source) => Either::Left(self.left.put(source, value)),
            Either::Right(source) => Either::Right(self.right.put(source, value)),
        }
    }
}

/// A scope lifted to the first component of a pair.
#[derive(Clone, Debug)]
pub struct FirstScope<X> {
    scope: X,
}

impl<X> FirstScope<X> {
    /// Wraps a scope.
    #[must_use]
    pub const fn new(scope: X) -> Self {
        Self { scope }
    }
}

impl<S, T, A, B, C, X> PScope<(S, C), (T, C), (A, C), (B, C)> for FirstScope<X>
where
    X: PScope<S, T, A, B>,
{
    fn get_or_modify(&self, (source, carried): (S, C)) -> Either<(T, C), (A, C)> {
        match self.scope.get_or_modify(source) {
            Either::Left(fallback) => Either::Left((fallback, carried)),
            Either::Right(value) => Either::Right((value, carried)),
        }
    }

    fn put(&self, (source, _): (S, C), (value, carried): (B, C)) -> (T, C) {
        (self.scope.put(source, value), carried)
    }
}

/// A scope lifted to the second component of a pair.
#[derive(Clone, Debug)]
pub struct SecondScope<X> {
    scope: X,
}

impl<X> SecondScope<X> {
    /// Wraps a scope.
    #[must_use]
    pub const fn new(scope: X) -> Self {
        Self { scope }
    }
}

impl<S, T, A, B, C, X> PScope<(C, S), (C, T), (C, A), (C, B)> for SecondScope<X>
where
    X: PScope<S, T, A, B>,
{
    fn get_or_modify(&self, (carried, source): (C, S)) -> Either<(C, T), (C, A)> {
        match self.scope.get_or_modify(source) {
            Either::Left(fallback) => Either::Left((carried, fallback)),
            Either::Right(value) => Either::Right((carried, value)),
        }
    }

    fn put(&self, (_, source): (C, S), (carried, value): (C, B)) -> (C, T) {
        (carried, self.scope.put(source, value))
    }
}

/// A scope composed with an iso on its target.
pub struct ScopeIsoComposition<X, I, A, B> {
    scope: X,
    iso: I,
    _marker: PhantomData<(A, B)>,
}

impl<X, I, A, B> ScopeIsoComposition<X, I, A, B> {
    /// Creates a new composition.
    #[must_use]
    pub const fn new(scope: X, iso: I) -> Self {
        Self {
            scope,
            iso,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, X, I> PScope<S, T, U, V> for ScopeIsoComposition<X, I, A, B>
where
    X: PScope<S, T, A, B>,
    I: PIso<A, B, U, V>,
{
    fn get_or_modify(&self, source: S) -> Either<T, U> {
        self.scope
            .get_or_modify(source)
            .map_right(|value| self.iso.get(value))
    }

    fn put(&self, source: S, value: V) -> T {
        self.scope.put(source, self.iso.reverse_get(value))
    }
}

impl<X: Clone, I: Clone, A, B> Clone for ScopeIsoComposition<X, I, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.scope.clone(), self.iso.clone())
    }
}

impl<X: std::fmt::Debug, I: std::fmt::Debug, A, B> std::fmt::Debug
    for ScopeIsoComposition<X, I, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ScopeIsoComposition")
            .field("scope", &self.scope)
            .field("iso", &self.iso)
            .finish()
    }
}

/// A scope composed with a prism on its target.
pub struct ScopePrismComposition<X, P, A, B> {
    scope: X,
    prism: P,
    _marker: PhantomData<(A, B)>,
}

impl<X, P, A, B> ScopePrismComposition<X, P, A, B> {
    /// Creates a new composition.
    #[must_use]
    pub const fn new(scope: X, prism: P) -> Self {
        Self {
            scope,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, X, P> PScope<S, T, U, V> for ScopePrismComposition<X, P, A, B>
where
    X: PScope<S, T, A, B>,
    P: PPrism<A, B, U, V>,
    S: Clone,
{
    fn get_or_modify(&self, source: S) -> Either<T, U> {
        match self.scope.get_or_modify(source.clone()) {
            Either::Left(fallback) => Either::Left(fallback),
            Either::Right(value) => self
                .prism
                .get_or_modify(value)
                .map_left(|inner_fallback| self.scope.put(source, inner_fallback)),
        }
    }

    fn put(&self, source: S, value: V) -> T {
        self.scope.put(source, self.prism.reverse_get(value))
    }
}

impl<X: Clone, P: Clone, A, B> Clone for ScopePrismComposition<X, P, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.scope.clone(), self.prism.clone())
    }
}

impl<X: std::fmt::Debug, P: std::fmt::Debug, A, B> std::fmt::Debug
    for ScopePrismComposition<X, P, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ScopePrismComposition")
            .field("scope", &self.scope)
            .field("prism", &self.prism)
            .finish()
    }
}

/// A scope composed with an error-reporting prism on its target.
///
/// The diagnostic is `None` when the scope itself missed and `Some(error)`
/// when the prism missed.
pub struct ScopeEPrismComposition<X, P, A, B> {
    scope: X,
    eprism: P,
    _marker: PhantomData<(A, B)>,
}

impl<X, P, A, B> ScopeEPrismComposition<X, P, A, B> {
    /// Creates a new composition.
    #[must_use]
    pub const fn new(scope: X, eprism: P) -> Self {
        Self {
            scope,
            eprism,
            _marker: PhantomData,
        }
    }
}

impl<E, S, T, A, B, U, V, X, P> EPScope<Option<E>, S, T, U, V> for ScopeEPrismComposition<X, P, A, B>
where
    X: PScope<S, T, A, B>,
    P: EPPrism<E, A, B, U, V>,
    S: Clone,
{
    fn get_or_modify_with_error(&self, source: S) -> Either<(Option<E>, T), U> {
        match self.scope.get_or_modify(source.clone()) {
            Either::Left(fallback) => Either::Left((None, fallback)),
            Either::Right(value) => self
                .eprism
                .get_or_modify_with_error(value)
                .map_left(|(error, inner_fallback)| {
                    (Some(error), self.scope.put(source, inner_fallback))
                }),
        }
    }

    fn put(&self, source: S, value: V) -> T {
        self.scope.put(source, self.eprism.reverse_get(value))
    }
}

impl<X: Clone, P: Clone, A, B> Clone for ScopeEPrismComposition<X, P, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.scope.clone(), self.eprism.clone())
    }
}

impl<X: std::fmt::Debug, P: std::fmt::Debug, A, B> std::fmt::Debug
    for ScopeEPrismComposition<X, P, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ScopeEPrismComposition")
            .field("scope", &self.scope)
            .field("eprism", &self.eprism)
            .finish()
    }
}

/// A scope viewed as an Optional.
#[derive(Clone, Debug)]
pub struct ScopeAsOptional<X> {
    scope: X,
}

impl<X> ScopeAsOptional<X> {
    /// Wraps a scope.
    #[must_use]
    pub const fn new(scope: X) -> Self {
        Self { scope }
    }
}

impl<S, T, A, B, X> POptional<S, T, A, B> for ScopeAsOptional<X>
where
    X: PScope<S, T, A, B>,
    S: Clone,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.scope.get_or_modify(source)
    }

    fn set(&self, source: S, value: B) -> T {
        self.scope.set(source, value)
    }
}
