//! Optics for immutable data manipulation, centred on Scopes.
//!
//! Every optic is a pair of owned-value functions: a read that takes the
//! source by value and a write that produces the (possibly retyped) source.
//! Each kind is a polymorphic trait `PXxx<S, T, A, B>` with a monomorphic
//! alias `Xxx<S, A>` for the common case where writes keep the types.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso   <: Lens  <: Scope <: Optional <: Traversal <: Setter
//! Iso   <: Prism <: Scope
//!                            Traversal <: Fold
//! Getter <: Fold
//! ```
//!
//! # Available Optics
//!
//! - [`Scope`]: a read that may miss paired with a write that always succeeds
//! - [`EScope`]: a Scope whose failed read reports a diagnostic
//! - [`EPrism`]: a Prism whose failed match reports a diagnostic
//! - [`Lens`], [`Prism`], [`Iso`], [`Optional`], [`Traversal`], [`Setter`],
//!   [`Fold`], [`Getter`]: the surrounding optics scopes convert to and from
//!
//! # Example
//!
//! ```
//! use scopic::control::Either;
//! use scopic::optics::{LensScopeExtension, PScope, PrismScopeExtension, either_right_prism};
//! use scopic::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Cell { row: u8, value: Either<String, f64> }
//!
//! let number = lens!(Cell, value).compose_scope(either_right_prism().to_scope());
//!
//! let text = Cell { row: 1, value: Either::Left("n/a".to_string()) };
//! assert_eq!(number.get_option(text.clone()), None);
//! assert_eq!(number.modify(text.clone(), |n: f64| n * 2.0), text);
//! assert_eq!(number.put(text, 1.5).value, Either::Right(1.5));
//! ```
//!
//! # Scope Laws
//!
//! 1. **PutGet**: `scope.get_option(scope.put(s, b)) == Some(b)`
//! 2. **GetPut**: reading then writing back what was read leaves `s` unchanged
//! 3. **PutPut**: `scope.put(scope.put(s, a), b) == scope.put(s, b)`
//!
//! The [`laws`] module turns these into checkable values.

mod eprism;
mod escope;
mod fold;
mod getter;
mod iso;
#[cfg(feature = "laws")]
pub mod laws;
mod lens;
mod optional;
mod prism;
mod scope;
mod scope_compose;
mod setter;
mod standard_optics;
mod traversal;

// Re-export all scope-related types and traits
pub use scope::ChoiceScope;
pub use scope::FirstScope;
pub use scope::FunctionScope;
pub use scope::PScope;
pub use scope::Scope;
pub use scope::ScopeAsFold;
pub use scope::ScopeAsOptional;
pub use scope::ScopeAsSetter;
pub use scope::ScopeAsTraversal;
pub use scope::ScopeEPrismComposition;
pub use scope::ScopeIsoComposition;
pub use scope::ScopePrismComposition;
pub use scope::SecondScope;
pub use scope::scope;

// Re-export all error-reporting prism types and traits
pub use eprism::EPPrism;
pub use eprism::EPrism;
pub use eprism::EPrismAsEScope;
pub use eprism::EPrismAsFold;
pub use eprism::EPrismAsOptional;
pub use eprism::EPrismAsPrism;
pub use eprism::EPrismAsScope;
pub use eprism::EPrismAsSetter;
pub use eprism::EPrismAsTraversal;
pub use eprism::EPrismComposition;
pub use eprism::FirstEPrism;
pub use eprism::FunctionEPrism;
pub use eprism::LeftEPrism;
pub use eprism::MapErrorEPrism;
pub use eprism::PrismAsEPrism;
pub use eprism::PrismWithError;
pub use eprism::RightEPrism;
pub use eprism::SecondEPrism;
pub use eprism::eprism;

// Re-export all error-reporting scope types and traits
pub use escope::EChoiceScope;
pub use escope::EPScope;
pub use escope::EScope;
pub use escope::EScopeAsScope;
pub use escope::EScopeEPrismComposition;
pub use escope::EScopeIsoComposition;
pub use escope::FirstEScope;
pub use escope::FunctionEScope;
pub use escope::MapErrorEScope;
pub use escope::ScopeAsEScope;
pub use escope::ScopeWithError;
pub use escope::SecondEScope;
pub use escope::escope;

// Re-export the scope glue
pub use scope_compose::FoldScopeExtension;
pub use scope_compose::GetterScopeExtension;
pub use scope_compose::IsoAsScope;
pub use scope_compose::IsoEScopeComposition;
pub use scope_compose::IsoScopeComposition;
pub use scope_compose::IsoScopeExtension;
pub use scope_compose::LensAsScope;
pub use scope_compose::LensEScopeComposition;
pub use scope_compose::LensScopeComposition;
pub use scope_compose::LensScopeExtension;
pub use scope_compose::OptionalScopeExtension;
pub use scope_compose::PrismAsScope;
pub use scope_compose::PrismScopeExtension;
pub use scope_compose::SetterScopeExtension;
pub use scope_compose::TraversalScopeExtension;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::LensAsOptional;
pub use lens::PLens;

// Re-export all prism-related types and traits
pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::PPrism;
pub use prism::Prism;
pub use prism::PrismAsOptional;

// Re-export all iso-related types and traits
pub use iso::ComposedIso;
pub use iso::FunctionIso;
pub use iso::Iso;
pub use iso::IsoAsLens;
pub use iso::IsoAsPrism;
pub use iso::PIso;
pub use iso::ReversedIso;

// Re-export all optional-related types and traits
pub use optional::ComposedOptional;
pub use optional::FunctionOptional;
pub use optional::Optional;
pub use optional::OptionalAsTraversal;
pub use optional::POptional;

// Re-export all traversal-related types and traits
pub use traversal::ComposedTraversal;
pub use traversal::OptionTraversal;
pub use traversal::PTraversal;
pub use traversal::Traversal;
pub use traversal::TraversalAsFold;
pub use traversal::TraversalAsSetter;
pub use traversal::VecTraversal;

// Re-export setters, folds and getters
pub use fold::ComposedFold;
pub use fold::Fold;
pub use fold::FunctionFold;
pub use getter::ComposedGetter;
pub use getter::FunctionGetter;
pub use getter::Getter;
pub use getter::GetterAsFold;
pub use setter::ComposedSetter;
pub use setter::FunctionSetter;
pub use setter::PSetter;
pub use setter::Setter;

// Re-export standard optics
pub use standard_optics::IdentityScope;
pub use standard_optics::either_left_prism;
pub use standard_optics::either_right_prism;
pub use standard_optics::iso_identity;
pub use standard_optics::iso_swap;
pub use standard_optics::scope_identity;
pub use standard_optics::some_prism;

#[cfg(feature = "laws")]
pub use laws::{EPrismLaws, EScopeLaws, IsEq, ScopeLaws};
