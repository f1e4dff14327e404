//! # scopic
//!
//! Scope optics for Rust: accessors whose read may fail but whose write
//! always succeeds, together with error-reporting prisms and scopes.
//!
//! ## Overview
//!
//! A Lens composed with a Prism is usually demoted to an Optional, which
//! cannot write into a source that does not already hold the focused
//! variant. A Scope keeps that write: reading reports a miss, but writing
//! switches the source into the focused shape. This crate provides:
//!
//! - **Scopes**: [`optics::PScope`] with choice, pairing and composition
//! - **Error-reporting optics**: [`optics::EPPrism`] and [`optics::EPScope`]
//!   that explain why a read failed
//! - **Glue**: conversions between scopes and lenses, prisms, isos,
//!   optionals, traversals, setters, folds and getters
//! - **Type Classes**: the `Functor`/`Applicative` capability behind
//!   effectful `modify_f`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative)
//! - `control`: Control structures (Either)
//! - `optics`: Optics (Scope, `EPrism`, `EScope`, Lens, Prism, etc.)
//! - `laws`: Law witnesses for property tests
//! - `derive`: `#[derive(Lenses, Prisms, EPrisms)]`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use scopic::prelude::*;
//!
//! let head = scope(
//!     |values: &Vec<i32>| values.first().copied(),
//!     |mut values: Vec<i32>, head: i32| {
//!         match values.first_mut() {
//!             Some(first) => *first = head,
//!             None => values.push(head),
//!         }
//!         values
//!     },
//! );
//!
//! assert_eq!(head.get_option(vec![]), None);
//! assert_eq!(head.put(vec![], 1), vec![1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::type_complexity)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use scopic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use scopic_derive::{EPrisms, Lenses, Prisms};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use scopic_derive::{EPrisms, Lenses, Prisms};
