//! Type class traits used by the optics.
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting pure values into a container
//! - [`Identity`]: The identity functor
//!
//! Effectful optic updates (`modify_f`) are generic over any
//! `Applicative`, so the same scope can be driven in `Option` (validation),
//! `Vec` (non-determinism) or `Identity` (plain update).
//!
//! # Examples
//!
//! ```rust
//! use scopic::typeclass::{Applicative, Functor};
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x.fmap(|n| n + 1), Some(43));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
