//! Derive macros for scopic optics.
//!
//! This crate provides procedural macros that generate optic constructors
//! for Rust types.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates a lens per struct field
//! - [`Prisms`]: Generates a prism per enum variant
//! - [`EPrisms`]: Generates an error-reporting prism per enum variant
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use scopic::optics::PLens;
//! use scopic_derive::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32>
//! // - Point::y_lens() -> impl Lens<Point, i32>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().get(&point), 10);
//! ```
//!
//! # Example: Prisms and `EPrisms`
//!
//! ```rust,ignore
//! use scopic::optics::{EPPrism, PPrism};
//! use scopic_derive::{EPrisms, Prisms};
//!
//! #[derive(Clone, Prisms, EPrisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism() -> impl Prism<Shape, f64>
//! // - Shape::rectangle_prism() -> impl Prism<Shape, (f64, f64)>
//! // - Shape::circle_eprism() -> impl EPrism<String, Shape, f64>
//! // - Shape::rectangle_eprism() -> impl EPrism<String, Shape, (f64, f64)>
//!
//! assert_eq!(Shape::circle_prism().get_option(Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(
//!     Shape::circle_eprism().get_or_error(Shape::Rectangle(1.0, 2.0)),
//!     Err("Expected Circle, found Rectangle".to_string())
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod eprisms;
mod lenses;
mod prisms;
mod variant;

use proc_macro::TokenStream;

/// Derives a lens constructor `<field>_lens()` for every named field.
///
/// Each field type must be `Clone`, since a lens reads by value.
///
/// # Errors
///
/// Emits a compile error for enums, unions, tuple structs and unit structs.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derives a prism constructor `<variant>_prism()` for every variant.
///
/// Unit variants focus on `()`, single-field variants on the field, and
/// multi-field or struct variants on a tuple of their fields.
///
/// # Errors
///
/// Emits a compile error for structs and unions.
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}

/// Derives an error-reporting prism constructor `<variant>_eprism()` for
/// every variant.
///
/// On a mismatch the diagnostic is `"Expected <Variant>, found <Other>"`.
///
/// # Errors
///
/// Emits a compile error for structs and unions.
#[proc_macro_derive(EPrisms)]
pub fn derive_eprisms(input: TokenStream) -> TokenStream {
    eprisms::derive_eprisms_impl(input)
}
