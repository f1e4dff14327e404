//! Control structures used by the optics.
//!
//! - [`Either`]: A value that can be one of two types. Optics use it for the
//!   result of a read that may fail: `Right` carries the focused target and
//!   `Left` carries the fallback source.
//!
//! # Examples
//!
//! ```rust
//! use scopic::control::Either;
//!
//! let read: Either<String, i32> = Either::Right(42);
//! assert_eq!(read.map_right(|n| n + 1), Either::Right(43));
//! ```

mod either;

pub use either::Either;
