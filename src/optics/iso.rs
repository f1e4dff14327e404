//! Iso optics for lossless type conversions.
//!
//! An Iso converts between two types in both directions without losing
//! information. It is the strongest optic: it can be viewed as a Lens, a
//! Prism, or a Scope.
//!
//! # Laws
//!
//! 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(source)) == source`
//! 2. **`ReverseGetGet` Law**: `iso.get(iso.reverse_get(value)) == value`
//!
//! # Examples
//!
//! ```
//! use scopic::optics::{FunctionIso, PIso};
//!
//! let string_chars_iso = FunctionIso::new(
//!     |s: String| s.chars().collect::<Vec<_>>(),
//!     |chars: Vec<char>| chars.into_iter().collect::<String>(),
//! );
//!
//! let chars = string_chars_iso.get("hello".to_string());
//! assert_eq!(chars, vec!['h', 'e', 'l', 'l', 'o']);
//! assert_eq!(string_chars_iso.reverse_get(chars), "hello");
//! ```

use std::marker::PhantomData;

use super::lens::PLens;
use super::prism::PPrism;
use crate::control::Either;

/// A polymorphic Iso.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The source type produced by `reverse_get`
/// - `A`: The target type
/// - `B`: The target type accepted by `reverse_get`
pub trait PIso<S, T, A, B> {
    /// Converts from the source type to the target type.
    fn get(&self, source: S) -> A;

    /// Converts from the target type back to the source type.
    fn reverse_get(&self, value: B) -> T;

    /// Converts, applies a function, and converts back.
    ///
    /// # Example
    ///
    /// ```
    /// use scopic::optics::{FunctionIso, PIso};
    ///
    /// let centimeters = FunctionIso::new(|meters: u32| meters * 100, |cm: u32| cm / 100);
    /// assert_eq!(centimeters.modify(3, |cm| cm + 200), 5);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        self.reverse_get(function(self.get(source)))
    }

    /// Composes this iso with another iso.
    fn compose<U, V, I>(self, other: I) -> ComposedIso<Self, I, A, B>
    where
        Self: Sized,
        I: PIso<A, B, U, V>,
    {
        ComposedIso::new(self, other)
    }

    /// Swaps the two directions.
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Views this iso as a Lens.
    fn to_lens(self) -> IsoAsLens<Self>
    where
        Self: Sized,
    {
        IsoAsLens::new(self)
    }

    /// Views this iso as a Prism that always matches.
    fn to_prism(self) -> IsoAsPrism<Self>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }
}

/// A monomorphic Iso.
pub trait Iso<S, A>: PIso<S, S, A, A> {}

impl<S, A, I> Iso<S, A> for I where I: PIso<S, S, A, A> {}

/// An iso implemented using a pair of conversion functions.
pub struct FunctionIso<S, T, A, B, G, R>
where
    G: Fn(S) -> A,
    R: Fn(B) -> T,
{
    get_function: G,
    reverse_get_function: R,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, G, R> FunctionIso<S, T, A, B, G, R>
where
    G: Fn(S) -> A,
    R: Fn(B) -> T,
{
    /// Creates a new `FunctionIso`.
    #[must_use]
    pub const fn new(get_function: G, reverse_get_function: R) -> Self {
        Self {
            get_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, R> PIso<S, T, A, B> for FunctionIso<S, T, A, B, G, R>
where
    G: Fn(S) -> A,
    R: Fn(B) -> T,
{
    fn get(&self, source: S) -> A {
        (self.get_function)(source)
    }

    fn reverse_get(&self, value: B) -> T {
        (self.reverse_get_function)(value)
    }
}

impl<S, T, A, B, G, R> Clone for FunctionIso<S, T, A, B, G, R>
where
    G: Fn(S) -> A + Clone,
    R: Fn(B) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_function: self.get_function.clone(),
            reverse_get_function: self.reverse_get_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, R> std::fmt::Debug for FunctionIso<S, T, A, B, G, R>
where
    G: Fn(S) -> A,
    R: Fn(B) -> T,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionIso").finish_non_exhaustive()
    }
}

/// An iso with its directions swapped.
#[derive(Clone, Debug)]
pub struct ReversedIso<I> {
    inner: I,
}

impl<I> ReversedIso<I> {
    /// Wraps an iso.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<S, T, A, B, I> PIso<B, A, T, S> for ReversedIso<I>
where
    I: PIso<S, T, A, B>,
{
    fn get(&self, source: B) -> T {
        self.inner.reverse_get(source)
    }

    fn reverse_get(&self, value: S) -> A {
        self.inner.get(value)
    }
}

/// An iso composed of two isos.
pub struct ComposedIso<I1, I2, A, B> {
    first: I1,
    second: I2,
    _marker: PhantomData<(A, B)>,
}

impl<I1, I2, A, B> ComposedIso<I1, I2, A, B> {
    /// Creates a new composed iso.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, I1, I2> PIso<S, T, U, V> for ComposedIso<I1, I2, A, B>
where
    I1: PIso<S, T, A, B>,
    I2: PIso<A, B, U, V>,
{
    fn get(&self, source: S) -> U {
        self.second.get(self.first.get(source))
    }

    fn reverse_get(&self, value: V) -> T {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<I1: Clone, I2: Clone, A, B> Clone for ComposedIso<I1, I2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I1: std::fmt::Debug, I2: std::fmt::Debug, A, B> std::fmt::Debug for ComposedIso<I1, I2, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An iso viewed as a Lens. Reading clones the source.
#[derive(Clone, Debug)]
pub struct IsoAsLens<I> {
    iso: I,
}

impl<I> IsoAsLens<I> {
    /// Wraps an iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, T, A, B, I> PLens<S, T, A, B> for IsoAsLens<I>
where
    I: PIso<S, T, A, B>,
    S: Clone,
{
    fn get(&self, source: &S) -> A {
        self.iso.get(source.clone())
    }

    fn set(&self, _source: S, value: B) -> T {
        self.iso.reverse_get(value)
    }
}

/// An iso viewed as a Prism that always matches.
#[derive(Clone, Debug)]
pub struct IsoAsPrism<I> {
    iso: I,
}

impl<I> IsoAsPrism<I> {
    /// Wraps an iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, T, A, B, I> PPrism<S, T, A, B> for IsoAsPrism<I>
where
    I: PIso<S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        Either::Right(self.iso.get(source))
    }

    fn reverse_get(&self, value: B) -> T {
        self.iso.reverse_get(value)
    }
}

/// Creates an Iso from get and `reverse_get` functions.
///
/// # Example
///
/// ```
/// use scopic::optics::PIso;
/// use scopic::iso;
///
/// let swap = iso!(
///     |(a, b): (i32, String)| (b, a),
///     |(b, a): (String, i32)| (a, b)
/// );
///
/// let swapped = swap.get((42, "hello".to_string()));
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// assert_eq!(swap.reverse_get(swapped), (42, "hello".to_string()));
/// ```
#[macro_export]
macro_rules! iso {
    ($get:expr, $reverse_get:expr) => {
        $crate::optics::FunctionIso::new($get, $reverse_get)
    };
}
