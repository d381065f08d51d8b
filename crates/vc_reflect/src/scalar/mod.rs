//! Scalar views of reflected values.
//!
//! [`Scalar`] is a borrowed, widened view of a primitive: every signed integer
//! becomes an `i64`, every unsigned integer a `u64`, every float an `f64`.

// -----------------------------------------------------------------------------
// Modules

mod complex;

// -----------------------------------------------------------------------------
// Exports

pub use complex::{Complex, Complex32, Complex64, ParseComplexError};

use core::fmt;

// -----------------------------------------------------------------------------
// Scalar

/// A borrowed view of a primitive value.
///
/// Obtained via [`ReflectRef::Scalar`](crate::ops::ReflectRef::Scalar).
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, scalar::Scalar};
///
/// let value = 7_u16;
/// assert_eq!(value.reflect_ref().as_scalar(), Some(Scalar::Uint(7)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex(Complex64),
    /// A unicode scalar value, numeric conversions use its code point.
    Char(char),
    Str(&'a str),
}

impl Scalar<'_> {
    /// Returns `true` for [`Scalar::Str`].
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Str(_))
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Uint(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::Complex(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => f.write_str(v),
        }
    }
}
