use core::fmt;
use core::num::ParseFloatError;
use core::str::FromStr;

// -----------------------------------------------------------------------------
// Complex

/// A complex number in Cartesian form.
///
/// Formats as `(re+imi)`, for example `(1+2i)` or `(1.5-0.5i)`.
///
/// # Examples
///
/// ```
/// use vc_reflect::scalar::Complex64;
///
/// let value: Complex64 = "(1-2i)".parse().unwrap();
/// assert_eq!(value, Complex64::new(1.0, -2.0));
/// assert_eq!(value.to_string(), "(1-2i)");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// A complex number with `f32` parts.
pub type Complex32 = Complex<f32>;

/// A complex number with `f64` parts.
pub type Complex64 = Complex<f64>;

impl<T> Complex<T> {
    /// Creates a new [`Complex`] from its real and imaginary parts.
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl Complex64 {
    /// Returns `true` if both parts are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl From<Complex32> for Complex64 {
    #[inline]
    fn from(value: Complex32) -> Self {
        Self::new(value.re as f64, value.im as f64)
    }
}

macro_rules! impl_complex_display {
    ($($ty:ty),*) => {$(
        impl fmt::Display for Complex<$ty> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // The imaginary part always carries its sign.
                if self.im.is_sign_negative() && !self.im.is_nan() {
                    write!(f, "({}{}i)", self.re, self.im)
                } else {
                    write!(f, "({}+{}i)", self.re, self.im)
                }
            }
        }
    )*};
}

impl_complex_display!(f32, f64);

// -----------------------------------------------------------------------------
// Parsing

/// An error returned when parsing a [`Complex`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseComplexError {
    inner: ParseFloatError,
}

impl fmt::Display for ParseComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid complex literal: {}", self.inner)
    }
}

impl core::error::Error for ParseComplexError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl From<ParseFloatError> for ParseComplexError {
    #[inline]
    fn from(inner: ParseFloatError) -> Self {
        Self { inner }
    }
}

/// Parses the imaginary part without its trailing `i`; a bare sign means one.
fn parse_imaginary(text: &str) -> Result<f64, ParseFloatError> {
    match text {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => text.parse(),
    }
}

impl FromStr for Complex64 {
    type Err = ParseComplexError;

    /// Accepts `a`, `bi`, `a+bi` and `a-bi`, optionally wrapped in parentheses.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(text);

        let Some(body) = text.strip_suffix('i') else {
            return Ok(Self::new(text.parse()?, 0.0));
        };

        // The last sign that does not belong to an exponent splits the parts.
        let bytes = body.as_bytes();
        let split = (1..bytes.len())
            .rev()
            .find(|&at| matches!(bytes[at], b'+' | b'-') && !matches!(bytes[at - 1], b'e' | b'E'));

        match split {
            Some(at) => Ok(Self::new(body[..at].parse()?, parse_imaginary(&body[at..])?)),
            None => Ok(Self::new(0.0, parse_imaginary(body)?)),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
