//! Conversion of resolved values into typed results.
//!
//! A result is first matched against the requested type as is. Without
//! [`QueryOptions::STRICT_TYPE`], a value of another type is concretized and
//! converted on a best-effort basis:
//!
//! | Target | Rule |
//! |---|---|
//! | `String` | text as is, anything else rendered through `Display` |
//! | `i64`, `u64` | bools are `0`/`1`, numbers are cast, text is parsed (`0` on failure) |
//! | `f64` | as above, complex numbers keep their real part |
//! | `Complex64` | numbers become the real part, text is parsed |
//! | `bool` | numbers test non-zero, complex numbers test *equal* to zero, text is parsed |
//! | `Vec<E>` | a `Vec<E>` list, or an array whose elements are all `E`, otherwise empty |
//! | `HashMap<K, E>`, `BTreeMap<K, E>` | a JSON round trip |
//! | [`Exact<T>`] | only a value of type `T` |
//!
//! [`QueryOptions::STRICT_TYPE`]: crate::QueryOptions::STRICT_TYPE

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::any::type_name;
use core::hash::Hash;
use core::num::IntErrorKind;
use std::collections::HashMap;

use serde_core::de::DeserializeOwned;
use vc_reflect::Reflect;
use vc_reflect::ops::{ReflectKey, ReflectRef};
use vc_reflect::scalar::{Complex64, Scalar};
use vc_reflect::serde::SerializeDriver;

use crate::QueryError;
use crate::concrete::concretize;

// -----------------------------------------------------------------------------
// Text parsing

/// Parses a decimal `i64`.
///
/// Out of range values clamp to the nearest bound, anything else unparsable
/// is `0`.
///
/// # Examples
///
/// ```
/// use vc_query::coerce::parse_int;
///
/// assert_eq!(parse_int("-30"), -30);
/// assert_eq!(parse_int("99999999999999999999"), i64::MAX);
/// assert_eq!(parse_int("3.5"), 0);
/// ```
pub fn parse_int(text: &str) -> i64 {
    match text.parse::<i64>() {
        Ok(value) => value,
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}

/// Parses a decimal `u64`, without a sign.
///
/// Out of range values clamp to `u64::MAX`, anything else unparsable is `0`.
pub fn parse_uint(text: &str) -> u64 {
    if text.starts_with('+') {
        return 0;
    }
    match text.parse::<u64>() {
        Ok(value) => value,
        Err(error) if *error.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 0,
    }
}

/// Parses an `f64`, `0.0` on failure.
#[inline]
pub fn parse_float(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}

/// Parses a [`Complex64`] such as `1+2i`, zero on failure.
#[inline]
pub fn parse_complex(text: &str) -> Complex64 {
    text.parse().unwrap_or_default()
}

/// Parses a boolean, `false` on failure.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(text: &str) -> bool {
    matches!(text, "1" | "t" | "T" | "TRUE" | "true" | "True")
}

// -----------------------------------------------------------------------------
// Best-effort converters

#[inline]
fn scalar_of(value: Option<&dyn Reflect>) -> Option<Scalar<'_>> {
    value.and_then(|value| value.reflect_ref().as_scalar())
}

/// Renders a concretized value, nil is `<nil>`.
pub fn to_text(value: Option<&dyn Reflect>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::from("<nil>"),
    }
}

pub fn to_int(value: Option<&dyn Reflect>) -> i64 {
    match scalar_of(value) {
        Some(Scalar::Bool(value)) => value as i64,
        Some(Scalar::Int(value)) => value,
        Some(Scalar::Uint(value)) => value as i64,
        Some(Scalar::Float(value)) => value as i64,
        Some(Scalar::Complex(value)) => value.re as i64,
        Some(Scalar::Char(value)) => value as i64,
        _ => parse_int(&to_text(value)),
    }
}

pub fn to_uint(value: Option<&dyn Reflect>) -> u64 {
    match scalar_of(value) {
        Some(Scalar::Bool(value)) => value as u64,
        Some(Scalar::Int(value)) => value as u64,
        Some(Scalar::Uint(value)) => value,
        Some(Scalar::Float(value)) => value as u64,
        Some(Scalar::Complex(value)) => value.re as u64,
        Some(Scalar::Char(value)) => value as u64,
        _ => parse_uint(&to_text(value)),
    }
}

pub fn to_float(value: Option<&dyn Reflect>) -> f64 {
    match scalar_of(value) {
        Some(Scalar::Bool(value)) => value as u8 as f64,
        Some(Scalar::Int(value)) => value as f64,
        Some(Scalar::Uint(value)) => value as f64,
        Some(Scalar::Float(value)) => value,
        Some(Scalar::Complex(value)) => value.re,
        Some(Scalar::Char(value)) => value as u32 as f64,
        _ => parse_float(&to_text(value)),
    }
}

pub fn to_complex(value: Option<&dyn Reflect>) -> Complex64 {
    match scalar_of(value) {
        Some(Scalar::Int(value)) => Complex64::new(value as f64, 0.0),
        Some(Scalar::Uint(value)) => Complex64::new(value as f64, 0.0),
        Some(Scalar::Float(value)) => Complex64::new(value, 0.0),
        Some(Scalar::Complex(value)) => value,
        Some(Scalar::Char(value)) => Complex64::new(value as u32 as f64, 0.0),
        _ => parse_complex(&to_text(value)),
    }
}

/// Converts to `bool`.
///
/// A complex number is `true` when it equals zero.
pub fn to_bool(value: Option<&dyn Reflect>) -> bool {
    match scalar_of(value) {
        Some(Scalar::Bool(value)) => value,
        Some(Scalar::Int(value)) => value != 0,
        Some(Scalar::Uint(value)) => value != 0,
        Some(Scalar::Float(value)) => !value.is_nan() && value != 0.0,
        Some(Scalar::Complex(value)) => value.is_zero(),
        Some(Scalar::Char(value)) => value != '\0',
        _ => parse_bool(&to_text(value)),
    }
}

// -----------------------------------------------------------------------------
// FromResolved

/// Types a resolved value can be converted into.
pub trait FromResolved: Sized {
    /// Returns the value if it already has this type.
    ///
    /// A dynamic box is looked through once.
    fn from_exact(value: &dyn Reflect) -> Option<Self>;

    /// Converts a concretized value, `None` is nil.
    ///
    /// Returns `None` if no conversion applies.
    fn from_concrete(value: Option<&dyn Reflect>) -> Option<Self>;
}

/// Downcasts `value`, or the content of a dynamic box, to `T`.
fn exact<T: Reflect + Clone>(value: &dyn Reflect) -> Option<T> {
    match value.downcast_ref::<T>() {
        Some(target) => Some(target.clone()),
        None => match value.reflect_ref() {
            ReflectRef::Dynamic(Some(inner)) => inner.downcast_ref::<T>().cloned(),
            _ => None,
        },
    }
}

macro_rules! impl_from_resolved {
    ($($ty:ty => $convert:ident),* $(,)?) => {$(
        impl FromResolved for $ty {
            #[inline]
            fn from_exact(value: &dyn Reflect) -> Option<Self> {
                exact(value)
            }

            #[inline]
            fn from_concrete(value: Option<&dyn Reflect>) -> Option<Self> {
                Some($convert(value))
            }
        }
    )*};
}

impl_from_resolved!(
    String => to_text,
    i64 => to_int,
    u64 => to_uint,
    f64 => to_float,
    Complex64 => to_complex,
    bool => to_bool,
);

impl<E: Reflect + Clone> FromResolved for Vec<E> {
    #[inline]
    fn from_exact(value: &dyn Reflect) -> Option<Self> {
        exact(value)
    }

    fn from_concrete(value: Option<&dyn Reflect>) -> Option<Self> {
        let Some(value) = value else {
            return Some(Vec::new());
        };

        let elements = match value.reflect_ref() {
            ReflectRef::List(_) => value.downcast_ref::<Vec<E>>().cloned(),
            ReflectRef::Array(array) => array.iter().map(exact::<E>).collect(),
            _ => None,
        };
        Some(elements.unwrap_or_default())
    }
}

/// Rebuilds `value` as `T` through its JSON form.
fn from_json<T: DeserializeOwned + Default>(value: Option<&dyn Reflect>) -> Option<T> {
    let Some(value) = value else {
        return Some(T::default());
    };

    let json = match serde_json::to_value(SerializeDriver::new(value)) {
        Ok(json) => json,
        Err(error) => {
            log::trace!("cannot serialize `{}`: {error}", value.reflect_type_name());
            return None;
        }
    };
    if json.is_null() {
        return Some(T::default());
    }

    match serde_json::from_value(json) {
        Ok(target) => Some(target),
        Err(error) => {
            log::trace!("cannot rebuild `{}`: {error}", type_name::<T>());
            None
        }
    }
}

impl<K, E> FromResolved for HashMap<K, E>
where
    K: ReflectKey + DeserializeOwned + Clone + Eq + Hash,
    E: Reflect + DeserializeOwned + Clone,
{
    #[inline]
    fn from_exact(value: &dyn Reflect) -> Option<Self> {
        exact(value)
    }

    #[inline]
    fn from_concrete(value: Option<&dyn Reflect>) -> Option<Self> {
        from_json(value)
    }
}

impl<K, E> FromResolved for BTreeMap<K, E>
where
    K: ReflectKey + DeserializeOwned + Clone + Ord,
    E: Reflect + DeserializeOwned + Clone,
{
    #[inline]
    fn from_exact(value: &dyn Reflect) -> Option<Self> {
        exact(value)
    }

    #[inline]
    fn from_concrete(value: Option<&dyn Reflect>) -> Option<Self> {
        from_json(value)
    }
}

// -----------------------------------------------------------------------------
// Exact

/// A target that only accepts values of type `T`.
///
/// Pointer-like and dynamic layers around the value are removed before the
/// type test, so an `Option<Box<T>>` field still yields a `T`.
///
/// # Examples
///
/// ```
/// use vc_query::{Exact, QueryOptions, get};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone, Debug, PartialEq)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// let points = vec![Point { x: 1, y: 2 }];
///
/// let Exact(point) = get::<Exact<Point>>(&points, QueryOptions::NONE, "0").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
///
/// assert!(get::<Exact<i32>>(&points, QueryOptions::NONE, "0").is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exact<T>(pub T);

impl<T> Exact<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Reflect + Clone> FromResolved for Exact<T> {
    #[inline]
    fn from_exact(value: &dyn Reflect) -> Option<Self> {
        exact(value).map(Exact)
    }

    #[inline]
    fn from_concrete(value: Option<&dyn Reflect>) -> Option<Self> {
        value.and_then(<dyn Reflect>::downcast_ref::<T>).cloned().map(Exact)
    }
}

// -----------------------------------------------------------------------------
// Pipeline

/// Converts a resolved value into `T`.
///
/// The exact type always matches. Otherwise `strict` fails with
/// [`ErrorCode::TypeMismatch`], and best-effort mode converts the concretized
/// value with [`FromResolved::from_concrete`].
///
/// [`ErrorCode::TypeMismatch`]: crate::ErrorCode::TypeMismatch
pub fn coerce<T: FromResolved>(value: &dyn Reflect, strict: bool) -> Result<T, QueryError> {
    if let Some(target) = T::from_exact(value) {
        return Ok(target);
    }

    // The dynamic box itself is never the result, its content is.
    let shown = match value.reflect_ref() {
        ReflectRef::Dynamic(inner) => inner,
        _ => Some(value),
    };
    let mismatch = || {
        let got = shown.map_or("<nil>", |shown| shown.reflect_type_name());
        QueryError::type_mismatch(format!(
            "result type not match: need {} got {got}",
            type_name::<T>()
        ))
    };

    if strict {
        return Err(mismatch());
    }
    let Some(shown) = shown else {
        return Err(mismatch());
    };
    let concrete = concretize(shown).map_err(|_| mismatch())?;

    T::from_concrete(concrete).ok_or_else(|| {
        QueryError::type_mismatch(format!(
            "cannot convert result {} to {}",
            to_text(Some(shown)),
            type_name::<T>()
        ))
    })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use serde_json::json;
    use vc_reflect::Reflect;
    use vc_reflect::scalar::Complex64;

    use super::*;

    fn some(value: &dyn Reflect) -> Option<&dyn Reflect> {
        Some(value)
    }

    #[test]
    fn integer_parsing() {
        assert_eq!(parse_int("+7"), 7);
        assert_eq!(parse_int("-99999999999999999999"), i64::MIN);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_uint("+7"), 0);
        assert_eq!(parse_uint("-1"), 0);
        assert_eq!(parse_uint("99999999999999999999"), u64::MAX);
    }

    #[test]
    fn bool_parsing() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_bool(text), "{text}");
        }
        for text in ["0", "f", "F", "FALSE", "false", "False", "yes", "tRUE", ""] {
            assert!(!parse_bool(text), "{text}");
        }
    }

    #[test]
    fn numbers() {
        assert_eq!(to_int(some(&true)), 1);
        assert_eq!(to_int(some(&-3.9_f64)), -3);
        assert_eq!(to_int(some(&Complex64::new(2.5, 1.0))), 2);
        assert_eq!(to_int(some(&String::from("30"))), 30);
        assert_eq!(to_int(some(&'a')), 97);
        assert_eq!(to_int(None), 0);

        assert_eq!(to_uint(some(&7_u8)), 7);
        assert_eq!(to_uint(some(&"abc")), 0);

        assert_eq!(to_float(some(&false)), 0.0);
        assert_eq!(to_float(some(&"2.5")), 2.5);
        assert_eq!(to_float(some(&Complex64::new(1.5, 9.0))), 1.5);

        assert_eq!(to_complex(some(&3_i8)), Complex64::new(3.0, 0.0));
        assert_eq!(to_complex(some(&"1+2i")), Complex64::new(1.0, 2.0));
        assert_eq!(to_complex(some(&true)), Complex64::default());
    }

    #[test]
    fn booleans() {
        assert!(to_bool(some(&1_u8)));
        assert!(!to_bool(some(&0_i32)));
        assert!(!to_bool(some(&f64::NAN)));
        assert!(to_bool(some(&"True")));
        assert!(!to_bool(None));

        // Zero complex numbers are true.
        assert!(to_bool(some(&Complex64::new(0.0, 0.0))));
        assert!(!to_bool(some(&Complex64::new(1.0, 0.0))));
    }

    #[test]
    fn text() {
        assert_eq!(to_text(some(&12_u16)), "12");
        assert_eq!(to_text(some(&vec![1, 2])), "[1 2]");
        assert_eq!(to_text(some(&'x')), "x");
        assert_eq!(to_text(None), "<nil>");
    }

    #[test]
    fn exact_and_strict() {
        let value = String::from("30");
        assert_eq!(coerce::<String>(&value, true).unwrap(), "30");
        assert_eq!(coerce::<i64>(&value, false).unwrap(), 30);

        let error = coerce::<i64>(&value, true).unwrap_err();
        assert!(error.is_type_mismatch());
        assert!(error.detail().starts_with("result type not match: need i64 got "));

        let boxed: Box<dyn Reflect> = Box::new(5_i64);
        assert_eq!(coerce::<i64>(&boxed, true).unwrap(), 5);
    }

    #[test]
    fn nil_results() {
        let json = serde_json::Value::Null;
        let error = coerce::<String>(&json, false).unwrap_err();
        assert_eq!(error.detail(), "result type not match: need alloc::string::String got <nil>");

        let nil: Option<Box<i32>> = None;
        assert_eq!(coerce::<String>(&nil, false).unwrap(), "<nil>");
        assert_eq!(coerce::<i64>(&nil, false).unwrap(), 0);
        assert!(coerce::<Vec<i32>>(&nil, false).unwrap().is_empty());
        assert!(coerce::<HashMap<String, i32>>(&nil, false).unwrap().is_empty());
        assert!(coerce::<Exact<i32>>(&nil, false).is_err());
    }

    #[test]
    fn sequences() {
        let list = vec![1_i32, 2];
        assert_eq!(coerce::<Vec<i32>>(&Some(list.clone()), false).unwrap(), list);
        assert!(coerce::<Vec<i64>>(&list, false).unwrap().is_empty());

        let array = [3_u8, 4];
        assert_eq!(coerce::<Vec<u8>>(&array, false).unwrap(), [3, 4]);

        let mixed: [Box<dyn Reflect>; 2] = [Box::new(1_u8), Box::new("x")];
        assert!(coerce::<Vec<u8>>(&mixed, false).unwrap().is_empty());

        let boxed: [Box<dyn Reflect>; 2] = [Box::new(1_u8), Box::new(2_u8)];
        assert_eq!(coerce::<Vec<u8>>(&boxed, false).unwrap(), [1, 2]);

        assert!(coerce::<Vec<u8>>(&5_u8, false).unwrap().is_empty());
        assert!(coerce::<Vec<u8>>(&5_u8, true).is_err());
    }

    #[test]
    fn maps() {
        let source = json!({ "a": 1, "b": 2 });
        let map = coerce::<HashMap<String, i64>>(&source, false).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["b"], 2);

        let mut nested: HashMap<String, Vec<u8>> = HashMap::new();
        nested.insert("k".into(), vec![1, 2]);
        let ordered = coerce::<BTreeMap<String, Vec<u8>>>(&nested, false).unwrap();
        assert_eq!(ordered["k"], [1, 2]);

        let error = coerce::<HashMap<String, i64>>(&json!({ "a": "x" }), false).unwrap_err();
        assert!(error.is_type_mismatch());
        assert!(error.detail().starts_with("cannot convert result map[a:x] to "));

        assert!(coerce::<HashMap<String, i64>>(&3_i32, false).is_err());
    }
}
