use alloc::boxed::Box;
use alloc::string::String;

use crate::Reflect;
use crate::info::KeyKind;
use crate::scalar::Scalar;

// -----------------------------------------------------------------------------
// Map

/// A boxed iterator over the entries of a [`Map`].
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

/// A trait used to power [map-like] operations via [reflection].
///
/// Keys are addressed through their [`Scalar`] view, so a map can be probed
/// without knowing its concrete key type.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use vc_reflect::{ops::Map, scalar::Scalar};
///
/// let mut foo = HashMap::<u8, &'static str>::new();
/// foo.insert(7, "seven");
///
/// let map: &dyn Map = &foo;
/// assert_eq!(map.len(), 1);
///
/// let value = map.get(&Scalar::Uint(7)).unwrap();
/// assert_eq!(value.downcast_ref::<&str>(), Some(&"seven"));
/// ```
///
/// [map-like]: https://doc.rust-lang.org/book/ch08-03-hash-maps.html
/// [reflection]: crate
pub trait Map: Reflect {
    /// Returns the scalar category of the key type.
    fn key_kind(&self) -> KeyKind;

    /// Returns a reference to the value associated with the given key.
    ///
    /// Returns `None` if no key matches.
    fn get(&self, key: &Scalar<'_>) -> Option<&dyn Reflect>;

    /// Returns the number of elements in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the collection contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the key-value pairs of the map.
    ///
    /// The order is that of the underlying collection.
    fn iter(&self) -> MapIter<'_>;
}

// -----------------------------------------------------------------------------
// ReflectKey

/// A type usable as a reflected map key.
///
/// # Examples
///
/// ```
/// use vc_reflect::{ops::ReflectKey, scalar::Scalar};
///
/// assert_eq!(<u8 as ReflectKey>::from_scalar(&Scalar::Int(300)), Some(44));
/// assert!("abc".matches_scalar(&Scalar::Str("abc")));
/// ```
pub trait ReflectKey: Reflect {
    /// The scalar category of this key type.
    const KIND: KeyKind;

    /// Builds a key from a scalar of the same category.
    ///
    /// Integers convert with `as` semantics, so out-of-range values wrap.
    fn from_scalar(key: &Scalar<'_>) -> Option<Self>
    where
        Self: Sized;

    /// Returns `true` if this key equals the scalar.
    fn matches_scalar(&self, key: &Scalar<'_>) -> bool;
}

impl ReflectKey for String {
    const KIND: KeyKind = KeyKind::Text;

    #[inline]
    fn from_scalar(key: &Scalar<'_>) -> Option<Self> {
        match key {
            Scalar::Str(text) => Some(String::from(*text)),
            _ => None,
        }
    }

    #[inline]
    fn matches_scalar(&self, key: &Scalar<'_>) -> bool {
        matches!(key, Scalar::Str(text) if *text == self.as_str())
    }
}

impl ReflectKey for &'static str {
    const KIND: KeyKind = KeyKind::Text;

    // A borrowed key cannot outlive the scalar, lookups scan instead.
    #[inline]
    fn from_scalar(_key: &Scalar<'_>) -> Option<Self> {
        None
    }

    #[inline]
    fn matches_scalar(&self, key: &Scalar<'_>) -> bool {
        matches!(key, Scalar::Str(text) if text == self)
    }
}

impl ReflectKey for bool {
    const KIND: KeyKind = KeyKind::Bool;

    #[inline]
    fn from_scalar(key: &Scalar<'_>) -> Option<Self> {
        match key {
            Scalar::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    fn matches_scalar(&self, key: &Scalar<'_>) -> bool {
        matches!(key, Scalar::Bool(value) if value == self)
    }
}

macro_rules! impl_integer_key {
    ($kind:ident: $($ty:ty),*) => {$(
        impl ReflectKey for $ty {
            const KIND: KeyKind = KeyKind::$kind;

            #[inline]
            fn from_scalar(key: &Scalar<'_>) -> Option<Self> {
                match key {
                    Scalar::Int(value) => Some(*value as $ty),
                    Scalar::Uint(value) => Some(*value as $ty),
                    _ => None,
                }
            }

            #[inline]
            fn matches_scalar(&self, key: &Scalar<'_>) -> bool {
                <$ty as ReflectKey>::from_scalar(key).is_some_and(|value| value == *self)
            }
        }
    )*};
}

impl_integer_key!(Int: i8, i16, i32, i64, isize);
impl_integer_key!(Uint: u8, u16, u32, u64, usize);
