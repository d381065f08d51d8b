use core::fmt;

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected value.
///
/// Composite kinds correspond to a reflection sub-trait, such as `Struct` or `List`.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`] or [`ReflectRef::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Array,
    Map,
    /// `Box<T>`, `Arc<T>`, `Option<T>`.
    Pointer,
    /// A boxed value whose concrete type is only known at runtime.
    Dynamic,
    Scalar,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("struct"),
            Self::List => f.pad("list"),
            Self::Array => f.pad("array"),
            Self::Map => f.pad("map"),
            Self::Pointer => f.pad("pointer"),
            Self::Dynamic => f.pad("dynamic"),
            Self::Scalar => f.pad("scalar"),
            Self::Opaque => f.pad("opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// KeyKind

/// The scalar category of a map's key type.
///
/// Lookups convert textual keys into this category before probing the map.
/// See [`ReflectKey`](crate::ops::ReflectKey).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// `String`, `&'static str`.
    Text,
    Bool,
    /// Signed integers.
    Int,
    /// Unsigned integers.
    Uint,
    /// Any key type that cannot be built from text.
    Other,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.pad("text"),
            Self::Bool => f.pad("bool"),
            Self::Int => f.pad("int"),
            Self::Uint => f.pad("uint"),
            Self::Other => f.pad("other"),
        }
    }
}
