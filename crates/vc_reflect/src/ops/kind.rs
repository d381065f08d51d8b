use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Array, List, Map, Struct};
use crate::scalar::Scalar;

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of "kinds" of a reflected value.
///
/// Each variant contains a trait object with methods specific to a kind of
/// type, or the value a pointer-like wrapper refers to.
///
/// A [`ReflectRef`] is obtained via [`Reflect::reflect_ref`].
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Map(&'a dyn Map),
    /// The pointee of `Box<T>`, `Arc<T>` or `Option<T>`, `None` is nil.
    Pointer(Option<&'a dyn Reflect>),
    /// The content of a runtime-typed box, `None` is an empty box.
    Dynamic(Option<&'a dyn Reflect>),
    Scalar(Scalar<'a>),
    Opaque,
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this value.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Dynamic(_) => ReflectKind::Dynamic,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Opaque => ReflectKind::Opaque,
        }
    }

    /// Returns `true` for a nil pointer or an empty dynamic box.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Pointer(None) | Self::Dynamic(None))
    }

    #[inline]
    pub const fn as_struct(self) -> Option<&'a dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_list(self) -> Option<&'a dyn List> {
        match self {
            Self::List(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_array(self) -> Option<&'a dyn Array> {
        match self {
            Self::Array(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_map(self) -> Option<&'a dyn Map> {
        match self {
            Self::Map(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_scalar(self) -> Option<Scalar<'a>> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }
}
