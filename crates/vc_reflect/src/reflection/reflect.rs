use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::ReflectKind;
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for read-only runtime reflection in [`vc_reflect`].
///
/// A reflected value describes its own shape through [`reflect_ref`], which
/// borrows it as one of the sub-traits ([`Struct`], [`List`], [`Array`], [`Map`]),
/// as a pointer-like or dynamic box around another value, or as a [`Scalar`].
///
/// # Recommendations
///
/// It's strongly recommended to use [the derive macro for `Reflect`] rather than
/// manually implementing this trait for structs.
///
/// # Type Identification
///
/// While `Reflect` supports [`Any`], note that [`Any::type_id`] on `Box<dyn Reflect>`
/// returns the container's type ID, not the inner value's. Use [`Reflect::ty_id`]
/// on the dereferenced value instead:
///
/// ```rust
/// # use vc_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>()); // Container type ID
/// assert!((*x).ty_id() == TypeId::of::<i32>()); // Inner type ID
/// ```
///
/// # Manual Implementation
///
/// Only [`reflect_ref`] is required. Scalars usually also forward
/// [`reflect_display`] and [`reflect_debug`] to their own formatting:
///
/// ```rust, ignore
/// fn reflect_kind(&self) -> ReflectKind {
///     ReflectKind::Kind  // e.g., ReflectKind::Struct, ReflectKind::Map
/// }
///
/// fn reflect_ref(&self) -> ReflectRef<'_> {
///     ReflectRef::Kind(self)  // Construct appropriate ReflectRef variant
/// }
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_display`]: Reflect::reflect_display
/// [`reflect_debug`]: Reflect::reflect_debug
/// [`vc_reflect`]: crate
/// [the derive macro for `Reflect`]: crate::derive::Reflect
/// [`Struct`]: crate::ops::Struct
/// [`List`]: crate::ops::List
/// [`Array`]: crate::ops::Array
/// [`Map`]: crate::ops::Map
/// [`Scalar`]: crate::scalar::Scalar
/// [`Any`]: core::any::Any
pub trait Reflect: Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use vc_reflect::Reflect;
    ///
    /// let x = 32;
    /// let r: &dyn Reflect = x.as_reflect();
    /// // Equal to this:
    /// // let r: &dyn Reflect = &x;
    /// ```
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use vc_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// // Equal to this:
    /// // let r = Box::new(32) as Box<dyn Reflect>;
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the full name of the underlying type, as [`core::any::type_name`].
    ///
    /// The result is for diagnostics only, the exact format is not stable.
    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns a pure enumeration of ["kinds"](ReflectKind) of type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::{Reflect, info::ReflectKind};
    /// let vec = vec![1, 2, 3];
    ///
    /// assert_eq!(vec.reflect_kind(), ReflectKind::List);
    /// ```
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_ref().kind()
    }

    /// Returns an immutable enumeration of ["kinds"](ReflectRef) of type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::{Reflect, ops::List};
    /// let vec = vec![1, 2, 3];
    ///
    /// let list: &dyn List = vec.reflect_ref().as_list().unwrap();
    /// assert_eq!(list.len(), 3);
    /// ```
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a serde view of the value, if the type serializes itself.
    ///
    /// [`SerializeDriver`](crate::serde::SerializeDriver) prefers this hook over
    /// the reflected structure. Opaque types must provide it to be serializable.
    #[inline]
    fn reflect_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        None
    }

    /// Textual formatter for the value, used by `Display for dyn Reflect`.
    ///
    /// Composite values render their elements recursively:
    ///
    /// - struct: `{a b c}`, declared fields in order.
    /// - list and array: `[a b c]`.
    /// - map: `map[k:v k:v]`, keys sorted.
    /// - nil pointer or box: `<nil>`, otherwise the pointee.
    /// - opaque: `<type name>`.
    ///
    /// See [`crate::impls::struct_display`] and its siblings.
    fn reflect_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_display(data, f),
            ReflectRef::List(data) => impls::list_display(data, f),
            ReflectRef::Array(data) => impls::array_display(data, f),
            ReflectRef::Map(data) => impls::map_display(data, f),
            ReflectRef::Pointer(Some(data)) | ReflectRef::Dynamic(Some(data)) => {
                data.reflect_display(f)
            }
            ReflectRef::Pointer(None) | ReflectRef::Dynamic(None) => f.write_str("<nil>"),
            ReflectRef::Scalar(data) => fmt::Display::fmt(&data, f),
            ReflectRef::Opaque => write!(f, "<{}>", self.reflect_type_name()),
        }
    }

    /// Debug formatter for the value.
    ///
    /// For opaque type, this function will write `"Opaque(type_name)"` by default.
    ///
    /// For other type, see:
    /// - [`crate::impls::struct_debug`]
    /// - [`crate::impls::list_debug`]
    /// - [`crate::impls::array_debug`]
    /// - [`crate::impls::map_debug`]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Array(data) => impls::array_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(Some(data)) | ReflectRef::Dynamic(Some(data)) => {
                data.reflect_debug(f)
            }
            ReflectRef::Pointer(None) | ReflectRef::Dynamic(None) => f.write_str("None"),
            ReflectRef::Scalar(data) => fmt::Debug::fmt(&data, f),
            ReflectRef::Opaque => write!(f, "Opaque({})", self.reflect_type_name()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: &dyn Reflect = &10_i32;
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: &dyn Reflect = &10_i32;
    ///
    /// let y = x.downcast_ref::<i32>().unwrap();
    /// assert_eq!(*y, 10);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl fmt::Display for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_display(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `reflect_kind` and `reflect_ref` for composite kinds.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::ToString;
    use alloc::vec;
    use core::any::TypeId;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn downcast_through_dyn() {
        let value: &dyn Reflect = &vec![1_u8, 2];
        assert!(value.is::<alloc::vec::Vec<u8>>());
        assert_eq!(value.downcast_ref::<alloc::vec::Vec<u8>>().unwrap().len(), 2);
        assert!(value.downcast_ref::<u8>().is_none());
    }

    #[test]
    fn boxed_type_id() {
        let boxed: Box<dyn Reflect> = Box::new(1_i64);
        assert_eq!((*boxed).ty_id(), TypeId::of::<i64>());
        assert_eq!((*boxed).reflect_kind(), ReflectKind::Scalar);
        assert_eq!(boxed.reflect_kind(), ReflectKind::Dynamic);
    }

    #[test]
    fn display_and_debug() {
        let value: &dyn Reflect = &vec!["a", "b"];
        assert_eq!(value.to_string(), "[a b]");
        assert_eq!(alloc::format!("{value:?}"), r#"["a", "b"]"#);
    }
}
