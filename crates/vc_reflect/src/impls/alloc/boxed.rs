use alloc::boxed::Box;

use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::ReflectRef;

impl<T: Reflect> Reflect for Box<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(Some(&**self))
    }
}

/// A boxed trait object is a [`Dynamic`](ReflectRef::Dynamic) box.
///
/// Method calls on a `Box<dyn Reflect>` resolve to this impl, dereference
/// the box first to reach the content.
impl Reflect for Box<dyn Reflect> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Dynamic
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Dynamic(Some(&**self))
    }
}
