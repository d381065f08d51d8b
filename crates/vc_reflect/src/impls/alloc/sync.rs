use alloc::sync::Arc;

use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::ReflectRef;

impl<T: Reflect> Reflect for Arc<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(Some(&**self))
    }
}
