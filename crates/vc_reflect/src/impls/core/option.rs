use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::ReflectRef;

/// `None` is the nil pointer.
impl<T: Reflect> Reflect for Option<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self.as_ref().map(Reflect::as_reflect))
    }
}
