use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::ReflectRef;

impl Reflect for () {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Opaque
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Opaque
    }

    #[inline]
    fn reflect_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }

    fn reflect_display(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("()")
    }
}
