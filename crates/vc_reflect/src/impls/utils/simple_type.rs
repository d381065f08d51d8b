/// Implement [`Reflect`](crate::Reflect) for a primitive with a [`Scalar`] view.
///
/// The type's own `Display` and `Debug` are used for formatting.
///
/// [`Scalar`]: crate::scalar::Scalar
macro_rules! impl_scalar_reflect {
    ($($ty:ty => |$this:ident| $scalar:expr),* $(,)?) => {$(
        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::info::ReflectKind::Scalar
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                let $this = self;
                $crate::ops::ReflectRef::Scalar($scalar)
            }

            #[inline]
            fn reflect_display(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

pub(crate) use impl_scalar_reflect;
