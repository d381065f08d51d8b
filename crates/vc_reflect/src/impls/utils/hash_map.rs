// -----------------------------------------------------------------------------
// For normal HashMap

macro_rules! impl_reflect_for_hashmap {
    ($ty:path) => {
        impl<K, V, S> $crate::Reflect for $ty
        where
            K: $crate::ops::ReflectKey + Eq + ::core::hash::Hash,
            V: $crate::Reflect,
            S: ::core::hash::BuildHasher + Send + Sync + 'static,
        {
            $crate::reflection::impl_reflect_cast_fn!(Map);
        }

        impl<K, V, S> $crate::ops::Map for $ty
        where
            K: $crate::ops::ReflectKey + Eq + ::core::hash::Hash,
            V: $crate::Reflect,
            S: ::core::hash::BuildHasher + Send + Sync + 'static,
        {
            #[inline]
            fn key_kind(&self) -> $crate::info::KeyKind {
                <K as $crate::ops::ReflectKey>::KIND
            }

            fn get(&self, key: &$crate::scalar::Scalar<'_>) -> Option<&dyn $crate::Reflect> {
                match <K as $crate::ops::ReflectKey>::from_scalar(key) {
                    Some(key) => Self::get(self, &key).map(|value| value as &dyn $crate::Reflect),
                    None => Self::iter(self)
                        .find(|(candidate, _)| $crate::ops::ReflectKey::matches_scalar(*candidate, key))
                        .map(|(_, value)| value as &dyn $crate::Reflect),
                }
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> $crate::ops::MapIter<'_> {
                ::alloc::boxed::Box::new(Self::iter(self).map(|(key, value)| {
                    (key as &dyn $crate::Reflect, value as &dyn $crate::Reflect)
                }))
            }
        }
    };
}

pub(crate) use impl_reflect_for_hashmap;
