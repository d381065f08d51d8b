use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::Reflect;
use crate::info::KeyKind;
use crate::ops::{Map, MapIter, ReflectKey};
use crate::scalar::Scalar;

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: ReflectKey + Ord,
    V: Reflect,
{
    crate::reflection::impl_reflect_cast_fn!(Map);
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: ReflectKey + Ord,
    V: Reflect,
{
    #[inline]
    fn key_kind(&self) -> KeyKind {
        K::KIND
    }

    fn get(&self, key: &Scalar<'_>) -> Option<&dyn Reflect> {
        match K::from_scalar(key) {
            Some(key) => BTreeMap::get(self, &key).map(Reflect::as_reflect),
            None => BTreeMap::iter(self)
                .find(|(candidate, _)| candidate.matches_scalar(key))
                .map(|(_, value)| value.as_reflect()),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> MapIter<'_> {
        Box::new(
            BTreeMap::iter(self).map(|(key, value)| (key.as_reflect(), value.as_reflect())),
        )
    }
}
