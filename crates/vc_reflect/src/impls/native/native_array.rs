use crate::Reflect;
use crate::ops::{Array, ArrayItemIter};

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    crate::reflection::impl_reflect_cast_fn!(Array);
}

impl<T: Reflect, const N: usize> Array for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn iter(&self) -> ArrayItemIter<'_> {
        ArrayItemIter::new(self)
    }
}
