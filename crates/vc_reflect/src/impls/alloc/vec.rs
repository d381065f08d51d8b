use alloc::vec::Vec;

use crate::Reflect;
use crate::ops::{List, ListItemIter};

impl<T: Reflect> Reflect for Vec<T> {
    crate::reflection::impl_reflect_cast_fn!(List);
}

impl<T: Reflect> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}
