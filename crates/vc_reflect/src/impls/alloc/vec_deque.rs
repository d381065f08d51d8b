use alloc::collections::VecDeque;

use crate::Reflect;
use crate::ops::{List, ListItemIter};

impl<T: Reflect> Reflect for VecDeque<T> {
    crate::reflection::impl_reflect_cast_fn!(List);
}

impl<T: Reflect> List for VecDeque<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}
