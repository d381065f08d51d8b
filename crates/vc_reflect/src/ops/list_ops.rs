use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A trait used to power [list-like] operations via [reflection].
///
/// This corresponds to types like [`Vec`](alloc::vec::Vec) and
/// [`VecDeque`](alloc::collections::VecDeque).
///
/// # Example
///
/// ```
/// use vc_reflect::ops::List;
///
/// let foo: &dyn List = &vec![123_u32, 321_u32];
/// assert_eq!(foo.len(), 2);
///
/// let field = foo.get(0).unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&123));
/// ```
///
/// [list-like]: https://doc.rust-lang.org/book/ch08-01-vectors.html
/// [reflection]: crate
pub trait List: Reflect {
    /// Returns a reference to the element at the given index, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the collection contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the list.
    fn iter(&self) -> ListItemIter<'_>;
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over an [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
