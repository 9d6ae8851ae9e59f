use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A trait used to power list-like operations via reflection.
///
/// Lists are ordered, growable sequences such as [`Vec`](alloc::vec::Vec)
/// and [`VecDeque`](alloc::collections::VecDeque).
///
/// # Example
///
/// ```
/// use vc_reflect::{Reflect, ops::List};
///
/// let foo = vec![123_u32, 456_u32];
///
/// assert_eq!(foo.len(), 2);
///
/// let field: &dyn Reflect = List::get(&foo, 0).unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&123));
/// ```
pub trait List: Reflect {
    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the list.
    fn iter(&self) -> ListItemIter<'_>;
}

impl dyn List {
    /// Returns a typed reference to the element at `index`.
    ///
    /// Returns `None` if the index is out of bounds or the element is not a `T`.
    ///
    /// ```
    /// # use vc_reflect::ops::List;
    /// let vec = vec![10_i32, 20_i32, 30_i32];
    /// let list_ref: &dyn List = &vec;
    ///
    /// assert_eq!(list_ref.get_as::<i32>(1), Some(&20));
    /// assert_eq!(list_ref.get_as::<i32>(5), None);
    /// ```
    #[inline]
    pub fn get_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.get(index).and_then(<dyn Reflect>::downcast_ref)
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

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
