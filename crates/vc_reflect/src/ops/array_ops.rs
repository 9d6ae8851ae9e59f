use crate::Reflect;

// -----------------------------------------------------------------------------
// Array

/// A trait used to power fixed-size array operations via reflection.
///
/// # Example
///
/// ```
/// use vc_reflect::{Reflect, ops::Array};
///
/// let foo: [u8; 3] = [1, 2, 3];
///
/// assert_eq!(Array::len(&foo), 3);
/// assert_eq!(Array::get(&foo, 2).unwrap().downcast_ref::<u8>(), Some(&3));
/// assert!(Array::get(&foo, 3).is_none());
/// ```
pub trait Array: Reflect {
    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of elements in the array.
    fn len(&self) -> usize;

    /// Returns `true` if the array is zero-sized.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the array.
    fn iter(&self) -> ArrayItemIter<'_>;
}

// -----------------------------------------------------------------------------
// ArrayItemIter

/// An iterator over the elements of an [`Array`].
pub struct ArrayItemIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl<'a> ArrayItemIter<'a> {
    #[inline(always)]
    pub const fn new(array: &'a dyn Array) -> Self {
        Self { array, index: 0 }
    }
}

impl<'a> Iterator for ArrayItemIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.array.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ArrayItemIter<'_> {}
