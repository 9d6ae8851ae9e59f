use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Map

/// A trait used to power map-like operations via reflection.
///
/// Keys are looked up as strings, so only maps whose key type can be
/// borrowed as `str` implement this trait.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_reflect::{Reflect, ops::Map};
///
/// let mut map = BTreeMap::new();
/// map.insert(String::from("key"), 42_i32);
///
/// assert_eq!(map.len(), 1);
/// assert_eq!(Map::get(&map, "key").unwrap().downcast_ref::<i32>(), Some(&42));
/// assert!(Map::get(&map, "missing").is_none());
/// ```
pub trait Map: Reflect {
    /// Returns a reference to the value associated with `key`.
    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns the number of entries in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the key-value pairs of the map.
    ///
    /// The order is the iteration order of the underlying collection.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_>;
}

impl dyn Map {
    /// Returns a typed reference to the value associated with `key`.
    ///
    /// Returns `None` if the key is absent or the value is not a `T`.
    #[inline]
    pub fn get_as<T: Reflect>(&self, key: &str) -> Option<&T> {
        self.get(key).and_then(<dyn Reflect>::downcast_ref)
    }
}
