use alloc::borrow::{Borrow, Cow};
use alloc::boxed::Box;
use alloc::collections::{BTreeMap, VecDeque};
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::{Any, TypeId};
use core::fmt;

use crate::Reflect;
use crate::impls::native::impl_reflect_opaque;
use crate::ops::{List, ListItemIter, Map, ReflectKind, ReflectRef};
use crate::reflection::impl_reflect_cast_fn;

impl_reflect_opaque!(String, Cow<'static, str>);

// -----------------------------------------------------------------------------
// Lists

macro_rules! impl_reflect_list {
    ($($ty:ty),*) => {$(
        impl<T: Reflect + Clone> Reflect for $ty {
            impl_reflect_cast_fn!(List);

            #[inline]
            fn reflect_clone(&self) -> Box<dyn Reflect> {
                Box::new(self.clone())
            }
        }
    )*};
}

impl_reflect_list!(Vec<T>, VecDeque<T>, Box<[T]>);

impl<T: Reflect + Clone> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

impl<T: Reflect + Clone> List for Box<[T]> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

impl<T: Reflect + Clone> List for VecDeque<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(|value| value as &dyn Reflect)
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

// -----------------------------------------------------------------------------
// BTreeMap

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Borrow<str> + Ord + Clone + Send + Sync + 'static,
    V: Reflect + Clone,
{
    impl_reflect_cast_fn!(Map);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Borrow<str> + Ord + Clone + Send + Sync + 'static,
    V: Reflect + Clone,
{
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        BTreeMap::get(self, key).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
        Box::new(BTreeMap::iter(self).map(|(k, v)| (k.borrow(), v as &dyn Reflect)))
    }
}

// -----------------------------------------------------------------------------
// Box<T>

impl<T: Reflect> Reflect for Box<T> {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        (*self).into_any()
    }

    #[inline]
    fn ty_id(&self) -> TypeId {
        (**self).ty_id()
    }

    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        (**self).reflect_type_path()
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        (**self).reflect_kind()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        (**self).reflect_clone()
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Arc<T>

impl<T: Reflect> Reflect for Arc<T> {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        (**self).reflect_type_path()
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        (**self).reflect_kind()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(Arc::clone(self))
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, VecDeque};
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::ops::{List, ReflectKind};

    #[test]
    fn strings_are_opaque() {
        assert_eq!(String::new().reflect_kind(), ReflectKind::Opaque);
        assert_eq!(Cow::<'static, str>::Borrowed("a").reflect_kind(), ReflectKind::Opaque);
    }

    #[test]
    fn lists() {
        let vec = vec![1_i32, 2, 3];
        let deque: VecDeque<i32> = vec.as_slice().iter().copied().collect();
        let boxed: Box<[i32]> = vec.clone().into_boxed_slice();

        for value in [&vec as &dyn Reflect, &deque, &boxed] {
            let list = value.reflect_ref().as_list().unwrap();
            assert_eq!(list.len(), 3);
            assert_eq!(list.get(2).unwrap().downcast_ref::<i32>(), Some(&3));
            assert!(list.get(3).is_none());
            assert_eq!(list.iter().filter_map(<dyn Reflect>::downcast_ref::<i32>).sum::<i32>(), 6);
        }

        let empty: Vec<u8> = Vec::new();
        assert!(List::is_empty(&empty));
    }

    #[test]
    fn btree_map() {
        let mut map = BTreeMap::new();
        map.insert(String::from("b"), 2_u8);
        map.insert(String::from("a"), 1_u8);

        let view = map.reflect_ref().as_map().unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view.get_as::<u8>("a"), Some(&1));
        assert!(view.get("c").is_none());

        let keys: Vec<&str> = view.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);

        let static_keys: BTreeMap<&'static str, u8> = BTreeMap::from([("k", 0)]);
        assert!(static_keys.reflect_ref().as_map().unwrap().get("k").is_some());
    }

    #[test]
    fn box_is_transparent() {
        let value: Box<Vec<u8>> = Box::new(vec![7]);

        assert_eq!(value.reflect_kind(), ReflectKind::List);
        assert_eq!(Reflect::reflect_type_path(&value), core::any::type_name::<Vec<u8>>());

        let any: &dyn Reflect = &value;
        assert!(any.is::<Vec<u8>>());

        let cloned = any.reflect_clone();
        assert_eq!(cloned.take::<Vec<u8>>().ok(), Some(vec![7]));
    }

    #[test]
    fn arc_keeps_handle_identity() {
        let value = Arc::new(vec![1_u8]);
        let any: &dyn Reflect = &value;

        assert_eq!(any.reflect_kind(), ReflectKind::List);
        assert_eq!(any.reflect_type_path(), core::any::type_name::<Vec<u8>>());
        assert!(any.is::<Arc<Vec<u8>>>());

        let cloned = any.reflect_clone().take::<Arc<Vec<u8>>>().ok().unwrap();
        assert!(Arc::ptr_eq(&cloned, &value));
    }
}
