use alloc::borrow::Borrow;
use alloc::boxed::Box;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::Reflect;
use crate::ops::Map;
use crate::reflection::impl_reflect_cast_fn;

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash + Clone + Send + Sync + 'static,
    V: Reflect + Clone,
    S: BuildHasher + Clone + Send + Sync + 'static,
{
    impl_reflect_cast_fn!(Map);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }
}

impl<K, V, S> Map for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash + Clone + Send + Sync + 'static,
    V: Reflect + Clone,
    S: BuildHasher + Clone + Send + Sync + 'static,
{
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        HashMap::get(self, key).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
        Box::new(HashMap::iter(self).map(|(k, v)| (k.borrow(), v as &dyn Reflect)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use std::collections::HashMap;
    use std::string::String;

    use crate::Reflect;
    use crate::ops::ReflectKind;

    #[test]
    fn hash_map() {
        let map: HashMap<String, Box<dyn Reflect>> = HashMap::from([
            (String::from("n"), 1_u32.into_boxed_reflect()),
            (String::from("s"), String::from("x").into_boxed_reflect()),
        ]);

        assert_eq!(map.reflect_kind(), ReflectKind::Map);

        let view = map.reflect_ref().as_map().unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view.get_as::<u32>("n"), Some(&1));
        assert_eq!(view.get("s").unwrap().reflect_type_path(), core::any::type_name::<String>());
        assert!(view.get("missing").is_none());
    }
}
