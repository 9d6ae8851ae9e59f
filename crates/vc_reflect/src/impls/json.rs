use alloc::boxed::Box;
use alloc::string::String;
use core::any::Any;
use core::fmt;

use serde_json::Value;

use crate::Reflect;
use crate::ops::{Map, Pointer, ReflectKind, ReflectRef};
use crate::reflection::impl_reflect_cast_fn;

/// `Object` is a map, `Array` a list and `Null` a null pointer.
/// Other variants are opaque.
impl Reflect for Value {
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
        "serde_json::Value"
    }

    fn reflect_kind(&self) -> ReflectKind {
        match self {
            Value::Null => ReflectKind::Pointer,
            Value::Array(_) => ReflectKind::List,
            Value::Object(_) => ReflectKind::Map,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => ReflectKind::Opaque,
        }
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Value::Null => ReflectRef::Pointer(self),
            Value::Array(values) => ReflectRef::List(values),
            Value::Object(entries) => ReflectRef::Map(entries),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => ReflectRef::Opaque(self),
        }
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Only reported for [`Value::Null`], which never has a pointee.
impl Pointer for Value {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        None
    }
}

impl Reflect for serde_json::Map<String, Value> {
    impl_reflect_cast_fn!(Map);

    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        "serde_json::Map"
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }
}

impl Map for serde_json::Map<String, Value> {
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        serde_json::Map::get(self, key).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        serde_json::Map::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
        Box::new(serde_json::Map::iter(self).map(|(k, v)| (k.as_str(), v as &dyn Reflect)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::Reflect;
    use crate::ops::ReflectKind;

    #[test]
    fn value_shapes() {
        let value = json!({ "list": [1, 2], "null": null, "n": 5 });

        let map = value.reflect_ref().as_map().unwrap();
        assert_eq!(map.len(), 3);

        let list = map.get("list").unwrap().reflect_ref().as_list().unwrap();
        assert_eq!(list.get(1).unwrap().downcast_ref::<Value>(), Some(&json!(2)));

        let null = map.get("null").unwrap();
        assert_eq!(null.reflect_kind(), ReflectKind::Pointer);
        assert!(null.reflect_ref().as_pointer().unwrap().is_null());

        assert_eq!(map.get("n").unwrap().reflect_kind(), ReflectKind::Opaque);
        assert_eq!(value.reflect_type_path(), "serde_json::Value");
    }
}
