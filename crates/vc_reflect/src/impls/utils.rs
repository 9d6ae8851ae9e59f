use core::fmt;

use crate::ops::{Array, List, Map, Pointer, Struct};

// Non inline: only compiled once.

/// A function used to implement [`Reflect::reflect_debug`] for structs.
///
/// Prints like `#[derive(Debug)]`, using the reflected type path as name.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_path());
    for index in 0..dyn_struct.field_len() {
        if let (Some(name), Some(field)) = (dyn_struct.name_at(index), dyn_struct.field_at(index)) {
            debug.field(name, &field as &dyn fmt::Debug);
        }
    }
    debug.finish()
}

/// A function used to implement [`Reflect::reflect_debug`] for lists.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function used to implement [`Reflect::reflect_debug`] for arrays.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn array_debug(dyn_array: &dyn Array, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_array.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function used to implement [`Reflect::reflect_debug`] for maps.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function used to implement [`Reflect::reflect_debug`] for pointers.
///
/// A null pointer prints `None`, otherwise the pointee is printed as is.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Some(value) => value.reflect_debug(f),
        None => f.write_str("None"),
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;

    use crate::Reflect;
    use crate::ops::DynamicStruct;

    #[test]
    fn debug_output() {
        let mut map = BTreeMap::new();
        map.insert(String::from("k"), vec![1_u8, 2]);

        let mut value = DynamicStruct::with_type_path("Foo");
        value.insert("map", map);
        value.insert("arr", [Some(1_i32), None]);

        let value: &dyn Reflect = &value;
        assert_eq!(
            format!("{value:?}"),
            r#"Foo { map: {"k": [1, 2]}, arr: [1, None] }"#
        );
    }
}
