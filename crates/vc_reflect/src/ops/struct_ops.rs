use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Struct

/// A trait used to power struct-like operations via reflection.
///
/// Fields are addressed by their exact, case-sensitive name. Only the
/// fields a type chooses to expose are visible: the derive macro exposes
/// `pub` fields and numbers tuple-struct fields `"0"`, `"1"`, ...
///
/// # Example
///
/// ```
/// use vc_reflect::{Reflect, derive::Reflect, ops::Struct};
///
/// #[derive(Reflect, Clone)]
/// struct Foo {
///     pub bar: u32,
/// }
///
/// let foo = Foo { bar: 123 };
///
/// assert_eq!(foo.field_len(), 1);
/// assert_eq!(foo.name_at(0), Some("bar"));
///
/// let field: &dyn Reflect = foo.field("bar").unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&123));
/// ```
pub trait Struct: Reflect {
    /// Returns a reference to the value of the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns a reference to the value of the field with index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the name of the field with index `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of exposed fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the values of the exposed fields.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

impl dyn Struct {
    /// Returns a typed reference to the field named `name`.
    ///
    /// Returns `None` if the field does not exist or is not a `T`.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}

// -----------------------------------------------------------------------------
// DynamicStruct

/// A struct-shaped value assembled at runtime.
///
/// Field order is insertion order. Inserting an existing name replaces
/// the value in place.
///
/// ```
/// use vc_reflect::{Reflect, ops::{DynamicStruct, Struct}};
///
/// let mut point = DynamicStruct::with_type_path("Point");
/// point.insert("x", 1_i32);
/// point.insert("y", 2_i32);
///
/// assert_eq!(point.reflect_type_path(), "Point");
/// assert_eq!(point.field("y").unwrap().downcast_ref::<i32>(), Some(&2));
/// ```
#[derive(Clone, Default)]
pub struct DynamicStruct {
    type_path: Option<&'static str>,
    fields: Vec<(Cow<'static, str>, Box<dyn Reflect>)>,
}

impl DynamicStruct {
    /// Creates an empty struct reporting its own type path.
    #[inline]
    pub const fn new() -> Self {
        Self {
            type_path: None,
            fields: Vec::new(),
        }
    }

    /// Creates an empty struct reporting `type_path` in diagnostics.
    #[inline]
    pub const fn with_type_path(type_path: &'static str) -> Self {
        Self {
            type_path: Some(type_path),
            fields: Vec::new(),
        }
    }

    /// Inserts a field, replacing the value of an existing one.
    #[inline]
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl Reflect) {
        self.insert_boxed(name, Box::new(value));
    }

    /// Inserts a boxed field, replacing the value of an existing one.
    pub fn insert_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Reflect>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Box<dyn Reflect>)> for DynamicStruct {
    fn from_iter<I: IntoIterator<Item = (N, Box<dyn Reflect>)>>(iter: I) -> Self {
        let mut out = Self::new();
        iter.into_iter()
            .for_each(|(name, value)| out.insert_boxed(name, value));
        out
    }
}

impl Reflect for DynamicStruct {
    impl_reflect_cast_fn!(Struct);

    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        self.type_path.unwrap_or(core::any::type_name::<Self>())
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }
}

impl Struct for DynamicStruct {
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| &**value)
    }

    #[inline]
    fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
        self.fields.get(index).map(|(_, value)| &**value)
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|(name, _)| &**name)
    }

    #[inline]
    fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}
