use core::fmt;

use crate::Reflect;
use crate::ops::{Array, List, Map, Pointer, Struct};

// -----------------------------------------------------------------------------
// ReflectKind

/// A zero-sized enumeration of the shapes a reflected value can have.
///
/// Each variant matches one variant of [`ReflectRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReflectKind {
    /// Named fields, see [`Struct`].
    Struct,
    /// Growable indexed elements, see [`List`].
    List,
    /// Fixed-size indexed elements, see [`Array`].
    Array,
    /// Values addressed by string keys, see [`Map`].
    Map,
    /// A single, possibly null, indirection, see [`Pointer`].
    Pointer,
    /// No addressable content.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Struct => "struct",
            Self::List => "list",
            Self::Array => "array",
            Self::Map => "map",
            Self::Pointer => "pointer",
            Self::Opaque => "opaque",
        })
    }
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value through its shape capability.
///
/// Obtained from [`Reflect::reflect_ref`].
///
/// ```
/// use vc_reflect::{Reflect, ops::ReflectRef};
///
/// let v = vec![1_u8, 2, 3];
/// match v.reflect_ref() {
///     ReflectRef::List(list) => assert_eq!(list.len(), 3),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

macro_rules! impl_as_fn {
    ($name:ident, $kind:ident, $ty:ty) => {
        #[doc = concat!("Returns the [`", stringify!($kind), "`] view, or `None` for other shapes.")]
        #[inline]
        pub fn $name(self) -> Option<&'a $ty> {
            match self {
                Self::$kind(value) => Some(value),
                _ => None,
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this view.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_as_fn!(as_struct, Struct, dyn Struct);
    impl_as_fn!(as_list, List, dyn List);
    impl_as_fn!(as_array, Array, dyn Array);
    impl_as_fn!(as_map, Map, dyn Map);
    impl_as_fn!(as_pointer, Pointer, dyn Pointer);
    impl_as_fn!(as_opaque, Opaque, dyn Reflect);
}

impl fmt::Debug for ReflectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReflectRef::{:?}", self.kind())
    }
}
