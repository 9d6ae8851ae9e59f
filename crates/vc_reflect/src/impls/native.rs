use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::Reflect;
use crate::ops::{Array, ArrayItemIter, ReflectKind, ReflectRef};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Opaque

/// Implements an opaque [`Reflect`] for types that are `Clone + Debug`.
macro_rules! impl_reflect_opaque {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::Reflect for $ty {
            $crate::reflection::impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn reflect_clone(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
                ::alloc::boxed::Box::new(::core::clone::Clone::clone(self))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

pub(super) use impl_reflect_opaque;

impl_reflect_opaque!(
    bool, char, (),
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    &'static str,
);

// -----------------------------------------------------------------------------
// [T; N]

impl<T: Reflect + Clone, const N: usize> Reflect for [T; N] {
    impl_reflect_cast_fn!(Array);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }
}

impl<T: Reflect + Clone, const N: usize> Array for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn iter(&self) -> ArrayItemIter<'_> {
        ArrayItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// &'static T

impl<T: Reflect> Reflect for &'static T {
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
        Box::new(*self)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::Reflect;
    use crate::ops::{ReflectKind, ReflectRef};

    #[test]
    fn primitives_are_opaque() {
        let values: [&dyn Reflect; 4] = [&1_u8, &true, &'c', &"str"];
        for value in values {
            assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
            assert!(matches!(value.reflect_ref(), ReflectRef::Opaque(_)));
        }
        assert_eq!(format!("{:?}", &1.5_f32 as &dyn Reflect), "1.5");
        assert_eq!((&"str" as &dyn Reflect).reflect_type_path(), "&str");
    }

    #[test]
    fn fixed_array() {
        let value = [10_u16, 20, 30];
        let array = value.reflect_ref().as_array().unwrap();

        assert_eq!(array.len(), 3);
        assert_eq!(array.get(1).unwrap().downcast_ref::<u16>(), Some(&20));
        assert!(array.get(3).is_none());
        assert_eq!(array.iter().count(), 3);
    }

    #[test]
    fn static_ref_has_shape_of_target() {
        static VALUE: [u8; 2] = [1, 2];
        let value: &'static [u8; 2] = &VALUE;

        assert_eq!(value.reflect_kind(), ReflectKind::Array);
        assert_eq!(Reflect::reflect_type_path(&value), "[u8; 2]");

        let cloned = Reflect::reflect_clone(&value);
        assert!(cloned.is::<&'static [u8; 2]>());
    }
}
