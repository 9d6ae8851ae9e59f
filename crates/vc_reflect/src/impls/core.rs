use alloc::boxed::Box;

use crate::Reflect;
use crate::ops::Pointer;
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect + Clone> Reflect for Option<T> {
    impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }
}

impl<T: Reflect + Clone> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::ops::{Pointer, ReflectKind};

    #[test]
    fn option_is_nullable_pointer() {
        let some = Some(String::from("x"));
        let none: Option<String> = None;

        assert_eq!(some.reflect_kind(), ReflectKind::Pointer);
        assert_eq!(
            Pointer::pointee(&some).and_then(<dyn Reflect>::downcast_ref::<String>),
            Some(&String::from("x"))
        );
        assert!(Pointer::is_null(&none));
        assert_eq!(format!("{:?}", &none as &dyn Reflect), "None");
        assert_eq!(format!("{:?}", &some as &dyn Reflect), "\"x\"");
    }
}
