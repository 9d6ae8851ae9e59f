use crate::Reflect;

// -----------------------------------------------------------------------------
// Pointer

/// A trait for a single nullable indirection, such as [`Option<T>`].
///
/// Owning wrappers that can never be null (`Box<T>`, `Arc<T>`, `&'static T`)
/// are not pointers: they report the shape of the value they hold.
///
/// # Example
///
/// ```
/// use vc_reflect::{Reflect, ops::Pointer};
///
/// let some = Some(5_u8);
/// let none: Option<u8> = None;
///
/// assert_eq!(some.pointee().unwrap().downcast_ref::<u8>(), Some(&5));
/// assert!(none.is_null());
/// ```
pub trait Pointer: Reflect {
    /// Returns the value behind the indirection, or `None` if it is null.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns `true` if the indirection is null.
    #[inline]
    fn is_null(&self) -> bool {
        self.pointee().is_none()
    }
}
