use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::ops::{ReflectKind, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of [`vc_reflect`](crate).
///
/// A `Reflect` value can report its type name and its *shape*
/// ([`ReflectRef`]) at runtime, which lets generic code walk a value graph
/// without knowing the concrete types inside it.
///
/// # Implementing
///
/// Prefer [`#[derive(Reflect)]`](crate::derive::Reflect). Std, alloc and core
/// types are covered by this crate, see [`impls`](crate::impls).
///
/// A manual implementation for an opaque type looks like this:
///
/// ```
/// use core::any::Any;
/// use vc_reflect::{Reflect, ops::{ReflectKind, ReflectRef}};
///
/// #[derive(Clone, Debug)]
/// struct Celsius(f32);
///
/// impl Reflect for Celsius {
///     fn as_any(&self) -> &dyn Any { self }
///     fn into_any(self: Box<Self>) -> Box<dyn Any> { self }
///     fn reflect_kind(&self) -> ReflectKind { ReflectKind::Opaque }
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
///     fn reflect_clone(&self) -> Box<dyn Reflect> { Box::new(self.clone()) }
/// }
///
/// let value: &dyn Reflect = &Celsius(21.5);
/// assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
/// assert_eq!(value.downcast_ref::<Celsius>().unwrap().0, 21.5);
/// ```
///
/// # Type-erased values
///
/// `Box<dyn Reflect>` is itself `Reflect` and is fully transparent: its type
/// path, shape and [`Any`] identity are those of the boxed value. It plays the
/// role of an "any" slot inside heterogeneous graphs such as
/// `HashMap<String, Box<dyn Reflect>>`.
///
/// ```
/// # use vc_reflect::Reflect;
/// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
/// let slot: Box<dyn Reflect> = Box::new(x);
///
/// assert!(slot.is::<i32>());
/// assert_eq!(slot.reflect_type_path(), "i32");
/// ```
pub trait Reflect: Any + Send + Sync {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    ///
    /// ```
    /// use vc_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// assert!(r.is::<i32>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the underlying value as [`Any`].
    ///
    /// Implementations return `self`, except for transparent containers
    /// which forward to the value they hold.
    fn as_any(&self) -> &dyn Any;

    /// Converts the boxed value into a boxed [`Any`], see [`Reflect::as_any`].
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Returns the [`TypeId`] of the underlying type.
    ///
    /// Unlike [`Any::type_id`] on a `Box<dyn Reflect>`, this never
    /// reports the container.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the type name used in diagnostics.
    ///
    /// Defaults to [`core::any::type_name`]. The derive macro lets a type
    /// pin a stable name with `#[reflect(type_path = "...")]`.
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns the shape of this value without borrowing it.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns the shape of this value together with its capability.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Clones the value behind the trait object.
    ///
    /// The returned box always holds the same concrete type as `self`.
    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Debug formatter for the value.
    ///
    /// Composite shapes print their reflected content,
    /// opaque values print `Opaque(type_path)` unless overridden.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Array(data) => impls::array_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert!(x.is::<i32>());
    /// ```
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u8>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert_eq!(x.take::<i32>().ok(), Some(10));
    /// ```
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.into_any().downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => unreachable!("`ty_id` and `into_any` disagree on the concrete type"),
        }
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl Clone for Box<dyn Reflect> {
    #[inline]
    fn clone(&self) -> Self {
        (**self).reflect_clone()
    }
}

// -----------------------------------------------------------------------------
// Transparent container

impl Reflect for Box<dyn Reflect> {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        <dyn Reflect as Reflect>::into_any(*self)
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
// Auxiliary macro

/// Implements the casting methods shared by every `Reflect` impl of a given shape.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn as_any(&self) -> &dyn ::core::any::Any {
            self
        }

        #[inline]
        fn into_any(
            self: ::alloc::boxed::Box<Self>,
        ) -> ::alloc::boxed::Box<dyn ::core::any::Any> {
            self
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::ops::ReflectKind {
            $crate::ops::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
