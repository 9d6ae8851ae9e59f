//! Reflection for foreign types, plus helpers for implementing [`Reflect`].
//!
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`array_debug`]).
//!
//! ## Implemented Menu
//!
//! - native:
//!     - `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `()` (opaque)
//!     - `&'static str` (opaque)
//!     - `[T; N]` (array)
//!     - `&'static T` (shape of `T`)
//! - core:
//!     - `Option<T>` (pointer, `None` is null)
//! - alloc:
//!     - `String`, `Cow<'static, str>` (opaque)
//!     - `Vec<T>`, `VecDeque<T>`, `Box<[T]>` (list)
//!     - `BTreeMap<K, V>` with `K: Borrow<str>` (map)
//!     - `Box<T>` (transparent), `Arc<T>` (shape of `T`)
//! - std: ("std" feature)
//!     - `HashMap<K, V, S>` with `K: Borrow<str>` (map)
//! - serde_json: ("json" feature)
//!     - `Value`, `Map<String, Value>`
//!
//! `Box<T>` and `Box<dyn Reflect>` are fully transparent: shape, type path
//! and [`Any`](::core::any::Any) identity are those of the boxed value.
//! `Arc<T>` and `&'static T` report the shape and type path of `T` but keep
//! their own identity, so downcasting and cloning work on the handle.
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod utils;

mod alloc;
mod core;
mod native;

#[cfg(feature = "std")]
mod std;

#[cfg(feature = "json")]
mod json;

// -----------------------------------------------------------------------------
// Exports

pub use utils::{array_debug, list_debug, map_debug, pointer_debug, struct_debug};
