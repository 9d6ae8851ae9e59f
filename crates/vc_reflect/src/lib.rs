//! Runtime reflection over the *shape* of values.
//!
//! A reflected value reports which capability it offers through
//! [`Reflect::reflect_ref`]:
//!
//! - [`Struct`](ops::Struct): named fields, e.g. a derived struct.
//! - [`List`](ops::List) / [`Array`](ops::Array): indexed elements.
//! - [`Map`](ops::Map): values addressed by string keys.
//! - [`Pointer`](ops::Pointer): one layer of indirection that may be null.
//! - `Opaque`: nothing addressable, e.g. numbers and strings.
//!
//! This is enough for generic read-only traversal such as path resolution.
//!
//! ```
//! use vc_reflect::{Reflect, derive::Reflect, ops::ReflectRef};
//!
//! #[derive(Reflect, Clone)]
//! struct Foo {
//!     pub id: u32,
//!     secret: u32,
//! }
//!
//! let foo = Foo { id: 7, secret: 0 };
//! let ReflectRef::Struct(fields) = foo.reflect_ref() else { unreachable!() };
//!
//! assert_eq!(fields.field("id").unwrap().downcast_ref::<u32>(), Some(&7));
//! // Only public fields are exposed.
//! assert!(fields.field("secret").is_none());
//! # let _ = foo.secret;
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// Lets derived code in this crate's own tests and doctests refer to `::vc_reflect`.
extern crate self as vc_reflect;

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::Reflect;
pub use vc_reflect_derive as derive;
