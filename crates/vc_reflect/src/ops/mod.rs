//! Shape capabilities of reflected values.
//!
//! ## Menu
//!
//! Each of the following is a subtrait of [`Reflect`] and provides read access
//! for one shape. A value reports which one applies through
//! [`Reflect::reflect_ref`].
//!
//! - [`Struct`]: named fields (e.g. `A { .. }`, or `A(..)` with fields `"0"`, `"1"`, ...).
//! - [`List`]: growable sequences (e.g. `Vec<i32>`).
//! - [`Array`]: fixed-size sequences (e.g. `[i32; 5]`).
//! - [`Map`]: values addressed by string keys (e.g. `BTreeMap<String, f32>`).
//! - [`Pointer`]: one nullable indirection (e.g. `Option<T>`).
//!
//! [`DynamicStruct`] builds a struct-shaped value at runtime.
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectKind, ReflectRef};

pub use array_ops::{Array, ArrayItemIter};
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use pointer_ops::Pointer;
pub use struct_ops::{DynamicStruct, Struct, StructFieldIter};
