//! Resolve string paths such as `user.parents[0].name` inside reflected values.
//!
//! - [`ResolvePath`] tokenizes a path. `[` and `]` are sugar for `.`, so
//!   `a[0].b` and `a.0.b` are the same path.
//! - [`traverse`] walks tokens through a [`Reflect`] value graph, unwrapping
//!   one nullable indirection before each step.
//! - [`direct_resolve`] and [`ReflectResolve`] resolve against a supplied value.
//! - [`Resolver`] is a registry of named roots, the first token of a path
//!   selects the root.
//!
//! ```
//! use std::collections::BTreeMap;
//! use vc_resolve::{ReflectResolve, direct_resolve};
//!
//! let mut scores = BTreeMap::new();
//! scores.insert(String::from("alice"), vec![3_u32, 7]);
//!
//! // A map root is traversed with the whole path.
//! let value = direct_resolve(&scores, "alice[1]").unwrap();
//! assert_eq!(value.downcast_ref::<u32>(), Some(&7));
//!
//! // Any other root skips the first token.
//! let list = vec![10_u32, 20];
//! assert_eq!(list.direct_resolve_as::<u32>("list.1"), Ok(&20));
//! ```
//!
//! [`Reflect`]: vc_reflect::Reflect
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod direct;
mod error;
mod path;
mod traverse;

#[cfg(feature = "std")]
mod resolver;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use direct::{ReflectResolve, direct_resolve};
pub use error::ResolveError;
pub use path::{ResolvePath, normalize};
pub use traverse::traverse;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use resolver::Resolver;
