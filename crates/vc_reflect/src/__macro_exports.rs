//! Items referenced by code generated from `vc_reflect_derive`.
//!
//! Derived code may expand inside `no_std` crates without `extern crate alloc`,
//! so alloc types are reached through this module.

pub use alloc::boxed::Box;
