#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_reflect as reflect;
pub use vc_resolve as resolve;

pub use vc_reflect::Reflect;
pub use vc_reflect::derive;
pub use vc_resolve::{ReflectResolve, ResolveError, ResolvePath, direct_resolve};

#[cfg(feature = "std")]
pub use vc_resolve::Resolver;
