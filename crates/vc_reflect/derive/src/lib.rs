//! See following macros:
//!
//! - [`Reflect`](derive_reflect)
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `Reflect` and, depending on the shape of
/// the type, one capability trait:
///
/// - `struct T { ... }`: `Struct`, exposing the **public** fields by name.
/// - `struct T(...);`: `Struct`, exposing the **public** fields as `"0"`, `"1"`, ...
/// - `struct T;`: opaque.
///
/// Enums and unions are rejected.
///
/// The type must implement `Clone`, which backs `Reflect::reflect_clone`.
/// Every generic type parameter receives a `Reflect + Clone` bound.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// struct Person {
///     pub name: String,
///     pub parent: Option<Box<Person>>,
///     age: u32, // not addressable
/// }
/// ```
///
/// ## Field Attributes
///
/// ### Skip
///
/// Hides a public field.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// struct Foo {
///     #[reflect(skip)]
///     pub cache: Vec<u8>,
/// }
/// ```
///
/// ### Rename
///
/// Changes the name a public field is addressed by.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// struct Foo {
///     #[reflect(rename = "Name")]
///     pub name: String,
/// }
/// ```
///
/// ## Type Attributes
///
/// ### Custom Type Path
///
/// Overrides the name reported by `Reflect::reflect_type_path`, which is
/// what diagnostics print. The default is `core::any::type_name`.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(type_path = "app::User")]
/// struct User { /* ... */ }
/// ```
///
/// ### Opaque Types
///
/// Forces the opaque shape, so no field is addressable.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(opaque)]
/// struct Secret { pub key: [u8; 32] }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectDerive::from_input(&ast) {
        Ok(derive) => impls::match_reflect_impls(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
