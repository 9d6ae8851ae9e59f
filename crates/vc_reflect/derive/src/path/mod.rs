//! This independent module is used to provide the required path.
//! So as to minimize changes when the `vc_reflect` structure is modified.
//!
//! The only special feature is the path of vc_reflect itself,
//! See [`vc_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_reflect` crate.
///
/// 1. For crates that depend on `vc_reflect`, `::vc_reflect` is returned.
/// 2. For crates that depend on `vc_path`, `::vc_path::reflect` is returned.
/// 3. For other situations, `::vc_reflect` is returned, but this may be incorrect.
///
/// The cost of this function is relatively high (accessing files, obtaining locks...),
/// so the crate path is obtained once per derive and passed around.
pub(crate) fn vc_reflect() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn box_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::__macro_exports::Box
    }
}

#[inline(always)]
pub(crate) fn reflect_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn struct_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn struct_field_iter_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::StructFieldIter
    }
}

// -----------------------------------------------------------------------------
// Fully qualified std items

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote!(::core::option::Option)
}

#[inline(always)]
pub(crate) fn clone_() -> TokenStream {
    quote!(::core::clone::Clone)
}

#[inline(always)]
pub(crate) fn any_() -> TokenStream {
    quote!(::core::any::Any)
}

#[inline(always)]
pub(crate) fn send_() -> TokenStream {
    quote!(::core::marker::Send)
}

#[inline(always)]
pub(crate) fn sync_() -> TokenStream {
    quote!(::core::marker::Sync)
}
