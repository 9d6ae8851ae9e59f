use proc_macro2::TokenStream;
use quote::quote;

use super::impl_trait_reflect;
use crate::derive_data::ReflectMeta;

/// Implement reflect for opaque types: unit structs and `#[reflect(opaque)]`.
///
/// Debug output falls back to `Opaque(type_path)`.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    impl_trait_reflect(meta, quote!(Opaque))
}
