use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectDerive;

/// Expands a parsed derive into its trait impls.
///
/// The impls are wrapped in an anonymous const so helper `use`s
/// do not leak into the caller's scope.
pub(crate) fn match_reflect_impls(derive: &ReflectDerive) -> TokenStream {
    let tokens = match derive {
        ReflectDerive::Struct(info) => super::impl_struct(info),
        ReflectDerive::Opaque(meta) => super::impl_opaque(meta),
    };

    quote! {
        const _: () = {
            #tokens
        };
    }
}
