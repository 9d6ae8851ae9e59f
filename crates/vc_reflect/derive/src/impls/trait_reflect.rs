use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect` trait.
///
/// `reflect_kind_token` is the `ReflectKind`/`ReflectRef` variant, e.g. `Struct`.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_kind_token: TokenStream,
) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();

    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let box_ = crate::path::box_(vc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);
    let clone_ = crate::path::clone_();
    let any_ = crate::path::any_();

    let type_path_tokens = meta.type_path_tokens();

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn as_any(&self) -> &dyn #any_ {
                self
            }

            #[inline]
            fn into_any(self: #box_<Self>) -> #box_<dyn #any_> {
                self
            }

            #type_path_tokens

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }

            #[inline]
            fn reflect_clone(&self) -> #box_<dyn #reflect_> {
                #box_::new(#clone_::clone(self))
            }
        }
    }
}
