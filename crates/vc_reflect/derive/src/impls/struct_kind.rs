use proc_macro2::TokenStream;
use quote::quote;

use super::impl_trait_reflect;
use crate::derive_data::{ReflectStruct, StructField};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let reflect_trait_tokens = impl_trait_reflect(info.meta(), quote!(Struct));
    let struct_trait_tokens = impl_trait_struct(info);

    quote! {
        #reflect_trait_tokens

        #struct_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let vc_reflect_path = meta.vc_reflect_path();
    let struct_ = crate::path::struct_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(vc_reflect_path);
    let option_ = crate::path::option_();

    let field_count = info.active_fields().len();
    let field_indices: Vec<usize> = (0..field_count).collect();
    let (field_names, fields_ref): (Vec<_>, Vec<_>) = info
        .active_fields()
        .map(|StructField { member, name }| (name, quote!(&self.#member as &dyn #reflect_)))
        .unzip();

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}
