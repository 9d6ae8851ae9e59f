use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, TypeGenerics};

use super::TypeAttributes;

/// Type-level information shared by every derive shape.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("vc_reflect_path", &self.vc_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            attrs,
            ident,
            generics,
            vc_reflect_path: crate::path::vc_reflect(),
        }
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn real_ident(&self) -> &Ident {
        self.ident
    }

    /// Returns the generics of the type with reflection bounds added.
    ///
    /// ## Summary
    ///
    /// - Type Itself:
    ///     - `'static`: exists lifetimes.
    ///     - `Any + Send + Sync`: exists type params.
    /// - Type Params:
    ///     - `Reflect + Clone`
    ///
    /// Existing where clause predicates are kept.
    pub fn split_generics(&self) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let any_ = crate::path::any_();
        let send_ = crate::path::send_();
        let sync_ = crate::path::sync_();
        let clone_ = crate::path::clone_();
        let reflect_ = crate::path::reflect_(&self.vc_reflect_path);

        let generics = self.generics;
        let mut generic_where_clause = quote! { where };

        if generics.type_params().next().is_some() {
            generic_where_clause.extend(quote! { Self: #any_ + #send_ + #sync_, });
        } else if generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        for param in generics.type_params() {
            let ident = &param.ident;
            generic_where_clause.extend(quote! { #ident: #reflect_ + #clone_, });
        }

        (impl_generics, ty_generics, generic_where_clause)
    }

    /// Generates `Reflect::reflect_type_path` when a custom path is set.
    pub fn type_path_tokens(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(type_path) => quote! {
                #[inline]
                fn reflect_type_path(&self) -> &'static str {
                    #type_path
                }
            },
            None => TokenStream::new(),
        }
    }
}
