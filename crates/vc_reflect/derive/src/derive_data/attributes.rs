//! Parsing of `#[reflect(...)]` attributes.

use proc_macro2::Span;
use syn::{Attribute, LitStr, meta::ParseNestedMeta, spanned::Spanned};

use crate::REFLECT_ATTRIBUTE_NAME;

const SKIP: &str = "skip";
const RENAME: &str = "rename";
const TYPE_PATH: &str = "type_path";
const OPAQUE: &str = "opaque";

/// Runs `parser` over every item of every `#[reflect(...)]` attribute.
fn parse_reflect_attrs(
    attrs: &[Attribute],
    mut parser: impl FnMut(ParseNestedMeta) -> syn::Result<()>,
) -> syn::Result<()> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
        .try_for_each(|attr| attr.parse_nested_meta(&mut parser))
}

fn set_once<T>(slot: &mut Option<T>, value: T, meta: &ParseNestedMeta) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate reflect attribute"));
    }
    *slot = Some(value);
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes applied to the type itself.
///
/// - `#[reflect(type_path = "a::B")]`
/// - `#[reflect(opaque)]`
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub type_path: Option<LitStr>,
    pub opaque: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        parse_reflect_attrs(attrs, |meta| {
            if meta.path.is_ident(TYPE_PATH) {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "`type_path` must not be empty"));
                }
                set_once(&mut out.type_path, lit, &meta)
            } else if meta.path.is_ident(OPAQUE) {
                set_once(&mut out.opaque, meta.path.span(), &meta)
            } else if meta.path.is_ident(SKIP) || meta.path.is_ident(RENAME) {
                Err(meta.error("this attribute can only be applied to fields"))
            } else {
                Err(meta.error("unsupported reflect attribute, expected `type_path` or `opaque`"))
            }
        })?;

        Ok(out)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes applied to a struct field.
///
/// - `#[reflect(skip)]`
/// - `#[reflect(rename = "Name")]`
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub skip: Option<Span>,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        parse_reflect_attrs(attrs, |meta| {
            if meta.path.is_ident(SKIP) {
                set_once(&mut out.skip, meta.path.span(), &meta)
            } else if meta.path.is_ident(RENAME) {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "`rename` must not be empty"));
                }
                set_once(&mut out.rename, lit, &meta)
            } else if meta.path.is_ident(TYPE_PATH) || meta.path.is_ident(OPAQUE) {
                Err(meta.error("this attribute can only be applied to the type"))
            } else {
                Err(meta.error("unsupported reflect attribute, expected `skip` or `rename`"))
            }
        })?;

        if let (Some(skip), Some(_)) = (out.skip, &out.rename) {
            return Err(syn::Error::new(skip, "`skip` and `rename` cannot be combined"));
        }

        Ok(out)
    }
}
