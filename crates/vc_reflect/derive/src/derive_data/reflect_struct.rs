use std::collections::BTreeSet;

use syn::{Fields, Index, Member, Visibility};

use super::{FieldAttributes, ReflectMeta};

/// A field that is addressable through reflection.
#[derive(Debug)]
pub(crate) struct StructField {
    /// How the field is accessed on `self`.
    pub member: Member,
    /// The name the field is addressed by.
    pub name: String,
}

/// A struct whose public fields are exposed through `Struct`.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField>,
}

impl<'a> ReflectStruct<'a> {
    /// Collects the active fields.
    ///
    /// A field is active when it is `pub` and not marked `#[reflect(skip)]`.
    /// Named fields keep their identifier (or `rename`), unnamed fields are
    /// named by their position.
    pub fn new(meta: ReflectMeta<'a>, fields: &'a Fields) -> syn::Result<Self> {
        let mut active = Vec::with_capacity(fields.len());
        let mut names = BTreeSet::new();

        for (index, field) in fields.iter().enumerate() {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            let is_public = matches!(field.vis, Visibility::Public(_));

            if !is_public {
                if let Some(rename) = &attrs.rename {
                    return Err(syn::Error::new(
                        rename.span(),
                        "`rename` has no effect on a non-public field",
                    ));
                }
                continue;
            }
            if attrs.skip.is_some() {
                continue;
            }

            let (member, default_name) = match &field.ident {
                Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
                None => (Member::Unnamed(Index::from(index)), index.to_string()),
            };
            let name = attrs.rename.map(|lit| lit.value()).unwrap_or(default_name);

            if !names.insert(name.clone()) {
                return Err(syn::Error::new_spanned(
                    field,
                    format!("duplicate reflected field name `{name}`"),
                ));
            }

            active.push(StructField { member, name });
        }

        Ok(Self {
            meta,
            fields: active,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn active_fields(&self) -> impl ExactSizeIterator<Item = &StructField> {
        self.fields.iter()
    }
}
