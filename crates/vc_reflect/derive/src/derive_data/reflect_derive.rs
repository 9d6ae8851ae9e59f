use syn::{Data, DeriveInput, Fields};

use super::{ReflectMeta, ReflectStruct, TypeAttributes};

/// The shape a derive expands to.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let opaque = attrs.opaque.is_some();
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Unit => Ok(Self::Opaque(meta)),
                _ if opaque => Ok(Self::Opaque(meta)),
                fields => Ok(Self::Struct(ReflectStruct::new(meta, fields)?)),
            },
            Data::Enum(data) => Err(syn::Error::new(
                data.enum_token.span,
                "#[derive(Reflect)] does not support enums",
            )),
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "#[derive(Reflect)] does not support unions",
            )),
        }
    }
}
