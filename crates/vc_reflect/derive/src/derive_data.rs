//! Parsing of the derive input.

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{
    Data, DeriveInput, Field, Fields, Generics, Ident, Member, Path, Visibility, parse_quote,
};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// ReflectMeta

/// Type-level information shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    ident: &'a Ident,
    generics: Generics,
}

impl<'a> ReflectMeta<'a> {
    fn new(ast: &'a DeriveInput) -> Self {
        let vc_reflect_path = crate::path::vc_reflect();

        // Every type parameter must itself be reflectable.
        let mut generics = ast.generics.clone();
        let reflect_ = crate::path::reflect_(&vc_reflect_path);
        for param in generics.type_params_mut() {
            param.bounds.push(parse_quote!(#reflect_));
        }

        Self {
            vc_reflect_path,
            ident: &ast.ident,
            generics,
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

    #[inline]
    pub fn generics(&self) -> &Generics {
        &self.generics
    }
}

// -----------------------------------------------------------------------------
// StructField

/// A reflected struct field.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    /// Position among the active fields.
    pub index: usize,
    /// `ident` for named fields, declaration index for tuple fields.
    pub member: Member,
    pub name: String,
    pub exported: bool,
}

/// Returns `true` if the field carries `#[reflect(ignore)]`.
fn is_ignored(field: &Field) -> syn::Result<bool> {
    let mut ignore = false;
    for attr in &field.attrs {
        if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("ignore") {
                ignore = true;
                Ok(())
            } else {
                Err(meta.error("unsupported reflect attribute, expected `ignore`"))
            }
        })?;
    }
    Ok(ignore)
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A struct with named or unnamed fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    fn new(meta: ReflectMeta<'a>, fields: &'a Fields) -> syn::Result<Self> {
        let mut active = Vec::with_capacity(fields.len());

        for (declared, data) in fields.iter().enumerate() {
            if is_ignored(data)? {
                continue;
            }

            let (member, name) = match &data.ident {
                Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
                None => (
                    Member::Unnamed(syn::Index {
                        index: declared as u32,
                        span: data.span(),
                    }),
                    declared.to_string(),
                ),
            };

            active.push(StructField {
                data,
                index: active.len(),
                member,
                name,
                exported: matches!(data.vis, Visibility::Public(_)),
            });
        }

        Ok(Self { meta, fields: active })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields not marked `#[reflect(ignore)]`, in declaration order.
    #[inline]
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter()
    }
}

// -----------------------------------------------------------------------------
// ReflectDerive

pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let meta = ReflectMeta::new(ast);

        match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Unit => Ok(Self::Opaque(meta)),
                fields => Ok(Self::Struct(ReflectStruct::new(meta, fields)?)),
            },
            Data::Enum(data) => Err(syn::Error::new(
                data.enum_token.span,
                "`Reflect` cannot be derived for enums",
            )),
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "`Reflect` cannot be derived for unions",
            )),
        }
    }
}
