//! Code generation for `#[derive(Reflect)]`.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

use crate::derive_data::{ReflectMeta, ReflectStruct};

/// Generate `Reflect` and `Struct` implementation tokens.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let vc_reflect_path = meta.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_reflect_path);
    let struct_ = crate::path::struct_(vc_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(vc_reflect_path);
    let field_info_ = crate::path::field_info_(vc_reflect_path);
    let option_ = crate::path::option_();

    let mut field_names = Vec::new();
    let mut field_indices = Vec::new();
    let mut fields_ref = Vec::new();
    let mut field_infos = Vec::new();

    for field in info.active_fields() {
        let name = &field.name;
        let member = &field.member;
        let exported = field.exported;

        field_names.push(name.clone());
        field_indices.push(field.index);
        fields_ref.push(quote_spanned! { field.data.span() =>
            &self.#member as &dyn #reflect_
        });
        field_infos.push(quote! { #field_info_::new(#name, #exported) });
    }
    let field_count = field_indices.len();

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.generics().split_for_impl();

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }
        }

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

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn field_infos(&self) -> &'static [#field_info_] {
                const FIELDS: &[#field_info_] = &[#(#field_infos),*];
                FIELDS
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

/// Generate `Reflect` implementation tokens for unit structs.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.generics().split_for_impl();

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Opaque
            }
        }
    }
}
