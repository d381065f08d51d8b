//! Paths into the `vc_reflect` crate used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `vc_reflect` crate.
///
/// 1. For crates that depend on `vc_reflect`, `::vc_reflect` is returned.
/// 2. For crates that depend on `vc_probe`, `::vc_probe::reflect` is returned.
/// 3. For other situations, `::vc_reflect` is returned, but this may be incorrect.
///
/// The cost of this function is relatively high (reading the manifest, taking
/// a lock), so the path is obtained once per derive and passed around.
pub(crate) fn vc_reflect() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_reflect"))
}

#[inline]
pub(crate) fn reflect_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::Reflect }
}

#[inline]
pub(crate) fn struct_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops::Struct }
}

#[inline]
pub(crate) fn struct_field_iter_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops::StructFieldIter }
}

#[inline]
pub(crate) fn reflect_ref_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops::ReflectRef }
}

#[inline]
pub(crate) fn reflect_kind_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info::ReflectKind }
}

#[inline]
pub(crate) fn field_info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info::FieldInfo }
}

/// `::core::option::Option`
pub(crate) fn option_() -> TokenStream {
    quote! { ::core::option::Option }
}
