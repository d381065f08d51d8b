//! See following macros:
//!
//! - [`Reflect`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `Reflect`
/// - `Struct` (for `struct T { ... }` and `struct T(...);`)
///
/// Fields of tuple structs are named by their index: `0`, `1`, ...
///
/// Unit structs (`struct T;`) are treated as `Opaque`. Enums and unions are
/// not supported.
///
/// ## Exported Fields
///
/// A field declared `pub` is exported. Private and restricted (`pub(crate)`)
/// fields stay reachable through reflection, but consumers may choose to
/// skip them.
///
/// ## Ignoring Fields
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Foo {
///     pub a: u32,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// An ignored field does not appear in `field_infos`, `field_len` is reduced,
/// and no reflection API can reach it. Its type does not need to implement
/// `Reflect`.
///
/// This attribute can only be used on fields.
///
/// ## Generics
///
/// Every type parameter receives a `Reflect` bound.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Pair<T> {
///     pub left: T,
///     pub right: T,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let reflect_derive = match derive_data::ReflectDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls = match reflect_derive {
        derive_data::ReflectDerive::Struct(info) => impls::impl_struct(&info),
        derive_data::ReflectDerive::Opaque(meta) => impls::impl_opaque(&meta),
    };

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}
