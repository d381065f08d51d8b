//! Read-only runtime reflection.
//!
//! Every reflected value implements [`Reflect`], which exposes its shape through
//! [`ReflectRef`](ops::ReflectRef):
//!
//! - [`Struct`](ops::Struct): named fields, each marked exported or not.
//! - [`List`](ops::List) and [`Array`](ops::Array): growable and fixed-size sequences.
//! - [`Map`](ops::Map): keyed mappings with scalar keys.
//! - `Pointer`: `Box<T>`, `Arc<T>`, `Option<T>` (`None` is nil).
//! - `Dynamic`: boxed trait objects, such as `Box<dyn Reflect>` or `serde_json::Value`.
//! - [`Scalar`](scalar::Scalar): booleans, numbers, characters and text.
//!
//! Values render in a compact textual form through [`Display`](core::fmt::Display)
//! on `dyn Reflect`, and serialize through [`serde::SerializeDriver`].
//!
//! # Examples
//!
//! ```
//! use vc_reflect::{Reflect, derive::Reflect, ops::ReflectRef};
//!
//! #[derive(Reflect)]
//! struct Point {
//!     pub x: i32,
//!     pub y: i32,
//! }
//!
//! let point = Point { x: 1, y: 2 };
//! let value: &dyn Reflect = &point;
//!
//! let ReflectRef::Struct(fields) = value.reflect_ref() else { unreachable!() };
//! assert_eq!(fields.field_len(), 2);
//! assert_eq!(value.to_string(), "{1 2}");
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `vc_reflect` in doc testing.
// But `macro_utils::Manifest` can only choose one, so we must have an
// `extern self` to ensure `vc_reflect` can be used as an alias for `crate`.
extern crate self as vc_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod scalar;
pub mod serde;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use reflection::Reflect;
pub use vc_reflect_derive as derive;
