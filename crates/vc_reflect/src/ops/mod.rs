//! Provide interfaces for reading reflected data.
//!
//! ## Menu
//!
//! The following are the subtraits of [`Reflect`], which provide data access
//! methods for different kinds of types.
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }` or `A(..)`) .
//! - [`List`]: For list-like (e.g. `Vec<i32>`) .
//! - [`Array`]: For array (e.g. `[i32; 5]`) .
//! - [`Map`]: For map-like (e.g. `HashMap<String, f32>`) .
//!
//! [`ReflectRef`] borrows a value as one of them, or as a pointer-like
//! wrapper, a dynamic box, a scalar or an opaque value.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod kind;
mod list_ops;
mod map_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ReflectRef;

pub use array_ops::{Array, ArrayItemIter};
pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapIter, ReflectKey};
pub use struct_ops::{Struct, StructFieldIter};
