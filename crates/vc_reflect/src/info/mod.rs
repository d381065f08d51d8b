//! Static descriptions of reflected types.
//!
//! - [`ReflectKind`]: the shape of a reflected value, for example `Struct`, `Map`, `Scalar`.
//! - [`KeyKind`]: the scalar category of a map's key type.
//! - [`FieldInfo`]: the name and export status of a struct field.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod kind;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::FieldInfo;
pub use kind::{KeyKind, ReflectKind};
