//! Provide serialization support for the reflection system.
//!
//! [`SerializeDriver`] serializes any `&dyn Reflect` through `serde`, even when
//! the underlying type does not implement `Serialize`:
//!
//! - a type's own `serde` implementation, exposed through
//!   [`Reflect::reflect_serialize`](crate::Reflect::reflect_serialize), takes priority;
//! - structs serialize their exported fields only;
//! - lists and arrays serialize as sequences, maps as maps;
//! - nil pointers and empty boxes serialize as none;
//! - complex numbers and opaque values without a `serde` view fail.

// -----------------------------------------------------------------------------
// Modules

mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use ser::SerializeDriver;
