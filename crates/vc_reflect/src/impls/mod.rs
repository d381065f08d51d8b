//! Provide reflection implementations for common types, and utilities for
//! implementing reflection traits.
//!
//! - `xxx_display`: Used to implement [`Reflect::reflect_display`] (e.g. [`struct_display`]).
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`struct_debug`]).
//!
//! ## Implemented Menu
//!
//! - basic:
//!     - `bool`, `char`, `i8`-`i64`, `u8`-`u64`, `isize`, `usize`, `f32`, `f64`
//!     - `()` (opaque)
//!     - `[T; N]`
//!     - `&'static str`
//! - scalar:
//!     - `Complex32`, `Complex64`
//! - core:
//!     - `Option<T>` (pointer, `None` is nil)
//! - alloc:
//!     - `String`, `Vec<T>`, `VecDeque<T>`
//!     - `BTreeMap<K, V>`
//!     - `Box<T>`, `Arc<T>` (pointer), `Box<dyn Reflect>` (dynamic)
//! - std:
//!     - `HashMap<K, V, S>`
//! - serde_json: ("json" feature)
//!     - `Value` (dynamic), `Number` (scalar), `Map<String, Value>`
//!
//! [`Reflect::reflect_display`]: crate::Reflect::reflect_display
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod utils;

mod alloc;
mod core;
mod native;
mod std;

#[cfg(feature = "json")]
mod json;

// -----------------------------------------------------------------------------
// Exports

pub use utils::*;
