//! Path queries over reflected values.
//!
//! A query walks a value one key at a time: struct fields and map keys by
//! name, list and array elements by index (`0`, `-1`, `first`, `last`) or by
//! filter (`attr=literal`). Pointer-like and dynamic layers are looked through
//! on the way. The located value is then converted into the requested type,
//! see [`coerce`].
//!
//! Paths are given as one or more comma separated strings. A `\,` keeps a
//! literal comma inside a key, and keys are trimmed.
//!
//! Matching is best-effort by default: keys match case-insensitively and
//! results are converted across types. [`QueryOptions`] tightens both.
//!
//! # Examples
//!
//! ```
//! use vc_query::{QueryOptions, get, may};
//! use serde_json::json;
//!
//! let value = json!({
//!     "users": [
//!         { "name": "ann", "age": 31, "tags": ["a,b", "c"] },
//!         { "name": "bob", "age": "27" },
//!     ],
//! });
//!
//! assert_eq!(get::<i64>(&value, QueryOptions::NONE, "users, name=bob, age").unwrap(), 27);
//! assert_eq!(get::<String>(&value, QueryOptions::NONE, ["Users, first", "tags, 0"]).unwrap(), "a,b");
//!
//! let error = get::<i64>(&value, QueryOptions::STRICT_TYPE, "users, last, age").unwrap_err();
//! assert!(error.is_type_mismatch());
//!
//! assert_eq!(may::<u64>(&value, QueryOptions::NONE, "users, 2, age"), 0);
//! ```

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod coerce;
pub mod concrete;
pub mod matcher;
pub mod path;
pub mod resolve;
pub mod sequence;

mod api;
mod error;
mod options;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use api::{ReflectQuery, any, get, get_or, may, must, query};
pub use coerce::{Exact, FromResolved};
pub use error::{Cause, ErrorCode, QueryError};
pub use options::QueryOptions;
pub use path::{IntoQueryPath, QueryPath};
pub use resolve::Resolved;
