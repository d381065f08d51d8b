use alloc::format;
use core::any::type_name;

use vc_reflect::Reflect;
use vc_reflect::ops::ReflectRef;

use crate::coerce::FromResolved;
use crate::path::IntoQueryPath;
use crate::resolve::Resolved;
use crate::{QueryError, QueryOptions};

// -----------------------------------------------------------------------------
// Functions

/// Resolves `paths` against `value` without converting the result.
///
/// # Examples
///
/// ```
/// use vc_query::{QueryOptions, query};
///
/// let value = vec![[1_u8, 2], [3, 4]];
/// let resolved = query(&value, QueryOptions::NONE, "1, -1");
/// assert_eq!(resolved.value().unwrap().downcast_ref::<u8>(), Some(&4));
/// ```
#[inline]
pub fn query<'a>(value: &'a dyn Reflect, options: QueryOptions, paths: impl IntoQueryPath) -> Resolved<'a> {
    paths.into_query_path().resolve(value, options)
}

/// Returns the element at `paths`.
///
/// A dynamic box is looked through once. An empty box has no value to
/// return and fails with [`ErrorCode::TypeMismatch`].
///
/// [`ErrorCode::TypeMismatch`]: crate::ErrorCode::TypeMismatch
pub fn any<'a>(
    value: &'a dyn Reflect,
    options: QueryOptions,
    paths: impl IntoQueryPath,
) -> Result<&'a dyn Reflect, QueryError> {
    query(value, options, paths).into_result().and_then(look_through)
}

fn look_through(found: &dyn Reflect) -> Result<&dyn Reflect, QueryError> {
    match found.reflect_ref() {
        ReflectRef::Dynamic(Some(inner)) => Ok(inner),
        ReflectRef::Dynamic(None) => Err(QueryError::type_mismatch(format!(
            "result type not match: need {} got <nil>",
            type_name::<&dyn Reflect>()
        ))),
        _ => Ok(found),
    }
}

/// Returns the element at `paths` converted into `T`.
///
/// # Examples
///
/// ```
/// use vc_query::{QueryOptions, get};
/// use serde_json::json;
///
/// let value = json!({ "user": { "age": "30" } });
///
/// assert_eq!(get::<i64>(&value, QueryOptions::NONE, "user, age").unwrap(), 30);
///
/// let error = get::<i64>(&value, QueryOptions::STRICT_TYPE, "user, age").unwrap_err();
/// assert!(error.is_type_mismatch());
/// ```
#[inline]
pub fn get<T: FromResolved>(
    value: &dyn Reflect,
    options: QueryOptions,
    paths: impl IntoQueryPath,
) -> Result<T, QueryError> {
    query(value, options, paths).to(options.is_strict_type())
}

/// Like [`get`], but returns `T::default()` on error.
#[inline]
pub fn may<T: FromResolved + Default>(
    value: &dyn Reflect,
    options: QueryOptions,
    paths: impl IntoQueryPath,
) -> T {
    get(value, options, paths).unwrap_or_default()
}

/// Like [`get`], but panics on error.
///
/// # Panics
///
/// Panics with the rendered [`QueryError`] if the path does not resolve or
/// the result cannot be converted.
#[inline]
#[track_caller]
pub fn must<T: FromResolved>(value: &dyn Reflect, options: QueryOptions, paths: impl IntoQueryPath) -> T {
    match get(value, options, paths) {
        Ok(target) => target,
        Err(error) => panic!("{error}"),
    }
}

/// Like [`get`] with [`QueryOptions::NONE`], but returns `default` on error.
///
/// # Examples
///
/// ```
/// use vc_query::get_or;
///
/// let value = vec![1_u8, 2];
/// assert_eq!(get_or::<i64>(&value, 0, "first"), 1);
/// assert_eq!(get_or::<i64>(&value, -1, "5"), -1);
/// ```
#[inline]
pub fn get_or<T: FromResolved>(value: &dyn Reflect, default: T, paths: impl IntoQueryPath) -> T {
    get(value, QueryOptions::NONE, paths).unwrap_or(default)
}

// -----------------------------------------------------------------------------
// ReflectQuery

/// Method forms of the query functions.
///
/// # Examples
///
/// ```
/// use vc_query::{QueryOptions, ReflectQuery};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Config {
///     pub ports: Vec<u16>,
/// }
///
/// let config = Config { ports: vec![80, 443] };
///
/// assert_eq!(config.query_as::<u64>(QueryOptions::NONE, "ports, last").unwrap(), 443);
/// assert_eq!(config.query_or::<String>(String::from("none"), "hosts"), "none");
/// ```
pub trait ReflectQuery {
    /// See [`query`].
    fn query(&self, options: QueryOptions, paths: impl IntoQueryPath) -> Resolved<'_>;

    /// See [`any`].
    #[inline]
    fn query_any(
        &self,
        options: QueryOptions,
        paths: impl IntoQueryPath,
    ) -> Result<&dyn Reflect, QueryError> {
        self.query(options, paths).into_result().and_then(look_through)
    }

    /// See [`get`].
    #[inline]
    fn query_as<T: FromResolved>(
        &self,
        options: QueryOptions,
        paths: impl IntoQueryPath,
    ) -> Result<T, QueryError> {
        self.query(options, paths).to(options.is_strict_type())
    }

    /// See [`may`].
    #[inline]
    fn query_may<T: FromResolved + Default>(&self, options: QueryOptions, paths: impl IntoQueryPath) -> T {
        self.query_as(options, paths).unwrap_or_default()
    }

    /// See [`must`].
    ///
    /// # Panics
    ///
    /// Panics with the rendered [`QueryError`] on error.
    #[inline]
    #[track_caller]
    fn query_must<T: FromResolved>(&self, options: QueryOptions, paths: impl IntoQueryPath) -> T {
        match self.query_as(options, paths) {
            Ok(target) => target,
            Err(error) => panic!("{error}"),
        }
    }

    /// See [`get_or`].
    #[inline]
    fn query_or<T: FromResolved>(&self, default: T, paths: impl IntoQueryPath) -> T {
        self.query_as(QueryOptions::NONE, paths).unwrap_or(default)
    }
}

impl ReflectQuery for dyn Reflect {
    #[inline]
    fn query(&self, options: QueryOptions, paths: impl IntoQueryPath) -> Resolved<'_> {
        query(self, options, paths)
    }
}

impl<T: Reflect> ReflectQuery for T {
    #[inline]
    fn query(&self, options: QueryOptions, paths: impl IntoQueryPath) -> Resolved<'_> {
        query(self, options, paths)
    }
}
