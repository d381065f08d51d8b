use alloc::format;
use alloc::string::String;

use vc_reflect::Reflect;
use vc_reflect::ops::ReflectRef;

use crate::coerce::{FromResolved, coerce};
use crate::concrete::concretize;
use crate::matcher::{find_map_key, find_struct_field};
use crate::path::KeyList;
use crate::sequence::{Sequence, navigate};
use crate::{QueryError, QueryOptions};

// -----------------------------------------------------------------------------
// Resolver

/// Resolves `keys` against `value`, one level per key.
///
/// An empty key list returns `value` as is. Otherwise the value is
/// concretized and descended into according to its kind: maps and structs
/// consume one key, lists and arrays are handed to the
/// [sequence navigator](crate::sequence). Scalars, opaque values and nil
/// cannot be descended into.
///
/// Failures of deeper levels are wrapped with the keys that were left.
///
/// # Examples
///
/// ```
/// use vc_query::{QueryOptions, resolve::resolve};
/// use serde_json::json;
///
/// let value = json!({ "list": [{ "id": 7 }] });
/// let keys = ["LIST".to_string(), "0".to_string(), "id".to_string()];
///
/// let found = resolve(&value, &keys, QueryOptions::NONE).unwrap();
/// assert_eq!(found.to_string(), "7");
/// ```
pub fn resolve<'a>(
    value: &'a dyn Reflect,
    keys: &[String],
    options: QueryOptions,
) -> Result<&'a dyn Reflect, QueryError> {
    let Some((key, remain)) = keys.split_first() else {
        return Ok(value);
    };

    let concrete = concretize(value).map_err(|error| error.wrap(format!("invalid key: {key}")))?;
    let Some(concrete) = concrete else {
        return Err(QueryError::not_found("invalid kind: nil"));
    };

    match concrete.reflect_ref() {
        ReflectRef::Map(map) => {
            let found = find_map_key(map, key, options.is_case_sensitive())
                .and_then(|lookup| map.get(&lookup));
            let Some(found) = found else {
                return Err(QueryError::not_found(format!(
                    "[map] value not found by key {key}"
                )));
            };

            log::trace!("[map] descend into key {key}");
            resolve(found, remain, options)
                .map_err(|error| error.wrap(format!("[map] query keys: {}", KeyList(remain))))
        }
        ReflectRef::Struct(structure) => {
            let name = find_struct_field(structure, key, options.is_case_sensitive());

            if options.is_safe_fields() {
                match structure.field_info(name) {
                    None => {
                        return Err(QueryError::not_found(format!(
                            "[struct] field {key} not exists"
                        )));
                    }
                    Some(info) if !info.is_exported() => {
                        return Err(QueryError::not_found(format!(
                            "[struct] field {key} not exported"
                        )));
                    }
                    Some(_) => {}
                }
            }

            let Some(found) = structure.field(name) else {
                return Err(QueryError::not_found(format!(
                    "[struct] value not found by field {name}"
                )));
            };

            log::trace!("[struct] descend into field {name}");
            resolve(found, remain, options).map_err(|error| {
                error.wrap(format!("[struct] error query keys: {}", KeyList(remain)))
            })
        }
        ReflectRef::List(list) => navigate(Sequence::List(list), key, remain, options),
        ReflectRef::Array(array) => navigate(Sequence::Array(array), key, remain, options),
        other => Err(QueryError::not_found(format!("invalid kind: {}", other.kind()))),
    }
}

// -----------------------------------------------------------------------------
// Resolved

/// The outcome of resolving a path: a located value or an error.
///
/// # Examples
///
/// ```
/// use vc_query::{QueryOptions, QueryPath};
///
/// let value = vec![vec![1_u8, 2], vec![3]];
/// let path = QueryPath::parse(["last", "0"]);
///
/// let resolved = path.resolve(&value, QueryOptions::NONE);
/// assert_eq!(resolved.value().unwrap().downcast_ref::<u8>(), Some(&3));
/// assert_eq!(resolved.to::<String>(false).unwrap(), "3");
/// ```
#[derive(Debug)]
pub struct Resolved<'a> {
    result: Result<&'a dyn Reflect, QueryError>,
}

impl<'a> Resolved<'a> {
    /// The located value, `None` if resolution failed.
    #[inline]
    pub fn value(&self) -> Option<&'a dyn Reflect> {
        self.result.as_ref().ok().copied()
    }

    #[inline]
    pub fn error(&self) -> Option<&QueryError> {
        self.result.as_ref().err()
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    #[inline]
    pub fn into_result(self) -> Result<&'a dyn Reflect, QueryError> {
        self.result
    }

    /// Converts the located value into `T`, see [`coerce`].
    ///
    /// A resolution error is returned unchanged.
    #[inline]
    pub fn to<T: FromResolved>(self, strict: bool) -> Result<T, QueryError> {
        coerce(self.result?, strict)
    }
}

impl<'a> From<Result<&'a dyn Reflect, QueryError>> for Resolved<'a> {
    #[inline]
    fn from(result: Result<&'a dyn Reflect, QueryError>) -> Self {
        Self { result }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use vc_reflect::Reflect;
    use vc_reflect::derive::Reflect;

    use super::resolve;
    use crate::QueryOptions;

    #[derive(Reflect)]
    struct Node {
        pub name: String,
        pub next: Option<Box<Node>>,
        hidden: u8,
    }

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|key| key.to_string()).collect()
    }

    fn chain() -> Node {
        Node {
            name: "a".into(),
            hidden: 1,
            next: Some(Box::new(Node {
                name: "b".into(),
                hidden: 2,
                next: None,
            })),
        }
    }

    #[test]
    fn empty_keys_is_identity() {
        let nil: Option<u8> = None;
        let found = resolve(&nil, &[], QueryOptions::NONE).unwrap();
        assert!(found.reflect_ref().is_nil());
    }

    #[test]
    fn structs() {
        let node = chain();
        let found = resolve(&node, &keys(&["Next", "NAME"]), QueryOptions::NONE).unwrap();
        assert_eq!(found.downcast_ref::<String>().unwrap(), "b");

        let hidden = resolve(&node, &keys(&["hidden"]), QueryOptions::NONE).unwrap();
        assert_eq!(hidden.downcast_ref::<u8>(), Some(&1));
        assert_eq!(node.hidden, 1);
    }

    #[test]
    fn case_sensitive() {
        let node = chain();
        let error = resolve(&node, &keys(&["Name"]), QueryOptions::CASE_SENSITIVE).unwrap_err();
        assert_eq!(error.detail(), "[struct] value not found by field Name");
    }

    #[test]
    fn safe_fields() {
        let node = chain();
        let safe = QueryOptions::SAFE_FIELDS;

        let error = resolve(&node, &keys(&["hidden"]), safe).unwrap_err();
        assert_eq!(error.detail(), "[struct] field hidden not exported");

        let error = resolve(&node, &keys(&["missing"]), safe).unwrap_err();
        assert_eq!(error.detail(), "[struct] field missing not exists");

        assert!(resolve(&node, &keys(&["name"]), safe).is_ok());
    }

    #[test]
    fn error_chain() {
        let node = chain();
        let error = resolve(&node, &keys(&["next", "next", "name"]), QueryOptions::NONE)
            .unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(
            error.to_string(),
            "QueryError[1]: invalid kind: nil \
             -> [struct] error query keys: [name] \
             -> [struct] error query keys: [next name]"
        );
    }

    #[test]
    fn maps_and_kinds() {
        let mut map: HashMap<i32, Box<dyn Reflect>> = HashMap::new();
        map.insert(-1, Box::new(vec![5_u8]));
        map.insert(2, Box::new(3.5_f64));

        let found = resolve(&map, &keys(&["-1", "0"]), QueryOptions::NONE).unwrap();
        assert_eq!(found.downcast_ref::<u8>(), Some(&5));

        let error = resolve(&map, &keys(&["7"]), QueryOptions::NONE).unwrap_err();
        assert_eq!(error.detail(), "[map] value not found by key 7");

        let error = resolve(&map, &keys(&["2", "x"]), QueryOptions::NONE).unwrap_err();
        assert_eq!(
            error.to_string(),
            "QueryError[1]: invalid kind: scalar -> [map] query keys: [x]"
        );
    }
}
