//! Matching of path keys against map keys and struct fields.

use vc_reflect::info::KeyKind;
use vc_reflect::ops::{Map, Struct};
use vc_reflect::scalar::Scalar;

use crate::coerce::{parse_bool, parse_int, parse_uint};

#[inline]
fn loose_eq(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

/// Builds the lookup key of `map` for the path key `key`.
///
/// Non-textual key kinds parse `key` on a best-effort basis. Textual keys
/// match exactly first, then, unless `case_sensitive`, by a trimmed and
/// case-insensitive scan of the map keys. Without a match the original key is
/// returned and the lookup misses.
///
/// Returns `None` if the key type cannot be built from text.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vc_query::matcher::find_map_key;
/// use vc_reflect::scalar::Scalar;
///
/// let map = HashMap::from([(String::from("Name"), 1)]);
///
/// assert_eq!(find_map_key(&map, "name", false), Some(Scalar::Str("Name")));
/// assert_eq!(find_map_key(&map, "name", true), Some(Scalar::Str("name")));
///
/// let ids = HashMap::from([(7_u32, 1)]);
/// assert_eq!(find_map_key(&ids, "7", false), Some(Scalar::Uint(7)));
/// ```
pub fn find_map_key<'a>(map: &'a dyn Map, key: &'a str, case_sensitive: bool) -> Option<Scalar<'a>> {
    match map.key_kind() {
        KeyKind::Bool => return Some(Scalar::Bool(parse_bool(key))),
        KeyKind::Int => return Some(Scalar::Int(parse_int(key))),
        KeyKind::Uint => return Some(Scalar::Uint(parse_uint(key))),
        KeyKind::Other => return None,
        KeyKind::Text => {}
    }

    let exact = Scalar::Str(key);
    if case_sensitive || map.get(&exact).is_some() {
        return Some(exact);
    }

    let found = map.iter().find_map(|(candidate, _)| match candidate.reflect_ref().as_scalar() {
        Some(Scalar::Str(text)) if loose_eq(text, key) => Some(Scalar::Str(text)),
        _ => None,
    });
    Some(found.unwrap_or(exact))
}

/// Returns the name of the field of `structure` matching the path key `key`.
///
/// The rules follow [`find_map_key`] for textual keys.
pub fn find_struct_field<'a>(structure: &dyn Struct, key: &'a str, case_sensitive: bool) -> &'a str {
    if case_sensitive || structure.field(key).is_some() {
        return key;
    }

    structure
        .field_infos()
        .iter()
        .map(|info| info.name())
        .find(|name| loose_eq(name, key))
        .unwrap_or(key)
}

// -----------------------------------------------------------------------------
// Tests
