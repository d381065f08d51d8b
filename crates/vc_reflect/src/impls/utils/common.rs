use alloc::string::ToString;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::Reflect;
use crate::ops::{Array, List, Map, ReflectRef, Struct};
use crate::scalar::Scalar;

// -----------------------------------------------------------------------------
// Display

/// A function use for implementing [`Reflect::reflect_display`] .
///
/// Writes the fields in declaration order, e.g. `{Alice 30 true}`.
///
/// # Example
///
/// ```ignore
/// impl Reflect for Foo {
///     // ...
///     fn reflect_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         struct_display(self, f)
///     }
/// }
/// ```
#[inline(never)]
pub fn struct_display(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    write_separated(dyn_struct.iter_fields(), f)?;
    f.write_str("}")
}

/// A function use for implementing [`Reflect::reflect_display`] .
///
/// Writes the elements in order, e.g. `[1 2 3]`.
#[inline(never)]
pub fn list_display(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    write_separated(dyn_list.iter(), f)?;
    f.write_str("]")
}

/// A function use for implementing [`Reflect::reflect_display`] .
///
/// Writes the elements in order, e.g. `[1 2 3]`.
#[inline(never)]
pub fn array_display(dyn_array: &dyn Array, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    write_separated(dyn_array.iter(), f)?;
    f.write_str("]")
}

/// A function use for implementing [`Reflect::reflect_display`] .
///
/// Writes the entries sorted by key, e.g. `map[a:1 b:2]`.
/// Numeric keys are ordered numerically, other keys by their rendering.
#[inline(never)]
pub fn map_display(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut entries: Vec<(&dyn Reflect, &dyn Reflect)> = dyn_map.iter().collect();
    entries.sort_by(|(a, _), (b, _)| compare_keys(*a, *b));

    f.write_str("map[")?;
    for (index, (key, value)) in entries.into_iter().enumerate() {
        if index > 0 {
            f.write_str(" ")?;
        }
        key.reflect_display(f)?;
        f.write_str(":")?;
        value.reflect_display(f)?;
    }
    f.write_str("]")
}

fn write_separated<'a>(
    items: impl Iterator<Item = &'a dyn Reflect>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for (index, item) in items.enumerate() {
        if index > 0 {
            f.write_str(" ")?;
        }
        item.reflect_display(f)?;
    }
    Ok(())
}

fn compare_keys(a: &dyn Reflect, b: &dyn Reflect) -> Ordering {
    match (a.reflect_ref(), b.reflect_ref()) {
        (ReflectRef::Scalar(x), ReflectRef::Scalar(y)) => compare_scalars(&x, &y)
            .unwrap_or_else(|| a.to_string().cmp(&b.to_string())),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

fn compare_scalars(a: &Scalar<'_>, b: &Scalar<'_>) -> Option<Ordering> {
    match (a, b) {
        (Scalar::Str(x), Scalar::Str(y)) => Some(x.cmp(y)),
        (Scalar::Bool(x), Scalar::Bool(y)) => Some(x.cmp(y)),
        (Scalar::Int(x), Scalar::Int(y)) => Some(x.cmp(y)),
        (Scalar::Uint(x), Scalar::Uint(y)) => Some(x.cmp(y)),
        (Scalar::Char(x), Scalar::Char(y)) => Some(x.cmp(y)),
        (Scalar::Float(x), Scalar::Float(y)) => x.partial_cmp(y),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Debug

/// A function use for implementing [`Reflect::reflect_debug`] .
///
/// Non-exported fields are included.
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for (info, value) in dyn_struct.field_infos().iter().zip(dyn_struct.iter_fields()) {
        debug.field(info.name(), &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`] .
#[inline(never)]
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`] .
#[inline(never)]
pub fn array_debug(dyn_array: &dyn Array, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_array.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`] .
#[inline(never)]
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use std::collections::HashMap;

    use crate::Reflect;
    use crate::derive::Reflect;

    #[derive(Reflect)]
    struct Pair {
        pub left: i32,
        right: &'static str,
    }

    #[test]
    fn struct_and_list() {
        let pair = Pair { left: 3, right: "x" };
        assert_eq!(pair.as_reflect().to_string(), "{3 x}");
        assert_eq!(vec![pair].as_reflect().to_string(), "[{3 x}]");
        assert_eq!([1.5_f64, 2.0].as_reflect().to_string(), "[1.5 2]");
    }

    #[test]
    fn map_sorted_keys() {
        let map: HashMap<i32, &'static str> = [(10, "b"), (2, "a"), (-1, "z")].into();
        assert_eq!(map.as_reflect().to_string(), "map[-1:z 2:a 10:b]");

        let map: BTreeMap<String, u8> = [("b".into(), 2), ("a".into(), 1)].into();
        assert_eq!(map.as_reflect().to_string(), "map[a:1 b:2]");
    }

    #[test]
    fn nil_and_pointers() {
        let none: Option<u8> = None;
        assert_eq!(none.as_reflect().to_string(), "<nil>");
        assert_eq!(Some(alloc::boxed::Box::new(5_u8)).as_reflect().to_string(), "5");
    }

    #[test]
    fn debug_includes_private_fields() {
        let pair = Pair { left: 3, right: "x" };
        let text = alloc::format!("{:?}", pair.as_reflect());
        assert!(text.ends_with(r#"Pair { left: 3, right: "x" }"#));
    }
}
