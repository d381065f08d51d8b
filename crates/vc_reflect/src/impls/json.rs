use alloc::boxed::Box;
use alloc::string::String;

use serde_json::{Number, Value};

use crate::Reflect;
use crate::info::{KeyKind, ReflectKind};
use crate::ops::{Map, MapIter, ReflectRef};
use crate::scalar::Scalar;

/// A decoded JSON document is a dynamic box around its content.
///
/// `null` is the empty box, numbers are [`Number`] scalars, arrays are
/// `Vec<Value>` lists and objects are `Map<String, Value>` maps.
impl Reflect for Value {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Dynamic
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Dynamic(match self {
            Value::Null => None,
            Value::Bool(value) => Some(value.as_reflect()),
            Value::Number(value) => Some(value.as_reflect()),
            Value::String(value) => Some(value.as_reflect()),
            Value::Array(value) => Some(value.as_reflect()),
            Value::Object(value) => Some(value.as_reflect()),
        })
    }

    #[inline]
    fn reflect_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }
}

impl Reflect for Number {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Scalar
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        let scalar = if let Some(value) = self.as_i64() {
            Scalar::Int(value)
        } else if let Some(value) = self.as_u64() {
            Scalar::Uint(value)
        } else {
            Scalar::Float(self.as_f64().unwrap_or(f64::NAN))
        };
        ReflectRef::Scalar(scalar)
    }

    #[inline]
    fn reflect_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }

    #[inline]
    fn reflect_display(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

impl Reflect for serde_json::Map<String, Value> {
    crate::reflection::impl_reflect_cast_fn!(Map);

    #[inline]
    fn reflect_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        Some(self)
    }
}

impl Map for serde_json::Map<String, Value> {
    #[inline]
    fn key_kind(&self) -> KeyKind {
        KeyKind::Text
    }

    fn get(&self, key: &Scalar<'_>) -> Option<&dyn Reflect> {
        match key {
            Scalar::Str(key) => serde_json::Map::get(self, *key).map(Reflect::as_reflect),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        serde_json::Map::len(self)
    }

    fn iter(&self) -> MapIter<'_> {
        Box::new(
            serde_json::Map::iter(self).map(|(key, value)| (key.as_reflect(), value.as_reflect())),
        )
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use serde_json::json;

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::ReflectRef;
    use crate::scalar::Scalar;

    #[test]
    fn value_shapes() {
        let value = json!({ "a": [1, -2, 2.5], "b": null, "c": "text" });
        let ReflectRef::Dynamic(Some(object)) = value.reflect_ref() else {
            panic!("object expected");
        };
        assert_eq!(object.reflect_kind(), ReflectKind::Map);

        let map = object.reflect_ref().as_map().unwrap();
        let list = map.get(&Scalar::Str("a")).unwrap();
        let ReflectRef::Dynamic(Some(items)) = list.reflect_ref() else {
            panic!("array expected");
        };
        let items = items.reflect_ref().as_list().unwrap();
        let first = items.get(0).unwrap();
        let ReflectRef::Dynamic(Some(number)) = first.reflect_ref() else {
            panic!("number expected");
        };
        assert_eq!(number.reflect_ref().as_scalar(), Some(Scalar::Int(1)));

        let null = map.get(&Scalar::Str("b")).unwrap();
        assert!(null.reflect_ref().is_nil());
    }

    #[test]
    fn value_display() {
        let value = json!({ "b": [1, 2.5], "a": "x", "c": null });
        assert_eq!(value.as_reflect().to_string(), "map[a:x b:[1 2.5] c:<nil>]");
    }
}
