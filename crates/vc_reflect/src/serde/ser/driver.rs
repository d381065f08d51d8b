use alloc::format;

use serde_core::{Serialize, Serializer};

use super::array_serializer::ArraySerializer;
use super::error_utils::make_custom_error;
use super::list_serializer::ListSerializer;
use super::map_serializer::MapSerializer;
use super::struct_serializer::StructSerializer;

use crate::Reflect;
use crate::ops::ReflectRef;
use crate::scalar::Scalar;

// -----------------------------------------------------------------------------
// SerializeDriver

/// Serializer for reflected values.
///
/// # Serialization Rules
///
/// 1. **Trait Priority**: If [`Reflect::reflect_serialize`] returns a `serde`
///    view, it is used directly.
///
/// 2. **Reflection Default**: Otherwise the value is serialized from its
///    [`ReflectRef`]. Pointers and dynamic boxes are transparent, nil becomes
///    none, structs keep only their exported fields.
///
/// Complex numbers, and opaque types without a `serde` view, cannot be
/// serialized and produce a custom error.
///
/// # Examples
///
/// ```
/// # use vc_reflect::{serde::SerializeDriver, derive::Reflect};
/// #[derive(Reflect)]
/// struct MyStruct {
///     pub value: i32,
///     hidden: bool,
/// }
///
/// let input = MyStruct { value: 123, hidden: true };
///
/// let output = serde_json::to_string(&SerializeDriver::new(&input)).unwrap();
///
/// assert_eq!(output, r#"{"value":123}"#);
/// ```
#[derive(Clone, Copy)]
pub struct SerializeDriver<'a> {
    value: &'a dyn Reflect,
}

impl<'a> SerializeDriver<'a> {
    /// Creates a serializer for the given value.
    #[inline]
    pub const fn new(value: &'a dyn Reflect) -> Self {
        Self { value }
    }
}

impl Serialize for SerializeDriver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Try to get the Serialize impl of the type itself
        if let Some(value) = self.value.reflect_serialize() {
            return erased_serde::serialize(value, serializer);
        }

        match self.value.reflect_ref() {
            ReflectRef::Struct(struct_value) => {
                StructSerializer { struct_value }.serialize(serializer)
            }
            ReflectRef::List(list) => ListSerializer { list }.serialize(serializer),
            ReflectRef::Array(array) => ArraySerializer { array }.serialize(serializer),
            ReflectRef::Map(map) => MapSerializer { map }.serialize(serializer),
            ReflectRef::Pointer(Some(inner)) | ReflectRef::Dynamic(Some(inner)) => {
                SerializeDriver::new(inner).serialize(serializer)
            }
            ReflectRef::Pointer(None) | ReflectRef::Dynamic(None) => serializer.serialize_none(),
            ReflectRef::Scalar(scalar) => match scalar {
                Scalar::Bool(value) => serializer.serialize_bool(value),
                Scalar::Int(value) => serializer.serialize_i64(value),
                Scalar::Uint(value) => serializer.serialize_u64(value),
                Scalar::Float(value) => serializer.serialize_f64(value),
                Scalar::Char(value) => serializer.serialize_char(value),
                Scalar::Str(value) => serializer.serialize_str(value),
                Scalar::Complex(value) => Err(make_custom_error(format!(
                    "unsupported type: complex value {value} of `{}`",
                    self.value.reflect_type_name(),
                ))),
            },
            ReflectRef::Opaque => Err(make_custom_error(format!(
                "unsupported type: no serialization method available for opaque type `{}`",
                self.value.reflect_type_name(),
            ))),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use std::collections::HashMap;

    use serde_json::json;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::scalar::Complex64;
    use crate::serde::SerializeDriver;

    #[derive(Reflect)]
    struct Inner {
        pub name: String,
        pub tags: [u8; 2],
    }

    #[derive(Reflect)]
    struct Outer {
        pub inner: Option<Box<Inner>>,
        pub missing: Option<u8>,
        pub extra: HashMap<String, Box<dyn Reflect>>,
        secret: u8,
    }

    #[test]
    fn nested_struct() {
        let mut extra: HashMap<String, Box<dyn Reflect>> = HashMap::new();
        extra.insert("k".into(), Box::new(vec![1_i8, -1]));
        let outer = Outer {
            inner: Some(Box::new(Inner { name: "n".into(), tags: [1, 2] })),
            missing: None,
            extra,
            secret: 9,
        };

        let value = serde_json::to_value(SerializeDriver::new(&outer)).unwrap();
        assert_eq!(
            value,
            json!({
                "inner": { "name": "n", "tags": [1, 2] },
                "missing": null,
                "extra": { "k": [1, -1] },
            })
        );
        assert_eq!(outer.secret, 9);
    }

    #[test]
    fn matches_serde_derive() {
        #[derive(Reflect, serde::Serialize)]
        struct Config {
            pub host: String,
            pub ports: alloc::vec::Vec<u16>,
            pub ratio: f64,
            pub debug: Option<bool>,
        }

        let config = Config {
            host: "localhost".into(),
            ports: vec![80, 443],
            ratio: 0.5,
            debug: Some(true),
        };

        let reflected = serde_json::to_value(SerializeDriver::new(&config)).unwrap();
        let derived = serde_json::to_value(&config).unwrap();
        assert_eq!(reflected, derived);
    }

    #[test]
    fn unsupported_values() {
        let complex = Complex64::new(1.0, 2.0);
        let error = serde_json::to_value(SerializeDriver::new(&complex)).unwrap_err();
        assert!(error.to_string().contains("unsupported type"));

        let value = serde_json::to_value(SerializeDriver::new(&())).unwrap();
        assert_eq!(value, serde_json::Value::Null);
    }

    #[test]
    fn json_values_serialize_themselves() {
        let value = json!({ "a": [1, "b", null] });
        let output = serde_json::to_value(SerializeDriver::new(&value)).unwrap();
        assert_eq!(output, value);
    }
}
