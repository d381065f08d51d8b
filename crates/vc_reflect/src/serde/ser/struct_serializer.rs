use alloc::format;
use alloc::vec::Vec;

use serde_core::ser::SerializeStruct;
use serde_core::{Serialize, Serializer};

use super::SerializeDriver;
use super::error_utils::make_custom_error;

use crate::info::FieldInfo;
use crate::ops::Struct;

/// A serializer for [`Struct`] values.
///
/// Only exported fields are written, in declaration order.
pub(super) struct StructSerializer<'a> {
    pub struct_value: &'a dyn Struct,
}

impl Serialize for StructSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let field_names = self
            .struct_value
            .field_infos()
            .iter()
            .filter(|info| info.is_exported())
            .map(FieldInfo::name)
            .collect::<Vec<_>>();

        let mut state =
            serializer.serialize_struct(self.struct_value.reflect_type_name(), field_names.len())?;

        for &name in &field_names {
            if let Some(value) = self.struct_value.field(name) {
                state.serialize_field(name, &SerializeDriver::new(value))?;
            } else {
                return Err(make_custom_error(format!(
                    "field `{name}` was missing while serializing type {}",
                    self.struct_value.reflect_type_name()
                )));
            }
        }

        state.end()
    }
}
