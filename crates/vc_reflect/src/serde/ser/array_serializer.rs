use serde_core::{Serialize, Serializer, ser::SerializeSeq};

use super::SerializeDriver;

use crate::ops::Array;

/// A serializer for [`Array`] values.
///
/// Arrays serialize as sequences, so they decode into any list type.
pub(super) struct ArraySerializer<'a> {
    pub array: &'a dyn Array,
}

impl Serialize for ArraySerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_seq(Some(self.array.len()))?;
        for value in self.array.iter() {
            state.serialize_element(&SerializeDriver::new(value))?;
        }
        state.end()
    }
}
