use serde_core::{Serialize, Serializer, ser::SerializeMap};

use super::SerializeDriver;

use crate::ops::Map;

/// A serializer for [`Map`] values.
pub(super) struct MapSerializer<'a> {
    pub map: &'a dyn Map,
}

impl Serialize for MapSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.map.len()))?;
        for (key, value) in self.map.iter() {
            state.serialize_entry(&SerializeDriver::new(key), &SerializeDriver::new(value))?;
        }
        state.end()
    }
}
