use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CodecError, CodecResult};
use crate::serializer::MessageSerializer;

/// JSON serializer backed by `serde_json`.
///
/// Output is compact with struct fields in declaration order and map keys in
/// `serde_json::Map` order, so encoding is deterministic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonSerializer;

impl MessageSerializer for JsonSerializer {
    fn name(&self) -> &str {
        "json"
    }

    fn encode<T>(&self, value: &T) -> CodecResult<String>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_string(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode<T>(&self, text: &str, dest: &mut T) -> CodecResult<()>
    where
        T: DeserializeOwned,
    {
        *dest = serde_json::from_str(text).map_err(|e| CodecError::Decode(e.to_string()))?;
        Ok(())
    }
}
