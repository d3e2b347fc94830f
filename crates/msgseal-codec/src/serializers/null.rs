use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::Serialize;
use serde_json::Value;

use crate::error::{CodecError, CodecResult};
use crate::serializer::MessageSerializer;

/// Pass-through serializer.
///
/// The payload must already be text; it is carried as-is. Anything that does
/// not serialize as a plain string is rejected with [`CodecError::NotText`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullSerializer;

impl MessageSerializer for NullSerializer {
    fn name(&self) -> &str {
        "null"
    }

    fn encode<T>(&self, value: &T) -> CodecResult<String>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value).map_err(|e| CodecError::Encode(e.to_string()))? {
            Value::String(text) => Ok(text),
            other => Err(CodecError::NotText {
                found: kind_of(&other),
            }),
        }
    }

    fn decode<T>(&self, text: &str, dest: &mut T) -> CodecResult<()>
    where
        T: DeserializeOwned,
    {
        let de: StrDeserializer<'_, ValueError> = text.into_deserializer();
        *dest = T::deserialize(de).map_err(|e| CodecError::Decode(e.to_string()))?;
        Ok(())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_identity_for_text() {
        assert_eq!(NullSerializer.encode("this is a test").unwrap(), "this is a test");
        assert_eq!(NullSerializer.encode(&String::from("foo")).unwrap(), "foo");
    }

    #[test]
    fn encode_rejects_numbers() {
        let err = NullSerializer.encode(&42).unwrap_err();
        assert_eq!(err, CodecError::NotText { found: "number" });
    }

    #[test]
    fn encode_rejects_structures() {
        let err = NullSerializer.encode(&vec!["a", "b"]).unwrap_err();
        assert_eq!(err, CodecError::NotText { found: "array" });
    }

    #[test]
    fn decode_is_identity_for_text() {
        let mut out = String::new();
        NullSerializer.decode("this is a test", &mut out).unwrap();
        assert_eq!(out, "this is a test");
    }

    #[test]
    fn decode_into_non_text_fails_and_keeps_dest() {
        let mut out = 7i32;
        let err = NullSerializer.decode("not a number", &mut out).unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
        assert_eq!(out, 7);
    }

    #[test]
    fn empty_text_round_trips() {
        let encoded = NullSerializer.encode("").unwrap();
        let mut out = String::from("stale");
        NullSerializer.decode(&encoded, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
