//! Text-safe rendering of serializer output for the data half of a token.
//!
//! Uses the URL-safe base64 alphabet with `=` padding.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

use crate::error::{CodecError, CodecResult};

/// Render serializer output as a token data segment.
pub fn encode_segment(text: &str) -> String {
    URL_SAFE.encode(text.as_bytes())
}

/// Recover serializer output from a token data segment.
pub fn decode_segment(segment: &str) -> CodecResult<String> {
    let bytes = URL_SAFE
        .decode(segment)
        .map_err(|e| CodecError::Decode(format!("invalid base64 segment: {e}")))?;
    String::from_utf8(bytes).map_err(|e| CodecError::Decode(format!("segment is not utf-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encodes_padded_url_safe() {
        assert_eq!(
            encode_segment(r#"{"Foo":"foo","Bar":42}"#),
            "eyJGb28iOiJmb28iLCJCYXIiOjQyfQ=="
        );
    }

    #[test]
    fn uses_url_safe_alphabet() {
        // U+FBFF is EF AF BF in utf-8, "76+/" in the standard alphabet.
        let text = "\u{fbff}";
        let segment = encode_segment(text);
        assert!(!segment.contains('+'));
        assert!(!segment.contains('/'));
        assert_eq!(decode_segment(&segment).unwrap(), text);
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_segment("not base64!").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn rejects_non_utf8_bytes() {
        let segment = URL_SAFE.encode([0xffu8, 0xfe]);
        let err = decode_segment(&segment).unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    proptest! {
        #[test]
        fn segment_never_needs_escaping(text in ".*") {
            let segment = encode_segment(&text);
            prop_assert!(segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '=')));
            prop_assert_eq!(decode_segment(&segment).unwrap(), text);
        }
    }
}
