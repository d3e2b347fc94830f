use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesText, Event};
use quick_xml::{DeError, Reader, Writer};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CodecError, CodecResult};
use crate::serializer::MessageSerializer;

/// Root element for values that carry no type name of their own.
const SCALAR_ROOT: &str = "value";

/// XML serializer backed by `quick-xml`.
///
/// Structs and enums get a root element named after the type. Bare scalars
/// (strings, numbers, booleans) are wrapped in `<value>`. Leading and
/// trailing whitespace in text is written as character references, since
/// the deserializer trims raw text before resolving references.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XmlSerializer;

impl MessageSerializer for XmlSerializer {
    fn name(&self) -> &str {
        "xml"
    }

    fn encode<T>(&self, value: &T) -> CodecResult<String>
    where
        T: Serialize + ?Sized,
    {
        let xml = match quick_xml::se::to_string(value) {
            Ok(xml) => xml,
            Err(DeError::Unsupported(_)) => {
                quick_xml::se::to_string_with_root(SCALAR_ROOT, value).map_err(encode_error)?
            }
            Err(e) => return Err(encode_error(e)),
        };
        pin_edge_whitespace(&xml)
    }

    fn decode<T>(&self, text: &str, dest: &mut T) -> CodecResult<()>
    where
        T: DeserializeOwned,
    {
        *dest = quick_xml::de::from_str(text).map_err(|e| CodecError::Decode(e.to_string()))?;
        Ok(())
    }
}

fn encode_error(e: impl std::fmt::Display) -> CodecError {
    CodecError::Encode(e.to_string())
}

/// Re-emits every text node of `xml` with its edge whitespace as `&#N;`.
fn pin_edge_whitespace(xml: &str) -> CodecResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    loop {
        let written = match reader.read_event().map_err(encode_error)? {
            Event::Eof => break,
            Event::Text(text) => {
                let raw = text.unescape().map_err(encode_error)?;
                writer.write_event(Event::Text(BytesText::from_escaped(escape_text(&raw))))
            }
            other => writer.write_event(other),
        };
        written.map_err(encode_error)?;
    }
    String::from_utf8(writer.into_inner()).map_err(encode_error)
}

fn is_xml_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn escape_text(raw: &str) -> String {
    let lead_len = raw.len() - raw.trim_start_matches(is_xml_space).len();
    let (lead, rest) = raw.split_at(lead_len);
    let body = rest.trim_end_matches(is_xml_space);
    let trail = &rest[body.len()..];

    let mut out = String::with_capacity(raw.len() + 8);
    push_char_refs(&mut out, lead);
    // A bare CR would be folded by conforming readers.
    out.push_str(&partial_escape(body).replace('\r', "&#13;"));
    push_char_refs(&mut out, trail);
    out
}

fn push_char_refs(out: &mut String, s: &str) {
    for c in s.chars() {
        out.push_str(&format!("&#{};", u32::from(c)));
    }
}
