//! Payload serializers for msgseal.
//!
//! A [`MessageSerializer`] turns a payload into printable text and back.
//! Three implementations ship with the crate:
//!
//! - [`NullSerializer`]: pass-through for payloads that are already text
//! - [`JsonSerializer`]: compact JSON via `serde_json`
//! - [`XmlSerializer`]: XML via `quick-xml`
//!
//! The [`segment`] module maps serializer output onto the URL-safe base64
//! alphabet used for the data half of a token.

pub mod error;
pub mod segment;
pub mod serializer;
pub mod serializers;

pub use error::{CodecError, CodecResult};
pub use segment::{decode_segment, encode_segment};
pub use serializer::MessageSerializer;
pub use serializers::{JsonSerializer, NullSerializer, XmlSerializer};
