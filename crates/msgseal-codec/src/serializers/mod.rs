//! Built-in serializers.

pub mod json;
pub mod null;
pub mod xml;

pub use json::JsonSerializer;
pub use null::NullSerializer;
pub use xml::XmlSerializer;
