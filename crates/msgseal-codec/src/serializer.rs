use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecResult;

/// Converts payloads to and from printable text.
///
/// `decode` writes into a caller-owned slot so the caller picks the target
/// type. Implementations must leave `dest` untouched when they fail.
pub trait MessageSerializer: Send + Sync {
    /// Short format name (e.g. `"json"`), used in log fields.
    fn name(&self) -> &str;

    /// Render `value` as text.
    fn encode<T>(&self, value: &T) -> CodecResult<String>
    where
        T: Serialize + ?Sized;

    /// Parse `text` and store the result in `dest`.
    fn decode<T>(&self, text: &str, dest: &mut T) -> CodecResult<()>
    where
        T: DeserializeOwned;
}
