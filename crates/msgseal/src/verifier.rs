use msgseal_codec::{decode_segment, encode_segment, MessageSerializer};
use msgseal_crypto::{constant_time_eq, HashAlgorithm, Hasher, Secret};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::VerifierConfig;
use crate::error::{VerifierError, VerifierResult};
use crate::token::Token;

/// Signs payloads into tokens and verifies tokens back into payloads.
///
/// A token is `<data>--<digest>`: `data` is the serializer's output rendered
/// as URL-safe base64, `digest` the lower-case hex HMAC of `data` under the
/// secret. The verifier keeps no state between calls and builds a fresh hash
/// state for every digest, so one instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct MessageVerifier<S> {
    secret: Secret,
    hasher: Hasher,
    serializer: Option<S>,
}

impl<S> Default for MessageVerifier<S> {
    fn default() -> Self {
        Self {
            secret: Secret::default(),
            hasher: Hasher::default(),
            serializer: None,
        }
    }
}

impl<S> MessageVerifier<S> {
    /// Verifier with the default HMAC-SHA1 hasher.
    pub fn new(secret: impl Into<Secret>, serializer: S) -> Self {
        Self {
            secret: secret.into(),
            hasher: Hasher::default(),
            serializer: Some(serializer),
        }
    }

    pub fn from_config(config: &VerifierConfig, serializer: S) -> Self {
        Self::new(config.secret.clone(), serializer).with_algorithm(config.algorithm)
    }

    pub fn with_secret(mut self, secret: impl Into<Secret>) -> Self {
        self.secret = secret.into();
        self
    }

    pub fn with_hasher(mut self, hasher: Hasher) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn with_algorithm(self, algorithm: HashAlgorithm) -> Self {
        self.with_hasher(algorithm.into())
    }

    pub fn with_serializer(mut self, serializer: S) -> Self {
        self.serializer = Some(serializer);
        self
    }

    pub fn serializer(&self) -> Option<&S> {
        self.serializer.as_ref()
    }

    /// Name of the configured hasher, e.g. `"sha1"`.
    pub fn hasher_name(&self) -> &str {
        self.hasher.name()
    }

    /// Lower-case hex digest of a token data segment.
    pub fn digest_for(&self, data: &str) -> VerifierResult<String> {
        if self.secret.is_empty() {
            return Err(VerifierError::SecretNotSet);
        }
        Ok(self.hasher.hex_digest(&self.secret, data.as_bytes())?)
    }
}

impl<S: MessageSerializer> MessageVerifier<S> {
    fn ready(&self) -> VerifierResult<&S> {
        let serializer = self
            .serializer
            .as_ref()
            .ok_or(VerifierError::SerializerNotSet)?;
        if self.secret.is_empty() {
            return Err(VerifierError::SecretNotSet);
        }
        Ok(serializer)
    }

    /// Encode and sign `value` into a token.
    pub fn generate<T>(&self, value: &T) -> VerifierResult<String>
    where
        T: Serialize + ?Sized,
    {
        let serializer = self.ready()?;
        let text = serializer.encode(value)?;
        let data = encode_segment(&text);
        let digest = self.digest_for(&data)?;
        let token = Token::assemble(&data, &digest);
        debug!(
            serializer = serializer.name(),
            hasher = self.hasher.name(),
            len = token.len(),
            "token generated"
        );
        Ok(token)
    }

    /// Check `token` and decode its payload into `dest`.
    ///
    /// `dest` is only written when the signature matches and the payload
    /// decodes; on any error it keeps its previous value.
    pub fn verify<T>(&self, token: &str, dest: &mut T) -> VerifierResult<()>
    where
        T: DeserializeOwned,
    {
        let serializer = self.ready()?;
        let parsed = Token::parse(token)
            .inspect_err(|_| warn!(len = token.len(), "malformed token"))?;

        let expected = self.digest_for(parsed.data())?;
        if !constant_time_eq(expected.as_bytes(), parsed.digest().as_bytes()) {
            warn!(
                hasher = self.hasher.name(),
                len = token.len(),
                "token signature mismatch"
            );
            return Err(VerifierError::InvalidSignature);
        }

        let text = decode_segment(parsed.data())?;
        serializer.decode(&text, dest)?;
        debug!(
            serializer = serializer.name(),
            hasher = self.hasher.name(),
            len = token.len(),
            "token verified"
        );
        Ok(())
    }
}
