use std::path::Path;

use msgseal_crypto::{HashAlgorithm, Secret};
use serde::{Deserialize, Serialize};

use crate::error::{VerifierError, VerifierResult};

/// Signing configuration for a [`MessageVerifier`](crate::MessageVerifier).
///
/// The serializer is not part of the configuration; it is chosen in code and
/// passed to [`MessageVerifier::from_config`](crate::MessageVerifier::from_config).
///
/// ```toml
/// secret = "Hey, I'm a secret!"
/// algorithm = "sha256"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Signing key. Serializes as `"[REDACTED]"`.
    pub secret: Secret,
    /// HMAC algorithm. Defaults to SHA-1.
    #[serde(default)]
    pub algorithm: HashAlgorithm,
}

impl VerifierConfig {
    pub fn new(secret: impl Into<Secret>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: HashAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> VerifierResult<Self> {
        toml::from_str(text).map_err(|e| VerifierError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> VerifierResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| VerifierError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }
}
