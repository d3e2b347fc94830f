use std::sync::Arc;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::error::{CryptoError, CryptoResult};
use crate::secret::Secret;

/// One in-flight keyed-hash computation.
///
/// Instances are never shared: a [`Hasher`] builds a fresh one for every
/// digest it computes.
pub trait KeyedHash: Send {
    /// Feed message bytes.
    fn update(&mut self, data: &[u8]);

    /// Consume the state and return the raw digest bytes.
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

impl<M: Mac + Send> KeyedHash for M {
    fn update(&mut self, data: &[u8]) {
        Mac::update(self, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Mac::finalize(*self).into_bytes().to_vec()
    }
}

type Factory = dyn Fn(&[u8]) -> CryptoResult<Box<dyn KeyedHash>> + Send + Sync;

/// Built-in HMAC algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// HMAC-MD5 (128-bit). Legacy; kept for tokens issued by older systems.
    Md5,
    /// HMAC-SHA1 (160-bit).
    #[default]
    Sha1,
    /// HMAC-SHA256.
    Sha256,
    /// HMAC-SHA512.
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [Self; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Lower-case algorithm name, as used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Digest width in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Fresh HMAC state keyed with `key`.
    pub fn keyed(&self, key: &[u8]) -> CryptoResult<Box<dyn KeyedHash>> {
        match self {
            Self::Md5 => new_mac::<Hmac<Md5>>(key),
            Self::Sha1 => new_mac::<Hmac<Sha1>>(key),
            Self::Sha256 => new_mac::<Hmac<Sha256>>(key),
            Self::Sha512 => new_mac::<Hmac<Sha512>>(key),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn new_mac<M>(key: &[u8]) -> CryptoResult<Box<dyn KeyedHash>>
where
    M: Mac + KeyInit + Send + 'static,
{
    let mac = <M as KeyInit>::new_from_slice(key)
        .map_err(|e| CryptoError::InvalidKeyLength(e.to_string()))?;
    Ok(Box::new(mac))
}

/// Factory for keyed-hash state.
///
/// Cloning a `Hasher` shares the factory, never any hash state, so one
/// `Hasher` can serve any number of threads at once.
#[derive(Clone)]
pub struct Hasher {
    name: String,
    factory: Arc<Factory>,
}

impl Hasher {
    /// Wrap a custom factory. `name` only shows up in logs and `Debug`.
    pub fn from_fn<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&[u8]) -> CryptoResult<Box<dyn KeyedHash>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a fresh keyed state.
    pub fn keyed(&self, secret: &Secret) -> CryptoResult<Box<dyn KeyedHash>> {
        (self.factory)(secret.expose())
    }

    /// Raw digest of `data` under `secret`.
    pub fn digest(&self, secret: &Secret, data: &[u8]) -> CryptoResult<Vec<u8>> {
        let mut state = self.keyed(secret)?;
        state.update(data);
        Ok(state.finalize())
    }

    /// Lower-case hex digest of `data` under `secret`.
    pub fn hex_digest(&self, secret: &Secret, data: &[u8]) -> CryptoResult<String> {
        self.digest(secret, data).map(hex::encode)
    }
}

impl From<HashAlgorithm> for Hasher {
    fn from(algorithm: HashAlgorithm) -> Self {
        Self::from_fn(algorithm.name(), move |key| algorithm.keyed(key))
    }
}

impl Default for Hasher {
    fn default() -> Self {
        HashAlgorithm::default().into()
    }
}

impl std::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hasher({})", self.name)
    }
}
