//! Tamper-evident message tokens.
//!
//! A [`MessageVerifier`] turns any serializable value into a signed token
//! that can be handed to an untrusted holder (a cookie, a resume link) and
//! later checked and decoded again without keeping per-token state. Tokens are
//! integrity-protected only: the payload is readable by whoever holds it.
//!
//! # Quick Start
//!
//! ```rust
//! use msgseal::{JsonSerializer, MessageVerifier};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Session {
//!     user: String,
//!     admin: bool,
//! }
//!
//! let verifier = MessageVerifier::new("Hey, I'm a secret!", JsonSerializer);
//! let token = verifier
//!     .generate(&Session { user: "ada".into(), admin: false })
//!     .unwrap();
//!
//! let mut session = Session::default();
//! verifier.verify(&token, &mut session).unwrap();
//! assert_eq!(session.user, "ada");
//! ```

pub mod config;
pub mod error;
pub mod token;
pub mod verifier;

pub use config::VerifierConfig;
pub use error::{VerifierError, VerifierResult};
pub use token::{Token, SEPARATOR};
pub use verifier::MessageVerifier;

// Re-export the pieces callers need to configure a verifier.
pub use msgseal_codec::{
    CodecError, JsonSerializer, MessageSerializer, NullSerializer, XmlSerializer,
};
pub use msgseal_crypto::{CryptoError, HashAlgorithm, Hasher, KeyedHash, Secret};
