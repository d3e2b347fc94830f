//! Token layout: `<data>--<digest>`.

use crate::error::{VerifierError, VerifierResult};

/// Separator between the data and digest halves.
pub const SEPARATOR: &str = "--";

/// A token split into its two halves. Borrowed from the presented text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    data: &'a str,
    digest: &'a str,
}

impl<'a> Token<'a> {
    /// Split `token` at its separator.
    ///
    /// The digest half is hex and never contains `-`, so the last `--` is the
    /// separator even when the base64 data half contains `--` itself.
    pub fn parse(token: &'a str) -> VerifierResult<Self> {
        let (data, digest) = token
            .rsplit_once(SEPARATOR)
            .ok_or(VerifierError::MalformedToken)?;
        if digest.is_empty() {
            return Err(VerifierError::MalformedToken);
        }
        Ok(Self { data, digest })
    }

    pub fn data(&self) -> &'a str {
        self.data
    }

    pub fn digest(&self) -> &'a str {
        self.digest
    }

    /// Join a data segment and its digest into token text.
    pub fn assemble(data: &str, digest: &str) -> String {
        let mut token = String::with_capacity(data.len() + SEPARATOR.len() + digest.len());
        token.push_str(data);
        token.push_str(SEPARATOR);
        token.push_str(digest);
        token
    }
}
