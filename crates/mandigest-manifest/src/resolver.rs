use std::borrow::Cow;

use mandigest_jsonsig::{DEFAULT_SIGNATURE_KEY, parse_pretty_signature};

use crate::ResolveError;

/// Recovers the meaningful payload from manifest bytes.
pub trait PayloadResolver {
    /// Returns the enclosed payload, or [`ResolveError::NotEnvelope`] when
    /// `data` carries no envelope at all.
    fn resolve<'a>(&self, data: &'a [u8]) -> Result<Cow<'a, [u8]>, ResolveError>;
}

/// Resolves payloads of pretty-printed JSON signature envelopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettySignatureResolver {
    signature_key: String,
}

impl PrettySignatureResolver {
    pub fn new(signature_key: impl Into<String>) -> Self {
        Self {
            signature_key: signature_key.into(),
        }
    }

    pub fn signature_key(&self) -> &str { &self.signature_key }
}

impl Default for PrettySignatureResolver {
    fn default() -> Self { Self::new(DEFAULT_SIGNATURE_KEY) }
}

impl PayloadResolver for PrettySignatureResolver {
    fn resolve<'a>(&self, data: &'a [u8]) -> Result<Cow<'a, [u8]>, ResolveError> {
        let jsig = parse_pretty_signature(data, &self.signature_key)?;
        Ok(Cow::Owned(jsig.into_payload()))
    }
}

/// Resolves `data` with the default signature key.
pub fn resolve_payload(data: &[u8]) -> Result<Vec<u8>, ResolveError> {
    PrettySignatureResolver::default()
        .resolve(data)
        .map(Cow::into_owned)
}
