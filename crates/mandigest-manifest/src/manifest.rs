//! Digesting manifests by their payload.
//!
//! A signed manifest and its unsigned original digest identically: the
//! envelope is resolved to its payload first, and bytes that carry no
//! envelope are digested as they are.

use std::borrow::Cow;

use mandigest_digest::from_reader_with;

use crate::{DigestOptions, ManifestError, PayloadResolver, PrettySignatureResolver, ResolveError, Result};

#[derive(Debug, Clone)]
pub struct ManifestDigester<R = PrettySignatureResolver> {
    resolver: R,
    options: DigestOptions,
}

impl ManifestDigester<PrettySignatureResolver> {
    /// Pretty-signature resolver keyed by `options.signature_key`.
    pub fn from_options(options: DigestOptions) -> Self { Self::new(options.resolver(), options) }
}

impl Default for ManifestDigester<PrettySignatureResolver> {
    fn default() -> Self { Self::from_options(DigestOptions::default()) }
}

impl<R: PayloadResolver> ManifestDigester<R> {
    pub fn new(resolver: R, options: DigestOptions) -> Self { Self { resolver, options } }

    pub fn options(&self) -> &DigestOptions { &self.options }

    /// Bytes that [`digest`](Self::digest) hashes for `data`.
    ///
    /// Falls back to `data` itself only when the resolver reports that it is
    /// not an envelope. Malformed envelopes are errors.
    pub fn payload<'a>(&self, data: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        match self.resolver.resolve(data) {
            Ok(payload) => Ok(payload),
            Err(ResolveError::NotEnvelope(reason)) => {
                tracing::debug!(%reason, len = data.len(), "no signature envelope, digesting raw bytes");
                Ok(Cow::Borrowed(data))
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejecting malformed signature envelope");
                Err(ManifestError::Payload(err))
            }
        }
    }

    pub fn digest(&self, data: &[u8]) -> Result<String> {
        let payload = self.payload(data)?;
        let digest = from_reader_with(self.options.algorithm, &payload[..], self.options.buffer_size)?;
        Ok(digest)
    }
}

/// Digests `data` by its payload with the default options.
pub fn digest_manifest(data: &[u8]) -> Result<String> {
    ManifestDigester::from_options(DigestOptions::default()).digest(data)
}
