use mandigest_digest::{Algorithm, DEFAULT_BUFFER_SIZE};
use mandigest_jsonsig::DEFAULT_SIGNATURE_KEY;
use serde::{Deserialize, Serialize};

use crate::PrettySignatureResolver;

/// Configuration for manifest digesting.
///
/// Missing fields fall back to their defaults when deserialized, so a host
/// config can embed a partial table:
///
/// ```
/// use mandigest_digest::Algorithm;
/// use mandigest_manifest::DigestOptions;
///
/// let options = DigestOptions::default()
///     .algorithm(Algorithm::Sha512)
///     .signature_key("signatures")
///     .buffer_size(64 * 1024);
/// assert_eq!(options.algorithm, Algorithm::Sha512);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestOptions {
    /// Algorithm used to produce digests.
    ///
    /// Default: [`Algorithm::CANONICAL`]
    pub algorithm: Algorithm,

    /// JSON key holding the embedded signature blocks.
    ///
    /// Default: `"signatures"`
    pub signature_key: String,

    /// Size of the copy buffer used while hashing.
    ///
    /// Default: [`DEFAULT_BUFFER_SIZE`]
    pub buffer_size: usize,
}

impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::CANONICAL,
            signature_key: DEFAULT_SIGNATURE_KEY.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl DigestOptions {
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn signature_key(mut self, key: impl Into<String>) -> Self {
        self.signature_key = key.into();
        self
    }

    pub fn buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Resolver matching [`signature_key`](Self::signature_key).
    pub fn resolver(&self) -> PrettySignatureResolver {
        PrettySignatureResolver::new(self.signature_key.clone())
    }
}
