//! Error types for mandigest-jsonsig.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("content is not a JSON object: {0}")]
    NotAnObject(#[source] serde_json::Error),

    #[error("missing signature key {0:?}")]
    MissingSignatureKey(String),

    #[error("invalid signature blocks: {0}")]
    InvalidSignatures(#[source] serde_json::Error),

    #[error("signature key is present but holds no signatures")]
    NoSignatures,

    #[error("invalid base64url in {field}: {source}")]
    Base64 {
        field: &'static str,
        source: base64::DecodeError,
    },

    #[error("invalid protected header: {0}")]
    InvalidProtectedHeader(#[source] serde_json::Error),

    #[error("protected header has no valid formatLength")]
    MissingFormatLength,

    #[error("protected header has no valid formatTail")]
    MissingFormatTail,

    #[error("formatLength {length} exceeds content length {content_length}")]
    FormatLengthOutOfRange { length: usize, content_length: usize },

    #[error("signature {index} covers a different payload than signature 0")]
    InconsistentPayload { index: usize },
}

impl Error {
    /// True only for a well-formed JSON object that lacks the signature key.
    /// Content that does not even parse may be a damaged envelope, so it is
    /// not reported here.
    pub fn is_not_envelope(&self) -> bool { matches!(self, Error::MissingSignatureKey(_)) }
}

pub type Result<T> = std::result::Result<T, Error>;
