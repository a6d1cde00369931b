//! Pretty-printed JSON signature envelopes.
//!
//! A pretty signature embeds its signature blocks inside the signed JSON
//! object under a signature key:
//!
//! ```text
//! {
//!    "name": "library/app",
//!    "signatures": [
//!       { "header": {...}, "signature": "...", "protected": "..." }
//!    ]
//! }
//! ```
//!
//! Each block's protected header records `formatLength` and `formatTail`,
//! which rebuild the signed payload as `content[..formatLength] ++ formatTail`.

use std::borrow::Cow;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Key under which signature blocks are embedded by default.
pub const DEFAULT_SIGNATURE_KEY: &str = "signatures";

/// One embedded signature block. Nothing here is verified.
#[derive(Debug, Clone, Deserialize)]
pub struct SignatureBlock {
    #[serde(default)]
    pub header: Value,
    pub signature: String,
    pub protected: String,
}

/// A parsed envelope: the signature blocks and the payload they cover.
#[derive(Debug, Clone)]
pub struct JsonSignature {
    payload: Vec<u8>,
    signatures: Vec<SignatureBlock>,
}

impl JsonSignature {
    pub fn payload(&self) -> &[u8] { &self.payload }

    pub fn signatures(&self) -> &[SignatureBlock] { &self.signatures }

    pub fn into_payload(self) -> Vec<u8> { self.payload }
}

/// Parses `content` as a pretty signature whose blocks live under
/// `signature_key`.
///
/// Only a JSON object without the key, [`Error::MissingSignatureKey`],
/// reports [`Error::is_not_envelope`]. Content that is not a JSON object
/// fails with [`Error::NotAnObject`] and counts as a broken envelope, like
/// every other failure.
pub fn parse_pretty_signature(content: &[u8], signature_key: &str) -> Result<JsonSignature> {
    let mut object: Map<String, Value> =
        serde_json::from_slice(content).map_err(Error::NotAnObject)?;

    let blocks = object
        .remove(signature_key)
        .ok_or_else(|| Error::MissingSignatureKey(signature_key.to_string()))?;
    let signatures: Vec<SignatureBlock> =
        serde_json::from_value(blocks).map_err(Error::InvalidSignatures)?;
    if signatures.is_empty() {
        return Err(Error::NoSignatures);
    }

    let payload = signed_payload(content, &signatures[0])?;
    for (index, block) in signatures.iter().enumerate().skip(1) {
        if signed_payload(content, block)? != payload {
            return Err(Error::InconsistentPayload { index });
        }
    }

    tracing::trace!(
        signatures = signatures.len(),
        payload_len = payload.len(),
        "parsed pretty signature"
    );
    Ok(JsonSignature {
        payload,
        signatures,
    })
}

fn signed_payload(content: &[u8], block: &SignatureBlock) -> Result<Vec<u8>> {
    let protected = decode_base64url("protected", &block.protected)?;
    let header: Map<String, Value> =
        serde_json::from_slice(&protected).map_err(Error::InvalidProtectedHeader)?;

    let length = header
        .get("formatLength")
        .and_then(as_length)
        .ok_or(Error::MissingFormatLength)?;
    let tail = header
        .get("formatTail")
        .and_then(Value::as_str)
        .ok_or(Error::MissingFormatTail)?;
    let tail = decode_base64url("formatTail", tail)?;

    if length > content.len() {
        return Err(Error::FormatLengthOutOfRange {
            length,
            content_length: content.len(),
        });
    }

    let mut payload = Vec::with_capacity(length + tail.len());
    payload.extend_from_slice(&content[..length]);
    payload.extend_from_slice(&tail);
    Ok(payload)
}

/// JSON numbers may arrive as integral floats (`12.0`); accept those too.
fn as_length(value: &Value) -> Option<usize> {
    let n = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })?;
    usize::try_from(n).ok()
}

/// Unpadded input is padded up to a multiple of four; explicit padding must
/// already be canonical.
fn decode_base64url(field: &'static str, input: &str) -> Result<Vec<u8>> {
    let padded: Cow<'_, str> = match input.len() % 4 {
        2 => format!("{input}==").into(),
        3 => format!("{input}=").into(),
        _ => input.into(),
    };
    URL_SAFE
        .decode(padded.as_bytes())
        .map_err(|source| Error::Base64 { field, source })
}
