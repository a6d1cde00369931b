//! Payload extraction for pretty-printed JSON signature envelopes.
//!
//! Only the payload is recovered. Signatures are carried along untouched and
//! never verified; keys are not handled at all.
//!
//! # Example
//!
//! ```
//! use mandigest_jsonsig::{DEFAULT_SIGNATURE_KEY, parse_pretty_signature};
//!
//! let err = parse_pretty_signature(br#"{"name": "app"}"#, DEFAULT_SIGNATURE_KEY).unwrap_err();
//! assert!(err.is_not_envelope());
//! ```

pub use self::envelope::{DEFAULT_SIGNATURE_KEY, JsonSignature, SignatureBlock, parse_pretty_signature};
pub use self::error::{Error, Result};

mod envelope;
mod error;
