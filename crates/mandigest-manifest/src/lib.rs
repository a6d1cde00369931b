//! Payload-aware digests for signed and unsigned manifests.
//!
//! # Architecture
//!
//! - [`resolver`] - Payload resolution behind the [`PayloadResolver`] seam
//! - [`manifest`] - Fallback policy and digesting
//! - [`options`] - Configuration
//!
//! A manifest wrapped in a pretty-printed JSON signature digests to the same
//! value as the bare payload it signs:
//!
//! ```
//! use mandigest_manifest::digest_manifest;
//!
//! let digest = digest_manifest(b"{}").unwrap();
//! assert_eq!(digest, mandigest_digest::from_bytes(b"{}").unwrap());
//! ```

pub use error::{ManifestError, ResolveError, Result};
pub use manifest::{ManifestDigester, digest_manifest};
pub use options::DigestOptions;
pub use resolver::{PayloadResolver, PrettySignatureResolver, resolve_payload};

mod error;
pub mod manifest;
pub mod options;
pub mod resolver;
