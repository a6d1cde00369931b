//! Algorithm-qualified content digests.
//!
//! A digest string names its algorithm and encoding together:
//! `sha256:<lowercase hex>`. The registry is a closed set of [`Algorithm`]s;
//! an algorithm whose backend is not compiled in reports itself unavailable
//! and yields no hasher instead of a placeholder.
//!
//! # Example
//!
//! ```
//! use mandigest_digest::{Algorithm, from_reader};
//!
//! let digest = from_reader(&b"hello world"[..]).unwrap();
//! assert_eq!(
//!     digest,
//!     "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
//! );
//!
//! let mut digester = Algorithm::Sha512.digester();
//! digester.update(b"hello world").unwrap();
//! assert!(digester.digest().unwrap().starts_with("sha512:"));
//! ```

pub use self::algorithm::{Algorithm, available, new_accumulator};
pub use self::digester::Digester;
pub use self::error::{DigestError, Result};
pub use self::hasher::Hasher;
pub use self::reader::DigestReader;
pub use self::stream::{DEFAULT_BUFFER_SIZE, from_bytes, from_reader, from_reader_with};

#[cfg(any(feature = "sha256", feature = "sha512"))]
pub use self::hasher::DigestHasher;

#[cfg(feature = "sha256")]
pub use self::hasher::Sha256Hasher;

#[cfg(feature = "sha512")]
pub use self::hasher::{Sha384Hasher, Sha512Hasher};

pub mod algorithm;
mod digester;
mod error;
mod hasher;
mod reader;
mod stream;
