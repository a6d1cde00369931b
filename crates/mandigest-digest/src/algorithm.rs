//! Registry of digest algorithms.
//!
//! An [`Algorithm`] fixes both the hash function and the text encoding of
//! its output, so `sha256` always means "SHA-256, lowercase hex".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DigestError, Digester, Hasher};

type Constructor = fn() -> Box<dyn Hasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// SHA-256, hex encoded.
    #[serde(rename = "sha256")]
    Sha256,
    /// SHA-384, hex encoded.
    #[serde(rename = "sha384")]
    Sha384,
    /// SHA-512, hex encoded.
    #[serde(rename = "sha512")]
    Sha512,
    /// Legacy archive checksum. Recognized so that digests produced
    /// elsewhere can be named, but it has no hasher here.
    #[serde(rename = "tarsum+v1+sha256")]
    TarsumV1Sha256,
}

impl Algorithm {
    /// Algorithm used whenever the caller does not pick one.
    pub const CANONICAL: Algorithm = Algorithm::Sha256;

    pub const ALL: [Algorithm; 4] = [
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::TarsumV1Sha256,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
            Algorithm::TarsumV1Sha256 => "tarsum+v1+sha256",
        }
    }

    /// Length of the raw hash output in bytes.
    pub fn size(&self) -> usize {
        match self {
            Algorithm::Sha256 | Algorithm::TarsumV1Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }

    fn constructor(self) -> Option<Constructor> {
        match self {
            #[cfg(feature = "sha256")]
            Algorithm::Sha256 => Some(new_sha256 as Constructor),
            #[cfg(feature = "sha512")]
            Algorithm::Sha384 => Some(new_sha384 as Constructor),
            #[cfg(feature = "sha512")]
            Algorithm::Sha512 => Some(new_sha512 as Constructor),
            _ => None,
        }
    }

    /// Whether a hasher can be built for this algorithm in this build.
    pub fn available(self) -> bool { self.constructor().is_some() }

    /// Fresh hasher, or `None` when [`available`](Self::available) is false.
    pub fn hasher(self) -> Option<Box<dyn Hasher>> { self.constructor().map(|new| new()) }

    pub fn digester(self) -> Digester { Digester::new(self) }
}

impl Default for Algorithm {
    fn default() -> Self { Algorithm::CANONICAL }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| DigestError::UnknownAlgorithm(s.to_string()))
    }
}

/// Reports whether `id` names a recognized algorithm whose backend is usable.
pub fn available(id: &str) -> bool { id.parse::<Algorithm>().is_ok_and(Algorithm::available) }

/// Builds a hasher for `id`, or `None` if [`available`] would return false.
pub fn new_accumulator(id: &str) -> Option<Box<dyn Hasher>> {
    id.parse::<Algorithm>().ok().and_then(Algorithm::hasher)
}

#[cfg(feature = "sha256")]
fn new_sha256() -> Box<dyn Hasher> { Box::new(crate::hasher::Sha256Hasher::new()) }

#[cfg(feature = "sha512")]
fn new_sha384() -> Box<dyn Hasher> { Box::new(crate::hasher::Sha384Hasher::new()) }

#[cfg(feature = "sha512")]
fn new_sha512() -> Box<dyn Hasher> { Box::new(crate::hasher::Sha512Hasher::new()) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_round_trip_through_from_str() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.as_str().parse::<Algorithm>().unwrap(), alg);
            assert_eq!(alg.to_string(), alg.as_str());
        }
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        for id in ["", "SHA256", "md5", "sha256 ", "tarsum+v2+sha256"] {
            assert!(matches!(
                id.parse::<Algorithm>(),
                Err(DigestError::UnknownAlgorithm(ref s)) if s == id
            ));
            assert!(!available(id));
            assert!(new_accumulator(id).is_none());
        }
    }

    #[test]
    fn test_tarsum_is_verification_only() {
        assert!(!Algorithm::TarsumV1Sha256.available());
        assert!(Algorithm::TarsumV1Sha256.hasher().is_none());
        assert!(!available("tarsum+v1+sha256"));
        assert!(new_accumulator("tarsum+v1+sha256").is_none());
    }

    #[cfg(feature = "sha256")]
    #[test]
    fn test_canonical_is_available() {
        assert_eq!(Algorithm::default(), Algorithm::Sha256);
        assert!(Algorithm::CANONICAL.available());
        assert!(available("sha256"));
    }

    #[cfg(all(feature = "sha256", feature = "sha512"))]
    #[test]
    fn test_hasher_output_matches_size() {
        for alg in [Algorithm::Sha256, Algorithm::Sha384, Algorithm::Sha512] {
            let mut hasher = new_accumulator(alg.as_str()).unwrap();
            hasher.update(b"payload");
            assert_eq!(hasher.sum().len(), alg.size());
        }
    }

    #[test]
    fn test_serde_uses_identifier_strings() {
        let json = serde_json::to_string(&Algorithm::TarsumV1Sha256).unwrap();
        assert_eq!(json, "\"tarsum+v1+sha256\"");

        let alg: Algorithm = serde_json::from_str("\"sha384\"").unwrap();
        assert_eq!(alg, Algorithm::Sha384);
    }
}
