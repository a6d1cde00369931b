use std::fmt;
use std::io::{self, Write};

use crate::{Algorithm, DigestError, Hasher, Result};

/// Binds one [`Algorithm`] to one live hasher.
///
/// A digester only grows: there is no reset. Reading the digest does not
/// consume the state, so read only after every byte has been fed.
pub struct Digester {
    algorithm: Algorithm,
    hasher: Option<Box<dyn Hasher>>,
}

impl Digester {
    /// Never fails. An unavailable algorithm yields a digester without a
    /// hasher, which errors on the first `update` or `digest`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            hasher: algorithm.hasher(),
        }
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Direct access to the underlying hasher for streaming writes.
    pub fn hasher_mut(&mut self) -> Option<&mut (dyn Hasher + 'static)> { self.hasher.as_deref_mut() }

    pub fn is_supported(&self) -> bool { self.hasher.is_some() }

    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        let algorithm = self.algorithm;
        let hasher = self.hasher_mut().ok_or(DigestError::Unsupported(algorithm))?;
        hasher.update(data);
        Ok(())
    }

    /// Formats the current state as `<algorithm>:<lowercase hex>`.
    pub fn digest(&self) -> Result<String> {
        let hasher = self
            .hasher
            .as_deref()
            .ok_or(DigestError::Unsupported(self.algorithm))?;
        Ok(format!("{}:{}", self.algorithm, hex::encode(hasher.sum())))
    }
}

impl fmt::Debug for Digester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digester")
            .field("algorithm", &self.algorithm)
            .field("supported", &self.is_supported())
            .finish()
    }
}

impl Write for Digester {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let algorithm = self.algorithm;
        match self.hasher_mut() {
            Some(hasher) => {
                hasher.update(buf);
                Ok(buf.len())
            }
            None => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                DigestError::Unsupported(algorithm),
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "sha256")]
    #[test]
    fn test_digest_string_format() {
        let mut digester = Digester::new(Algorithm::Sha256);
        digester.update(b"hello world").unwrap();

        assert_eq!(
            digester.digest().unwrap(),
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[cfg(feature = "sha256")]
    #[test]
    fn test_digest_is_idempotent_until_fed_again() {
        let mut digester = Algorithm::Sha256.digester();
        digester.update(b"abc").unwrap();
        let first = digester.digest().unwrap();
        assert_eq!(first, digester.digest().unwrap());

        digester.update(b"def").unwrap();
        assert_ne!(first, digester.digest().unwrap());
    }

    #[cfg(feature = "sha256")]
    #[test]
    fn test_write_feeds_hasher() {
        let mut written = Digester::new(Algorithm::Sha256);
        io::copy(&mut &b"streamed bytes"[..], &mut written).unwrap();

        let mut updated = Digester::new(Algorithm::Sha256);
        updated.hasher_mut().unwrap().update(b"streamed bytes");

        assert_eq!(written.digest().unwrap(), updated.digest().unwrap());
    }

    #[test]
    fn test_unsupported_digester_fails_loudly() {
        let mut digester = Digester::new(Algorithm::TarsumV1Sha256);
        assert!(!digester.is_supported());
        assert!(digester.hasher_mut().is_none());

        assert!(matches!(
            digester.update(b"data"),
            Err(DigestError::Unsupported(Algorithm::TarsumV1Sha256))
        ));
        assert!(matches!(digester.digest(), Err(DigestError::Unsupported(_))));

        let err = digester.write(b"data").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
    }
}
