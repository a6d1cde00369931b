//! Digesting whole streams.
//!
//! Input is copied through one bounded buffer, so memory use does not
//! depend on input size. A read error aborts the computation; no digest of
//! a truncated prefix is ever returned.

use std::io::{self, Read};

use crate::{Algorithm, DigestError, Result};

/// Buffer size used by [`from_reader`].
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Digests `reader` to end-of-input with the canonical algorithm.
pub fn from_reader<R: Read>(reader: R) -> Result<String> {
    from_reader_with(Algorithm::CANONICAL, reader, DEFAULT_BUFFER_SIZE)
}

/// Digests `data` with the canonical algorithm.
pub fn from_bytes(data: &[u8]) -> Result<String> { from_reader(data) }

/// Digests `reader` with an explicit algorithm and copy buffer size.
///
/// An unavailable algorithm fails before any byte is read.
pub fn from_reader_with<R: Read>(
    algorithm: Algorithm,
    mut reader: R,
    buffer_size: usize,
) -> Result<String> {
    let mut digester = algorithm.digester();
    if !digester.is_supported() {
        return Err(DigestError::Unsupported(algorithm));
    }

    let mut buf = vec![0u8; buffer_size.max(1)];
    let mut total: u64 = 0;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        digester.update(&buf[..n])?;
        total += n as u64;
    }

    let digest = digester.digest()?;
    tracing::trace!(%algorithm, bytes = total, %digest, "stream digested");
    Ok(digest)
}

impl Algorithm {
    pub fn digest_reader<R: Read>(self, reader: R) -> Result<String> {
        from_reader_with(self, reader, DEFAULT_BUFFER_SIZE)
    }

    pub fn digest_bytes(self, data: &[u8]) -> Result<String> { self.digest_reader(data) }
}
