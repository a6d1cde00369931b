use std::io::{self, Read};

use crate::{Algorithm, Digester, Result};

/// Streaming reader that digests data as it passes through.
/// Wraps any `Read` source so content can be hashed while it is copied.
pub struct DigestReader<R> {
    reader: R,
    digester: Digester,
    bytes_read: u64,
}

impl<R> DigestReader<R> {
    /// Create a reader digesting with the canonical algorithm.
    pub fn new(reader: R) -> Self { Self::with_algorithm(reader, Algorithm::CANONICAL) }

    pub fn with_algorithm(reader: R, algorithm: Algorithm) -> Self {
        Self {
            reader,
            digester: Digester::new(algorithm),
            bytes_read: 0,
        }
    }

    pub fn bytes_read(&self) -> u64 { self.bytes_read }

    /// Digest of everything read so far.
    pub fn digest(&self) -> Result<String> { self.digester.digest() }

    pub fn into_inner(self) -> R { self.reader }
}

impl<R: Read> Read for DigestReader<R> {
    /// Delegates to the inner reader and feeds what it returned.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n > 0 {
            self.digester
                .update(&buf[..n])
                .map_err(|e| io::Error::new(io::ErrorKind::Unsupported, e))?;
            self.bytes_read += n as u64;
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[cfg(feature = "sha256")]
    #[test]
    fn test_digest_reader_passes_bytes_through() {
        let data = b"test data for digesting";
        let mut reader = DigestReader::new(Cursor::new(data));

        let mut copied = Vec::new();
        reader.read_to_end(&mut copied).unwrap();

        assert_eq!(copied, data);
        assert_eq!(reader.bytes_read(), data.len() as u64);
        assert_eq!(
            reader.digest().unwrap(),
            Algorithm::CANONICAL.digest_bytes(data).unwrap()
        );
    }

    #[cfg(feature = "sha256")]
    #[test]
    fn test_partial_read_digests_prefix() {
        let mut reader = DigestReader::new(Cursor::new(b"0123456789"));

        let mut buffer = [0; 4];
        reader.read_exact(&mut buffer).unwrap();

        assert_eq!(reader.digest().unwrap(), Algorithm::Sha256.digest_bytes(b"0123").unwrap());
    }

    #[test]
    fn test_unsupported_algorithm_fails_on_read() {
        let mut reader =
            DigestReader::with_algorithm(Cursor::new(b"data"), Algorithm::TarsumV1Sha256);

        let mut buffer = [0; 4];
        let err = reader.read(&mut buffer).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
        assert_eq!(reader.bytes_read(), 0);
    }
}
