#[cfg(any(feature = "sha256", feature = "sha512"))]
use sha2::Digest;

/// Incremental hash state behind a digest algorithm.
///
/// `sum` reports the output for everything fed so far without resetting
/// the state, so further `update` calls keep accumulating.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn sum(&self) -> Vec<u8>;
}

#[cfg(any(feature = "sha256", feature = "sha512"))]
pub struct DigestHasher<D: Digest + Clone + Send>(D);

#[cfg(any(feature = "sha256", feature = "sha512"))]
impl<D: Digest + Clone + Send> DigestHasher<D> {
    pub fn new() -> Self { Self(D::new()) }
}

#[cfg(any(feature = "sha256", feature = "sha512"))]
impl<D: Digest + Clone + Send> Default for DigestHasher<D> {
    fn default() -> Self { Self::new() }
}

#[cfg(any(feature = "sha256", feature = "sha512"))]
impl<D: Digest + Clone + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) { Digest::update(&mut self.0, data); }

    fn sum(&self) -> Vec<u8> { self.0.clone().finalize().to_vec() }
}

#[cfg(feature = "sha256")]
pub type Sha256Hasher = DigestHasher<sha2::Sha256>;

#[cfg(feature = "sha512")]
pub type Sha384Hasher = DigestHasher<sha2::Sha384>;

#[cfg(feature = "sha512")]
pub type Sha512Hasher = DigestHasher<sha2::Sha512>;
