use mandigest_digest::DigestError;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The bytes were never a signature envelope. Callers may digest them
    /// as their own payload.
    #[error("not a signature envelope: {0}")]
    NotEnvelope(#[source] mandigest_jsonsig::Error),

    #[error("malformed signature envelope: {0}")]
    Malformed(#[source] mandigest_jsonsig::Error),
}

impl ResolveError {
    pub fn is_not_envelope(&self) -> bool { matches!(self, ResolveError::NotEnvelope(_)) }
}

impl From<mandigest_jsonsig::Error> for ResolveError {
    fn from(e: mandigest_jsonsig::Error) -> Self {
        if e.is_not_envelope() {
            ResolveError::NotEnvelope(e)
        } else {
            ResolveError::Malformed(e)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("cannot resolve manifest payload: {0}")]
    Payload(#[source] ResolveError),

    #[error(transparent)]
    Digest(#[from] DigestError),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
