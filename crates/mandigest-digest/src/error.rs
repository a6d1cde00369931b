use std::io;

use crate::Algorithm;

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("unrecognized digest algorithm: {0:?}")]
    UnknownAlgorithm(String),

    #[error("digest algorithm {0} is not available")]
    Unsupported(Algorithm),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DigestError>;
