use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CbcError {
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
    #[error("File too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("Invalid RSA signature")]
    InvalidSignature,
}

pub type Result<T> = std::result::Result<T, CbcError>;
