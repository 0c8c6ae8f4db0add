use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodesError {
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid code on line {line}: {text:?}")]
    InvalidCodeLine { line: usize, text: String },
}

pub type Result<T> = std::result::Result<T, CodesError>;
