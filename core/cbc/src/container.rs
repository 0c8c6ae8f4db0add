//! Signed CBC container: a 256-byte RSA signature followed by the body it
//! signs. The body is stored encrypted and signed as stored.

use crate::constants::RSA_SIG_SIZE;
use crate::error::{CbcError, Result};

/// Split a container into its signature and body.
pub fn split_signed(buf: &[u8]) -> Result<(&[u8; RSA_SIG_SIZE], &[u8])> {
    match buf.split_first_chunk::<RSA_SIG_SIZE>() {
        Some((sig, body)) => Ok((sig, body)),
        None => Err(CbcError::TooShort {
            expected: RSA_SIG_SIZE,
            actual: buf.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_signed() {
        let mut buf = vec![0xAAu8; RSA_SIG_SIZE];
        buf.extend_from_slice(b"body");
        let (sig, body) = split_signed(&buf).unwrap();
        assert!(sig.iter().all(|&b| b == 0xAA));
        assert_eq!(body, b"body");

        let (_, empty) = split_signed(&buf[..RSA_SIG_SIZE]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_too_short() {
        let err = split_signed(&[0u8; 255]).unwrap_err();
        assert!(matches!(
            err,
            CbcError::TooShort {
                expected: 256,
                actual: 255
            }
        ));
    }
}
