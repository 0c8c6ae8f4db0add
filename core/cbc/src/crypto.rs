use crate::constants::{FILE_KEY, RSA_FILE_EXPONENT, RSA_FILE_MODULUS, RSA_SIG_SIZE};
use log::debug;
use sha1::{Digest, Sha1};
use utils::{bytes_to_words, words_to_bytes};

const SHA1_DIGEST_SIZE: usize = 20;

/// Encrypt or decrypt CBC file data in place with the fixed file key.
pub fn crypt_file_body(buf: &mut [u8]) {
    arcfour::crypt(&FILE_KEY, buf);
}

/// RSA public key with a little-endian modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    modulus: Vec<u32>,
    exponent: u32,
}

impl RsaPublicKey {
    /// `modulus` is little-endian, its length a multiple of 4.
    pub fn new(modulus: &[u8], exponent: u32) -> Self {
        let mut words = vec![0u32; modulus.len() / 4];
        bytes_to_words(modulus, &mut words);
        Self {
            modulus: words,
            exponent,
        }
    }

    /// 2048-bit key that signs CodeBreaker files.
    pub fn file_key() -> Self {
        Self::new(&RSA_FILE_MODULUS, RSA_FILE_EXPONENT)
    }

    /// Modulus (and signature) size in bytes.
    pub fn size(&self) -> usize {
        self.modulus.len() * 4
    }

    /// `sig^e mod n`, as many bytes as the modulus.
    fn recover(&self, sig: &[u8]) -> Vec<u8> {
        let mut sig_words = vec![0u32; self.modulus.len()];
        bytes_to_words(sig, &mut sig_words);

        let block = utils::pow_mod(&sig_words, &[self.exponent], &self.modulus);
        let mut out = vec![0u8; self.size()];
        words_to_bytes(&block, &mut out);
        out
    }
}

/// Check the digital signature of CBC file data.
pub fn verify_signature(sig: &[u8; RSA_SIG_SIZE], data: &[u8]) -> bool {
    verify_signature_with(&RsaPublicKey::file_key(), sig, data)
}

/// The signature holds the SHA-1 digest of `data` in the first 20 bytes of
/// the recovered block; the rest of the block is not checked.
pub fn verify_signature_with(key: &RsaPublicKey, sig: &[u8], data: &[u8]) -> bool {
    if sig.len() != key.size() || key.size() < SHA1_DIGEST_SIZE {
        return false;
    }

    let recovered = key.recover(sig);
    let digest = Sha1::digest(data);

    debug!(
        "signature digest {}, data digest {}",
        hex::encode(&recovered[..SHA1_DIGEST_SIZE]),
        hex::encode(digest)
    );
    recovered[..SHA1_DIGEST_SIZE] == digest[..]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// n = (2^127 - 1)(2^89 - 1), e = 65537
    const TEST_N: [u32; 7] = [
        0x00000001, 0x00000000, 0xFE000000, 0x7FFFFFFF, 0xFFFFFFFF, 0xFFFFFFFF, 0x00FFFFFF,
    ];
    const TEST_D: [u32; 7] = [
        0xFF5500AD, 0xFF5500AA, 0x535500AA, 0x5555AAAA, 0xD5802A7F, 0xD5802A7F, 0x00802A7F,
    ];

    fn test_key() -> RsaPublicKey {
        let mut modulus = [0u8; 28];
        words_to_bytes(&TEST_N, &mut modulus);
        RsaPublicKey::new(&modulus, 65537)
    }

    fn sign(data: &[u8]) -> Vec<u8> {
        let mut block = [0u8; 28];
        block[..SHA1_DIGEST_SIZE].copy_from_slice(&Sha1::digest(data));
        let mut m = [0u32; 7];
        bytes_to_words(&block, &mut m);

        let s = utils::pow_mod(&m, &TEST_D, &TEST_N);
        let mut sig = vec![0u8; 28];
        words_to_bytes(&s, &mut sig);
        sig
    }

    #[test]
    fn test_file_body_golden() {
        let mut buf = [0u8; 16];
        crypt_file_body(&mut buf);
        assert_eq!(hex::encode(buf), "cf4618615bf1add0c7193d9c6d5859be");

        let mut text = *b"CodeBreaker PS2";
        crypt_file_body(&mut text);
        assert_eq!(hex::encode(text), "8c297c041983c8b1ac7c4fbc3d0b6b");
        crypt_file_body(&mut text);
        assert_eq!(&text, b"CodeBreaker PS2");
    }

    #[test]
    fn test_valid_signature() {
        let data = b"\"Final Fantasy X\"\nMaster Code\n";
        let sig = sign(data);
        assert!(verify_signature_with(&test_key(), &sig, data));
    }

    #[test]
    fn test_flipped_bytes_fail() {
        let data: Vec<u8> = (0..300).map(|i| (i * 13) as u8).collect();
        let sig = sign(&data);
        let key = test_key();

        for i in [0, 1, 150, 299] {
            let mut bad = data.clone();
            bad[i] ^= 0x01;
            assert!(!verify_signature_with(&key, &sig, &bad), "data byte {}", i);
        }
        for i in 0..sig.len() {
            let mut bad = sig.clone();
            bad[i] ^= 0x80;
            assert!(!verify_signature_with(&key, &bad, &data), "sig byte {}", i);
        }
    }

    #[test]
    fn test_wrong_signature_length() {
        let data = b"abc";
        let mut sig = sign(data);
        sig.push(0);
        assert!(!verify_signature_with(&test_key(), &sig, data));
    }

    #[test]
    fn test_file_key_rejects_garbage() {
        let file_key = RsaPublicKey::file_key();
        assert_eq!(file_key.size(), RSA_SIG_SIZE);

        assert!(!verify_signature(&[0u8; RSA_SIG_SIZE], b"data"));
        let mut sig = [0u8; RSA_SIG_SIZE];
        sig[0] = 1;
        assert!(!verify_signature(&sig, b"data"));
    }
}
