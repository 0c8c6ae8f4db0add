use byteorder::{ByteOrder, LE};

/// Little-endian bytes to 32-bit words. `bytes.len()` must be `4 * words.len()`.
pub fn bytes_to_words(bytes: &[u8], words: &mut [u32]) {
    LE::read_u32_into(bytes, words);
}

/// 32-bit words to little-endian bytes. `bytes.len()` must be `4 * words.len()`.
pub fn words_to_bytes(words: &[u32], bytes: &mut [u8]) {
    LE::write_u32_into(words, bytes);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_layout() {
        let mut bytes = [0u8; 8];
        words_to_bytes(&[0xBEEFC0DE, 0x00000001], &mut bytes);
        assert_eq!(bytes, [0xDE, 0xC0, 0xEF, 0xBE, 0x01, 0x00, 0x00, 0x00]);

        let mut words = [0u32; 2];
        bytes_to_words(&bytes, &mut words);
        assert_eq!(words, [0xBEEFC0DE, 1]);
    }
}
