//! CodeBreaker V1 code encryption.
//!
//! The address is rotated by 8 bits inside its low 24 bits, offset and
//! XOR-masked by command nibble; codes with a command above 2 also mask the
//! value with the encrypted address.

use crate::constants::V1_SEEDS;
use crate::types::Code;

pub fn encrypt(code: Code) -> Code {
    let cmd = code.command();
    let top = code.addr & 0xFF000000;

    let rotated = ((code.addr & 0xFF) << 16) | ((code.addr >> 8) & 0xFFFF);
    let addr = (top | (rotated.wrapping_add(V1_SEEDS[1][cmd]) & 0x00FFFFFF)) ^ V1_SEEDS[0][cmd];

    let val = if cmd > 2 {
        addr ^ code.val.wrapping_add(V1_SEEDS[2][cmd])
    } else {
        code.val
    };

    Code::new(addr, val)
}

pub fn decrypt(code: Code) -> Code {
    let cmd = code.command();

    let val = if cmd > 2 {
        (code.addr ^ code.val).wrapping_sub(V1_SEEDS[2][cmd])
    } else {
        code.val
    };

    let masked = code.addr ^ V1_SEEDS[0][cmd];
    let offset = masked.wrapping_sub(V1_SEEDS[1][cmd]);
    let addr = (masked & 0xFF000000) | ((offset & 0xFFFF) << 8) | ((offset >> 16) & 0xFF);

    Code::new(addr, val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_beefcode_vector() {
        let encrypted = Code::new(0xB4336FA9, 0x4DFEFB79);
        let plain = Code::new(0xBEEFC0DE, 0x00000000);
        assert_eq!(decrypt(encrypted), plain);
        assert_eq!(encrypt(plain), encrypted);
    }

    #[test]
    fn test_golden_vectors() {
        assert_eq!(encrypt(Code::new(0, 0)), Code::new(0x0A23080D, 0));
        assert_eq!(
            encrypt(Code::new(0x20123456, 0x0000ABCD)),
            Code::new(0x2A6532C9, 0x0000ABCD)
        );
        assert_eq!(
            decrypt(Code::new(0x9029BEAC, 0x0C0A9225)),
            Code::new(0x9AC824A1, 0x2554DE71)
        );
    }

    #[test]
    fn test_command_nibble_survives() {
        for cmd in 0..16u32 {
            let code = Code::new(cmd << 28 | 0x00ABCDEF, 0x12345678);
            assert_eq!(encrypt(code).command(), cmd as usize);
        }
    }

    #[test]
    fn test_round_trip() {
        let mut x = 0x1234_5678u32;
        for _ in 0..5000 {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            let code = Code::new(x, x.rotate_left(11) ^ 0x5A5A5A5A);
            assert_eq!(decrypt(encrypt(code)), code, "{}", code);
        }
    }
}
