//! CodeBreaker V7 code encryption.
//!
//! Encryption runs four stages in order; decryption runs their inverses in
//! reverse order:
//!
//! 1. multiply both words by odd scalars derived from the old key,
//! 2. ARCFOUR with the current key over the 8-byte code,
//! 3. RSA with the 64-bit modulus `2^64 - 11` (skipped when the code, read as
//!    `addr:val`, is not below the modulus),
//! 4. 64 rounds of add/XOR mixing with the seed tables.
//!
//! Afterwards the plaintext decides whether the keys change: a pending
//! `BEEFC0DF` scramble consumes the code as an ARCFOUR key over the seed
//! tables, otherwise a `BEEFC0DE` code reseeds the key schedule.

use crate::arith::{mul_decrypt, mul_encrypt};
use crate::beefcode::KeySchedule;
use crate::constants::{RSA_DEC_KEY, RSA_ENC_KEY, RSA_MODULUS};
use crate::types::Code;
use log::debug;
use std::cmp::Ordering;

const MIX_ROUNDS: usize = 64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CipherV7 {
    schedule: KeySchedule,
    beefcode_pending: bool,
}

impl CipherV7 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// A full reset also drops a pending seed scramble.
    pub fn rekey(&mut self, full_reset: bool, seed: u32) {
        if full_reset {
            self.beefcode_pending = false;
        }
        self.schedule.rekey(full_reset, seed);
    }

    pub fn beefcode_pending(&self) -> bool {
        self.beefcode_pending
    }

    pub fn set_beefcode_pending(&mut self, pending: bool) {
        self.beefcode_pending = pending;
    }

    pub fn encrypt(&mut self, code: Code) -> Code {
        let mut out = self.scale(code);
        out = self.stream(out);
        out = rsa_crypt(out, RSA_ENC_KEY);
        out = self.mix(out);

        self.update_keys(code);
        out
    }

    pub fn decrypt(&mut self, code: Code) -> Code {
        let mut out = self.unmix(code);
        out = rsa_crypt(out, RSA_DEC_KEY);
        out = self.stream(out);
        out = self.unscale(out);

        self.update_keys(out);
        out
    }

    /// Key changes driven by a plaintext code; identical on both sides.
    fn update_keys(&mut self, plain: Code) {
        if self.beefcode_pending {
            debug!("scrambling seed tables with {}", plain);
            arcfour::crypt(&plain.to_bytes(), self.schedule.seeds_mut().as_bytes_mut());
            self.beefcode_pending = false;
        } else if plain.is_beefcode() {
            self.schedule.rekey(false, plain.val);
        }
    }

    fn scalars(&self) -> (u32, u32) {
        let old = &self.schedule.old_key().0;
        (old[0].wrapping_sub(old[1]), old[2].wrapping_add(old[3]))
    }

    fn scale(&self, code: Code) -> Code {
        let (a, v) = self.scalars();
        Code::new(mul_encrypt(code.addr, a), mul_encrypt(code.val, v))
    }

    fn unscale(&self, code: Code) -> Code {
        let (a, v) = self.scalars();
        Code::new(mul_decrypt(code.addr, a), mul_decrypt(code.val, v))
    }

    /// Fresh ARCFOUR context per code, so this is its own inverse.
    fn stream(&self, code: Code) -> Code {
        let mut bytes = code.to_bytes();
        arcfour::crypt(&self.schedule.key().to_bytes(), &mut bytes);
        Code::from_bytes(&bytes)
    }

    fn seed_words(&self) -> [[u32; MIX_ROUNDS]; 5] {
        let seeds = self.schedule.seeds();
        std::array::from_fn(|t| seeds.words(t))
    }

    fn mix(&self, code: Code) -> Code {
        let s = self.seed_words();
        let (mut addr, mut val) = (code.addr, code.val);
        for i in 0..MIX_ROUNDS {
            addr = (addr.wrapping_add(s[2][i]) ^ s[0][i]).wrapping_sub(val ^ s[4][i]);
            val = (val.wrapping_sub(s[3][i]) ^ s[1][i]).wrapping_add(addr ^ s[4][i]);
        }
        Code::new(addr, val)
    }

    fn unmix(&self, code: Code) -> Code {
        let s = self.seed_words();
        let (mut addr, mut val) = (code.addr, code.val);
        for i in (0..MIX_ROUNDS).rev() {
            val = (val.wrapping_sub(addr ^ s[4][i]) ^ s[1][i]).wrapping_add(s[3][i]);
            addr = (addr.wrapping_add(val ^ s[4][i]) ^ s[0][i]).wrapping_sub(s[2][i]);
        }
        Code::new(addr, val)
    }
}

fn u64_words(n: u64) -> [u32; 2] {
    [n as u32, (n >> 32) as u32]
}

/// `code^exponent mod n` over the 64-bit number `addr:val`.
///
/// Only values below the modulus are exponentiated; anything else passes
/// through unchanged, on both sides.
fn rsa_crypt(code: Code, exponent: u64) -> Code {
    let base = [code.val, code.addr];
    let modulus = u64_words(RSA_MODULUS);

    if utils::compare(&base, &modulus) != Ordering::Less {
        debug!("RSA stage skipped for {}", code);
        return code;
    }

    let result = utils::pow_mod(&base, &u64_words(exponent), &modulus);
    Code::new(result[1], result[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common() -> CipherV7 {
        let mut cipher = CipherV7::new();
        cipher.rekey(true, 0);
        cipher
    }

    #[test]
    fn test_golden_vectors_common_key() {
        let cases = [
            (Code::new(0x00000000, 0x00000000), Code::new(0x93DCA898, 0xD01F0F0A)),
            (Code::new(0x12345678, 0x9ABCDEF0), Code::new(0xF968CE47, 0xD8CA4DAA)),
            (Code::new(0x2043AFCC, 0x2411FFFF), Code::new(0x397951B0, 0x41569FE0)),
        ];
        for (plain, encrypted) in cases {
            assert_eq!(common().encrypt(plain), encrypted);
            assert_eq!(common().decrypt(encrypted), plain);
        }
    }

    #[test]
    fn test_golden_vector_seeded_key() {
        let mut cipher = CipherV7::new();
        cipher.rekey(true, 0x12345678);
        assert_eq!(
            cipher.encrypt(Code::new(0, 0)),
            Code::new(0x3E54E3B9, 0x0F88E1C8)
        );
    }

    #[test]
    fn test_rsa_stage() {
        assert_eq!(
            rsa_crypt(Code::new(0, 2), RSA_ENC_KEY),
            Code::new(0x0590D025, 0xCD2A8A22)
        );
        assert_eq!(rsa_crypt(Code::new(0, 2), RSA_DEC_KEY), Code::new(0, 0x800));
        assert_eq!(
            rsa_crypt(Code::new(0x71F5B9AE, 0xD8FE9B4E), RSA_DEC_KEY),
            Code::new(0x12345678, 0x9ABCDEF0)
        );
    }

    #[test]
    fn test_rsa_bypass_boundary() {
        // n - 1 is exponentiated (and maps to itself for odd exponents)
        let below = Code::new(0xFFFFFFFF, 0xFFFFFFF4);
        assert_eq!(rsa_crypt(below, RSA_ENC_KEY), below);

        for val in [0xFFFFFFF5, 0xFFFFFFF9, 0xFFFFFFFF] {
            let above = Code::new(0xFFFFFFFF, val);
            assert_eq!(rsa_crypt(above, RSA_ENC_KEY), above);
            assert_eq!(rsa_crypt(above, RSA_DEC_KEY), above);
        }
    }

    #[test]
    fn test_round_trip() {
        let mut x = 0xDEADBEEFu32;
        let mut next = || {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x
        };
        let mut enc = common();
        let mut dec = common();
        for _ in 0..2000 {
            let code = Code::new(next(), next());
            if code.is_beefcode() {
                continue;
            }
            assert_eq!(dec.decrypt(enc.encrypt(code)), code);
        }
    }

    #[test]
    fn test_round_trip_through_rsa_bypass() {
        let cipher = common();
        // Pick plaintexts whose stage-3 input lands on either side of n.
        for target in [
            Code::new(0xFFFFFFFF, 0xFFFFFFF4),
            Code::new(0xFFFFFFFF, 0xFFFFFFF5),
            Code::new(0xFFFFFFFF, 0xFFFFFFFA),
            Code::new(0xFFFFFFFF, 0xFFFFFFFF),
        ] {
            let plain = cipher.unscale(cipher.stream(target));
            assert_eq!(cipher.stream(cipher.scale(plain)), target);

            let encrypted = common().encrypt(plain);
            assert_eq!(common().decrypt(encrypted), plain);
        }
    }

    #[test]
    fn test_beefcode_keeps_both_sides_in_step() {
        let mut enc = common();
        let mut dec = common();

        let sentinel = Code::new(0xBEEFC0DE, 0x0BADF00D);
        let encrypted = enc.encrypt(sentinel);
        assert_eq!(dec.decrypt(encrypted), sentinel);
        assert_eq!(enc, dec);
        assert_ne!(enc, common());

        let code = Code::new(0x20100000, 0x00000063);
        assert_eq!(dec.decrypt(enc.encrypt(code)), code);
    }

    #[test]
    fn test_pending_scramble_is_one_shot() {
        let mut enc = common();
        let mut dec = common();
        enc.set_beefcode_pending(true);
        dec.set_beefcode_pending(true);

        let key_code = Code::new(0x12345678, 0xCAFEBABE);
        assert_eq!(dec.decrypt(enc.encrypt(key_code)), key_code);
        assert!(!enc.beefcode_pending());
        assert_eq!(enc, dec);

        let mut expected = common().schedule().seeds().clone();
        arcfour::crypt(&key_code.to_bytes(), expected.as_bytes_mut());
        assert_eq!(enc.schedule().seeds(), &expected);

        let before = enc.clone();
        let code = Code::new(0x10000000, 0x1);
        assert_eq!(dec.decrypt(enc.encrypt(code)), code);
        assert_eq!(enc, before);
    }

    #[test]
    fn test_full_rekey_clears_pending() {
        let mut cipher = common();
        cipher.set_beefcode_pending(true);
        cipher.rekey(false, 1);
        assert!(cipher.beefcode_pending());
        cipher.rekey(true, 1);
        assert!(!cipher.beefcode_pending());
    }
}
