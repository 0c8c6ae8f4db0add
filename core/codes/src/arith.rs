//! Multiplication modulo 2^32, as used by the first V7 stage.

/// Multiplicative inverse of `word` modulo 2^32. `word` must be odd.
///
/// Follows the firmware's MIPS R5900 routine step for step (it looks borrowed
/// from IDEA's key schedule).
pub fn mul_inverse(word: u32) -> u32 {
    debug_assert!(word & 1 == 1, "only odd words are invertible mod 2^32");

    if word == 1 {
        return 1;
    }

    // 2^32 mod word
    let mut rem = 0u32.wrapping_sub(word) % word;
    if rem == 0 {
        return 1;
    }

    let mut inv = 1u32;
    let mut div = word;
    let mut next = 0u32.wrapping_sub(u32::MAX / word);

    while rem != 0 {
        let quot = div / rem;
        let r = div % rem;
        div = rem;
        rem = r;

        let prev = next;
        next = inv.wrapping_sub(quot.wrapping_mul(prev));
        inv = prev;
    }

    inv
}

/// `a * (b | 1) mod 2^32`
pub fn mul_encrypt(a: u32, b: u32) -> u32 {
    a.wrapping_mul(b | 1)
}

/// `a * (b | 1)^-1 mod 2^32`, the inverse of [`mul_encrypt`].
pub fn mul_decrypt(a: u32, b: u32) -> u32 {
    a.wrapping_mul(mul_inverse(b | 1))
}
