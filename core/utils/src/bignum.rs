//! Arbitrary-precision helpers over little-endian 32-bit word sequences.
//!
//! Callers keep their operands as fixed-length word arrays (least significant
//! word first) and only lift them into [`BigUint`] for comparison and modular
//! exponentiation.

use num_bigint::BigUint;
use std::cmp::Ordering;

/// Build a number from little-endian words.
pub fn from_words(words: &[u32]) -> BigUint {
    BigUint::from_slice(words)
}

/// Lower a number back into exactly `len` little-endian words.
///
/// Higher words beyond `len` are dropped; callers only pass values already
/// reduced below a modulus of that width.
pub fn to_words(n: &BigUint, len: usize) -> Vec<u32> {
    let mut words = n.to_u32_digits();
    words.resize(len, 0);
    words
}

pub fn compare(a: &[u32], b: &[u32]) -> Ordering {
    from_words(a).cmp(&from_words(b))
}

/// `base ^ exponent mod modulus`, all little-endian words, result padded to
/// the modulus width.
pub fn pow_mod(base: &[u32], exponent: &[u32], modulus: &[u32]) -> Vec<u32> {
    let result = from_words(base).modpow(&from_words(exponent), &from_words(modulus));
    to_words(&result, modulus.len())
}
