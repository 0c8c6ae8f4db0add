pub mod bignum;
pub mod words;

pub use bignum::{compare, from_words, pow_mod, to_words};
pub use words::{bytes_to_words, words_to_bytes};
