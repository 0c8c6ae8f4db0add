use crate::constants::BEEFCODE;
use std::fmt;
use utils::{bytes_to_words, words_to_bytes};

/// One cheat code row: address word and value word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Code {
    pub addr: u32,
    pub val: u32,
}

impl Code {
    pub const fn new(addr: u32, val: u32) -> Self {
        Self { addr, val }
    }

    /// Command nibble: top 4 bits of the address.
    pub fn command(&self) -> usize {
        (self.addr >> 28) as usize
    }

    /// `BEEFC0DE` or `BEEFC0DF`.
    pub fn is_beefcode(&self) -> bool {
        self.addr & !1 == BEEFCODE
    }

    /// Address then value, each little-endian.
    pub fn to_bytes(self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        words_to_bytes(&[self.addr, self.val], &mut bytes);
        bytes
    }

    pub fn from_bytes(bytes: &[u8; 8]) -> Self {
        let mut words = [0u32; 2];
        bytes_to_words(bytes, &mut words);
        Self::new(words[0], words[1])
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X} {:08X}", self.addr, self.val)
    }
}

/// Encryption currently applied to the code stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Raw,
    V1,
    V7,
}

/// How a session starts out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecryptMode {
    /// Start raw and switch on what the stream contains.
    #[default]
    Detect,
    /// Start in V7 with the key of `BEEFC0DE 00000000`, as used by
    /// CMGSCCC.com code lists.
    CommonV7,
}

/// 20-byte ARCFOUR key, kept as five little-endian words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyMaterial(pub [u32; 5]);

impl KeyMaterial {
    pub fn to_bytes(&self) -> [u8; 20] {
        let mut bytes = [0u8; 20];
        words_to_bytes(&self.0, &mut bytes);
        bytes
    }

    pub fn from_bytes(bytes: &[u8; 20]) -> Self {
        let mut words = [0u32; 5];
        bytes_to_words(bytes, &mut words);
        Self(words)
    }
}

pub const SEED_TABLE_SIZE: usize = 256;
pub const SEED_TABLE_WORDS: usize = SEED_TABLE_SIZE / 4;

/// Five 256-byte V7 seed tables.
///
/// Stored as bytes because ARCFOUR and the key derivation work on bytes; the
/// mixing network reads each table as 64 little-endian words.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedTables([[u8; SEED_TABLE_SIZE]; 5]);

impl SeedTables {
    pub const fn zeroed() -> Self {
        Self([[0; SEED_TABLE_SIZE]; 5])
    }

    pub const fn from_tables(tables: [[u8; SEED_TABLE_SIZE]; 5]) -> Self {
        Self(tables)
    }

    pub fn table(&self, index: usize) -> &[u8; SEED_TABLE_SIZE] {
        &self.0[index]
    }

    pub fn table_mut(&mut self, index: usize) -> &mut [u8; SEED_TABLE_SIZE] {
        &mut self.0[index]
    }

    pub fn words(&self, index: usize) -> [u32; SEED_TABLE_WORDS] {
        let mut words = [0u32; SEED_TABLE_WORDS];
        bytes_to_words(&self.0[index], &mut words);
        words
    }

    /// All 1280 bytes, table 0 first.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_flattened()
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.0.as_flattened_mut()
    }
}

impl Default for SeedTables {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl fmt::Debug for SeedTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heads: Vec<u32> = (0..5).map(|i| self.words(i)[0]).collect();
        f.debug_struct("SeedTables").field("first_words", &heads).finish()
    }
}
