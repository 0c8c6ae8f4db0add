//! V7 key and seed generation, triggered by `BEEFC0DE VVVVVVVV` codes.

use crate::constants::{DEFAULT_KEY, DEFAULT_SEEDS};
use crate::types::{KeyMaterial, SeedTables};
use arcfour::Arc4;
use log::debug;

/// Number of seed tables; also the number of key schedule rounds.
const ROUNDS: usize = 5;

/// Key material and seed tables evolved by successive beefcodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySchedule {
    key: KeyMaterial,
    old_key: KeyMaterial,
    seeds: SeedTables,
}

impl KeySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current ARCFOUR key for the V7 stream stage.
    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }

    /// Snapshot taken at the end of the last [`rekey`](Self::rekey); feeds
    /// the V7 multiply stage.
    pub fn old_key(&self) -> &KeyMaterial {
        &self.old_key
    }

    pub fn seeds(&self) -> &SeedTables {
        &self.seeds
    }

    pub(crate) fn seeds_mut(&mut self) -> &mut SeedTables {
        &mut self.seeds
    }

    /// Derive new key material and seed tables from `seed`.
    ///
    /// A full reset starts over from the default key (and the default seed
    /// tables when `seed` is non-zero); otherwise the current tables feed the
    /// derivation. Five ARCFOUR rounds then encrypt one seed table each and
    /// carry the key forward into the next round.
    pub fn rekey(&mut self, full_reset: bool, seed: u32) {
        if full_reset {
            self.key = KeyMaterial(DEFAULT_KEY);
            if seed != 0 {
                self.seeds = SeedTables::from_tables(DEFAULT_SEEDS);
                self.derive_key(seed);
            } else {
                self.seeds = SeedTables::zeroed();
            }
        } else if seed != 0 {
            self.derive_key(seed);
        } else {
            self.seeds = SeedTables::zeroed();
            self.key.0[..4].fill(0);
        }

        for round in 0..ROUNDS {
            let mut key = self.key.to_bytes();
            let mut ctx = Arc4::new(&key);
            ctx.crypt(self.seeds.table_mut(round));
            ctx.crypt(&mut key);
            self.key = KeyMaterial::from_bytes(&key);
        }

        self.old_key = self.key;
        debug!(
            "beefcode {:08X} (full reset: {}): key {:08X?}",
            seed, full_reset, self.key.0
        );
    }

    /// Gather the four low key words from seed tables 0..3, one byte per
    /// table, indexed by the bytes of `seed`. Byte `k` of word `w` comes from
    /// table `(w + k) % 4`.
    fn derive_key(&mut self, seed: u32) {
        let index = seed.to_le_bytes();
        for (w, word) in self.key.0[..4].iter_mut().enumerate() {
            *word = (0..4).fold(0u32, |acc, k| {
                let byte = self.seeds.table((w + k) % 4)[index[k] as usize];
                acc | (byte as u32) << (8 * k)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_key() {
        let mut schedule = KeySchedule::new();
        schedule.rekey(true, 0);
        assert_eq!(
            schedule.key().0,
            [0x16FABD17, 0xC7218B18, 0xDEB6FDD7, 0xC7CFD5DF, 0x0B035D57]
        );
        assert_eq!(schedule.old_key(), schedule.key());

        let seeds = schedule.seeds();
        assert_eq!(seeds.words(0)[..2], [0xADC315E6, 0x71C30ED2]);
        assert_eq!(seeds.words(4)[62..], [0x100F8072, 0x45E29EBD]);
    }

    #[test]
    fn test_seeded_key() {
        let mut schedule = KeySchedule::new();
        schedule.rekey(true, 0x12345678);
        assert_eq!(
            schedule.key().0,
            [0x920A4D6B, 0xBE2F09BA, 0xB58C496E, 0xF7D5646A, 0xE64DA223]
        );
    }

    #[test]
    fn test_full_reset_forgets_history() {
        let mut fresh = KeySchedule::new();
        fresh.rekey(true, 0xCAFEBABE);

        let mut used = KeySchedule::new();
        used.rekey(true, 0x11111111);
        used.rekey(false, 0x22222222);
        used.rekey(true, 0xCAFEBABE);

        assert_eq!(fresh, used);
    }

    #[test]
    fn test_incremental_rekey_depends_on_history() {
        let mut a = KeySchedule::new();
        a.rekey(true, 0x11111111);
        a.rekey(false, 0x33333333);

        let mut b = KeySchedule::new();
        b.rekey(true, 0x22222222);
        b.rekey(false, 0x33333333);

        assert_ne!(a.key(), b.key());
        assert_ne!(a.seeds(), b.seeds());
    }

    #[test]
    fn test_zero_seed_clears_tables_before_rounds() {
        let mut a = KeySchedule::new();
        a.rekey(true, 0x11111111);
        a.rekey(false, 0);

        // Only key word 4 survives from the previous state.
        let mut expected = KeySchedule::new();
        expected.key.0[4] = {
            let mut prev = KeySchedule::new();
            prev.rekey(true, 0x11111111);
            prev.key().0[4]
        };
        expected.rekey(false, 0);

        assert_eq!(a, expected);
    }
}
