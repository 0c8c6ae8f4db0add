/// ARCFOUR stream cipher, interoperable with RC4.
///
/// The CodeBreaker firmware reuses this one primitive with different keys for
/// code encryption, seed table scrambling and whole-file encryption. State is
/// carried across calls to [`Arc4::crypt`], so a fresh keystream needs a fresh
/// context.
#[derive(Debug, Clone)]
pub struct Arc4 {
    perm: [u8; 256],
    index1: u8,
    index2: u8,
}

impl Arc4 {
    /// Key-scheduling algorithm. `key` must not be empty.
    pub fn new(key: &[u8]) -> Self {
        debug_assert!(!key.is_empty(), "ARCFOUR key must not be empty");

        let mut perm = [0u8; 256];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = i as u8;
        }

        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(perm[i]).wrapping_add(key[i % key.len()]);
            perm.swap(i, j as usize);
        }

        Self {
            perm,
            index1: 0,
            index2: 0,
        }
    }

    /// XOR `buf` with the next `buf.len()` keystream bytes.
    ///
    /// Encryption and decryption are the same operation.
    pub fn crypt(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            self.index1 = self.index1.wrapping_add(1);
            self.index2 = self.index2.wrapping_add(self.perm[self.index1 as usize]);

            self.perm.swap(self.index1 as usize, self.index2 as usize);

            let k = self.perm[self.index1 as usize].wrapping_add(self.perm[self.index2 as usize]);
            *byte ^= self.perm[k as usize];
        }
    }
}

/// One-shot helper: fresh context from `key`, then crypt `buf` in place.
pub fn crypt(key: &[u8], buf: &mut [u8]) {
    Arc4::new(key).crypt(buf);
}
