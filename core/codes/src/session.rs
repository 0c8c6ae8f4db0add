use crate::beefcode::KeySchedule;
use crate::constants::OPTION_CODE;
use crate::types::{Code, DecryptMode, Mode};
use crate::v1;
use crate::v7::CipherV7;
use log::debug;

/// Number of lines (code rows) the code starting with `addr` occupies.
pub fn num_code_lines(addr: u32) -> u32 {
    let cmd = addr >> 28;

    if !(3..=6).contains(&cmd) {
        1
    } else if cmd == 3 {
        if addr & 0x00400000 != 0 { 2 } else { 1 }
    } else {
        2
    }
}

/// Encryption state for one code list.
///
/// Every list must go through a fresh (or [`reset`](Self::reset)) session:
/// the mode, the line accounting and the V7 keys all depend on the codes
/// seen so far.
#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: Mode,
    v7_initialized: bool,
    remaining_lines: u32,
    v7: CipherV7,
}

impl Session {
    pub fn new(mode: DecryptMode) -> Self {
        let mut session = Self::default();
        if mode == DecryptMode::CommonV7 {
            session.set_common_v7();
        }
        session
    }

    /// Back to raw mode with empty keys.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Switch to V7 with the common key (`BEEFC0DE 00000000`).
    pub fn set_common_v7(&mut self) {
        self.mode = Mode::V7;
        self.v7.rekey(true, 0);
        self.v7_initialized = true;
        self.v7.set_beefcode_pending(false);
        self.remaining_lines = 0;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_lines(&self) -> u32 {
        self.remaining_lines
    }

    pub fn v7_initialized(&self) -> bool {
        self.v7_initialized
    }

    pub fn beefcode_pending(&self) -> bool {
        self.v7.beefcode_pending()
    }

    pub fn key_schedule(&self) -> &KeySchedule {
        self.v7.schedule()
    }

    /// Encrypt one code of a list, V7 once a beefcode has been seen and V1
    /// before that.
    pub fn encrypt_code(&mut self, code: Code) -> Code {
        let out = match self.mode {
            Mode::V7 => self.v7.encrypt(code),
            Mode::Raw | Mode::V1 => v1::encrypt(code),
        };

        if code.is_beefcode() {
            self.beefcode(code);
        }
        out
    }

    /// Decrypt one code of a list known to be encrypted.
    pub fn decrypt_code(&mut self, code: Code) -> Code {
        let out = match self.mode {
            Mode::V7 => self.v7.decrypt(code),
            Mode::Raw | Mode::V1 => v1::decrypt(code),
        };

        if out.is_beefcode() {
            self.beefcode(out);
        }
        out
    }

    /// Decrypt one code of a list that may be raw, V1 or V7, detecting the
    /// encryption as it goes.
    ///
    /// Detection only happens on the first line of a code; the remaining lines
    /// of a multi-line code are treated the same way as its first.
    pub fn decode(&mut self, code: Code) -> Code {
        let out = match self.mode {
            Mode::V7 => {
                let out = self.v7.decrypt(code);
                if self.remaining_lines == 0 {
                    self.remaining_lines = num_code_lines(out.addr);
                    if self.remaining_lines == 1 && out.addr == OPTION_CODE {
                        // option code, value is not interpreted
                        self.remaining_lines = 0;
                        return out;
                    }
                }
                self.remaining_lines -= 1;
                out
            }
            Mode::Raw | Mode::V1 if self.remaining_lines == 0 => {
                self.remaining_lines = num_code_lines(code.addr) - 1;
                if (code.addr >> 24) & 0x0E == 0 {
                    self.mode = Mode::Raw;
                    return code;
                }
                if code.is_beefcode() {
                    // unencrypted beefcode, nothing to do
                    return code;
                }
                if self.mode != Mode::V1 {
                    debug!("V1 encryption detected at {}", code);
                }
                self.mode = Mode::V1;
                v1::decrypt(code)
            }
            Mode::Raw => {
                self.remaining_lines -= 1;
                return code;
            }
            Mode::V1 => {
                self.remaining_lines -= 1;
                v1::decrypt(code)
            }
        };

        if out.is_beefcode() {
            self.beefcode(out);
            self.remaining_lines = 1;
        }
        out
    }

    fn beefcode(&mut self, code: Code) {
        self.v7.rekey(!self.v7_initialized, code.val);
        self.v7_initialized = true;
        if self.mode != Mode::V7 {
            debug!("switching to V7 at {}", code);
        }
        self.mode = Mode::V7;
        self.v7.set_beefcode_pending(code.addr & 1 != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(addr: u32, val: u32) -> Code {
        Code::new(addr, val)
    }

    #[test]
    fn test_num_code_lines() {
        assert_eq!(num_code_lines(0x00000000), 1);
        assert_eq!(num_code_lines(0x20000000), 1);
        assert_eq!(num_code_lines(0x30000000), 1);
        assert_eq!(num_code_lines(0x30400000), 2);
        assert_eq!(num_code_lines(0x40000000), 2);
        assert_eq!(num_code_lines(0x6FFFFFFF), 2);
        assert_eq!(num_code_lines(0x70000000), 1);
        assert_eq!(num_code_lines(0xFFFFFFFF), 1);
    }

    #[test]
    fn test_reset_state() {
        let mut session = Session::new(DecryptMode::CommonV7);
        assert_eq!(session.mode(), Mode::V7);
        assert!(session.v7_initialized());
        session.reset();
        assert_eq!(session.mode(), Mode::Raw);
        assert!(!session.v7_initialized());
        assert!(!session.beefcode_pending());
        assert_eq!(session.remaining_lines(), 0);
        assert_eq!(session.key_schedule(), &KeySchedule::new());
    }

    #[test]
    fn test_raw_stream_line_accounting() {
        let mut session = Session::default();

        let first = c(0x30401234, 0x000000FF);
        assert_eq!(session.decode(first), first);
        assert_eq!(session.mode(), Mode::Raw);
        assert_eq!(session.remaining_lines(), 1);

        // second line of the cmd 3 code is never classified
        let second = c(0x00000001, 0x00000002);
        assert_eq!(session.decode(second), second);
        assert_eq!(session.remaining_lines(), 0);

        let third = c(0x10100000, 0x00000063);
        assert_eq!(session.decode(third), third);
        assert_eq!(session.remaining_lines(), 0);
    }

    #[test]
    fn test_raw_beefcode_is_ignored() {
        let mut session = Session::default();
        let raw = c(0xBEEFC0DE, 0);
        assert_eq!(session.decode(raw), raw);
        assert_eq!(session.mode(), Mode::Raw);
        assert!(!session.v7_initialized());
    }

    #[test]
    fn test_v1_sentinel_on_second_line() {
        let stream = [
            c(0x3A55CD40, 0xAFAB4D4F),
            c(0xB4336FA9, 0x4DFEFB79),
            c(0x397951B0, 0x41569FE0),
            c(0x73328B6C, 0x018D5512),
        ];
        let mut session = Session::default();

        assert_eq!(session.decode(stream[0]), c(0x30401234, 0x000000FF));
        assert_eq!(session.mode(), Mode::V1);
        assert_eq!(session.remaining_lines(), 1);

        assert_eq!(session.decode(stream[1]), c(0xBEEFC0DE, 0));
        assert_eq!(session.mode(), Mode::V7);
        assert_eq!(session.remaining_lines(), 1);

        assert_eq!(session.decode(stream[2]), c(0x2043AFCC, 0x2411FFFF));
        assert_eq!(session.remaining_lines(), 0);
        assert_eq!(session.decode(stream[3]), c(0x10100000, 0x00000063));
    }

    #[test]
    fn test_v7_sentinel_on_second_line() {
        let mut session = Session::new(DecryptMode::CommonV7);

        assert_eq!(
            session.decode(c(0xC3A7A146, 0xC2251021)),
            c(0x30401234, 0x000000FF)
        );
        assert_eq!(session.remaining_lines(), 1);

        assert_eq!(
            session.decode(c(0xF9DC7D10, 0xAB8C6E32)),
            c(0xBEEFC0DE, 0x0BADF00D)
        );
        assert_eq!(session.remaining_lines(), 1);

        assert_eq!(
            session.decode(c(0xE509D261, 0x3B839A9D)),
            c(0x10200000, 0x00000007)
        );
        assert_eq!(session.remaining_lines(), 0);
    }

    #[test]
    fn test_option_code_consumes_no_lines() {
        let mut session = Session::new(DecryptMode::CommonV7);
        assert_eq!(
            session.decode(c(0x1C65C412, 0x26F27361)),
            c(0xFFFFFFFF, 0x00000001)
        );
        assert_eq!(session.remaining_lines(), 0);
    }

    #[test]
    fn test_beefcodf_stream() {
        let encrypted = [
            c(0xB4336FA9, 0xB8312F34),
            c(0xBA15E7A1, 0x50E5A746),
            c(0x4FB71599, 0x62F3854D),
            c(0x0CE8A618, 0x7121BDBA),
            c(0x29086F21, 0xF91B0C0E),
        ];
        let plain = [
            c(0xBEEFC0DE, 0x1234ABCD),
            c(0x2043AFCC, 0x2411FFFF),
            c(0xBEEFC0DF, 0xCAFEBABE),
            c(0x9A0F1234, 0x00000055),
            c(0x20100000, 0x00000001),
        ];

        let mut session = Session::default();
        for (i, (&e, &p)) in encrypted.iter().zip(plain.iter()).enumerate() {
            assert_eq!(session.decode(e), p, "line {}", i);
            if i == 2 {
                assert!(session.beefcode_pending());
            }
        }
        assert!(!session.beefcode_pending());

        let mut encoder = Session::default();
        for (&e, &p) in encrypted.iter().zip(plain.iter()) {
            assert_eq!(encoder.encrypt_code(p), e);
        }
        assert_eq!(encoder.key_schedule(), session.key_schedule());
    }

    #[test]
    fn test_encrypt_then_decrypt_keeps_state_in_step() {
        let plain = [
            c(0xBEEFC0DE, 0x00000000),
            c(0x2043AFCC, 0x2411FFFF),
            c(0xBEEFC0DE, 0x87654321),
            c(0x4A2B3C4D, 0x00000010),
            c(0x00000000, 0x00000001),
        ];
        let mut encoder = Session::default();
        let mut decoder = Session::default();
        for &p in plain.iter() {
            let e = encoder.encrypt_code(p);
            assert_eq!(decoder.decrypt_code(e), p);
            assert_eq!(encoder.key_schedule(), decoder.key_schedule());
            assert_eq!(encoder.mode(), decoder.mode());
        }
    }

    #[test]
    fn test_common_v7_matches_common_beefcode() {
        let mut detected = Session::default();
        detected.decode(c(0xB4336FA9, 0x4DFEFB79));

        let common = Session::new(DecryptMode::CommonV7);
        assert_eq!(detected.key_schedule(), common.key_schedule());
        assert_eq!(detected.mode(), Mode::V7);
    }
}
