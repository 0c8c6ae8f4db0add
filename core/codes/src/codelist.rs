//! Plain-text code lists: `AAAAAAAA VVVVVVVV` per code, anything else (game
//! titles, code labels, blank lines) passes through untouched.

use crate::error::{CodesError, Result};
use crate::session::Session;
use crate::types::{Code, DecryptMode};

fn parse_word(token: &str) -> Option<u32> {
    if token.len() != 8 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(token, 16).ok()
}

/// `Ok(None)` for text lines. A line starting with a hex word followed by one
/// malformed word is rejected rather than copied through.
pub fn parse_code_line(line: &str, line_no: usize) -> Result<Option<Code>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [addr, val] = tokens[..] else {
        return Ok(None);
    };
    let Some(addr) = parse_word(addr) else {
        return Ok(None);
    };
    match parse_word(val) {
        Some(val) => Ok(Some(Code::new(addr, val))),
        None => Err(CodesError::InvalidCodeLine {
            line: line_no,
            text: line.to_string(),
        }),
    }
}

fn transform<F>(text: &str, mode: DecryptMode, mut f: F) -> Result<String>
where
    F: FnMut(&mut Session, Code) -> Code,
{
    let mut session = Session::new(mode);
    let mut out = String::with_capacity(text.len());

    for (i, line) in text.lines().enumerate() {
        match parse_code_line(line, i + 1)? {
            Some(code) => out.push_str(&f(&mut session, code).to_string()),
            None => out.push_str(line),
        }
        out.push('\n');
    }

    if !text.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// Decrypt every code of a list, detecting raw/V1/V7 as it goes.
pub fn decrypt_code_list(text: &str, mode: DecryptMode) -> Result<String> {
    transform(text, mode, |session, code| session.decode(code))
}

/// Encrypt every code of a list: V1 until the first beefcode, V7 after.
pub fn encrypt_code_list(text: &str, mode: DecryptMode) -> Result<String> {
    transform(text, mode, |session, code| session.encrypt_code(code))
}
