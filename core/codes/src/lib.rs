mod arith;
mod beefcode;
mod codelist;
mod constants;
pub mod error;
pub mod process;
mod session;
mod types;
pub mod v1;
pub mod v7;

pub use arith::{mul_decrypt, mul_encrypt, mul_inverse};
pub use beefcode::KeySchedule;
pub use codelist::{decrypt_code_list, encrypt_code_list, parse_code_line};
pub use constants::{BEEFCODE, OPTION_CODE};
pub use error::{CodesError, Result};
pub use session::{Session, num_code_lines};
pub use types::{Code, DecryptMode, KeyMaterial, Mode, SeedTables};
pub use v7::CipherV7;
