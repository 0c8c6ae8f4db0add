mod constants;
pub mod container;
pub mod crypto;
pub mod error;
pub mod process;

pub use constants::{FILE_KEY, RSA_FILE_EXPONENT, RSA_FILE_MODULUS, RSA_SIG_SIZE};
pub use container::split_signed;
pub use crypto::{RsaPublicKey, crypt_file_body, verify_signature, verify_signature_with};
pub use error::{CbcError, Result};
