use crate::container::split_signed;
use crate::crypto::{crypt_file_body, verify_signature};
use crate::error::{CbcError, Result};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Verify and decrypt a signed container, writing the plain body.
///
/// With `verify` an invalid signature is an error; without it the body is
/// decrypted anyway.
pub fn cbc_decrypt(input: &Path, output: &Option<PathBuf>, verify: bool) -> Result<()> {
    let data = fs::read(input)?;
    let (sig, body) = split_signed(&data)?;

    if !verify_signature(sig, body) {
        if verify {
            return Err(CbcError::InvalidSignature);
        }
        warn!("{:?}: invalid signature, do not trust its contents", input);
    }

    let mut body = body.to_vec();
    crypt_file_body(&mut body);

    let out_path = match output {
        Some(p) => p.clone(),
        None => input.with_extension("decrypted"),
    };

    fs::write(&out_path, body)?;
    println!("Decrypted CBC to {:?}", out_path);
    Ok(())
}

/// Apply the file cipher to a whole file (encrypts and decrypts).
pub fn cbc_crypt(input: &Path, output: &Option<PathBuf>) -> Result<()> {
    let mut data = fs::read(input)?;
    crypt_file_body(&mut data);

    let out_path = match output {
        Some(p) => p.clone(),
        None => input.with_extension("crypted"),
    };

    fs::write(&out_path, data)?;
    println!("Crypted to {:?}", out_path);
    Ok(())
}

/// Report whether a signed container carries a valid signature.
pub fn cbc_verify(input: &Path) -> Result<bool> {
    let data = fs::read(input)?;
    let (sig, body) = split_signed(&data)?;

    let valid = verify_signature(sig, body);
    if valid {
        println!("{:?}: signature OK", input);
    } else {
        println!("{:?}: signature INVALID", input);
    }
    Ok(valid)
}
