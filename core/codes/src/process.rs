use crate::error::Result;
use crate::types::DecryptMode;
use crate::{decrypt_code_list, encrypt_code_list};
use std::fs;
use std::path::{Path, PathBuf};

pub fn codes_decrypt(input: &Path, output: &Option<PathBuf>, mode: DecryptMode) -> Result<()> {
    let text = fs::read_to_string(input)?;
    let decrypted = decrypt_code_list(&text, mode)?;

    let out_path = match output {
        Some(p) => p.clone(),
        None => input.with_extension("decrypted"),
    };

    fs::write(&out_path, decrypted)?;
    println!("Decrypted codes to {:?}", out_path);
    Ok(())
}

pub fn codes_encrypt(input: &Path, output: &Option<PathBuf>, mode: DecryptMode) -> Result<()> {
    let text = fs::read_to_string(input)?;
    let encrypted = encrypt_code_list(&text, mode)?;

    let out_path = match output {
        Some(p) => p.clone(),
        None => input.with_extension("encrypted"),
    };

    fs::write(&out_path, encrypted)?;
    println!("Encrypted codes to {:?}", out_path);
    Ok(())
}
