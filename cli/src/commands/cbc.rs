use anyhow::{Result, bail};
use cbc::process::{cbc_crypt, cbc_decrypt, cbc_verify};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum CbcCommands {
    /// Verify and decrypt a signed CBC file
    Decrypt {
        /// Input CBC file
        #[arg(short, long)]
        input: PathBuf,
        /// Output file (optional, defaults to input + .decrypted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Decrypt even if the signature is invalid
        #[arg(long)]
        no_verify: bool,
    },
    /// Encrypt/Decrypt raw data with the CBC file key
    Crypt {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,
        /// Output file (optional, defaults to input + .crypted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check the RSA signature of a CBC file
    Verify {
        /// Input CBC file
        #[arg(short, long)]
        input: PathBuf,
    },
}

pub fn handle(cmd: CbcCommands) -> Result<()> {
    match cmd {
        CbcCommands::Decrypt {
            input,
            output,
            no_verify,
        } => Ok(cbc_decrypt(&input, &output, !no_verify)?),
        CbcCommands::Crypt { input, output } => Ok(cbc_crypt(&input, &output)?),
        CbcCommands::Verify { input } => {
            if !cbc_verify(&input)? {
                bail!("{:?}: invalid signature", input);
            }
            Ok(())
        }
    }
}
