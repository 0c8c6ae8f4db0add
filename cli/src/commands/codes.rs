use anyhow::Result;
use clap::Subcommand;
use codes::DecryptMode;
use codes::process::{codes_decrypt, codes_encrypt};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum CodesCommands {
    /// Decrypt a code list (raw, V1 and V7 are detected)
    Decrypt {
        /// Input code list
        #[arg(short, long)]
        input: PathBuf,
        /// Output file (optional, defaults to input + .decrypted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Start with the common V7 key (CMGSCCC.com lists)
        #[arg(long)]
        common_v7: bool,
    },
    /// Encrypt a code list (V1 until the first BEEFC0DE, V7 after)
    Encrypt {
        /// Input code list
        #[arg(short, long)]
        input: PathBuf,
        /// Output file (optional, defaults to input + .encrypted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Start with the common V7 key (CMGSCCC.com lists)
        #[arg(long)]
        common_v7: bool,
    },
}

fn mode(common_v7: bool) -> DecryptMode {
    if common_v7 {
        DecryptMode::CommonV7
    } else {
        DecryptMode::Detect
    }
}

pub fn handle(cmd: CodesCommands) -> Result<()> {
    match cmd {
        CodesCommands::Decrypt {
            input,
            output,
            common_v7,
        } => Ok(codes_decrypt(&input, &output, mode(common_v7))?),
        CodesCommands::Encrypt {
            input,
            output,
            common_v7,
        } => Ok(codes_encrypt(&input, &output, mode(common_v7))?),
    }
}
