mod commands;

use clap::{Parser, Subcommand};
use commands::{cbc::CbcCommands, codes::CodesCommands};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "cb2util")]
#[command(about = "CodeBreaker PS2 code and file utility", long_about = None)]
struct Cli {
    /// Print key schedule and mode changes
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Code list Operations (Decrypt/Encrypt)
    #[command(subcommand)]
    Codes(CodesCommands),
    /// CBC file Operations (Decrypt/Crypt/Verify)
    #[command(subcommand)]
    Cbc(CbcCommands),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter(
            None,
            if cli.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        )
        .init();

    match cli.command {
        Commands::Codes(cmd) => commands::codes::handle(cmd)?,
        Commands::Cbc(cmd) => commands::cbc::handle(cmd)?,
    }

    Ok(())
}
