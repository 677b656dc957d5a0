use clap::Parser;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub(crate) type CliResult<T> = std::result::Result<T, pngstego_core::StegoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Embed(cmd) => cmd.run(),
        Commands::Extract(cmd) => cmd.run(),
    }
}
