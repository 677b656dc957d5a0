use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Extracts an embedded message from a PNG image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Image that contains an embedded message
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// The recovered message is written to this file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output: PathBuf,
}

impl ExtractArgs {
    pub fn run(self) -> CliResult<()> {
        let bytes = pngstego_core::commands::extract_file(&self.image, &self.output)?;

        println!("Done extracting!");
        println!("{} bytes extracted into {}", bytes, self.output.display());

        Ok(())
    }
}
