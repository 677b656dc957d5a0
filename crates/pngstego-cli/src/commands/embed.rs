use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use dialoguer::Confirm;
use pngstego_core::{lsb, Persist, Raster, StegoError};

use crate::CliResult;

/// Embeds a message into a PNG image
#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Carrier PNG image, used readonly
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// File with the message to embed
    #[arg(short = 'd', long = "data", value_name = "message file", required = true)]
    pub data: PathBuf,

    /// Where the image with the embedded message is written to,
    /// defaults to embedded_<image> next to the input
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub output: Option<PathBuf>,
}

impl EmbedArgs {
    pub fn run(self) -> CliResult<()> {
        let mut raster = Raster::from_file(&self.image)?;
        let mut payload =
            fs::read(&self.data).map_err(|source| StegoError::ReadError { source })?;

        let (width, height) = raster.dimensions();
        let available = raster.payload_capacity();
        log::debug!(
            "carrier {width}x{height}, {} payload bytes, {available} bytes available",
            payload.len()
        );
        println!("Image is {width}px x {height}px");
        println!(
            "Able to embed {} bytes ({:.2} kilobytes) of data",
            available,
            available as f64 / 1000.0
        );

        if payload.len() > available {
            let overflow = payload.len() - available;
            let truncate = Confirm::new()
                .with_prompt(format!(
                    "The message is {overflow} bytes too large for this image. \
                     Embed only the first {available} bytes instead?"
                ))
                .default(false)
                .interact()
                .unwrap_or(false);

            if !truncate {
                return Err(StegoError::CapacityExceeded {
                    required: payload.len(),
                    available,
                });
            }
            payload.truncate(available);
        }

        lsb::embed(&mut raster, &payload)?;

        let destination = self
            .output
            .unwrap_or_else(|| default_output_name(&self.image));
        raster.save_as(&destination)?;

        println!("Message has been embedded!");
        println!("{} bytes embedded into {}", payload.len(), destination.display());

        Ok(())
    }
}

/// `embedded_<input>` in the input's directory.
fn default_output_name(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|n| {
            let mut prefixed = OsString::from("embedded_");
            prefixed.push(n);
            prefixed
        })
        .unwrap_or_else(|| OsString::from("embedded.png"));

    image.with_file_name(name)
}
