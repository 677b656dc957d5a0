//! File-level operations, the surface the command line tool builds on.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::StegoError;
use crate::lsb;
use crate::raster::Raster;
use crate::result::Result;
use crate::Persist;

/// Embeds the contents of `payload_file` into the PNG at `carrier` and
/// writes the resulting image to `destination`.
pub fn embed_file(carrier: &Path, payload_file: &Path, destination: &Path) -> Result<()> {
    let mut raster = Raster::from_file(carrier)?;
    let payload = fs::read(payload_file).map_err(|source| StegoError::ReadError { source })?;

    lsb::embed(&mut raster, &payload)?;
    raster.save_as(destination)
}

/// Extracts the embedded payload from the PNG at `secret_image` and writes it
/// to `destination`. Returns the number of payload bytes recovered.
pub fn extract_file(secret_image: &Path, destination: &Path) -> Result<usize> {
    let raster = Raster::from_file(secret_image)?;
    let payload = lsb::extract(&raster)?;

    let mut destination_file =
        File::create(destination).map_err(|source| StegoError::WriteError { source })?;
    destination_file
        .write_all(&payload)
        .map_err(|source| StegoError::WriteError { source })?;

    Ok(payload.len())
}
