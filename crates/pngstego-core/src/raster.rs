//! Decoded carrier image, stored as a flat row-major buffer of 8 bit samples.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use image::DynamicImage;
pub use image::{RgbImage, RgbaImage};
use log::error;

use crate::capacity;
use crate::error::StegoError;
use crate::result::Result;
use crate::Persist;

/// Channel layout of the carrier. Only 8 bit RGB and RGBA images are
/// supported, anything else is rejected on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayout {
    Rgb,
    Rgba,
}

impl ColorLayout {
    /// sample bytes per pixel
    pub fn channels(&self) -> usize {
        match self {
            ColorLayout::Rgb => 3,
            ColorLayout::Rgba => 4,
        }
    }
}

/// An uncompressed raster buffer the codec embeds into and extracts from.
///
/// Each pixel occupies [`ColorLayout::channels`] consecutive sample bytes;
/// the row byte-stride is `width * channels`. The codec only ever addresses
/// the first three channel bytes of every pixel, see [`Raster::carrier_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    layout: ColorLayout,
    samples: Vec<u8>,
}

impl Raster {
    pub fn from_rgb8(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            layout: ColorLayout::Rgb,
            samples: image.into_raw(),
        }
    }

    pub fn from_rgba8(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            layout: ColorLayout::Rgba,
            samples: image.into_raw(),
        }
    }

    /// Loads a carrier from a PNG file.
    ///
    /// # Errors
    ///
    /// [`StegoError::UnsupportedMedia`] for non-PNG paths,
    /// [`StegoError::InvalidImageMedia`] when the file cannot be decoded and
    /// [`StegoError::UnsupportedColorType`] for any color type other than
    /// 8 bit RGB or RGBA (grayscale, palette or 16 bit images).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .ok_or(StegoError::UnsupportedMedia)?;
        if ext != "png" {
            return Err(StegoError::UnsupportedMedia);
        }

        match image::open(path).map_err(|e| {
            error!("Error opening image {path:?}: {e}");
            StegoError::InvalidImageMedia
        })? {
            DynamicImage::ImageRgb8(image) => Ok(Self::from_rgb8(image)),
            DynamicImage::ImageRgba8(image) => Ok(Self::from_rgba8(image)),
            _ => Err(StegoError::UnsupportedColorType),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn layout(&self) -> ColorLayout {
        self.layout
    }

    /// The flat row-major sample buffer, `width * height * channels` bytes.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Carrier bytes in embedding-position order: row-major over pixels,
    /// the first three channel bytes of each pixel block. Alpha bytes are
    /// skipped by construction and are never yielded.
    ///
    /// This is the single addressing scheme shared by embed and extract.
    pub fn carrier_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.samples
            .chunks_exact(self.layout.channels())
            .flat_map(|pixel| pixel[..3].iter().copied())
    }

    /// Mutable variant of [`Raster::carrier_bytes`], same order.
    pub fn carrier_bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> + '_ {
        self.samples
            .chunks_exact_mut(self.layout.channels())
            .flat_map(|pixel| pixel[..3].iter_mut())
    }

    pub fn capacity_bits(&self) -> usize {
        capacity::capacity_bits(self.width, self.height)
    }

    pub fn capacity_bytes(&self) -> usize {
        capacity::capacity_bytes(self.width, self.height)
    }

    pub fn payload_capacity(&self) -> usize {
        capacity::payload_capacity(self.width, self.height)
    }

    pub fn save_to_writer<W: Write + Seek>(&self, writer: &mut W) -> Result<()> {
        let image = match self.layout {
            ColorLayout::Rgb => RgbImage::from_raw(self.width, self.height, self.samples.clone())
                .map(DynamicImage::ImageRgb8),
            ColorLayout::Rgba => RgbaImage::from_raw(self.width, self.height, self.samples.clone())
                .map(DynamicImage::ImageRgba8),
        }
        .ok_or(StegoError::ImageEncodingError)?;

        image.write_to(writer, image::ImageFormat::Png).map_err(|e| {
            error!("Error saving image: {e}");
            StegoError::ImageEncodingError
        })
    }
}

impl Persist for Raster {
    fn save_as(&mut self, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| {
            error!("Error creating file {path:?}: {source}");
            StegoError::WriteError { source }
        })?;

        self.save_to_writer(&mut file)
    }
}
