//! # pngstego core
//!
//! Hides an arbitrary byte payload inside the pixel data of a PNG image by
//! substituting the least significant bit of the red, green and blue channel
//! bytes, and recovers it later without any external metadata. A 32 bit
//! length header is embedded ahead of the payload; alpha bytes are never
//! touched.
//!
//! # Usage Examples
//!
//! ## Hide a payload inside an image
//!
//! ```rust
//! use pngstego_core::{lsb, Raster, RgbImage};
//!
//! let carrier = RgbImage::from_pixel(16, 16, image::Rgb([120, 90, 33]));
//! let mut raster = Raster::from_rgb8(carrier);
//!
//! lsb::embed(&mut raster, b"my secret").expect("payload fits a 16x16 image");
//! ```
//!
//! ## Recover the payload
//!
//! ```rust
//! # use pngstego_core::{lsb, Raster, RgbImage};
//! # let carrier = RgbImage::from_pixel(16, 16, image::Rgb([120, 90, 33]));
//! # let mut raster = Raster::from_rgb8(carrier);
//! # lsb::embed(&mut raster, b"my secret").unwrap();
//! let payload = lsb::extract(&raster).expect("image carries a payload");
//! assert_eq!(payload, b"my secret");
//! ```

use std::path::Path;

pub mod capacity;
pub mod commands;
pub mod error;
pub mod lsb;
pub mod raster;
pub mod result;

pub use capacity::{capacity_bits, capacity_bytes, payload_capacity};
pub use capacity::{LENGTH_HEADER_BITS, LENGTH_HEADER_BYTES};
pub use error::StegoError;
pub use raster::{ColorLayout, Raster, RgbImage, RgbaImage};
pub use result::Result;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> Result<()>;
}
