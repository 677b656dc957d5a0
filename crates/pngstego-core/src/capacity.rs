//! Capacity accounting for the LSB carrier.
//!
//! Every pixel contributes its three color channel bytes as embedding
//! positions of one bit each, no matter whether an alpha channel is present.
//! Alpha bytes are never addressed, so RGB and RGBA images with the same
//! dimensions share the same capacity.

/// Number of embedding positions reserved for the payload length header.
/// They are always the first 32 positions of the carrier.
pub const LENGTH_HEADER_BITS: usize = 32;

/// Length header cost expressed in whole payload bytes.
pub const LENGTH_HEADER_BYTES: usize = LENGTH_HEADER_BITS / 8;

/// Number of single-bit embedding positions the image geometry offers.
pub fn capacity_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

/// Gross capacity in bytes, truncating any partial final byte.
/// A fractional byte is never usable as a full payload byte.
pub fn capacity_bytes(width: u32, height: u32) -> usize {
    capacity_bits(width, height) / 8
}

/// Net payload capacity in bytes, after the length header cost.
pub fn payload_capacity(width: u32, height: u32) -> usize {
    capacity_bytes(width, height).saturating_sub(LENGTH_HEADER_BYTES)
}
