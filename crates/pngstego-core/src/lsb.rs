//! Least significant bit embedding and extraction.
//!
//! The wire layout inside the carrier is a 32 bit length word followed by the
//! payload, one bit per carrier byte, least significant bit first within every
//! frame byte. Bit `i` of the frame therefore lands at embedding position `i`:
//! the length occupies positions `0..32`, bit `b` of payload byte `k` sits at
//! position `32 + k * 8 + b`. Everything past the end of the frame is left
//! byte-for-byte untouched.

use std::io::Cursor;

use bitstream_io::{BitRead, BitReader, BitWrite, BitWriter, LittleEndian};
use byteorder::{WriteBytesExt, LE};

use crate::capacity::{LENGTH_HEADER_BITS, LENGTH_HEADER_BYTES};
use crate::error::StegoError;
use crate::raster::Raster;
use crate::result::Result;

/// Embeds `payload` into the carrier, in place.
///
/// # Errors
///
/// [`StegoError::CapacityExceeded`] when the payload does not fit the image,
/// or when the image cannot even hold the 32 bit length header. The carrier
/// is not modified in that case.
pub fn embed(raster: &mut Raster, payload: &[u8]) -> Result<()> {
    let available = raster.payload_capacity();
    if raster.capacity_bytes() < LENGTH_HEADER_BYTES || payload.len() > available {
        return Err(StegoError::CapacityExceeded {
            required: payload.len(),
            available,
        });
    }
    let length = u32::try_from(payload.len()).map_err(|_| StegoError::CapacityExceeded {
        required: payload.len(),
        available,
    })?;

    let mut frame = Vec::with_capacity(LENGTH_HEADER_BYTES + payload.len());
    frame.write_u32::<LE>(length)?;
    frame.extend_from_slice(payload);

    let frame_bits = frame.len() * 8;
    let mut bits = BitReader::endian(Cursor::new(frame), LittleEndian);
    for sample in raster.carrier_bytes_mut().take(frame_bits) {
        let bit = bits.read_bit()?;
        *sample = (*sample & 0xFE) | u8::from(bit);
    }

    Ok(())
}

/// Extracts the embedded payload from the carrier.
///
/// Reads the 32 bit length header, then exactly that many payload bytes and
/// nothing beyond. The returned bytes carry no framing.
///
/// # Errors
///
/// [`StegoError::CorruptLengthHeader`] when the header claims more data than
/// the image geometry could hold, which means the image was never embedded or
/// has been damaged.
pub fn extract(raster: &Raster) -> Result<Vec<u8>> {
    let mut carrier = raster.carrier_bytes();

    let mut length: u32 = 0;
    for shift in 0..LENGTH_HEADER_BITS {
        match carrier.next() {
            Some(sample) => length |= u32::from(sample & 1) << shift,
            // geometry too small for a full header, the bounds check rejects it
            None => break,
        }
    }

    let needed_bits = LENGTH_HEADER_BITS as u64 + u64::from(length) * 8;
    if needed_bits > raster.capacity_bits() as u64 {
        return Err(StegoError::CorruptLengthHeader {
            claimed: length as usize,
            capacity: raster.payload_capacity(),
        });
    }

    let length = length as usize;
    let mut bits = BitWriter::endian(Vec::with_capacity(length), LittleEndian);
    for sample in carrier.take(length * 8) {
        bits.write_bit(sample & 1 == 1)?;
    }

    Ok(bits.into_writer())
}
