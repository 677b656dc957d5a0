use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents an unsupported carrier file. For example, a JPEG file is not supported
    #[error("Media format is not supported, only PNG images are accepted")]
    UnsupportedMedia,

    /// Represents an invalid carrier image. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a carrier with a color type the codec cannot address,
    /// for example 16-bit samples or grayscale/palette images
    #[error("Unsupported color type, only 8 bit RGB and RGBA images are supported")]
    UnsupportedColorType,

    /// Represents a payload that does not fit into the carrier image
    #[error("Payload of {required} bytes exceeds the image capacity of {available} bytes")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a length header that claims more data than the image geometry
    /// could hold. The image is corrupt or carries no embedded payload
    #[error("Length header claims {claimed} bytes but the image can carry at most {capacity} bytes, the image is corrupt or carries no payload")]
    CorruptLengthHeader { claimed: usize, capacity: usize },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding the carrier back into a PNG.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
