use byteorder::{ByteOrder, BE};

use crate::error::FormatError;

/// Identifier at the start of every QOI stream.
pub const MAGIC: [u8; 4] = *b"qoif";

/// Size of the encoded [`Header`] in bytes.
pub const HEADER_LEN: usize = 14;

/// Sentinel terminating the chunk stream.
pub const END_MARKER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

/// Channel count written by the encoder. Pixels are always RGBA.
pub const CHANNELS_RGBA: u8 = 4;

/// Colorspace flag written by the encoder (sRGB with linear alpha).
pub const COLORSPACE_SRGB: u8 = 0;

/// A QOI file header. This must be included at the beginning
/// of a valid QOI stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Identifier. Must be set to "qoif".
    pub magic: [u8; 4],

    /// Width of the image in pixels.
    pub width: u32,

    /// Height of the image in pixels.
    pub height: u32,

    /// Number of color channels. Stored and read back, but pixels are always
    /// handled as RGBA regardless of this value.
    pub channels: u8,

    /// Colorspace flag. Stored and read back, never interpreted.
    pub colorspace: u8,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            width: 0,
            height: 0,
            channels: CHANNELS_RGBA,
            colorspace: COLORSPACE_SRGB,
        }
    }
}

impl Header {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,

            ..Default::default()
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];

        buf[..4].copy_from_slice(&self.magic);
        BE::write_u32(&mut buf[4..8], self.width);
        BE::write_u32(&mut buf[8..12], self.height);
        buf[12] = self.channels;
        buf[13] = self.colorspace;

        buf
    }

    pub fn len(&self) -> usize {
        HEADER_LEN
    }

    /// Total number of pixels described by the header.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Parse a header from the start of `input`. The identifier is checked
    /// before anything else is read.
    pub fn read_from(input: &[u8]) -> Result<Self, FormatError> {
        if input.len() < MAGIC.len() {
            return Err(FormatError::TruncatedHeader(input.len()));
        }

        let mut magic = [0u8; 4];
        magic.copy_from_slice(&input[..4]);
        if magic != MAGIC {
            return Err(FormatError::InvalidIdentifier(magic));
        }

        if input.len() < HEADER_LEN {
            return Err(FormatError::TruncatedHeader(input.len()));
        }

        Ok(Header {
            magic,
            width: BE::read_u32(&input[4..8]),
            height: BE::read_u32(&input[8..12]),
            channels: input[12],
            colorspace: input[13],
        })
    }
}
