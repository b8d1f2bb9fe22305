use std::io::{Read, Write};

use thiserror::Error;

use crate::{
    decoder::decode_with,
    encoder::encode,
    error::FormatError,
    header::Header,
    surface::Bitmap,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// An RGBA image held in memory together with its QOI header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QoiPicture {
    header: Header,
    bitmap: Bitmap,
}

impl QoiPicture {
    /// Create an image from raw RGBA8 bytes. Nothing is encoded at this
    /// point. Returns `None` if the bitmap is not `width × height × 4` bytes.
    pub fn from_raw(width: u32, height: u32, bitmap: Vec<u8>) -> Option<Self> {
        Some(QoiPicture {
            header: Header::new(width, height),
            bitmap: Bitmap::from_raw(width, height, bitmap)?,
        })
    }

    /// Encode the image into anything that implements [Write], returning the
    /// number of bytes written.
    pub fn encode<O: Write>(&self, mut output: O) -> Result<usize, Error> {
        let encoded = encode(&self.bitmap);

        output.write_all(&encoded)?;
        output.flush()?;

        Ok(encoded.len())
    }

    /// Decode the image from anything that implements [Read]. The whole
    /// stream is read before decoding starts.
    pub fn decode<I: Read>(mut input: I) -> Result<QoiPicture, Error> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;

        let header = Header::read_from(&bytes)?;
        let bitmap = decode_with(&bytes, Bitmap::new)?;

        Ok(QoiPicture { header, bitmap })
    }

    /// The header as read from the source stream, or the one that will be
    /// written for an image created with [`QoiPicture::from_raw`].
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn as_raw(&self) -> &[u8] {
        self.bitmap.as_raw()
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.bitmap.into_raw()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::header::CHANNELS_RGBA;

    #[test]
    fn encode_then_decode_through_io() {
        let raw = vec![
            0xFF, 0xFF, 0xFF, 0xFF,
            0x00, 0x80, 0x00, 0x80,
            0xFF, 0xFF, 0xFF, 0xFF,
            0x00, 0x80, 0x00, 0x80,
        ];
        let picture = QoiPicture::from_raw(2, 2, raw.clone()).unwrap();

        let mut file = Cursor::new(Vec::new());
        let written = picture.encode(&mut file).unwrap();
        assert_eq!(written, file.get_ref().len());

        file.set_position(0);
        let decoded = QoiPicture::decode(&mut file).unwrap();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.header().channels, CHANNELS_RGBA);
        assert_eq!(decoded.into_raw(), raw);
    }

    #[test]
    fn decode_keeps_stored_header_fields() {
        let picture = QoiPicture::from_raw(1, 1, vec![1, 2, 3, 255]).unwrap();
        let mut bytes = Vec::new();
        picture.encode(&mut bytes).unwrap();
        bytes[12] = 3;
        bytes[13] = 1;

        let decoded = QoiPicture::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded.header().channels, 3);
        assert_eq!(decoded.header().colorspace, 1);
        assert_eq!(decoded.as_raw(), &[1, 2, 3, 255]);
    }

    #[test]
    fn decode_reports_format_errors() {
        let result = QoiPicture::decode(&b"GIF89a\x01\x00"[..]);

        assert!(matches!(
            result,
            Err(Error::Format(FormatError::InvalidIdentifier(_)))
        ));
    }

    #[test]
    fn from_raw_rejects_short_bitmap() {
        assert!(QoiPicture::from_raw(2, 2, vec![0; 15]).is_none());
    }
}
