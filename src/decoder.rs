use std::io::Cursor;

use crate::{
    cache::IndexCache,
    chunk::{Chunk, MAX_RUN},
    error::FormatError,
    header::{Header, CHANNELS_RGBA, COLORSPACE_SRGB, END_MARKER, HEADER_LEN},
    operations::index_to_coord,
    pixel::Pixel,
    surface::{Bitmap, Surface, SurfaceMut},
};

/// Decode a QOI stream into a new [`Bitmap`].
pub fn decode(input: &[u8]) -> Result<Bitmap, FormatError> {
    decode_with(input, Bitmap::new)
}

/// Decode a QOI stream into a surface created by `create(width, height)`.
///
/// The surface is only created once the header has been validated against
/// the length of the chunk stream.
pub fn decode_with<S, F>(input: &[u8], create: F) -> Result<S, FormatError>
where
    S: SurfaceMut,
    F: FnOnce(u32, u32) -> S,
{
    let header = Header::read_from(input)?;

    // The chunk stream ends where the end marker region starts
    let stream_end = input
        .len()
        .checked_sub(END_MARKER.len())
        .filter(|&end| end >= HEADER_LEN)
        .ok_or(FormatError::MissingEndMarker(input.len()))?;
    let stream = &input[HEADER_LEN..stream_end];

    // No chunk produces more than MAX_RUN pixels
    let pixel_count = header.pixel_count();
    if pixel_count > stream.len() as u64 * MAX_RUN as u64 {
        return Err(FormatError::ImpossibleDimensions {
            width: header.width,
            height: header.height,
            stream_len: stream.len(),
        });
    }

    if header.channels != CHANNELS_RGBA || header.colorspace != COLORSPACE_SRGB {
        log::warn!(
            "header declares {} channels and colorspace {}, decoding as RGBA anyway",
            header.channels,
            header.colorspace
        );
    }

    log::debug!(
        "decoding {}×{} image from {} chunk bytes",
        header.width,
        header.height,
        stream.len()
    );

    let mut decoder = Decoder::new(create(header.width, header.height), header);
    decoder.run(stream)?;

    decoder.finish()
}

/// State for a single decode call.
struct Decoder<S> {
    surface: S,
    width: u32,
    pixel_count: u64,
    cache: IndexCache,
    pixel: Pixel,
    position: usize,
}

impl<S: SurfaceMut> Decoder<S> {
    fn new(surface: S, header: Header) -> Self {
        Self {
            surface,
            width: header.width,
            pixel_count: header.pixel_count(),
            cache: IndexCache::new(),
            pixel: Pixel::OPAQUE_BLACK,
            position: 0,
        }
    }

    fn run(&mut self, stream: &[u8]) -> Result<(), FormatError> {
        let mut input = Cursor::new(stream);

        while (input.position() as usize) < stream.len() {
            let offset = HEADER_LEN + input.position() as usize;
            let chunk =
                Chunk::read_from(&mut input).map_err(|_| FormatError::TruncatedChunk(offset))?;

            self.apply(chunk, offset)?;
        }

        Ok(())
    }

    fn apply(&mut self, chunk: Chunk, offset: usize) -> Result<(), FormatError> {
        self.pixel = match chunk {
            Chunk::Rgba(pixel) => pixel,
            Chunk::Rgb { r, g, b } => Pixel { r, g, b, a: self.pixel.a },
            Chunk::Index(slot) => {
                let position = self.cache.position(slot);
                if position >= self.position {
                    return Err(FormatError::InvalidReference { offset, position });
                }

                let (x, y) = index_to_coord(position, self.width);
                self.surface.pixel(x, y)
            }
            Chunk::Diff { dr, dg, db } => self.pixel.offset(dr, dg, db),
            Chunk::Luma { dg, dr_dg, db_dg } => {
                self.pixel
                    .offset(dr_dg.wrapping_add(dg), dg, db_dg.wrapping_add(dg))
            }
            Chunk::Run(run) => {
                // The last repeat is written below like any other chunk
                for _ in 1..run {
                    self.put(offset)?;
                }

                self.pixel
            }
        };

        self.cache.insert(self.pixel, self.position);
        self.put(offset)
    }

    /// Write the current pixel at the current position and advance.
    fn put(&mut self, offset: usize) -> Result<(), FormatError> {
        if self.position as u64 >= self.pixel_count {
            return Err(FormatError::TooManyPixels {
                offset,
                pixel_count: self.pixel_count,
            });
        }

        let (x, y) = index_to_coord(self.position, self.width);
        self.surface.set_pixel(x, y, self.pixel);
        self.position += 1;

        Ok(())
    }

    fn finish(self) -> Result<S, FormatError> {
        if (self.position as u64) < self.pixel_count {
            return Err(FormatError::MissingPixels {
                decoded: self.position,
                pixel_count: self.pixel_count,
            });
        }

        Ok(self.surface)
    }
}
