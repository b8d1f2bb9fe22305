use std::io::{self, Cursor, Read};

use byteorder::ReadBytesExt;

use crate::pixel::Pixel;

/// Longest run a single chunk can describe. Stored as `run - 1` in six bits,
/// which keeps run bytes clear of the two literal tags.
pub const MAX_RUN: u8 = 62;

const MASK_TAG: u8 = 0b1100_0000;
const MASK_PAYLOAD: u8 = 0b0011_1111;

const TAG_INDEX: u8 = 0b0000_0000;
const TAG_DIFF: u8 = 0b0100_0000;
const TAG_LUMA: u8 = 0b1000_0000;
const TAG_RUN: u8 = 0b1100_0000;
const TAG_RGB: u8 = 0xFE;
const TAG_RGBA: u8 = 0xFF;

/// One tagged unit of the chunk stream.
///
/// ```text
/// Index  00iiiiii
/// Diff   01rrggbb                      each delta + 2
/// Luma   10gggggg rrrrbbbb             dg + 32, (dr - dg) + 8, (db - dg) + 8
/// Run    11llllll                      run - 1
/// Rgb    11111110 r g b
/// Rgba   11111111 r g b a
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk {
    /// Slot of the color cache holding an identical pixel.
    Index(u8),

    /// Per-channel deltas, each in `-2..=1`.
    Diff { dr: i8, dg: i8, db: i8 },

    /// Green delta in `-32..=31`, red and blue relative to it in `-8..=7`.
    Luma { dg: i8, dr_dg: i8, db_dg: i8 },

    /// Number of repeats of the previous pixel, in `1..=MAX_RUN`.
    Run(u8),

    /// New color, alpha kept from the previous pixel.
    Rgb { r: u8, g: u8, b: u8 },

    /// New color including alpha.
    Rgba(Pixel),
}

impl Chunk {
    /// Pick the smallest chunk describing `pixel` as a change from `prev`,
    /// leaving runs and cache hits to the caller.
    pub fn for_change(pixel: Pixel, prev: Pixel) -> Chunk {
        let Some((dr, dg, db)) = pixel.delta(prev) else {
            return Chunk::Rgba(pixel);
        };

        // Every range below fits in an i8, so the narrowing casts are exact
        let small = -2..=1;
        if small.contains(&dr) && small.contains(&dg) && small.contains(&db) {
            return Chunk::Diff {
                dr: dr as i8,
                dg: dg as i8,
                db: db as i8,
            };
        }

        let dr_dg = dr - dg;
        let db_dg = db - dg;
        let nibble = -8..=7;
        if (-32..=31).contains(&dg) && nibble.contains(&dr_dg) && nibble.contains(&db_dg) {
            return Chunk::Luma {
                dg: dg as i8,
                dr_dg: dr_dg as i8,
                db_dg: db_dg as i8,
            };
        }

        Chunk::Rgb {
            r: pixel.r,
            g: pixel.g,
            b: pixel.b,
        }
    }

    /// Append the encoded chunk to `output`.
    pub fn write_into(&self, output: &mut Vec<u8>) {
        match *self {
            Chunk::Index(slot) => output.push(TAG_INDEX | (slot & MASK_PAYLOAD)),
            Chunk::Diff { dr, dg, db } => {
                let bias = |d: i8| (d + 2) as u8;
                output.push(TAG_DIFF | bias(dr) << 4 | bias(dg) << 2 | bias(db));
            }
            Chunk::Luma { dg, dr_dg, db_dg } => {
                output.push(TAG_LUMA | (dg + 32) as u8);
                output.push(((dr_dg + 8) as u8) << 4 | (db_dg + 8) as u8);
            }
            Chunk::Run(run) => {
                debug_assert!((1..=MAX_RUN).contains(&run));
                output.push(TAG_RUN | (run - 1));
            }
            Chunk::Rgb { r, g, b } => output.extend_from_slice(&[TAG_RGB, r, g, b]),
            Chunk::Rgba(p) => output.extend_from_slice(&[TAG_RGBA, p.r, p.g, p.b, p.a]),
        }
    }

    /// Read one chunk. Fails with `UnexpectedEof` if the chunk's trailing
    /// bytes are missing from `input`.
    pub fn read_from(input: &mut Cursor<&[u8]>) -> io::Result<Chunk> {
        let byte = input.read_u8()?;

        // The literal tags alias the run tag, so they are matched first
        if byte == TAG_RGBA {
            let mut rgba = [0u8; 4];
            input.read_exact(&mut rgba)?;
            return Ok(Chunk::Rgba(Pixel::from_array(rgba)));
        }

        if byte == TAG_RGB {
            return Ok(Chunk::Rgb {
                r: input.read_u8()?,
                g: input.read_u8()?,
                b: input.read_u8()?,
            });
        }

        let payload = byte & MASK_PAYLOAD;
        let chunk = match byte & MASK_TAG {
            TAG_INDEX => Chunk::Index(payload),
            TAG_DIFF => Chunk::Diff {
                dr: (payload >> 4 & 0b11) as i8 - 2,
                dg: (payload >> 2 & 0b11) as i8 - 2,
                db: (payload & 0b11) as i8 - 2,
            },
            TAG_LUMA => {
                let second = input.read_u8()?;
                Chunk::Luma {
                    dg: payload as i8 - 32,
                    dr_dg: (second >> 4) as i8 - 8,
                    db_dg: (second & 0x0F) as i8 - 8,
                }
            }
            TAG_RUN => Chunk::Run(payload + 1),
            _ => unreachable!("two tag bits always match one of four tags"),
        };

        Ok(chunk)
    }
}
