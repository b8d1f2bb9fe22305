//! Pure helpers shared by the encoder and decoder. Both sides must use these
//! exact functions or their caches drift apart.

use crate::cache::CACHE_SIZE;
use crate::pixel::Pixel;

/// Cache slot of a pixel: `(r * 3 + g * 5 + b * 7 + a * 11) % 64`.
pub fn cache_slot(pixel: Pixel) -> u8 {
    let hash = pixel.r as u32 * 3 + pixel.g as u32 * 5 + pixel.b as u32 * 7 + pixel.a as u32 * 11;

    (hash % CACHE_SIZE as u32) as u8
}

/// Linear row-major stream position of `(x, y)`.
pub fn coord_to_index(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Inverse of [`coord_to_index`]. `width` must be non-zero.
pub fn index_to_coord(index: usize, width: u32) -> (u32, u32) {
    let width = width as usize;

    ((index % width) as u32, (index / width) as u32)
}
