use crate::operations::cache_slot;
use crate::pixel::Pixel;

/// Number of slots in the color cache.
pub const CACHE_SIZE: usize = 64;

/// The 64 slot color cache. A slot remembers the stream position of the last
/// pixel that hashed to it, never the color itself; the color is looked up
/// again in the surface being encoded or decoded.
///
/// Slots start at zero, so an unwritten slot points at the first pixel.
#[derive(Debug, Clone)]
pub struct IndexCache {
    slots: [usize; CACHE_SIZE],
}

impl Default for IndexCache {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexCache {
    pub fn new() -> Self {
        Self {
            slots: [0; CACHE_SIZE],
        }
    }

    /// Stream position remembered for `slot`.
    pub fn position(&self, slot: u8) -> usize {
        self.slots[slot as usize % CACHE_SIZE]
    }

    /// Remember `position` as the latest occurrence of `pixel`, returning
    /// the slot that was written.
    pub fn insert(&mut self, pixel: Pixel, position: usize) -> u8 {
        let slot = cache_slot(pixel);
        self.slots[slot as usize] = position;

        slot
    }
}
