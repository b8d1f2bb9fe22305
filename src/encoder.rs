use crate::{
    cache::IndexCache,
    chunk::{Chunk, MAX_RUN},
    header::{Header, END_MARKER},
    operations::{cache_slot, coord_to_index, index_to_coord},
    pixel::Pixel,
    surface::Surface,
};

/// Encode a surface into a complete QOI stream: header, chunks and end
/// marker. Encoding cannot fail.
pub fn encode<S: Surface + ?Sized>(surface: &S) -> Vec<u8> {
    let header = Header::new(surface.width(), surface.height());

    let mut output = Vec::with_capacity(header.len() + END_MARKER.len());
    output.extend_from_slice(&header.to_bytes());

    let mut encoder = Encoder::new(surface, output);
    for y in 0..header.height {
        for x in 0..header.width {
            encoder.push(x, y);
        }
    }

    let output = encoder.finish();
    log::debug!(
        "encoded {}×{} image into {} bytes",
        header.width,
        header.height,
        output.len()
    );

    output
}

/// State for a single encode call.
struct Encoder<'a, S: ?Sized> {
    surface: &'a S,
    output: Vec<u8>,
    cache: IndexCache,
    prev: Pixel,
    run: u8,
}

impl<'a, S: Surface + ?Sized> Encoder<'a, S> {
    fn new(surface: &'a S, output: Vec<u8>) -> Self {
        Self {
            surface,
            output,
            cache: IndexCache::new(),
            prev: Pixel::OPAQUE_BLACK,
            run: 0,
        }
    }

    fn push(&mut self, x: u32, y: u32) {
        let width = self.surface.width();
        let pixel = self.surface.pixel(x, y);
        let index = coord_to_index(x, y, width);

        if pixel == self.prev {
            self.run += 1;
            if self.run == MAX_RUN {
                self.flush_run();
            }
        } else {
            self.flush_run();

            let slot = cache_slot(pixel);
            let chunk = if index > 0 && self.cached_pixel(slot) == pixel {
                Chunk::Index(slot)
            } else {
                Chunk::for_change(pixel, self.prev)
            };

            chunk.write_into(&mut self.output);
            self.prev = pixel;
        }

        self.cache.insert(pixel, index);
    }

    /// Pixel at the position remembered by `slot`. Unwritten slots resolve to
    /// the first pixel, which is why index 0 never takes the cache path.
    fn cached_pixel(&self, slot: u8) -> Pixel {
        let (x, y) = index_to_coord(self.cache.position(slot), self.surface.width());
        self.surface.pixel(x, y)
    }

    fn flush_run(&mut self) {
        if self.run > 0 {
            Chunk::Run(self.run).write_into(&mut self.output);
            self.run = 0;
        }
    }

    fn finish(mut self) -> Vec<u8> {
        self.flush_run();
        self.output.extend_from_slice(&END_MARKER);

        self.output
    }
}
