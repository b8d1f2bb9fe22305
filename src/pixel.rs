/// A single RGBA pixel, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// The "previous pixel" both encoder and decoder start from.
    pub const OPAQUE_BLACK: Pixel = Pixel::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Plain signed per-channel difference from `prev`, alpha excluded.
    /// Does not wrap: 255 to 0 is -255. Returns `None` if the alpha channels
    /// differ.
    pub fn delta(self, prev: Pixel) -> Option<(i16, i16, i16)> {
        if self.a != prev.a {
            return None;
        }

        Some((
            self.r as i16 - prev.r as i16,
            self.g as i16 - prev.g as i16,
            self.b as i16 - prev.b as i16,
        ))
    }

    /// Apply a signed RGB delta to this pixel, wrapping modulo 256.
    pub fn offset(self, dr: i8, dg: i8, db: i8) -> Pixel {
        Pixel {
            r: self.r.wrapping_add(dr as u8),
            g: self.g.wrapping_add(dg as u8),
            b: self.b.wrapping_add(db as u8),
            a: self.a,
        }
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(rgba: [u8; 4]) -> Self {
        Pixel::from_array(rgba)
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_does_not_wrap() {
        let prev = Pixel::new(255, 0, 10, 255);
        let next = Pixel::new(0, 254, 10, 255);

        assert_eq!(next.delta(prev), Some((-255, 254, 0)));
        assert_eq!(prev.delta(next), Some((255, -254, 0)));
    }

    #[test]
    fn offset_wraps_around() {
        let prev = Pixel::new(255, 0, 10, 255);

        assert_eq!(prev.offset(1, -2, 0), Pixel::new(0, 254, 10, 255));
    }

    #[test]
    fn delta_requires_same_alpha() {
        assert_eq!(Pixel::new(1, 1, 1, 0).delta(Pixel::OPAQUE_BLACK), None);
    }
}
