use crate::pixel::Pixel;

/// Read access to a grid of RGBA pixels.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Pixel at `(x, y)`. Callers stay within `width × height`.
    fn pixel(&self, x: u32, y: u32) -> Pixel;
}

/// A [`Surface`] that can also be written, used as the decoder's output.
pub trait SurfaceMut: Surface {
    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel);
}

/// An owned RGBA8 pixel buffer in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// A zeroed (transparent black) bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Wrap raw RGBA8 bytes. Returns `None` if `data` does not hold exactly
    /// `width × height` pixels.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }

        Some(Self { width, height, data })
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data
            .chunks_exact(4)
            .map(|p| Pixel::new(p[0], p[1], p[2], p[3]))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

impl Surface for Bitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Pixel {
        let i = self.offset(x, y);
        Pixel::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }
}

impl SurfaceMut for Bitmap {
    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&pixel.to_array());
    }
}

#[cfg(feature = "image")]
impl Surface for image::RgbaImage {
    fn width(&self) -> u32 {
        image::RgbaImage::width(self)
    }

    fn height(&self) -> u32 {
        image::RgbaImage::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Pixel {
        Pixel::from_array(self.get_pixel(x, y).0)
    }
}

#[cfg(feature = "image")]
impl SurfaceMut for image::RgbaImage {
    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        self.put_pixel(x, y, image::Rgba(pixel.to_array()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmap_is_row_major_rgba() {
        let mut bitmap = Bitmap::new(2, 2);
        bitmap.set_pixel(1, 0, Pixel::new(1, 2, 3, 4));
        bitmap.set_pixel(0, 1, Pixel::new(5, 6, 7, 8));

        assert_eq!(
            bitmap.as_raw(),
            &[0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0]
        );
        assert_eq!(bitmap.pixel(0, 1), Pixel::new(5, 6, 7, 8));
        assert_eq!(bitmap.pixels().count(), 4);
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(Bitmap::from_raw(2, 1, vec![0; 8]).is_some());
        assert!(Bitmap::from_raw(2, 1, vec![0; 7]).is_none());
        assert!(Bitmap::from_raw(0, 5, Vec::new()).is_some());
    }

    #[cfg(feature = "image")]
    #[test]
    fn rgba_image_surface() {
        let mut image = image::RgbaImage::new(3, 2);
        image.set_pixel(2, 1, Pixel::new(9, 8, 7, 6));

        assert_eq!(Surface::width(&image), 3);
        assert_eq!(image.pixel(2, 1), Pixel::new(9, 8, 7, 6));
        assert_eq!(image.get_pixel(2, 1).0, [9, 8, 7, 6]);
    }
}
