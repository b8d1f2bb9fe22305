//! A lossless encoder and decoder for the [QOI](https://qoiformat.org)
//! ("Quite OK Image") format.
//!
//! QOI stores an RGBA pixel grid as a stream of small tagged chunks: runs of
//! the previous pixel, references into a 64 slot cache of recently seen
//! colors, small per-channel deltas, and raw literals as a fallback. There is
//! no entropy coder on top.
//!
//! The codec works on any [`Surface`]. [`Bitmap`] is the crate's own RGBA8
//! buffer, and with the `image` feature enabled `image::RgbaImage` can be
//! used directly.
//!
//! # Example
//! ## Encoding and decoding in memory
//! ```
//! use qoif::{Bitmap, Pixel, Surface, SurfaceMut};
//!
//! let mut bitmap = Bitmap::new(2, 1);
//! bitmap.set_pixel(0, 0, Pixel::new(255, 0, 0, 255));
//! bitmap.set_pixel(1, 0, Pixel::new(254, 1, 0, 255));
//!
//! let encoded = qoif::encode(&bitmap);
//! let decoded = qoif::decode(&encoded).expect("Could not decode the image");
//!
//! assert_eq!(decoded, bitmap);
//! assert_eq!(decoded.pixel(1, 0), Pixel::new(254, 1, 0, 255));
//! ```
//!
//! ## Reading a QOI image from something implementing `Read`
//! ```no_run
//! use std::fs::File;
//! use qoif::QoiPicture;
//!
//! let input_file = File::open("my_image.qoi").expect("Could not open image file");
//! let image = QoiPicture::decode(&input_file).expect("Could not decode the image");
//!
//! println!("{}×{}", image.width(), image.height());
//! ```

mod cache;
mod chunk;
mod decoder;
mod encoder;
mod error;
mod operations;
mod pixel;
mod surface;

pub mod header;
pub mod picture;

// ----------------------- //
// INLINED USEFUL FEATURES //
// ----------------------- //
#[doc(inline)]
pub use encoder::encode;

#[doc(inline)]
pub use decoder::{decode, decode_with};

#[doc(inline)]
pub use error::FormatError;

#[doc(inline)]
pub use picture::QoiPicture;

#[doc(inline)]
pub use pixel::Pixel;

#[doc(inline)]
pub use surface::{Bitmap, Surface, SurfaceMut};

#[doc(inline)]
pub use operations::{cache_slot, coord_to_index, index_to_coord};

pub use cache::CACHE_SIZE;
pub use chunk::MAX_RUN;
