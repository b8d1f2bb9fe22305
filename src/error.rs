use thiserror::Error;

/// A structurally invalid QOI byte stream. Decoding stops at the first one of
/// these and no partial image is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("incorrect identifier, got {0:?}")]
    InvalidIdentifier([u8; 4]),

    #[error("header is truncated, got {0} of 14 bytes")]
    TruncatedHeader(usize),

    #[error("stream of {0} bytes is too short to hold the end marker")]
    MissingEndMarker(usize),

    #[error("chunk at byte {0} is truncated")]
    TruncatedChunk(usize),

    #[error("index chunk at byte {offset} refers to pixel {position}, which is not decoded yet")]
    InvalidReference { offset: usize, position: usize },

    #[error("chunk at byte {offset} writes past the last of {pixel_count} pixels")]
    TooManyPixels { offset: usize, pixel_count: u64 },

    #[error("chunk stream ended after {decoded} of {pixel_count} pixels")]
    MissingPixels { decoded: usize, pixel_count: u64 },

    #[error("{width}×{height} pixels cannot be described by a {stream_len} byte chunk stream")]
    ImpossibleDimensions {
        width: u32,
        height: u32,
        stream_len: usize,
    },
}
