//! Error types for patchcmp.

use thiserror::Error;

/// Result alias for patchcmp operations.
pub type PatchCmpResult<T> = std::result::Result<T, PatchCmpError>;

/// Errors that can occur when building buffers or running a search.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PatchCmpError {
    /// Width or height is zero or overflows the addressable range.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Only 1 (gray), 3 (RGB) and 4 (RGBA) channels are supported.
    #[error("unsupported channel count {channels}")]
    InvalidChannels { channels: usize },
    /// Row stride is shorter than one row of samples.
    #[error("stride {stride} is smaller than row length {row_len}")]
    InvalidStride { row_len: usize, stride: usize },
    /// Backing buffer does not hold enough samples.
    #[error("buffer too small: needed {needed} samples, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A crop rectangle does not fit inside the image.
    #[error(
        "region ({x}, {y}) {width}x{height} out of bounds for {img_width}x{img_height} image"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Two regions handed to a metric differ in shape.
    #[error("region shape mismatch: {left:?} vs {right:?} (width, height, channels)")]
    ShapeMismatch {
        left: (usize, usize, usize),
        right: (usize, usize, usize),
    },
    /// The search configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// The window does not fit the common overlap of the images.
    #[error("images too small for {window_size}x{window_size} window (overlap {width}x{height})")]
    WindowTooLarge {
        window_size: usize,
        width: usize,
        height: usize,
    },
    /// The search was cancelled before all windows were evaluated.
    #[error("search cancelled")]
    Cancelled,
    /// Image decoding failed.
    #[cfg(feature = "image-io")]
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
