//! Owned contiguous image storage.

use crate::image::{validate_channels, ImageView};
use crate::util::{PatchCmpError, PatchCmpResult};

/// Owned contiguous interleaved 8-bit image buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedImage {
    data: Vec<u8>,
    width: usize,
    height: usize,
    channels: usize,
}

impl OwnedImage {
    /// Wraps an interleaved buffer of exactly `width * height * channels` samples.
    pub fn new(data: Vec<u8>, width: usize, height: usize, channels: usize) -> PatchCmpResult<Self> {
        if width == 0 || height == 0 {
            return Err(PatchCmpError::InvalidDimensions { width, height });
        }
        validate_channels(channels)?;
        let needed = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(channels))
            .ok_or(PatchCmpError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(PatchCmpError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(PatchCmpError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Wraps a single-channel buffer.
    pub fn gray(data: Vec<u8>, width: usize, height: usize) -> PatchCmpResult<Self> {
        Self::new(data, width, height, 1)
    }

    /// Copies a (possibly strided) view into contiguous storage.
    pub fn from_view(view: ImageView<'_, u8>) -> PatchCmpResult<Self> {
        let mut data = Vec::with_capacity(view.row_len() * view.height());
        for row in view.rows() {
            data.extend_from_slice(row);
        }
        Self::new(data, view.width(), view.height(), view.channels())
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> ImageView<'_, u8> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            channels: self.channels,
            stride: self.width * self.channels,
        }
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of samples per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the contiguous sample buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns its sample buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}
