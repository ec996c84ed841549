//! Borrowed and owned pixel buffers.
//!
//! `ImageView` is a borrowed 2D view into an interleaved 1D sample buffer.
//! Each pixel occupies `channels` consecutive samples (1 = gray, 3 = RGB,
//! 4 = RGBA). The stride counts samples between the starts of consecutive
//! rows, so a stride larger than `width * channels` represents padded rows.
//! ROI crops are zero-copy views into the same backing slice and keep the
//! original stride.

use crate::util::{PatchCmpError, PatchCmpResult};

#[cfg(feature = "image-io")]
pub mod io;
pub mod luma;
mod owned;

pub use owned::OwnedImage;

/// Borrowed interleaved image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous single-channel view.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> PatchCmpResult<Self> {
        Self::from_interleaved(data, width, height, 1)
    }

    /// Creates a contiguous interleaved view with `stride == width * channels`.
    pub fn from_interleaved(
        data: &'a [T],
        width: usize,
        height: usize,
        channels: usize,
    ) -> PatchCmpResult<Self> {
        let stride = width
            .checked_mul(channels)
            .ok_or(PatchCmpError::InvalidDimensions { width, height })?;
        Self::new(data, width, height, channels, stride)
    }

    /// Creates a view with an explicit stride in samples.
    pub fn new(
        data: &'a [T],
        width: usize,
        height: usize,
        channels: usize,
        stride: usize,
    ) -> PatchCmpResult<Self> {
        let needed = required_len(width, height, channels, stride)?;
        if data.len() < needed {
            return Err(PatchCmpError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of interleaved samples per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the stride in samples between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns `(width, height, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.channels)
    }

    /// Returns the number of samples in one row, excluding padding.
    pub fn row_len(&self) -> usize {
        self.width * self.channels
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the samples of pixel `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a [T]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y
            .checked_mul(self.stride)?
            .checked_add(x.checked_mul(self.channels)?)?;
        self.data.get(start..start + self.channels)
    }

    /// Returns the samples of row `y`, `width * channels` long.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.row_len())?;
        self.data.get(start..end)
    }

    /// Iterates over all rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> + 'a {
        let row_len = self.row_len();
        self.data
            .chunks(self.stride)
            .take(self.height)
            .map(move |row| &row[..row_len])
    }

    /// Returns true when a `size`x`size` window at `(x, y)` lies inside the image.
    ///
    /// The right and bottom edges are exclusive: `x + size == width` fits.
    pub fn fits(&self, x: usize, y: usize, size: usize) -> bool {
        if size == 0 {
            return false;
        }
        match (x.checked_add(size), y.checked_add(size)) {
            (Some(end_x), Some(end_y)) => end_x <= self.width && end_y <= self.height,
            _ => false,
        }
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> PatchCmpResult<ImageView<'a, T>> {
        if width == 0 || height == 0 {
            return Err(PatchCmpError::InvalidDimensions { width, height });
        }

        let out_of_bounds = PatchCmpError::RoiOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let end_x = x.checked_add(width).ok_or_else(|| out_of_bounds.clone())?;
        let end_y = y.checked_add(height).ok_or_else(|| out_of_bounds.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds);
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x * self.channels))
            .ok_or(PatchCmpError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self
            .data
            .get(start..)
            .ok_or(PatchCmpError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;

        ImageView::new(data, width, height, self.channels, self.stride)
    }
}

pub(crate) fn validate_channels(channels: usize) -> PatchCmpResult<()> {
    match channels {
        1 | 3 | 4 => Ok(()),
        _ => Err(PatchCmpError::InvalidChannels { channels }),
    }
}

fn required_len(
    width: usize,
    height: usize,
    channels: usize,
    stride: usize,
) -> PatchCmpResult<usize> {
    if width == 0 || height == 0 {
        return Err(PatchCmpError::InvalidDimensions { width, height });
    }
    validate_channels(channels)?;
    let row_len = width
        .checked_mul(channels)
        .ok_or(PatchCmpError::InvalidDimensions { width, height })?;
    if stride < row_len {
        return Err(PatchCmpError::InvalidStride { row_len, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(row_len))
        .ok_or(PatchCmpError::InvalidDimensions { width, height })
}
