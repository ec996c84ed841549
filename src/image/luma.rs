//! Channel reduction to single-channel luma.
//!
//! Uses the ITU-R 601-2 weights in 16-bit fixed point:
//! `L = (R * 19595 + G * 38470 + B * 7471 + 0x8000) >> 16`.
//! Alpha is ignored; gray input is copied unchanged.

use crate::image::{ImageView, OwnedImage};
use crate::util::{PatchCmpError, PatchCmpResult};

const WEIGHT_R: u32 = 19595;
const WEIGHT_G: u32 = 38470;
const WEIGHT_B: u32 = 7471;

#[inline]
fn luma_of(r: u8, g: u8, b: u8) -> u8 {
    let sum = u32::from(r) * WEIGHT_R + u32::from(g) * WEIGHT_G + u32::from(b) * WEIGHT_B;
    ((sum + 0x8000) >> 16) as u8
}

/// Converts a gray, RGB or RGBA view into a contiguous single-channel image.
pub fn to_luma(view: ImageView<'_, u8>) -> PatchCmpResult<OwnedImage> {
    let channels = view.channels();
    match channels {
        1 => OwnedImage::from_view(view),
        3 | 4 => {
            let mut data = Vec::with_capacity(view.width() * view.height());
            for row in view.rows() {
                data.extend(
                    row.chunks_exact(channels)
                        .map(|px| luma_of(px[0], px[1], px[2])),
                );
            }
            OwnedImage::gray(data, view.width(), view.height())
        }
        _ => Err(PatchCmpError::InvalidChannels { channels }),
    }
}
