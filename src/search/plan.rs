//! Searchable extent of one search.

use crate::util::{PatchCmpError, PatchCmpResult};
use crate::ImageView;

/// Placement range shared by all three images.
///
/// Valid top-left positions are `0..=max_x` by `0..=max_y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchPlan {
    max_x: usize,
    max_y: usize,
    window_size: usize,
    grid_size: usize,
}

impl SearchPlan {
    /// Builds a plan from `(width, height)` pairs.
    pub fn new(
        dims: &[(usize, usize)],
        window_size: usize,
        grid_size: usize,
    ) -> PatchCmpResult<Self> {
        if window_size == 0 {
            return Err(PatchCmpError::InvalidConfig("window_size must be positive"));
        }
        if grid_size == 0 {
            return Err(PatchCmpError::InvalidConfig("grid_size must be positive"));
        }
        let width = dims.iter().map(|&(w, _)| w).min();
        let height = dims.iter().map(|&(_, h)| h).min();
        let (Some(width), Some(height)) = (width, height) else {
            return Err(PatchCmpError::InvalidConfig("no images to search"));
        };
        if width < window_size || height < window_size {
            return Err(PatchCmpError::WindowTooLarge {
                window_size,
                width,
                height,
            });
        }
        Ok(Self {
            max_x: width - window_size,
            max_y: height - window_size,
            window_size,
            grid_size,
        })
    }

    /// Builds a plan over the common overlap of three views.
    pub fn for_views(
        a: ImageView<'_, u8>,
        b: ImageView<'_, u8>,
        gt: ImageView<'_, u8>,
        window_size: usize,
        grid_size: usize,
    ) -> PatchCmpResult<Self> {
        Self::new(
            &[
                (a.width(), a.height()),
                (b.width(), b.height()),
                (gt.width(), gt.height()),
            ],
            window_size,
            grid_size,
        )
    }

    /// Largest valid window left edge.
    pub fn max_x(&self) -> usize {
        self.max_x
    }

    /// Largest valid window top edge.
    pub fn max_y(&self) -> usize {
        self.max_y
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of window positions to evaluate.
    pub fn candidates(&self) -> usize {
        (self.max_x + 1) * (self.max_y + 1)
    }

    /// Grid cells along x and y.
    pub fn grid_dims(&self) -> (usize, usize) {
        (
            self.max_x / self.grid_size + 1,
            self.max_y / self.grid_size + 1,
        )
    }

    /// Number of grid cells that contain at least one position.
    pub fn cell_count(&self) -> usize {
        let (gw, gh) = self.grid_dims();
        gw * gh
    }
}

#[cfg(test)]
mod tests {
    use super::SearchPlan;
    use crate::util::PatchCmpError;

    #[test]
    fn extent_uses_smallest_image() {
        let plan = SearchPlan::new(&[(100, 80), (90, 120), (95, 95)], 10, 20).unwrap();
        assert_eq!(plan.max_x(), 80);
        assert_eq!(plan.max_y(), 70);
        assert_eq!(plan.candidates(), 81 * 71);
        assert_eq!(plan.grid_dims(), (5, 4));
        assert_eq!(plan.cell_count(), 20);
    }

    #[test]
    fn window_equal_to_image_yields_one_position() {
        let plan = SearchPlan::new(&[(32, 32); 3], 32, 10).unwrap();
        assert_eq!(plan.candidates(), 1);
        assert_eq!(plan.cell_count(), 1);
    }

    #[test]
    fn oversized_window_is_rejected() {
        let err = SearchPlan::new(&[(64, 64), (64, 31), (64, 64)], 32, 10).unwrap_err();
        assert_eq!(
            err,
            PatchCmpError::WindowTooLarge {
                window_size: 32,
                width: 64,
                height: 31,
            }
        );
    }

    #[test]
    fn zero_sizes_are_rejected() {
        assert!(matches!(
            SearchPlan::new(&[(8, 8)], 0, 10),
            Err(PatchCmpError::InvalidConfig(_))
        ));
        assert!(matches!(
            SearchPlan::new(&[(8, 8)], 4, 0),
            Err(PatchCmpError::InvalidConfig(_))
        ));
    }
}
