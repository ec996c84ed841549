//! Grid cells over window start positions.

use crate::search::ComparisonResult;
use std::collections::HashMap;

/// Coarse cell of window start positions: `(x / grid_size, y / grid_size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    /// Cell column.
    pub gx: usize,
    /// Cell row.
    pub gy: usize,
}

/// Inclusive start-position bounds of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBounds {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl GridCell {
    /// Returns the cell containing start position `(x, y)`.
    ///
    /// `grid_size` must be positive.
    pub fn of(x: usize, y: usize, grid_size: usize) -> Self {
        Self {
            gx: x / grid_size,
            gy: y / grid_size,
        }
    }

    /// Returns the cell containing a result's start position.
    pub fn of_result(result: &ComparisonResult, grid_size: usize) -> Self {
        Self::of(result.x, result.y, grid_size)
    }

    /// Returns the start positions covered by this cell.
    ///
    /// Edge cells may extend past the searchable extent.
    pub fn bounds(&self, grid_size: usize) -> CellBounds {
        CellBounds {
            x0: self.gx * grid_size,
            y0: self.gy * grid_size,
            x1: (self.gx + 1) * grid_size - 1,
            y1: (self.gy + 1) * grid_size - 1,
        }
    }
}

/// Keeps the highest-scoring result per grid cell.
///
/// A later result replaces the stored one only with a strictly greater
/// score, so the first result seen wins ties. Cells are returned in the
/// order they were first seen.
pub fn best_per_cell<I>(results: I, grid_size: usize) -> Vec<ComparisonResult>
where
    I: IntoIterator<Item = ComparisonResult>,
{
    let mut slots: HashMap<GridCell, usize> = HashMap::new();
    let mut kept: Vec<ComparisonResult> = Vec::new();

    for result in results {
        let cell = GridCell::of_result(&result, grid_size);
        match slots.get(&cell) {
            Some(&idx) => {
                if result.score > kept[idx].score {
                    kept[idx] = result;
                }
            }
            None => {
                slots.insert(cell, kept.len());
                kept.push(result);
            }
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::{best_per_cell, CellBounds, GridCell};
    use crate::search::ComparisonResult;

    fn result(x: usize, y: usize, score: f64) -> ComparisonResult {
        ComparisonResult {
            x,
            y,
            score,
            dist_a_gt: 0.0,
            dist_b_gt: score,
        }
    }

    #[test]
    fn cell_bounds_cover_grid_square() {
        let cell = GridCell::of(45, 12, 20);
        assert_eq!(cell, GridCell { gx: 2, gy: 0 });
        assert_eq!(
            cell.bounds(20),
            CellBounds {
                x0: 40,
                y0: 0,
                x1: 59,
                y1: 19,
            }
        );
    }

    #[test]
    fn keeps_maximum_and_first_on_ties() {
        let input = vec![
            result(0, 0, 1.0),
            result(5, 0, 3.0),
            result(10, 0, 2.0),
            result(6, 1, 3.0),
            result(12, 3, 2.0),
        ];
        let kept = best_per_cell(input, 10);
        assert_eq!(kept.len(), 2);
        assert_eq!((kept[0].x, kept[0].y, kept[0].score), (5, 0, 3.0));
        assert_eq!((kept[1].x, kept[1].y, kept[1].score), (10, 0, 2.0));
    }
}
