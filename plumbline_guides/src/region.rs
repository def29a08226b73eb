// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detailed-info region decomposition.
//!
//! The guides cut the surface into a grid of rectangles: `n` vertical guides
//! give `n + 1` columns, `m` horizontal guides give `m + 1` rows. The grid is
//! derived and ephemeral — recomputed from guide coordinates on demand, never
//! stored as authoritative state.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use smallvec::SmallVec;

use crate::guide::round_px;

/// One rectangle of the decomposition.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    /// The rectangle, in content coordinates.
    pub rect: Rect,
    /// `"W x H"` dimension text, rounded to whole pixels.
    pub label: String,
    /// Parity banding: alternates by `(row + col) % 2` for visual contrast.
    pub shaded: bool,
}

impl Region {
    /// `"X, Y"` text for the rectangle's top-left corner.
    #[must_use]
    pub fn origin_label(&self) -> String {
        format!("{}, {}", round_px(self.rect.x0), round_px(self.rect.y0))
    }
}

/// The full `(rows x columns)` decomposition of the surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionGrid {
    rows: usize,
    columns: usize,
    regions: Vec<Region>,
}

impl RegionGrid {
    /// Decomposes the surface into rectangles.
    ///
    /// `vertical_xs` are the x coordinates of the vertical guides,
    /// `horizontal_ys` the y coordinates of the horizontal ones, in any
    /// order; `extent` is the scrollable extent of the surface. `0` is
    /// prepended and the extent appended on each axis, so the rectangles
    /// always tile the whole surface and their areas sum to
    /// `extent.width * extent.height`.
    ///
    /// Computation is idempotent and linear in the number of rectangles;
    /// guides sharing a coordinate simply produce zero-sized rows/columns.
    #[must_use]
    pub fn compute(vertical_xs: &[f64], horizontal_ys: &[f64], extent: Size) -> Self {
        let xs = cuts(vertical_xs, extent.width);
        let ys = cuts(horizontal_ys, extent.height);

        let columns = xs.len() - 1;
        let rows = ys.len() - 1;
        let mut regions = Vec::with_capacity(rows * columns);

        for (row, yw) in ys.windows(2).enumerate() {
            for (col, xw) in xs.windows(2).enumerate() {
                let rect = Rect::new(xw[0], yw[0], xw[1], yw[1]);
                regions.push(Region {
                    rect,
                    label: format!("{} x {}", round_px(rect.width()), round_px(rect.height())),
                    shaded: (row + col) % 2 == 1,
                });
            }
        }

        Self {
            rows,
            columns,
            regions,
        }
    }

    /// Number of rows (`m + 1` for `m` horizontal guides).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`n + 1` for `n` vertical guides).
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All rectangles, in row-major order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The rectangle at `(row, col)`, if in range.
    #[must_use]
    pub fn region(&self, row: usize, col: usize) -> Option<&Region> {
        if row < self.rows && col < self.columns {
            self.regions.get(row * self.columns + col)
        } else {
            None
        }
    }

    /// Total number of rectangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the grid holds no rectangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Sorted cut coordinates for one axis: `0`, the guide positions, the extent.
fn cuts(guide_positions: &[f64], extent: f64) -> SmallVec<[f64; 8]> {
    let mut cuts: SmallVec<[f64; 8]> = SmallVec::with_capacity(guide_positions.len() + 2);
    cuts.push(0.0);
    cuts.extend_from_slice(guide_positions);
    cuts.push(extent);
    cuts.sort_by(f64::total_cmp);
    cuts
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use kurbo::Size;

    use super::RegionGrid;

    #[test]
    fn one_of_each_guide_gives_four_regions() {
        // Vertical at x=200, horizontal at y=100 on a 1000x800 surface.
        let grid = RegionGrid::compute(&[200.0], &[100.0], Size::new(1000.0, 800.0));

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 2);
        let labels: Vec<&str> = grid.regions().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["200 x 100", "800 x 100", "200 x 700", "800 x 700"]);
    }

    #[test]
    fn region_count_is_product_of_cuts() {
        let grid = RegionGrid::compute(
            &[100.0, 300.0, 700.0],
            &[50.0, 400.0],
            Size::new(1000.0, 800.0),
        );
        assert_eq!(grid.len(), (3 + 1) * (2 + 1));
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
    }

    #[test]
    fn areas_tile_the_surface() {
        let extent = Size::new(1000.0, 800.0);
        let grid = RegionGrid::compute(&[137.0, 602.5], &[33.0, 400.0, 401.0], extent);

        let total: f64 = grid.regions().iter().map(|r| r.rect.area()).sum();
        assert!((total - extent.width * extent.height).abs() < 1e-6);
    }

    #[test]
    fn no_guides_still_yields_one_region() {
        let grid = RegionGrid::compute(&[], &[], Size::new(640.0, 480.0));
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.regions()[0].label, "640 x 480");
        assert!(!grid.regions()[0].shaded);
    }

    #[test]
    fn unsorted_input_is_sorted() {
        let grid = RegionGrid::compute(&[700.0, 100.0], &[], Size::new(1000.0, 10.0));
        let widths: Vec<String> = grid
            .regions()
            .iter()
            .map(|r| r.label.clone())
            .collect();
        assert_eq!(widths, ["100 x 10", "600 x 10", "300 x 10"]);
    }

    #[test]
    fn shading_alternates_by_parity() {
        let grid = RegionGrid::compute(&[100.0], &[100.0], Size::new(200.0, 200.0));
        assert!(!grid.region(0, 0).unwrap().shaded);
        assert!(grid.region(0, 1).unwrap().shaded);
        assert!(grid.region(1, 0).unwrap().shaded);
        assert!(!grid.region(1, 1).unwrap().shaded);
    }

    #[test]
    fn origin_labels_report_the_top_left() {
        let grid = RegionGrid::compute(&[200.0], &[100.0], Size::new(1000.0, 800.0));
        assert_eq!(grid.region(1, 1).unwrap().origin_label(), "200, 100");
    }

    #[test]
    fn recomputation_is_idempotent() {
        let a = RegionGrid::compute(&[200.0], &[100.0], Size::new(1000.0, 800.0));
        let b = RegionGrid::compute(&[200.0], &[100.0], Size::new(1000.0, 800.0));
        assert_eq!(a, b);
    }
}
