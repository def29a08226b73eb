// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-edge snap: sorted edge coordinates with lower-bound resolution.

use alloc::vec::Vec;

/// Sorted, de-duplicated edge coordinates along one axis.
///
/// Built once from the bounding boxes of the page's elements and rebuilt on
/// (debounced) resize; resolution is a binary search, so per-move cost does
/// not depend on element count beyond the logarithm.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeList {
    edges: Vec<f64>,
}

impl EdgeList {
    /// An empty list; [`resolve`](Self::resolve) always misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from arbitrary-order coordinates.
    ///
    /// Non-finite values are dropped; duplicates collapse to one entry.
    #[must_use]
    pub fn from_unsorted(coords: impl IntoIterator<Item = f64>) -> Self {
        let mut edges: Vec<f64> = coords.into_iter().filter(|c| c.is_finite()).collect();
        edges.sort_by(f64::total_cmp);
        edges.dedup();
        Self { edges }
    }

    /// Replaces the contents, keeping the allocation where possible.
    pub fn rebuild(&mut self, coords: impl IntoIterator<Item = f64>) {
        self.edges.clear();
        self.edges.extend(coords.into_iter().filter(|c| c.is_finite()));
        self.edges.sort_by(f64::total_cmp);
        self.edges.dedup();
    }

    /// Returns the first edge coordinate at or past `raw`, if any.
    ///
    /// This is the lower bound of `raw` in the sorted list. When every edge
    /// lies before `raw` the position is left unsnapped and `None` is
    /// returned.
    #[must_use]
    pub fn resolve(&self, raw: f64) -> Option<f64> {
        let idx = self.edges.partition_point(|&e| e < raw);
        self.edges.get(idx).copied()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the list holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The sorted edge coordinates.
    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }
}

/// Edge lists for both axes of a page.
///
/// `x` holds vertical element edges (left/right box sides) used when a
/// vertical guide moves horizontally; `y` holds horizontal edges (top/bottom
/// sides) for horizontal guides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeIndex {
    /// Vertical edges, snapped against by horizontally moving guides.
    pub x: EdgeList,
    /// Horizontal edges, snapped against by vertically moving guides.
    pub y: EdgeList,
}

impl EdgeIndex {
    /// An empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds both axis lists at once.
    #[must_use]
    pub fn from_edges(
        x: impl IntoIterator<Item = f64>,
        y: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            x: EdgeList::from_unsorted(x),
            y: EdgeList::from_unsorted(y),
        }
    }

    /// Replaces both axis lists, keeping allocations.
    pub fn rebuild(
        &mut self,
        x: impl IntoIterator<Item = f64>,
        y: impl IntoIterator<Item = f64>,
    ) {
        self.x.rebuild(x);
        self.y.rebuild(y);
    }
}
