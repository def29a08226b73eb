// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plumbline Snap: quantization strategies for dragged coordinates.
//!
//! Two strategies are provided:
//!
//! - **Fixed-increment snap** ([`snap_to_increment`]): quantize a raw
//!   coordinate to a pixel grid, independently configured per axis through
//!   [`SnapConfig`].
//! - **Element-edge snap** ([`EdgeIndex`]): replace a raw coordinate with the
//!   nearest *following* edge of any page element, resolved by lower-bound
//!   search over a precomputed sorted edge list.
//!
//! Only one strategy applies to a given move: when edge snap is enabled it
//! takes precedence and the increment grid is ignored for that guide. The
//! composition rule lives with the caller (the guide manager); this crate
//! only supplies the two primitives.
//!
//! ## Minimal example
//!
//! ```
//! use plumbline_snap::{snap_to_increment, EdgeList};
//!
//! // 57 on a 10px grid stays at 50; a zero increment means no snap.
//! assert_eq!(snap_to_increment(57.0, 10.0), 50.0);
//! assert_eq!(snap_to_increment(57.0, 0.0), 57.0);
//!
//! // Edge snap picks the first edge at or past the raw position.
//! let edges = EdgeList::from_unsorted([120.0, 40.0, 300.0]);
//! assert_eq!(edges.resolve(100.0), Some(120.0));
//! assert_eq!(edges.resolve(500.0), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod edge;

pub use edge::{EdgeIndex, EdgeList};

/// Quantizes `raw` to the pixel grid with increment `k`.
///
/// Returns `raw - (raw % k)`. A non-positive `k` means "no snap" and returns
/// `raw` unchanged. For `k > 0` the result is always a multiple of `k` and
/// within `k` of `raw`.
///
/// The remainder truncates toward zero, so negative coordinates round up
/// (toward zero) while positive ones round down. The asymmetry is a kept
/// compatibility choice, not an oversight; do not replace this with a floor.
#[must_use]
pub fn snap_to_increment(raw: f64, k: f64) -> f64 {
    if k <= 0.0 { raw } else { raw - raw % k }
}

/// Per-axis snap configuration for guide drags.
///
/// Increments are in pixels; `0` disables the grid for that axis. When
/// `edge_snap` is on, element-edge snapping supersedes both increments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapConfig {
    /// Grid increment for horizontally moving (vertical) guides. `0` = off.
    pub x_increment: f64,
    /// Grid increment for vertically moving (horizontal) guides. `0` = off.
    pub y_increment: f64,
    /// Whether element-edge snap is enabled.
    pub edge_snap: bool,
}

impl SnapConfig {
    /// Creates a config with the given increments, clamping negatives to `0`
    /// and leaving edge snap off.
    #[must_use]
    pub fn new(x_increment: f64, y_increment: f64) -> Self {
        Self {
            x_increment: if x_increment > 0.0 { x_increment } else { 0.0 },
            y_increment: if y_increment > 0.0 { y_increment } else { 0.0 },
            edge_snap: false,
        }
    }
}

impl Default for SnapConfig {
    /// No grid on either axis, edge snap off.
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
