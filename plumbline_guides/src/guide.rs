// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guide entities: a single measurement line and its display state.

use alloc::format;
use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect};
use plumbline_drag::Draggable;

/// Orientation of a guide line.
///
/// A `Horizontal` guide spans the surface horizontally and moves vertically;
/// a `Vertical` guide is the mirror.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Spans horizontally, tracks the pointer's y coordinate.
    Horizontal,
    /// Spans vertically, tracks the pointer's x coordinate.
    Vertical,
}

/// Identifier for a guide within one manager.
///
/// Ids are unique and monotonic per manager: the backing counter never
/// decrements, so an id is never reused even after its guide is removed.
/// The display form is `guide-N`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct GuideId(u64);

impl GuideId {
    pub(crate) const fn new(index: u64) -> Self {
        Self(index)
    }

    /// The numeric part of the `guide-N` form.
    #[must_use]
    pub const fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GuideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "guide-{}", self.0)
    }
}

/// One measurement line.
///
/// Owned exclusively by the [`GuideManager`](crate::GuideManager); everything
/// here is display state the host mirrors into whatever it renders with.
/// `position` is the content-relative offset on the guide's moving axis;
/// `length` is its span across the surface, snapshotted at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Guide {
    id: GuideId,
    axis: Axis,
    position: f64,
    length: f64,
    label: String,
    visible: bool,
    info_visible: bool,
    info_anchor: Point,
    hover_armed: bool,
}

impl Guide {
    pub(crate) fn new(id: GuideId, axis: Axis, position: f64, length: f64) -> Self {
        let mut guide = Self {
            id,
            axis,
            position,
            length,
            label: String::new(),
            visible: true,
            info_visible: false,
            info_anchor: Point::ZERO,
            hover_armed: false,
        };
        guide.refresh_label();
        guide
    }

    /// This guide's identifier.
    #[must_use]
    pub fn id(&self) -> GuideId {
        self.id
    }

    /// This guide's orientation.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Content-relative offset on the moving axis, in pixels.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Span across the surface, snapshotted at creation.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The live position readout shown next to the guide.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the guide is displayed.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Whether the hover info readout is displayed.
    #[must_use]
    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    /// Where the hover info readout is anchored, in content coordinates.
    #[must_use]
    pub fn info_anchor(&self) -> Point {
        self.info_anchor
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_info_visible(&mut self, visible: bool) {
        self.info_visible = visible;
    }

    pub(crate) fn set_info_anchor(&mut self, anchor: Point) {
        self.info_anchor = anchor;
    }

    pub(crate) fn hover_armed(&self) -> bool {
        self.hover_armed
    }

    pub(crate) fn arm_hover(&mut self, armed: bool) {
        self.hover_armed = armed;
    }

    /// Moves the guide along its axis and refreshes the label.
    pub(crate) fn set_position(&mut self, position: f64) {
        self.position = position;
        self.refresh_label();
    }

    pub(crate) fn refresh_label(&mut self) {
        self.label = format!("{}", round_px(self.position));
    }
}

impl Draggable for Guide {
    fn draggable(&self) -> bool {
        self.visible
    }

    fn drag_box(&self) -> Rect {
        // Guides render 1px thick; the box is what the far-edge clamp sees.
        match self.axis {
            Axis::Horizontal => Rect::new(0.0, self.position, self.length, self.position + 1.0),
            Axis::Vertical => Rect::new(self.position, 0.0, self.position + 1.0, self.length),
        }
    }

    fn set_left(&mut self, left: f64) {
        if self.axis == Axis::Vertical {
            self.set_position(left);
        }
    }

    fn set_top(&mut self, top: f64) {
        if self.axis == Axis::Horizontal {
            self.set_position(top);
        }
    }
}

/// Rounds a pixel coordinate to the nearest integer, ties away from zero.
///
/// Avoids `f64::round` so the crate builds without `std` or `libm`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "pixel coordinates are far inside the i64 range"
)]
pub(crate) fn round_px(v: f64) -> i64 {
    if v >= 0.0 { (v + 0.5) as i64 } else { -((-v + 0.5) as i64) }
}
