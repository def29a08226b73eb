// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plumbline Drag: a single-session pointer drag engine.
//!
//! This crate tracks one drag gesture at a time and turns a stream of pointer
//! positions into constrained entity placements. It knows nothing about the
//! host environment: callers feed it pointer positions (typically in
//! viewport/client coordinates) and an entity implementing [`Draggable`], and
//! it writes the new left/top placement back through that trait.
//!
//! Per accepted move the controller applies, in order:
//!
//! 1. **Axis constraint** ([`AxisMode`]): move both coordinates, only the
//!    horizontal one, or only the vertical one.
//! 2. **Grid snap**: the anchor-relative candidate position `d` is quantized
//!    to `d - (d % k)` for the configured increment `k`.
//! 3. **Bounding clamps** ([`DragBounds`]): the near edge is pinned to the
//!    minimum, the far edge is pinned to the maximum.
//!
//! Lifecycle callbacks are supplied per call through [`DragHooks`] rather
//! than stored in the controller, so the controller itself stays `Copy`-free,
//! closure-free plain state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use plumbline_drag::{AxisMode, Draggable, DragController, DragHooks, DragSpec};
//!
//! struct Box2 {
//!     left: f64,
//!     top: f64,
//! }
//!
//! impl Draggable for Box2 {
//!     fn draggable(&self) -> bool {
//!         true
//!     }
//!     fn drag_box(&self) -> Rect {
//!         Rect::new(self.left, self.top, self.left + 10.0, self.top + 10.0)
//!     }
//!     fn set_left(&mut self, left: f64) {
//!         self.left = left;
//!     }
//!     fn set_top(&mut self, top: f64) {
//!         self.top = top;
//!     }
//! }
//!
//! struct NoHooks;
//! impl DragHooks<Box2> for NoHooks {}
//!
//! let mut ctl = DragController::new();
//! let mut item = Box2 { left: 50.0, top: 0.0 };
//!
//! ctl.activate(DragSpec::new(AxisMode::HorizontalOnly).with_snap(10.0));
//! assert!(ctl.begin(Point::new(52.0, 5.0), &mut item, &mut NoHooks));
//!
//! // Raw candidate is 57; a 10px grid keeps the entity at 50.
//! ctl.update(Point::new(59.0, 5.0), &mut item, &mut NoHooks);
//! assert_eq!(item.left, 50.0);
//!
//! ctl.end(&mut item, &mut NoHooks);
//! assert!(!ctl.is_dragging());
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

use kurbo::Rect;

mod controller;

pub use controller::{DragController, DragSession};

/// Which coordinates a drag is allowed to change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AxisMode {
    /// Both left and top follow the pointer.
    #[default]
    Both,
    /// Only the left (x) coordinate follows the pointer.
    HorizontalOnly,
    /// Only the top (y) coordinate follows the pointer.
    VerticalOnly,
}

/// Content-relative clamp bounds for a drag.
///
/// The minimum is enforced against the entity's near (left/top) edge, the
/// maximum against its far (right/bottom) edge, so an entity of nonzero size
/// never protrudes past `max_x`/`max_y`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragBounds {
    /// Smallest permitted left coordinate.
    pub min_x: f64,
    /// Largest permitted right-edge coordinate.
    pub max_x: f64,
    /// Smallest permitted top coordinate.
    pub min_y: f64,
    /// Largest permitted bottom-edge coordinate.
    pub max_y: f64,
}

impl DragBounds {
    /// Creates clamp bounds, normalizing each pair so that `min <= max`.
    #[must_use]
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        let (min_x, max_x) = if min_x <= max_x {
            (min_x, max_x)
        } else {
            (max_x, min_x)
        };
        let (min_y, max_y) = if min_y <= max_y {
            (min_y, max_y)
        } else {
            (max_y, min_y)
        };
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
}

impl Default for DragBounds {
    /// Unbounded to the right and bottom, pinned at zero on the left and top.
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: f64::INFINITY,
            min_y: 0.0,
            max_y: f64::INFINITY,
        }
    }
}

/// Configuration bound to an entity before it becomes draggable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSpec {
    /// Which coordinates follow the pointer.
    pub axis: AxisMode,
    /// Clamp bounds applied after movement.
    pub bounds: DragBounds,
    /// Snap increment in pixels. Values below `1.0` are treated as `1.0`
    /// (whole-pixel placement, effectively no grid).
    pub snap: f64,
}

impl DragSpec {
    /// Creates a spec for the given axis mode with default bounds and a
    /// 1px snap increment.
    #[must_use]
    pub fn new(axis: AxisMode) -> Self {
        Self {
            axis,
            bounds: DragBounds::default(),
            snap: 1.0,
        }
    }

    /// Replaces the clamp bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: DragBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Replaces the snap increment, clamping it to at least `1.0`.
    #[must_use]
    pub fn with_snap(mut self, snap: f64) -> Self {
        self.snap = if snap >= 1.0 { snap } else { 1.0 };
        self
    }
}

impl Default for DragSpec {
    fn default() -> Self {
        Self::new(AxisMode::Both)
    }
}

/// Capability and placement seam between the controller and a host entity.
///
/// `drag_box` reports the entity's current placement; `set_left`/`set_top`
/// write the new one. Entities report whether they may be dragged at all via
/// [`draggable`](Self::draggable) — a plain capability flag, checked once at
/// gesture start.
pub trait Draggable {
    /// Whether this entity may be picked up by a drag gesture.
    fn draggable(&self) -> bool;

    /// Current placement: origin is the left/top offset, size is the
    /// entity's extent (used for far-edge clamping).
    fn drag_box(&self) -> Rect;

    /// Moves the entity's left edge.
    fn set_left(&mut self, left: f64);

    /// Moves the entity's top edge.
    fn set_top(&mut self, top: f64);
}

/// Lifecycle callbacks invoked by [`DragController`].
///
/// All methods default to no-ops so callers implement only what they need.
/// `on_move` fires after every accepted move, including clamped ones.
pub trait DragHooks<E> {
    /// A drag session opened on `entity`.
    fn on_start(&mut self, entity: &mut E) {
        let _ = entity;
    }

    /// The entity moved (possibly pinned by the clamp bounds).
    fn on_move(&mut self, entity: &mut E) {
        let _ = entity;
    }

    /// The drag session closed.
    fn on_stop(&mut self, entity: &mut E) {
        let _ = entity;
    }
}
