// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag controller: session bookkeeping and per-move placement.

use kurbo::Point;

use crate::{AxisMode, Draggable, DragHooks, DragSpec};

/// An open drag gesture.
///
/// The anchor is the pointer position minus the entity's offset at gesture
/// start; it stays fixed for the session's duration, so the anchor-relative
/// candidate position `pointer - anchor` is the entity's would-be left/top.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer position minus entity offset, captured at gesture start.
    pub anchor: Point,
}

/// Tracks at most one active drag gesture and applies the bound [`DragSpec`]
/// to every pointer move.
///
/// A controller instance owns no entities. [`activate`](Self::activate) binds
/// the spec for the *next* gesture; [`begin`](Self::begin) opens a session on
/// an entity carrying the [`Draggable`] capability; [`update`](Self::update)
/// moves it; [`end`](Self::end) closes the session. While a session is open a
/// second `begin` is ignored — single-pointer interaction means exactly one
/// session per controller, enforced by a guard rather than any locking.
///
/// Multiple controllers may coexist; each tracks its own session.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    spec: Option<DragSpec>,
    session: Option<DragSession>,
}

impl DragController {
    /// Creates an idle controller with no spec bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `spec` to the next gesture, replacing any previous binding.
    ///
    /// May be called while a session is open; the new spec takes effect on
    /// the next [`update`](Self::update).
    pub fn activate(&mut self, spec: DragSpec) {
        self.spec = Some(spec);
    }

    /// Opens a drag session anchored at `pointer - entity offset`.
    ///
    /// Returns `false` without side effects when a session is already open or
    /// the entity does not report the draggable capability. On success the
    /// host should suppress the browser's default drag behavior and acquire
    /// pointer capture for the gesture; the controller itself has no way to.
    ///
    /// If no spec was bound, a default spec (axis [`AxisMode::Both`],
    /// default bounds, 1px snap) is installed first.
    pub fn begin<E: Draggable>(
        &mut self,
        pointer: Point,
        entity: &mut E,
        hooks: &mut impl DragHooks<E>,
    ) -> bool {
        if self.session.is_some() || !entity.draggable() {
            return false;
        }
        if self.spec.is_none() {
            self.spec = Some(DragSpec::default());
        }
        let b = entity.drag_box();
        self.session = Some(DragSession {
            anchor: Point::new(pointer.x - b.x0, pointer.y - b.y0),
        });
        hooks.on_start(entity);
        true
    }

    /// Moves the entity to the constrained placement for `pointer`.
    ///
    /// The anchor-relative candidate `d = pointer - anchor` is quantized to
    /// `d - (d % k)` per axis. The remainder truncates toward zero, so
    /// negative candidates round up while positive ones round down; this
    /// asymmetry is deliberate and kept for compatibility with existing
    /// overlays (see [`plumbline_snap`'s increment snap] for the same rule).
    ///
    /// Clamps then apply on each participating axis: the *raw* candidate is
    /// tested against the minimum, the applied far edge against the maximum.
    /// `hooks.on_move` fires after every accepted move, clamped or not.
    ///
    /// Returns `false` when no session is open.
    ///
    /// [`plumbline_snap`'s increment snap]: https://docs.rs/plumbline_snap
    pub fn update<E: Draggable>(
        &mut self,
        pointer: Point,
        entity: &mut E,
        hooks: &mut impl DragHooks<E>,
    ) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        let spec = self.spec.unwrap_or_default();

        let dx = pointer.x - session.anchor.x;
        let dy = pointer.y - session.anchor.y;
        let sx = dx - dx % spec.snap;
        let sy = dy - dy % spec.snap;

        match spec.axis {
            AxisMode::Both => {
                entity.set_left(sx);
                entity.set_top(sy);
            }
            AxisMode::HorizontalOnly => entity.set_left(sx),
            AxisMode::VerticalOnly => entity.set_top(sy),
        }

        if spec.axis != AxisMode::VerticalOnly {
            if dx <= spec.bounds.min_x {
                entity.set_left(spec.bounds.min_x);
            }
            let b = entity.drag_box();
            if b.x1 >= spec.bounds.max_x {
                entity.set_left(spec.bounds.max_x - b.width());
            }
        }
        if spec.axis != AxisMode::HorizontalOnly {
            if dy <= spec.bounds.min_y {
                entity.set_top(spec.bounds.min_y);
            }
            let b = entity.drag_box();
            if b.y1 >= spec.bounds.max_y {
                entity.set_top(spec.bounds.max_y - b.height());
            }
        }

        hooks.on_move(entity);
        true
    }

    /// Closes the open session, invoking `hooks.on_stop`.
    ///
    /// Returns `false` (and invokes nothing) when no session is open. Any
    /// pointer capture the host acquired at [`begin`](Self::begin) should be
    /// released when this returns `true`.
    pub fn end<E: Draggable>(&mut self, entity: &mut E, hooks: &mut impl DragHooks<E>) -> bool {
        if self.session.take().is_some() {
            hooks.on_stop(entity);
            true
        } else {
            false
        }
    }

    /// Returns `true` while a drag session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The currently bound spec, if any.
    #[must_use]
    pub fn spec(&self) -> Option<&DragSpec> {
        self.spec.as_ref()
    }
}
