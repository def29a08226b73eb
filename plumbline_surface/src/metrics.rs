// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-model snapshots and pure coordinate derivation.

use kurbo::{Point, Size};

/// Box-model measurements of a single element, sampled by the host.
///
/// Field names follow the DOM properties they are sampled from; the core
/// never reads the DOM itself.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ElementMetrics {
    /// `clientWidth` / `clientHeight`: inner size excluding scrollbars.
    pub client: Size,
    /// `offsetWidth` / `offsetHeight`: border-box size.
    pub offset: Size,
    /// `scrollWidth` / `scrollHeight`: full scrollable content size.
    pub scroll: Size,
    /// `scrollLeft` / `scrollTop`: current scroll offset.
    pub scroll_offset: Point,
}

/// Measurements of the tracked container and its root, taken together.
///
/// For a whole-document overlay `root` is the document element and `content`
/// is the body; for a scoped overlay `root` is unchanged and `content` is the
/// tracked container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DocumentMetrics {
    /// The document element (or outer frame).
    pub root: ElementMetrics,
    /// The body, or the scoped container being overlaid.
    pub content: ElementMetrics,
}

/// Whether the overlay spans the whole document or one scoped container.
///
/// The mode selects the aggregation used when the two measured elements
/// disagree: a whole-document overlay wants the *largest* plausible value
/// (quirks-mode documents report sizes on either element), a scoped one wants
/// the *smallest* (never measure past the container).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScopeMode {
    /// Overlay the whole document; aggregate by maximum.
    #[default]
    Document,
    /// Overlay one scroll container; aggregate by minimum.
    Container,
}

/// Pure derivation of viewport/scroll quantities from a metrics snapshot.
///
/// Holds no mutable state; the same snapshot always yields the same answers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CoordinateService {
    mode: ScopeMode,
}

impl CoordinateService {
    /// Creates a service for the given scope mode.
    #[must_use]
    pub fn new(mode: ScopeMode) -> Self {
        Self { mode }
    }

    /// The configured scope mode.
    #[must_use]
    pub fn mode(&self) -> ScopeMode {
        self.mode
    }

    /// Visible viewport size.
    #[must_use]
    pub fn window_size(&self, m: &DocumentMetrics) -> Size {
        match self.mode {
            ScopeMode::Document => m.root.client,
            ScopeMode::Container => Size::new(
                self.fold(m.root.client.width, m.content.client.width),
                self.fold(m.root.client.height, m.content.client.height),
            ),
        }
    }

    /// Current scroll offset of the tracked surface.
    #[must_use]
    pub fn scroll_position(&self, m: &DocumentMetrics) -> Point {
        // Browsers disagree on whether the root or the body carries the
        // document scroll offset; fold across both.
        Point::new(
            self.fold(m.root.scroll_offset.x, m.content.scroll_offset.x),
            self.fold(m.root.scroll_offset.y, m.content.scroll_offset.y),
        )
    }

    /// Full scrollable extent of the tracked surface.
    ///
    /// Folds across every size the box model reports for either element:
    /// scroll, offset, and client sizes all participate, as quirks-mode
    /// documents surface the true extent on different properties.
    #[must_use]
    pub fn scroll_extent(&self, m: &DocumentMetrics) -> Size {
        let width = [
            m.content.scroll.width,
            m.content.offset.width,
            m.root.client.width,
            m.root.scroll.width,
            m.root.offset.width,
        ];
        let height = [
            m.content.scroll.height,
            m.content.offset.height,
            m.root.client.height,
            m.root.scroll.height,
            m.root.offset.height,
        ];
        Size::new(self.fold_all(width), self.fold_all(height))
    }

    fn fold(&self, a: f64, b: f64) -> f64 {
        match self.mode {
            ScopeMode::Document => {
                if b > a {
                    b
                } else {
                    a
                }
            }
            ScopeMode::Container => {
                if b < a {
                    b
                } else {
                    a
                }
            }
        }
    }

    fn fold_all(&self, values: [f64; 5]) -> f64 {
        let mut acc = values[0];
        for &v in &values[1..] {
            acc = self.fold(acc, v);
        }
        acc
    }
}
