// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The guide manager: creation, dragging, toggles, persistence, regions.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Size};
use log::{debug, info};

use plumbline_drag::{AxisMode, DragBounds, DragController, DragHooks, DragSpec};
use plumbline_snap::{EdgeIndex, SnapConfig};
use plumbline_surface::{
    CoordinateService, DocumentMetrics, EventBridge, EventKind, ScopeMode, SubscriptionToken,
};

use crate::guide::{Axis, Guide, GuideId};
use crate::region::RegionGrid;
use crate::store::{GridRecords, GridStore, GuideRecord};

bitflags::bitflags! {
    /// Which overlay layers are currently displayed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Visibility: u8 {
        /// The ruler bands along the viewport edges.
        const RULERS = 0b01;
        /// The guide lines.
        const GUIDES = 0b10;
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::RULERS | Self::GUIDES
    }
}

/// Thickness of the ruler bands, in pixels.
///
/// These mirror the rendered ruler widgets (band depth including padding and
/// border); the defaults match the stock stylesheet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RulerConfig {
    /// Depth of the horizontal ruler band along the top edge.
    pub h_thickness: f64,
    /// Depth of the vertical ruler band along the left edge.
    pub v_thickness: f64,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            h_thickness: 16.0,
            v_thickness: 42.0,
        }
    }
}

/// The ruler bands in viewport pixels, computed lazily on first use.
///
/// Once computed the bounds stay stable until an explicit recompute
/// (resize or a lock toggle invalidates them).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RulerBounds {
    /// Start of the horizontal ruler band (y).
    pub h_start: f64,
    /// End of the horizontal ruler band (y).
    pub h_stop: f64,
    /// Start of the vertical ruler band (x).
    pub v_start: f64,
    /// End of the vertical ruler band (x).
    pub v_stop: f64,
}

/// Result of a [`GuideManager::save_grid`] attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The grid was persisted.
    Saved,
    /// The name was empty while guides exist; chrome should prompt again.
    NameRequired,
    /// There are no guides to save; nothing was written.
    NoGuides,
    /// The backing store is unavailable; the save degraded to a no-op.
    StoreUnavailable,
}

/// Label and hover plumbing shared by every guide drag.
///
/// Starting a drag hides the hover readout (re-shown on the next hover after
/// the drag settles); finishing one arms it. Position labels refresh inside
/// `Guide::set_position`, so no work is needed per move here.
struct GuideDragHooks;

impl DragHooks<Guide> for GuideDragHooks {
    fn on_start(&mut self, guide: &mut Guide) {
        guide.set_info_visible(false);
    }

    fn on_stop(&mut self, guide: &mut Guide) {
        guide.arm_hover(true);
    }
}

/// Owns the guide set and every stateful rule about it.
///
/// One manager serves one overlay instance; nothing here is process-global.
/// Pointer positions arrive in client/viewport coordinates and guides are
/// kept content-relative, so the manager needs a fresh [`DocumentMetrics`]
/// snapshot with each event.
#[derive(Debug)]
pub struct GuideManager {
    coords: CoordinateService,
    ruler_config: RulerConfig,
    guides: Vec<Guide>,
    next_guide: u64,
    visibility: Visibility,
    bounds: Option<RulerBounds>,
    locked: bool,
    scroll_token: Option<SubscriptionToken>,
    ruler_origin: Point,
    wrapper_size: Option<Size>,
    detailed_info: bool,
    regions: Option<RegionGrid>,
    snap: SnapConfig,
    edges: EdgeIndex,
    dragging: Option<GuideId>,
    grid_count: usize,
}

impl GuideManager {
    /// Creates a manager for the given scope mode with default ruler
    /// thicknesses, both layers visible, rulers locked.
    #[must_use]
    pub fn new(mode: ScopeMode) -> Self {
        Self::with_ruler_config(mode, RulerConfig::default())
    }

    /// Creates a manager with explicit ruler thicknesses.
    #[must_use]
    pub fn with_ruler_config(mode: ScopeMode, ruler_config: RulerConfig) -> Self {
        Self {
            coords: CoordinateService::new(mode),
            ruler_config,
            guides: Vec::new(),
            next_guide: 0,
            visibility: Visibility::default(),
            bounds: None,
            locked: true,
            scroll_token: None,
            ruler_origin: Point::ZERO,
            wrapper_size: None,
            detailed_info: false,
            regions: None,
            snap: SnapConfig::default(),
            edges: EdgeIndex::new(),
            dragging: None,
            grid_count: 0,
        }
    }

    /// The live guides, in creation order.
    #[must_use]
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// Looks up a guide by id.
    #[must_use]
    pub fn guide(&self, id: GuideId) -> Option<&Guide> {
        self.index_of(id).map(|idx| &self.guides[idx])
    }

    /// Which overlay layers are displayed.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the rulers are locked to the viewport.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Where the rulers are rendered; follows the scroll offset while
    /// unlocked, pinned to the viewport origin while locked.
    #[must_use]
    pub fn ruler_origin(&self) -> Point {
        self.ruler_origin
    }

    /// Size the overlay wrapper should take: the full scrollable extent
    /// while the rulers are unlocked, `None` (viewport-sized) while locked.
    #[must_use]
    pub fn wrapper_size(&self) -> Option<Size> {
        self.wrapper_size
    }

    /// The guide currently being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<GuideId> {
        self.dragging
    }

    /// The current snap configuration.
    #[must_use]
    pub fn snap_config(&self) -> SnapConfig {
        self.snap
    }

    /// Replaces the snap configuration (from the snap-settings dialog).
    pub fn set_snap_config(&mut self, snap: SnapConfig) {
        self.snap = snap;
    }

    /// Flips element-edge snapping on or off.
    pub fn toggle_edge_snap(&mut self) {
        self.snap.edge_snap = !self.snap.edge_snap;
        debug!(
            "edge snap {}",
            if self.snap.edge_snap { "on" } else { "off" }
        );
    }

    /// Replaces the element-edge lists (collected at overlay initialization
    /// and after debounced resizes).
    pub fn rebuild_edges(
        &mut self,
        x: impl IntoIterator<Item = f64>,
        y: impl IntoIterator<Item = f64>,
    ) {
        self.edges.rebuild(x, y);
    }

    /// Number of named grids in the persisted table, as of the last
    /// save/load/delete through this manager.
    #[must_use]
    pub fn grid_count(&self) -> usize {
        self.grid_count
    }

    /// The cached ruler bounds, if they have been computed.
    #[must_use]
    pub fn ruler_bounds(&self) -> Option<RulerBounds> {
        self.bounds
    }

    /// Drops the cached ruler bounds; the next pointer-down recomputes them.
    pub fn invalidate_ruler_bounds(&mut self) {
        self.bounds = None;
    }

    fn ensure_bounds(&mut self) -> RulerBounds {
        *self.bounds.get_or_insert(RulerBounds {
            h_start: 0.0,
            h_stop: self.ruler_config.h_thickness,
            v_start: 0.0,
            v_stop: self.ruler_config.v_thickness,
        })
    }

    fn index_of(&self, id: GuideId) -> Option<usize> {
        self.guides.iter().position(|g| g.id() == id)
    }

    fn activate_spec(&self, axis: Axis, extent: Size, drag: &mut DragController) {
        let mode = match axis {
            Axis::Horizontal => AxisMode::VerticalOnly,
            Axis::Vertical => AxisMode::HorizontalOnly,
        };
        // Edge snap supersedes the increment grid: run the drag on whole
        // pixels and resolve against the edge lists after each move.
        let increment = if self.snap.edge_snap {
            1.0
        } else {
            match axis {
                Axis::Horizontal => self.snap.y_increment,
                Axis::Vertical => self.snap.x_increment,
            }
        };
        drag.activate(
            DragSpec::new(mode)
                .with_bounds(DragBounds::new(0.0, extent.width, 0.0, extent.height))
                .with_snap(increment),
        );
    }

    /// Handles a pointer-down anywhere on the surface.
    ///
    /// When the pointer lies in ruler territory — inside one ruler's band but
    /// past the other ruler's band, so the corner is dead — a new guide is
    /// created there and immediately bound into `drag`, tracking the same
    /// gesture. Returns the new guide's id, or `None` when no guide was
    /// created (pointer elsewhere, rulers hidden, or a drag already active).
    pub fn on_pointer_down(
        &mut self,
        pointer: Point,
        m: &DocumentMetrics,
        drag: &mut DragController,
    ) -> Option<GuideId> {
        if drag.is_dragging() || !self.visibility.contains(Visibility::RULERS) {
            return None;
        }
        let b = self.ensure_bounds();
        let axis = if pointer.x > b.v_stop && pointer.y < b.h_stop {
            Axis::Horizontal
        } else if pointer.y > b.h_stop && pointer.x < b.v_stop {
            Axis::Vertical
        } else {
            return None;
        };

        let scroll = self.coords.scroll_position(m);
        let extent = self.coords.scroll_extent(m);
        let (position, length) = match axis {
            Axis::Horizontal => (pointer.y + scroll.y, extent.width),
            Axis::Vertical => (pointer.x + scroll.x, extent.height),
        };

        let id = GuideId::new(self.next_guide);
        self.next_guide += 1;
        let guide = Guide::new(id, axis, position, length);
        debug!("created {id} ({axis:?}) at {position}px");
        self.guides.push(guide);

        self.activate_spec(axis, extent, drag);
        let idx = self.guides.len() - 1;
        if drag.begin(pointer, &mut self.guides[idx], &mut GuideDragHooks) {
            self.dragging = Some(id);
        }
        if self.detailed_info {
            self.recompute_regions(m);
        }
        Some(id)
    }

    /// Re-picks an existing guide on a pointer-down that hit it.
    pub fn begin_guide_drag(
        &mut self,
        id: GuideId,
        pointer: Point,
        m: &DocumentMetrics,
        drag: &mut DragController,
    ) -> bool {
        if drag.is_dragging() {
            return false;
        }
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let extent = self.coords.scroll_extent(m);
        let axis = self.guides[idx].axis();
        self.activate_spec(axis, extent, drag);
        if drag.begin(pointer, &mut self.guides[idx], &mut GuideDragHooks) {
            self.dragging = Some(id);
            true
        } else {
            false
        }
    }

    /// Streams a pointer move into the active guide drag.
    ///
    /// Applies the drag controller's constrained placement, then element-edge
    /// snap when enabled (which takes precedence over the increment grid),
    /// then recomputes the detailed-info regions if that mode is active.
    /// Returns `false` when no guide drag is active.
    pub fn on_pointer_move(
        &mut self,
        pointer: Point,
        m: &DocumentMetrics,
        drag: &mut DragController,
    ) -> bool {
        let Some(id) = self.dragging else {
            return false;
        };
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        if !drag.update(pointer, &mut self.guides[idx], &mut GuideDragHooks) {
            return false;
        }
        if self.snap.edge_snap {
            let guide = &mut self.guides[idx];
            let snapped = match guide.axis() {
                Axis::Vertical => self.edges.x.resolve(guide.position()),
                Axis::Horizontal => self.edges.y.resolve(guide.position()),
            };
            if let Some(position) = snapped {
                guide.set_position(position);
            }
        }
        if self.detailed_info {
            self.recompute_regions(m);
        }
        true
    }

    /// Finalizes the active guide drag on pointer-up.
    ///
    /// A guide released still inside its ruler's band (offset less than the
    /// band end plus the current scroll offset on its axis) is discarded,
    /// provided both rulers and guides are visible — dragging a guide back
    /// onto its ruler of origin cancels it. Returns the removed guide's id
    /// when that rule fired.
    pub fn on_pointer_up(
        &mut self,
        m: &DocumentMetrics,
        drag: &mut DragController,
    ) -> Option<GuideId> {
        let id = self.dragging.take()?;
        if let Some(idx) = self.index_of(id) {
            drag.end(&mut self.guides[idx], &mut GuideDragHooks);
        }
        let removed = self.remove_if_inbound(id, m);
        if self.detailed_info {
            self.recompute_regions(m);
        }
        removed.then_some(id)
    }

    fn remove_if_inbound(&mut self, id: GuideId, m: &DocumentMetrics) -> bool {
        if !self.visibility.contains(Visibility::RULERS | Visibility::GUIDES) {
            return false;
        }
        let b = self.ensure_bounds();
        let scroll = self.coords.scroll_position(m);
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let guide = &self.guides[idx];
        let inbound = match guide.axis() {
            Axis::Horizontal => guide.position() < b.h_stop + scroll.y,
            Axis::Vertical => guide.position() < b.v_stop + scroll.x,
        };
        if inbound {
            let guide = self.guides.remove(idx);
            debug!("discarded inbound {}", guide.id());
        }
        inbound
    }

    /// Sweeps out every guide currently inside its ruler band, e.g. ones
    /// stranded there while the rulers were hidden.
    pub fn remove_inbound_guides(&mut self, m: &DocumentMetrics) {
        let ids: Vec<GuideId> = self.guides.iter().map(Guide::id).collect();
        for id in ids {
            self.remove_if_inbound(id, m);
        }
        if self.detailed_info {
            self.recompute_regions(m);
        }
    }

    /// Shows or hides the rulers. Revealing them sweeps inbound guides.
    pub fn toggle_rulers(&mut self, m: &DocumentMetrics) {
        self.visibility.toggle(Visibility::RULERS);
        if self.visibility.contains(Visibility::RULERS) {
            self.remove_inbound_guides(m);
        }
    }

    /// Shows or hides the guides.
    pub fn toggle_guides(&mut self) {
        self.visibility.toggle(Visibility::GUIDES);
        let visible = self.visibility.contains(Visibility::GUIDES);
        for guide in &mut self.guides {
            guide.set_visible(visible);
        }
    }

    /// Shows or hides rulers and guides together: if either layer is
    /// visible both go hidden, otherwise both come back.
    pub fn toggle_all(&mut self, m: &DocumentMetrics) {
        let target = !self
            .visibility
            .intersects(Visibility::RULERS | Visibility::GUIDES);
        if self.visibility.contains(Visibility::GUIDES) != target {
            self.toggle_guides();
        }
        if self.visibility.contains(Visibility::RULERS) != target {
            self.toggle_rulers(m);
        }
    }

    /// Locks or unlocks the rulers.
    ///
    /// Unlocking subscribes to the host's scroll stream so the rulers track
    /// the scroll offset and the overlay wrapper grows to the full scrollable
    /// extent; locking unsubscribes and pins the rulers back to the viewport.
    /// Subscribe and unsubscribe pair 1:1 — repeated toggling never
    /// accumulates handlers.
    pub fn toggle_rulers_lock(&mut self, bridge: &mut dyn EventBridge, m: &DocumentMetrics) {
        if self.locked {
            self.scroll_token = Some(bridge.subscribe(EventKind::Scroll, false));
            self.locked = false;
            self.wrapper_size = Some(self.coords.scroll_extent(m));
            self.on_scroll(m);
            debug!("rulers unlocked; following scroll");
        } else {
            if let Some(token) = self.scroll_token.take() {
                bridge.unsubscribe(EventKind::Scroll, token, false);
            }
            self.locked = true;
            self.ruler_origin = Point::ZERO;
            self.wrapper_size = None;
            self.invalidate_ruler_bounds();
            debug!("rulers locked");
        }
    }

    /// Scroll callback while unlocked: rulers follow the scroll offset.
    pub fn on_scroll(&mut self, m: &DocumentMetrics) {
        if self.locked {
            return;
        }
        self.ruler_origin = self.coords.scroll_position(m);
        self.wrapper_size = Some(self.coords.scroll_extent(m));
    }

    /// Viewport resize: ruler bounds and the wrapper extent are stale.
    ///
    /// Element-edge lists are *not* rebuilt here — the overlay debounces
    /// that and calls [`rebuild_edges`](Self::rebuild_edges) when the burst
    /// settles.
    pub fn on_resize(&mut self, m: &DocumentMetrics) {
        self.invalidate_ruler_bounds();
        if !self.locked {
            self.wrapper_size = Some(self.coords.scroll_extent(m));
        }
        if self.detailed_info {
            self.recompute_regions(m);
        }
    }

    /// Persists the current guide set under `name`.
    ///
    /// Guards per the original behavior: nothing happens with zero guides;
    /// an empty name with guides present asks chrome to prompt again. The
    /// grid is merged into the persisted table (replacing a same-named one).
    pub fn save_grid(&mut self, name: &str, store: &mut dyn GridStore) -> SaveOutcome {
        if self.guides.is_empty() {
            return SaveOutcome::NoGuides;
        }
        if name.is_empty() {
            return SaveOutcome::NameRequired;
        }
        let mut table = store.load().unwrap_or_default();
        let mut records = GridRecords::default();
        for guide in &self.guides {
            records.insert(
                guide.id().to_string(),
                GuideRecord {
                    axis: guide.axis(),
                    position: guide.position(),
                },
            );
        }
        table.insert(String::from(name), records);
        if store.save(&table) {
            self.grid_count = table.len();
            info!("saved grid {name:?} ({} guides)", self.guides.len());
            SaveOutcome::Saved
        } else {
            SaveOutcome::StoreUnavailable
        }
    }

    /// Replaces the current guide set with the named grid.
    ///
    /// A missing table or unknown name is a no-op returning `false`. Loaded
    /// guides get fresh ids, are not in drag mode, and respect the current
    /// guide-visibility flag.
    pub fn load_grid(&mut self, name: &str, store: &mut dyn GridStore, m: &DocumentMetrics) -> bool {
        let Some(table) = store.load() else {
            return false;
        };
        let Some(records) = table.get(name) else {
            return false;
        };
        let extent = self.coords.scroll_extent(m);
        self.guides.clear();
        self.dragging = None;

        // Hash order is arbitrary; sort by stored key for determinism.
        let mut sorted: Vec<(&String, &GuideRecord)> = records.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        for (_, record) in sorted {
            let id = GuideId::new(self.next_guide);
            self.next_guide += 1;
            let length = match record.axis {
                Axis::Horizontal => extent.width,
                Axis::Vertical => extent.height,
            };
            let mut guide = Guide::new(id, record.axis, record.position, length);
            guide.set_visible(self.visibility.contains(Visibility::GUIDES));
            guide.arm_hover(true);
            self.guides.push(guide);
        }
        self.grid_count = table.len();
        if self.detailed_info {
            self.recompute_regions(m);
        }
        info!("loaded grid {name:?} ({} guides)", self.guides.len());
        true
    }

    /// Deletes the named grid from the persisted table.
    pub fn delete_grid(&mut self, name: &str, store: &mut dyn GridStore) -> bool {
        let Some(mut table) = store.load() else {
            return false;
        };
        if table.remove(name).is_none() {
            return false;
        }
        if !store.save(&table) {
            return false;
        }
        self.grid_count = table.len();
        info!("deleted grid {name:?}");
        true
    }

    /// Names of every persisted grid, sorted.
    #[must_use]
    pub fn grid_names(&self, store: &dyn GridStore) -> Vec<String> {
        let mut names: Vec<String> = store
            .load()
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Removes every guide and hides the detailed-info block.
    ///
    /// Returns `false` (no-op) when there are none.
    pub fn delete_all_guides(&mut self) -> bool {
        if self.guides.is_empty() {
            return false;
        }
        let count = self.guides.len();
        self.guides.clear();
        self.dragging = None;
        self.regions = None;
        info!("cleared {count} guides");
        true
    }

    /// Whether detailed-info mode is active.
    #[must_use]
    pub fn detailed_info_active(&self) -> bool {
        self.detailed_info
    }

    /// Flips detailed-info mode. Turning it on computes the regions;
    /// turning it off hides them without destroying the last computation.
    pub fn toggle_detailed_info(&mut self, m: &DocumentMetrics) {
        self.detailed_info = !self.detailed_info;
        if self.detailed_info {
            self.recompute_regions(m);
        }
    }

    /// The region decomposition, when detailed-info mode is active.
    #[must_use]
    pub fn regions(&self) -> Option<&RegionGrid> {
        if self.detailed_info {
            self.regions.as_ref()
        } else {
            None
        }
    }

    fn recompute_regions(&mut self, m: &DocumentMetrics) {
        let xs: Vec<f64> = self
            .guides
            .iter()
            .filter(|g| g.axis() == Axis::Vertical)
            .map(Guide::position)
            .collect();
        let ys: Vec<f64> = self
            .guides
            .iter()
            .filter(|g| g.axis() == Axis::Horizontal)
            .map(Guide::position)
            .collect();
        let extent = self.coords.scroll_extent(m);
        self.regions = Some(RegionGrid::compute(&xs, &ys, extent));
    }

    /// Pointer entered a settled guide: show its info readout near the
    /// pointer. Ignored mid-drag or before the guide's first completed drag.
    pub fn on_guide_hover(&mut self, id: GuideId, pointer: Point, m: &DocumentMetrics) {
        if self.dragging.is_some() {
            return;
        }
        let scroll = self.coords.scroll_position(m);
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let guide = &mut self.guides[idx];
        if !guide.hover_armed() {
            return;
        }
        let anchor = match guide.axis() {
            Axis::Horizontal => Point::new(pointer.x + scroll.x + 10.0, guide.position()),
            Axis::Vertical => Point::new(guide.position(), pointer.y + scroll.y - 35.0),
        };
        guide.set_info_anchor(anchor);
        guide.set_info_visible(true);
    }

    /// Pointer left a guide: hide its info readout.
    pub fn on_guide_hover_end(&mut self, id: GuideId) {
        if let Some(idx) = self.index_of(id) {
            self.guides[idx].set_info_visible(false);
        }
    }
}
