// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-gesture scenarios driven through the public API.

use kurbo::{Point, Size};

use plumbline_drag::DragController;
use plumbline_guides::{Axis, GridStore, GridTable, GuideManager, SaveOutcome};
use plumbline_snap::SnapConfig;
use plumbline_surface::{DocumentMetrics, ElementMetrics, ScopeMode};

#[derive(Default)]
struct MemoryStore {
    table: Option<GridTable>,
    writable: bool,
}

impl MemoryStore {
    fn writable() -> Self {
        Self {
            table: None,
            writable: true,
        }
    }
}

impl GridStore for MemoryStore {
    fn load(&self) -> Option<GridTable> {
        self.table.clone()
    }

    fn save(&mut self, table: &GridTable) -> bool {
        if self.writable {
            self.table = Some(table.clone());
        }
        self.writable
    }
}

fn metrics(extent: Size, scroll: Point) -> DocumentMetrics {
    let viewport = Size::new(1000.0, 800.0);
    DocumentMetrics {
        root: ElementMetrics {
            client: viewport,
            offset: viewport,
            scroll: extent,
            scroll_offset: scroll,
        },
        content: ElementMetrics {
            client: viewport,
            offset: extent,
            scroll: extent,
            scroll_offset: Point::ZERO,
        },
    }
}

fn plain_metrics() -> DocumentMetrics {
    metrics(Size::new(1000.0, 800.0), Point::ZERO)
}

/// Drags a new vertical guide from the ruler to `x` and releases it.
fn place_vertical(mgr: &mut GuideManager, drag: &mut DragController, m: &DocumentMetrics, x: f64) {
    mgr.on_pointer_down(Point::new(20.0, 300.0), m, drag)
        .expect("pointer is in vertical ruler territory");
    mgr.on_pointer_move(Point::new(x, 300.0), m, drag);
    mgr.on_pointer_up(m, drag);
}

fn place_horizontal(mgr: &mut GuideManager, drag: &mut DragController, m: &DocumentMetrics, y: f64) {
    mgr.on_pointer_down(Point::new(300.0, 10.0), m, drag)
        .expect("pointer is in horizontal ruler territory");
    mgr.on_pointer_move(Point::new(300.0, y), m, drag);
    mgr.on_pointer_up(m, drag);
}

#[test]
fn increment_snap_truncates_toward_the_grid_line() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let m = plain_metrics();

    mgr.set_snap_config(SnapConfig::new(10.0, 0.0));

    // Grab at x=20 (anchor offset zero), move to raw x=57: lands on 50.
    place_vertical(&mut mgr, &mut drag, &m, 57.0);
    let guide = &mgr.guides()[0];
    assert_eq!(guide.axis(), Axis::Vertical);
    assert_eq!(guide.position(), 50.0);
    assert_eq!(guide.label(), "50");
}

#[test]
fn creation_drag_and_release_is_one_gesture() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let m = plain_metrics();

    let id = mgr
        .on_pointer_down(Point::new(300.0, 10.0), &m, &mut drag)
        .unwrap();
    assert_eq!(mgr.dragging(), Some(id));
    assert!(drag.is_dragging());

    mgr.on_pointer_move(Point::new(300.0, 450.0), &m, &mut drag);
    assert_eq!(mgr.guide(id).unwrap().label(), "450");

    assert_eq!(mgr.on_pointer_up(&m, &mut drag), None);
    assert!(!drag.is_dragging());
    assert_eq!(mgr.dragging(), None);
}

#[test]
fn a_settled_guide_can_be_picked_up_again() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let m = plain_metrics();

    place_vertical(&mut mgr, &mut drag, &m, 400.0);
    let id = mgr.guides()[0].id();

    // Grab it slightly off-center; the anchor keeps the grab offset.
    assert!(mgr.begin_guide_drag(id, Point::new(401.0, 500.0), &m, &mut drag));
    mgr.on_pointer_move(Point::new(601.0, 500.0), &m, &mut drag);
    mgr.on_pointer_up(&m, &mut drag);
    assert_eq!(mgr.guide(id).unwrap().position(), 600.0);
}

#[test]
fn dragging_back_onto_the_ruler_cancels_the_guide() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let m = plain_metrics();

    place_vertical(&mut mgr, &mut drag, &m, 400.0);
    let id = mgr.guides()[0].id();

    mgr.begin_guide_drag(id, Point::new(400.0, 500.0), &m, &mut drag);
    mgr.on_pointer_move(Point::new(30.0, 500.0), &m, &mut drag);
    assert_eq!(mgr.on_pointer_up(&m, &mut drag), Some(id));
    assert!(mgr.guides().is_empty());
}

#[test]
fn guides_scroll_with_the_content() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let extent = Size::new(1000.0, 2400.0);
    let scrolled = metrics(extent, Point::new(0.0, 500.0));

    // Viewport y=200 while scrolled down 500: the guide belongs at
    // content y=700 so it stays with the page.
    place_horizontal(&mut mgr, &mut drag, &scrolled, 200.0);
    assert_eq!(mgr.guides()[0].position(), 700.0);
}

#[test]
fn save_guards_fire_in_order() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let mut store = MemoryStore::writable();
    let m = plain_metrics();

    assert_eq!(mgr.save_grid("layout", &mut store), SaveOutcome::NoGuides);
    assert!(store.load().is_none(), "guard must not touch the store");

    place_vertical(&mut mgr, &mut drag, &m, 400.0);
    assert_eq!(mgr.save_grid("", &mut store), SaveOutcome::NameRequired);
    assert!(store.load().is_none());

    assert_eq!(mgr.save_grid("layout", &mut store), SaveOutcome::Saved);
    assert_eq!(mgr.grid_count(), 1);
}

#[test]
fn unavailable_store_degrades_to_a_noop() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let mut store = MemoryStore::default(); // writable: false
    let m = plain_metrics();

    place_vertical(&mut mgr, &mut drag, &m, 400.0);
    assert_eq!(
        mgr.save_grid("layout", &mut store),
        SaveOutcome::StoreUnavailable
    );
    assert_eq!(mgr.grid_count(), 0);
    assert!(!mgr.load_grid("layout", &mut store, &m));
    assert_eq!(mgr.guides().len(), 1, "failed load must not clear guides");
}

#[test]
fn grids_round_trip_with_fresh_ids() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let mut store = MemoryStore::writable();
    let m = plain_metrics();

    place_vertical(&mut mgr, &mut drag, &m, 250.0);
    place_horizontal(&mut mgr, &mut drag, &m, 125.0);
    let saved_ids: Vec<_> = mgr.guides().iter().map(|g| g.id()).collect();
    assert_eq!(mgr.save_grid("layout", &mut store), SaveOutcome::Saved);

    mgr.delete_all_guides();
    place_vertical(&mut mgr, &mut drag, &m, 900.0);
    assert!(mgr.load_grid("layout", &mut store, &m));

    // Only axis and position survive; everything else is rebuilt.
    let mut restored: Vec<(Axis, f64)> = mgr
        .guides()
        .iter()
        .map(|g| (g.axis(), g.position()))
        .collect();
    restored.sort_by(|a, b| a.1.total_cmp(&b.1));
    assert_eq!(
        restored,
        [(Axis::Horizontal, 125.0), (Axis::Vertical, 250.0)]
    );
    for guide in mgr.guides() {
        assert!(
            saved_ids.iter().all(|&id| id != guide.id()),
            "loaded guides must get fresh ids"
        );
        assert!(guide.visible());
    }
    assert_eq!(mgr.dragging(), None);
}

#[test]
fn same_name_save_replaces_the_grid() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let mut store = MemoryStore::writable();
    let m = plain_metrics();

    place_vertical(&mut mgr, &mut drag, &m, 250.0);
    mgr.save_grid("layout", &mut store);

    mgr.delete_all_guides();
    place_vertical(&mut mgr, &mut drag, &m, 600.0);
    mgr.save_grid("layout", &mut store);
    assert_eq!(mgr.grid_count(), 1);

    mgr.delete_all_guides();
    assert!(mgr.load_grid("layout", &mut store, &m));
    assert_eq!(mgr.guides().len(), 1);
    assert_eq!(mgr.guides()[0].position(), 600.0);
}

#[test]
fn delete_grid_and_names_stay_in_sync() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let mut store = MemoryStore::writable();
    let m = plain_metrics();

    place_vertical(&mut mgr, &mut drag, &m, 250.0);
    mgr.save_grid("b", &mut store);
    mgr.save_grid("a", &mut store);
    assert_eq!(mgr.grid_names(&store), ["a", "b"]);

    assert!(mgr.delete_grid("b", &mut store));
    assert!(!mgr.delete_grid("b", &mut store), "already gone");
    assert_eq!(mgr.grid_names(&store), ["a"]);
    assert_eq!(mgr.grid_count(), 1);
}

#[test]
fn loading_while_guides_are_hidden_keeps_them_hidden() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let mut store = MemoryStore::writable();
    let m = plain_metrics();

    place_vertical(&mut mgr, &mut drag, &m, 250.0);
    mgr.save_grid("layout", &mut store);
    mgr.delete_all_guides();

    mgr.toggle_guides();
    assert!(mgr.load_grid("layout", &mut store, &m));
    assert!(!mgr.guides()[0].visible());
    mgr.toggle_guides();
    assert!(mgr.guides()[0].visible());
}

#[test]
fn detailed_info_tracks_the_loaded_grid() {
    let mut mgr = GuideManager::new(ScopeMode::Document);
    let mut drag = DragController::new();
    let mut store = MemoryStore::writable();
    let m = plain_metrics();

    place_vertical(&mut mgr, &mut drag, &m, 200.0);
    place_horizontal(&mut mgr, &mut drag, &m, 100.0);
    mgr.save_grid("layout", &mut store);
    mgr.delete_all_guides();

    mgr.toggle_detailed_info(&m);
    assert_eq!(mgr.regions().unwrap().len(), 1);
    mgr.load_grid("layout", &mut store, &m);

    let regions = mgr.regions().unwrap();
    assert_eq!((regions.rows(), regions.columns()), (2, 2));
    assert_eq!(regions.regions()[0].label, "200 x 100");
}
