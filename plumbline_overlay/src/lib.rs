// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plumbline Overlay: the assembled measurement overlay.
//!
//! This crate wires the pieces together: one [`GuideManager`] for the guide
//! set, one [`plumbline_drag::DragController`] for the active gesture, a
//! debounced resize edge-rebuild, and the keyboard shortcut map. The host
//! owns the event loop and the rendering; it forwards raw pointer, key,
//! scroll and resize events here and mirrors the resulting state (guides,
//! ruler origin, regions) into whatever it draws with.
//!
//! Dialogs never block: commands that need user input return a
//! [`ChromeRequest`] and the host answers later through the matching
//! follow-up method ([`Overlay::save_grid`], [`Overlay::load_grid`],
//! [`Overlay::set_snap_config`]).
//!
//! The whole overlay can be disabled: event handling stops and
//! [`Overlay::effective_visibility`] reports nothing to draw, but the guide
//! set and every setting survive for the next enable.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use plumbline_overlay::Overlay;
//! use plumbline_surface::{DocumentMetrics, ElementMetrics, ScopeMode};
//!
//! let viewport = Size::new(1000.0, 800.0);
//! let element = ElementMetrics {
//!     client: viewport,
//!     offset: viewport,
//!     scroll: viewport,
//!     scroll_offset: Point::ZERO,
//! };
//! let m = DocumentMetrics { root: element, content: element };
//!
//! // Drag a horizontal guide off the top ruler down to y=300.
//! let mut overlay = Overlay::new(ScopeMode::Document);
//! overlay.on_pointer_down(Point::new(300.0, 10.0), &m).unwrap();
//! overlay.on_pointer_move(Point::new(300.0, 300.0), &m);
//! overlay.on_pointer_up(&m);
//! assert_eq!(overlay.manager().guides()[0].position(), 300.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;

pub use command::{ChromeRequest, Command, Modifiers};

use kurbo::Point;
use log::debug;

use plumbline_drag::DragController;
use plumbline_guides::{GridStore, GuideId, GuideManager, SaveOutcome, Visibility};
use plumbline_snap::SnapConfig;
use plumbline_surface::{Debounce, DocumentMetrics, EventBridge, ScopeMode};

/// Milliseconds a resize burst must be quiet before edges are recollected.
const RESIZE_SETTLE_MS: u64 = 100;

/// The assembled overlay: guide management, drag tracking, shortcuts.
///
/// One instance per overlaid surface. Host services (the event bridge, the
/// grid store, fresh [`DocumentMetrics`]) are passed into the calls that
/// need them rather than owned here, so the overlay itself stays plain data.
#[derive(Debug)]
pub struct Overlay {
    manager: GuideManager,
    drag: DragController,
    resize_debounce: Debounce,
    enabled: bool,
}

impl Overlay {
    /// Creates an enabled overlay with default settings.
    #[must_use]
    pub fn new(mode: ScopeMode) -> Self {
        Self {
            manager: GuideManager::new(mode),
            drag: DragController::new(),
            resize_debounce: Debounce::new(RESIZE_SETTLE_MS),
            enabled: true,
        }
    }

    /// Read access to the guide state, for rendering.
    #[must_use]
    pub fn manager(&self) -> &GuideManager {
        &self.manager
    }

    /// Whether the overlay is processing events.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Which layers the host should draw right now: the manager's
    /// visibility flags while enabled, nothing while disabled.
    #[must_use]
    pub fn effective_visibility(&self) -> Visibility {
        if self.enabled {
            self.manager.visibility()
        } else {
            Visibility::empty()
        }
    }

    /// Resumes event processing. Guides and settings kept across the
    /// disabled stretch come back as they were.
    pub fn enable(&mut self) {
        self.enabled = true;
        debug!("overlay enabled");
    }

    /// Stops event processing without losing state.
    ///
    /// An in-flight guide drag is finalized first (the inbound rule applies
    /// as on a normal release), so re-enabling never finds a stuck gesture.
    pub fn disable(&mut self, m: &DocumentMetrics) {
        if self.drag.is_dragging() {
            self.manager.on_pointer_up(m, &mut self.drag);
        }
        self.resize_debounce.cancel();
        self.enabled = false;
        debug!("overlay disabled");
    }

    /// Pointer-down on the open surface; creates a guide when it lands in
    /// ruler territory. See [`GuideManager::on_pointer_down`].
    pub fn on_pointer_down(&mut self, pointer: Point, m: &DocumentMetrics) -> Option<GuideId> {
        if !self.enabled {
            return None;
        }
        self.manager.on_pointer_down(pointer, m, &mut self.drag)
    }

    /// Pointer-down that hit an existing guide; picks it up again.
    pub fn on_guide_pointer_down(
        &mut self,
        id: GuideId,
        pointer: Point,
        m: &DocumentMetrics,
    ) -> bool {
        if !self.enabled {
            return false;
        }
        self.manager.begin_guide_drag(id, pointer, m, &mut self.drag)
    }

    /// Streams a pointer move into the active drag, if any.
    pub fn on_pointer_move(&mut self, pointer: Point, m: &DocumentMetrics) -> bool {
        if !self.enabled {
            return false;
        }
        self.manager.on_pointer_move(pointer, m, &mut self.drag)
    }

    /// Finalizes the active drag. Returns the id of a guide discarded by
    /// the inbound rule.
    pub fn on_pointer_up(&mut self, m: &DocumentMetrics) -> Option<GuideId> {
        if !self.enabled {
            return None;
        }
        self.manager.on_pointer_up(m, &mut self.drag)
    }

    /// Pointer entered a settled guide.
    pub fn on_guide_hover(&mut self, id: GuideId, pointer: Point, m: &DocumentMetrics) {
        if self.enabled {
            self.manager.on_guide_hover(id, pointer, m);
        }
    }

    /// Pointer left a guide.
    pub fn on_guide_hover_end(&mut self, id: GuideId) {
        if self.enabled {
            self.manager.on_guide_hover_end(id);
        }
    }

    /// Scroll callback; rulers follow while unlocked.
    pub fn on_scroll(&mut self, m: &DocumentMetrics) {
        if self.enabled {
            self.manager.on_scroll(m);
        }
    }

    /// Viewport resize at host time `now_ms`.
    ///
    /// Ruler bounds are invalidated immediately; the element-edge rebuild
    /// is deferred until the burst settles (see [`tick`](Self::tick)).
    pub fn on_resize(&mut self, now_ms: u64, m: &DocumentMetrics) {
        if !self.enabled {
            return;
        }
        self.manager.on_resize(m);
        self.resize_debounce.schedule(now_ms);
    }

    /// Advances the overlay's clock.
    ///
    /// Returns `true` once per settled resize burst: the host should then
    /// re-measure its element boxes and call
    /// [`rebuild_edges`](Self::rebuild_edges).
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.resize_debounce.fire(now_ms)
    }

    /// Replaces the element-edge lists used by edge snap.
    pub fn rebuild_edges(
        &mut self,
        x: impl IntoIterator<Item = f64>,
        y: impl IntoIterator<Item = f64>,
    ) {
        self.manager.rebuild_edges(x, y);
    }

    /// Key-up dispatch. Returns a [`ChromeRequest`] when the shortcut needs
    /// user input the host must collect.
    pub fn on_key_up(
        &mut self,
        key: char,
        modifiers: Modifiers,
        bridge: &mut dyn EventBridge,
        store: &mut dyn GridStore,
        m: &DocumentMetrics,
    ) -> Option<ChromeRequest> {
        if !self.enabled {
            return None;
        }
        let command = Command::from_key(key, modifiers)?;
        self.run_command(command, bridge, store, m)
    }

    /// Runs one command, from the keyboard or a chrome button.
    pub fn run_command(
        &mut self,
        command: Command,
        bridge: &mut dyn EventBridge,
        store: &mut dyn GridStore,
        m: &DocumentMetrics,
    ) -> Option<ChromeRequest> {
        if !self.enabled {
            return None;
        }
        match command {
            Command::ToggleRulers => self.manager.toggle_rulers(m),
            Command::ToggleGuides => self.manager.toggle_guides(),
            Command::ToggleAll => self.manager.toggle_all(m),
            Command::ClearGuides => {
                self.manager.delete_all_guides();
            }
            Command::OpenSaveDialog => return Some(ChromeRequest::PromptSaveName),
            Command::OpenLoadDialog => {
                return Some(ChromeRequest::OpenGridDialog {
                    names: self.manager.grid_names(store),
                });
            }
            Command::ToggleRulersLock => self.manager.toggle_rulers_lock(bridge, m),
            Command::ToggleDetailedInfo => self.manager.toggle_detailed_info(m),
            Command::ToggleEdgeSnap => self.manager.toggle_edge_snap(),
            Command::OpenSnapSettings => {
                return Some(ChromeRequest::OpenSnapSettings {
                    current: self.manager.snap_config(),
                });
            }
        }
        None
    }

    /// Follow-up to [`ChromeRequest::PromptSaveName`].
    pub fn save_grid(&mut self, name: &str, store: &mut dyn GridStore) -> SaveOutcome {
        self.manager.save_grid(name, store)
    }

    /// Follow-up to [`ChromeRequest::OpenGridDialog`]: load a grid.
    pub fn load_grid(
        &mut self,
        name: &str,
        store: &mut dyn GridStore,
        m: &DocumentMetrics,
    ) -> bool {
        self.manager.load_grid(name, store, m)
    }

    /// Follow-up to [`ChromeRequest::OpenGridDialog`]: delete a grid.
    pub fn delete_grid(&mut self, name: &str, store: &mut dyn GridStore) -> bool {
        self.manager.delete_grid(name, store)
    }

    /// Follow-up to [`ChromeRequest::OpenSnapSettings`].
    pub fn set_snap_config(&mut self, snap: SnapConfig) {
        self.manager.set_snap_config(snap);
    }
}
