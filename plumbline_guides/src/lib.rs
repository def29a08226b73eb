// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plumbline Guides: guide entities and the guide-management state machine.
//!
//! A *guide* is a draggable measurement line, horizontal or vertical, created
//! by a click-and-drag gesture that starts on the corresponding ruler. This
//! crate owns the set of guides and everything stateful about them:
//!
//! - Creation from ruler-territory pointer-downs, with the new guide bound
//!   into a [`plumbline_drag::DragController`] so it tracks the same gesture
//!   (no separate pick-up step).
//! - Live position labels while dragging and a hover info readout once a
//!   drag has settled.
//! - The **inbound rule**: a guide released back over its ruler of origin is
//!   discarded, so an accidental drag cancels itself.
//! - Visibility toggles for rulers and guides, including the inbound sweep
//!   when rulers come back.
//! - Ruler lock/unlock: unlocked rulers follow the scroll offset, holding
//!   exactly one scroll subscription through
//!   [`plumbline_surface::EventBridge`].
//! - Named-grid persistence through the [`GridStore`] facade.
//! - The **detailed info** decomposition: the rectangles the current guides
//!   cut the surface into, with dimension labels and parity banding
//!   ([`RegionGrid`]).
//!
//! The per-guide state machine is `Creating -> Active -> (Dragging <->
//! Active) -> Removed`, where `Creating` exists only transiently inside the
//! pointer-down handler. All transitions happen synchronously inside the
//! host's event callbacks; there is no background work.
//!
//! Coordinate conventions: pointer positions arrive in client/viewport
//! coordinates; guide positions are content-relative (viewport plus scroll),
//! so guides stay with the page content when it scrolls. The scroll offset
//! is treated as constant for the duration of one drag gesture.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod guide;
mod manager;
mod region;
mod store;

pub use guide::{Axis, Guide, GuideId};
pub use manager::{GuideManager, RulerBounds, RulerConfig, SaveOutcome, Visibility};
pub use region::{Region, RegionGrid};
pub use store::{GridRecords, GridStore, GridTable, GuideRecord};
