// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named-grid persistence: the record types and the storage facade.
//!
//! The manager never talks to a concrete storage backend. The host hands it a
//! [`GridStore`] and the whole guide table round-trips through it as one
//! value, so the backend can be browser local storage, a settings file, or an
//! in-memory map in tests.

use alloc::string::String;

use hashbrown::HashMap;

use crate::guide::Axis;

/// What survives of one guide across a save/load cycle.
///
/// Everything else (id, label, visibility, hover state, span) is display
/// state, reconstructed on load from the manager's current environment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideRecord {
    /// The guide's orientation.
    pub axis: Axis,
    /// Content-relative offset on the moving axis, in pixels.
    pub position: f64,
}

/// One saved grid: guide records keyed by their `guide-N` id at save time.
///
/// The keys only disambiguate records within the grid; loading assigns fresh
/// ids.
pub type GridRecords = HashMap<String, GuideRecord>;

/// Every saved grid, keyed by the user-chosen grid name.
pub type GridTable = HashMap<String, GridRecords>;

/// Storage facade for the named-grid table.
///
/// The table is read and written whole. `load` returns `None` when the
/// backend is unavailable or holds nothing yet; `save` returns `false` when
/// the backend is unavailable, in which case the manager degrades the
/// operation to a no-op rather than failing.
pub trait GridStore {
    /// Reads the whole table.
    fn load(&self) -> Option<GridTable>;

    /// Replaces the whole table. Returns `false` if nothing was written.
    fn save(&mut self, table: &GridTable) -> bool;
}
