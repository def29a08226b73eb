// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plumbline Surface: the seam between the interaction core and the host page.
//!
//! Three small pieces live here:
//!
//! - [`metrics`]: immutable snapshots of the host document's box-model
//!   measurements ([`DocumentMetrics`]) and the [`CoordinateService`] that
//!   derives viewport size, scroll position, and scroll extent from them.
//!   Derivation is pure: the host samples the DOM, the service only folds
//!   numbers, so every consumer is unit-testable with literal snapshots.
//! - [`bridge`]: the [`EventBridge`] trait, the narrow contract for the
//!   host's cross-environment event facility (subscribe/unsubscribe with
//!   opaque tokens). The core never touches DOM listeners directly.
//! - [`debounce`]: [`Debounce`], a cancellable scheduled task with an
//!   at-most-one-pending deadline, driven by host-supplied millisecond
//!   timestamps. Used to coalesce resize bursts into one recomputation.
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod bridge;
pub mod debounce;
pub mod metrics;

pub use bridge::{EventBridge, EventKind, SubscriptionToken};
pub use debounce::Debounce;
pub use metrics::{CoordinateService, DocumentMetrics, ElementMetrics, ScopeMode};
