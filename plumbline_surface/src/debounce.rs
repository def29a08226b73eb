// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deadline-based debouncing without a timer.
//!
//! The core has no clock and schedules no tasks; the host supplies a
//! monotonic millisecond timestamp with each event and polls for expiry.
//! [`Debounce`] keeps at most one pending deadline: scheduling while pending
//! replaces the deadline rather than stacking a second one, so a burst of
//! resize events collapses into a single recomputation delay-ms after the
//! last event.
//!
//! ## Minimal example
//!
//! ```
//! use plumbline_surface::Debounce;
//!
//! let mut d = Debounce::new(100);
//! d.schedule(0);
//! d.schedule(40); // burst continues; deadline moves to 140
//!
//! assert!(!d.fire(100));
//! assert!(d.fire(140));
//! assert!(!d.fire(200)); // already fired; nothing pending
//! ```

/// A cancellable scheduled task with an at-most-one-pending invariant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    /// Creates a debouncer that fires `delay_ms` after the last schedule.
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Schedules (or re-schedules) the deadline at `now_ms + delay`.
    pub fn schedule(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The configured delay in milliseconds.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}
