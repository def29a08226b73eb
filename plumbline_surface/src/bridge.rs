// Copyright 2026 the Plumbline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event-subscription seam toward the host environment.
//!
//! The host owns a cross-environment event facility (the original stack's
//! `Event.js`): it normalizes events, injects the originating element into
//! listeners, and knows how to prevent defaults and stop bubbling. The core
//! needs none of that detail — only the ability to register interest in an
//! event stream and to pair every registration with exactly one removal.
//!
//! [`EventBridge`] is that contract. Tokens are opaque handles minted by the
//! host; the core stores them and hands them back on unsubscribe. The one
//! in-core consumer is the guide manager's ruler-unlock behavior, which must
//! hold at most one scroll subscription at a time.

/// Opaque handle for one event subscription, minted by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
    /// Wraps a host-chosen identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-chosen identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Event streams the core may subscribe to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// Pointer pressed.
    PointerDown,
    /// Pointer moved.
    PointerMove,
    /// Pointer released.
    PointerUp,
    /// Pointer entered an overlay element.
    PointerOver,
    /// Pointer left an overlay element.
    PointerOut,
    /// Key released.
    KeyUp,
    /// The tracked surface scrolled.
    Scroll,
    /// The viewport resized.
    Resize,
}

/// Subscribe/unsubscribe contract implemented by the host.
///
/// Implementations deliver events back into the core through whatever entry
/// points they wire up (typically the per-event methods on an overlay
/// instance); this trait only manages registration lifetime.
/// Subscribe and unsubscribe must pair 1:1 — the core never unsubscribes a
/// token twice and expects the host not to coalesce registrations.
pub trait EventBridge {
    /// Registers interest in `kind`; `capture` selects the capture phase
    /// where the host environment distinguishes one.
    fn subscribe(&mut self, kind: EventKind, capture: bool) -> SubscriptionToken;

    /// Removes a registration previously returned by
    /// [`subscribe`](Self::subscribe).
    fn unsubscribe(&mut self, kind: EventKind, token: SubscriptionToken, capture: bool);
}

#[cfg(test)]
mod tests {
    use super::{EventBridge, EventKind, SubscriptionToken};

    /// Minimal host double: counts live registrations per kind.
    #[derive(Default)]
    struct Recorder {
        next: u64,
        live_scroll: i32,
    }

    impl EventBridge for Recorder {
        fn subscribe(&mut self, kind: EventKind, _capture: bool) -> SubscriptionToken {
            if kind == EventKind::Scroll {
                self.live_scroll += 1;
            }
            self.next += 1;
            SubscriptionToken::new(self.next)
        }

        fn unsubscribe(&mut self, kind: EventKind, _token: SubscriptionToken, _capture: bool) {
            if kind == EventKind::Scroll {
                self.live_scroll -= 1;
            }
        }
    }

    #[test]
    fn tokens_are_distinct_and_round_trip() {
        let mut host = Recorder::default();
        let a = host.subscribe(EventKind::Scroll, false);
        let b = host.subscribe(EventKind::Scroll, false);
        assert_ne!(a, b);
        assert_eq!(host.live_scroll, 2);

        host.unsubscribe(EventKind::Scroll, a, false);
        host.unsubscribe(EventKind::Scroll, b, false);
        assert_eq!(host.live_scroll, 0);
    }
}
