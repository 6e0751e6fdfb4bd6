// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observable event broadcaster.
//!
//! A [`Signal`] keeps no value. Observers receive only events sent after they
//! subscribed; sending with nobody listening is a no-op.
//!
//! Producers and consumers can be given separate, narrower handles:
//! [`Signal::sender`] can only send, [`Signal::point`] can only observe.
//!
//! ```text
//!  Sender ──send──► Signal ──broadcast──► SubscriptionPoint observers
//!  (weak)           (owns registry)
//! ```

use std::fmt;
use tether_core::{Sender, SubscriptionPoint, SubscriptionRegistry};

/// Observable event broadcaster.
///
/// ```
/// use tether::{Lifeline, Signal};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let signal = Signal::new();
/// signal.send("lost: nobody is listening yet");
///
/// let lifeline = Lifeline::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = seen.clone();
/// signal
///     .point()
///     .observe(&lifeline, move |_, event| sink.borrow_mut().push(event));
///
/// signal.send("delivered");
/// assert_eq!(*seen.borrow(), vec!["delivered"]);
/// ```
pub struct Signal<V> {
    registry: SubscriptionRegistry<V>,
}

impl<V: Clone + 'static> Signal<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: SubscriptionRegistry::transient(),
        }
    }

    /// Delivers `value` to every live observer.
    pub fn send(&self, value: V) {
        self.registry.broadcast(value);
    }

    /// The place where observers attach.
    #[must_use]
    pub fn point(&self) -> SubscriptionPoint<V> {
        self.registry.point()
    }

    /// A send-only handle that does not keep this signal alive.
    #[must_use]
    pub fn sender(&self) -> Sender<V> {
        Sender::new(self.registry.downgrade())
    }
}

impl<V: Clone + 'static> Default for Signal<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Signal<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("registry", &self.registry)
            .finish()
    }
}
