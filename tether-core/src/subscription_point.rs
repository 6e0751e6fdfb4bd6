// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::filter::{Distinct, Filter, Identity};
use crate::owner::{Owner, OwnerRef};
use crate::registry::WeakRegistry;
use std::fmt;

/// The place where observers attach.
///
/// A `SubscriptionPoint` can register subscriptions but cannot broadcast, so
/// it can be handed to consumers without giving them producer rights. Clones
/// are cheap and refer to the same registry.
///
/// A point does not keep its registry alive: the registry lives exactly as
/// long as the property or signal that created it. Observing through a point
/// whose registry is gone registers nothing.
///
/// Every `observe*` call binds the subscription to an [`Owner`]. The registry
/// keeps only a weak handle; once the owner is released the subscription stops
/// firing and is removed on the next broadcast.
pub struct SubscriptionPoint<V> {
    registry: WeakRegistry<V>,
}

impl<V: Clone + 'static> SubscriptionPoint<V> {
    pub(crate) fn new(registry: WeakRegistry<V>) -> Self {
        Self { registry }
    }

    /// Calls `on_each` with every value the source produces.
    ///
    /// # Example
    ///
    /// ```
    /// use tether_core::{SubscriptionRegistry, Unowned};
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let registry = SubscriptionRegistry::<&'static str>::transient();
    /// let seen = Rc::new(RefCell::new(Vec::new()));
    ///
    /// let sink = seen.clone();
    /// registry
    ///     .point()
    ///     .observe(&Unowned, move |_, value| sink.borrow_mut().push(value));
    ///
    /// registry.broadcast("ping");
    /// assert_eq!(*seen.borrow(), vec!["ping"]);
    /// ```
    pub fn observe<W, C>(&self, owner: &W, on_each: C)
    where
        W: Owner,
        C: FnMut(OwnerRef<W>, V) + 'static,
    {
        self.observe_with(owner, Identity, on_each);
    }

    /// Calls `on_change` with `project(value)` whenever that projection
    /// differs from the one this subscription last received.
    ///
    /// The first value is always delivered. Changes to the value that leave
    /// the projection untouched are ignored.
    pub fn observe_distinct<W, T, P, C>(&self, owner: &W, project: P, on_change: C)
    where
        W: Owner,
        T: PartialEq + Clone + 'static,
        P: Fn(&V) -> T + 'static,
        C: FnMut(OwnerRef<W>, T) + 'static,
    {
        self.observe_with(owner, Distinct::new(project), on_change);
    }

    /// Registers a subscription with a custom [`Filter`].
    pub fn observe_with<W, F, C>(&self, owner: &W, filter: F, callback: C)
    where
        W: Owner,
        F: Filter<V>,
        C: FnMut(OwnerRef<W>, F::Output) + 'static,
    {
        match self.registry.upgrade() {
            Some(registry) => registry.subscribe(owner, filter, callback),
            None => {
                debug!("observe on a dropped registry ignored");
            }
        }
    }

    /// See [`SubscriptionRegistry::subscriber_count`](crate::SubscriptionRegistry::subscriber_count).
    ///
    /// Zero once the registry is gone.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry
            .upgrade()
            .map_or(0, |registry| registry.subscriber_count())
    }

    /// Returns `true` if new observers immediately receive the current value.
    #[must_use]
    pub fn replays(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.replays())
    }

    /// Returns `true` while the property or signal behind this point exists.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.registry.is_alive()
    }
}

impl<V> Clone for SubscriptionPoint<V> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<V> fmt::Debug for SubscriptionPoint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionPoint")
            .field("connected", &self.registry.is_alive())
            .finish()
    }
}
