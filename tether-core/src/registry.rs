// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The subscription registry: one broadcaster, many owner-bound subscribers.
//!
//! ## Characteristics
//!
//! - **Synchronous**: `subscribe` and `broadcast` run every callback on the
//!   caller's stack before returning. Nothing is queued.
//! - **Owner-bound**: each subscription holds a weak reference to its owner
//!   and is evicted the first time a delivery finds the owner gone.
//! - **Replaying or transient**: a replaying registry remembers the last value
//!   and hands it to every new subscriber inside `subscribe`; a transient one
//!   keeps no value at all.
//! - **Re-entrant**: no borrow of the registry is held while callbacks run, so
//!   a callback may subscribe or broadcast again.
//! - **Single-threaded**: state lives in `Rc<RefCell<..>>`; the registry is
//!   neither `Send` nor `Sync`.
//!
//! ## Delivery pass
//!
//! ```text
//! broadcast(v)
//!   ├─► snapshot ids registered right now
//!   ├─► for each id:
//!   │     ├─ check the entry out of the table (skip if already gone)
//!   │     ├─ owner dead?   ─► drop entry (evicted)
//!   │     ├─ filter(v) = None ─► check back in
//!   │     ├─ filter(v) = t ─► callback(owner, t)
//!   │     ├─ drain values deferred while the callback ran
//!   │     └─ check back in
//!   └─► replaying and no newer broadcast started? ─► last = v
//! ```
//!
//! Entries added while a pass is running are not in its snapshot and first
//! hear from the registry on the next broadcast. An entry whose callback is
//! running is checked out; a nested broadcast queues its value for that entry
//! instead of re-entering the callback, and the queue is drained in order as
//! soon as the callback returns.

use crate::entry::{Delivery, DeliveryEntry};
use crate::filter::Filter;
use crate::owner::{Liveness, Owner};
use crate::subscription_point::SubscriptionPoint;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::rc::{self, Rc};

struct RegistryState<V> {
    next_id: u64,
    generation: u64,
    entries: BTreeMap<u64, DeliveryEntry<V>>,
    // Values broadcast to an entry while it was checked out.
    deferred: BTreeMap<u64, VecDeque<V>>,
    last: Option<V>,
    replay: bool,
}

/// Owning side of a subscription registry.
///
/// Whoever holds the `SubscriptionRegistry` may broadcast. Consumers get a
/// [`SubscriptionPoint`] from [`point`](Self::point), which can subscribe but
/// not broadcast.
///
/// # Example
///
/// ```
/// use tether_core::SubscriptionRegistry;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let registry = SubscriptionRegistry::replaying(5);
/// let owner = Rc::new(());
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = seen.clone();
/// registry.point().observe(&owner, move |_, value| sink.borrow_mut().push(value));
///
/// registry.broadcast(17);
/// drop(owner);
/// registry.broadcast(42);
///
/// assert_eq!(*seen.borrow(), vec![5, 17]);
/// ```
pub struct SubscriptionRegistry<V> {
    state: Rc<RefCell<RegistryState<V>>>,
}

impl<V: Clone + 'static> SubscriptionRegistry<V> {
    /// Creates a registry that replays `initial`, and later the most recent
    /// broadcast value, to every new subscriber.
    #[must_use]
    pub fn replaying(initial: V) -> Self {
        Self::with_state(true, Some(initial))
    }

    /// Creates a registry that only delivers values broadcast after a
    /// subscriber registered. No value is ever retained.
    #[must_use]
    pub fn transient() -> Self {
        Self::with_state(false, None)
    }

    fn with_state(replay: bool, last: Option<V>) -> Self {
        Self {
            state: Rc::new(RefCell::new(RegistryState {
                next_id: 0,
                generation: 0,
                entries: BTreeMap::new(),
                deferred: BTreeMap::new(),
                last,
                replay,
            })),
        }
    }

    /// Registers a subscription bound to `owner`.
    ///
    /// Only a weak handle to `owner` is kept. When the registry replays and
    /// holds a value, the new subscription receives it before this returns.
    pub fn subscribe<W, F, C>(&self, owner: &W, filter: F, callback: C)
    where
        W: Owner,
        F: Filter<V>,
        C: FnMut(<W::Liveness as Liveness>::Target, F::Output) + 'static,
    {
        let entry = DeliveryEntry::new(owner.liveness(), filter, callback);
        let (id, replay) = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.entries.insert(id, entry);
            let replay = if state.replay { state.last.clone() } else { None };
            (id, replay)
        };
        debug!("registered subscription {}", id);

        if let Some(last) = replay {
            let outcome = self.deliver_to(id, &last);
            trace!("replayed last value to subscription {}: {:?}", id, outcome);
        }
    }

    /// Delivers `value` to every subscription registered when the call starts.
    ///
    /// Subscriptions whose owner has been released are removed instead. This
    /// never fails, including when nobody is subscribed.
    pub fn broadcast(&self, value: V) {
        let (ids, generation) = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            let ids: Vec<u64> = state.entries.keys().copied().collect();
            (ids, state.generation)
        };

        let mut evicted = 0usize;
        for &id in &ids {
            if self.deliver_to(id, &value) == Some(Delivery::Expired) {
                evicted += 1;
            }
        }
        trace!(
            "broadcast {} visited {} subscriptions, evicted {}",
            generation,
            ids.len(),
            evicted
        );

        let replaced = {
            let mut state = self.state.borrow_mut();
            // A nested broadcast from inside a callback already stored a newer value.
            if state.replay && state.generation == generation {
                state.last.replace(value)
            } else {
                None
            }
        };
        drop(replaced);
    }

    /// Returns the consumer-facing handle for this registry.
    #[must_use]
    pub fn point(&self) -> SubscriptionPoint<V> {
        SubscriptionPoint::new(self.downgrade())
    }

    /// Returns a handle that does not keep the registry alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakRegistry<V> {
        WeakRegistry {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Number of subscriptions in the table.
    ///
    /// Subscriptions whose owner is gone are only removed when a broadcast
    /// visits them, so this may include expired entries.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Returns `true` for registries created with [`replaying`](Self::replaying).
    #[must_use]
    pub fn replays(&self) -> bool {
        self.state.borrow().replay
    }

    /// Returns `true` if a value is stored for replay.
    #[must_use]
    pub fn has_last(&self) -> bool {
        self.state.borrow().last.is_some()
    }

    /// Runs one delivery attempt against a single entry.
    ///
    /// Returns `None` if the entry is not in the table. An entry evicted by an
    /// earlier pass is skipped; an entry checked out by a delivery further up
    /// the stack gets `value` queued and receives it once its callback returns.
    fn deliver_to(&self, id: u64, value: &V) -> Option<Delivery> {
        let checked_out = {
            let mut state = self.state.borrow_mut();
            let entry = state.entries.remove(&id);
            if entry.is_some() {
                state.deferred.insert(id, VecDeque::new());
            } else if let Some(queue) = state.deferred.get_mut(&id) {
                queue.push_back(value.clone());
                trace!("deferred value for running subscription {}", id);
            }
            entry
        };
        let mut entry = checked_out?;

        let mut outcome = entry.deliver(value);
        while outcome != Delivery::Expired {
            let next = self
                .state
                .borrow_mut()
                .deferred
                .get_mut(&id)
                .and_then(VecDeque::pop_front);
            let Some(deferred) = next else {
                break;
            };
            outcome = entry.deliver(&deferred);
        }

        let mut state = self.state.borrow_mut();
        let leftover = state.deferred.remove(&id);
        if outcome == Delivery::Expired {
            drop(state);
            debug!("evicted subscription {}: owner released", id);
            drop(entry);
            drop(leftover);
        } else {
            state.entries.insert(id, entry);
        }
        Some(outcome)
    }
}

impl<V> fmt::Debug for SubscriptionRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("SubscriptionRegistry")
            .field("subscribers", &state.entries.len())
            .field("replay", &state.replay)
            .field("has_last", &state.last.is_some())
            .finish()
    }
}

/// Weak counterpart of [`SubscriptionRegistry`].
pub struct WeakRegistry<V> {
    state: rc::Weak<RefCell<RegistryState<V>>>,
}

impl<V> WeakRegistry<V> {
    /// Returns the registry if something still owns it.
    #[must_use]
    pub fn upgrade(&self) -> Option<SubscriptionRegistry<V>> {
        self.state
            .upgrade()
            .map(|state| SubscriptionRegistry { state })
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state.strong_count() > 0
    }
}

impl<V> Clone for WeakRegistry<V> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<V> fmt::Debug for WeakRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakRegistry")
            .field("alive", &self.is_alive())
            .finish()
    }
}
