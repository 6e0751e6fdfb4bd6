// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observable value container.
//!
//! A [`Property`] couples a value with a replaying registry: every observer
//! gets the current value synchronously inside `observe`, then each value
//! written afterwards.
//!
//! ## Characteristics
//!
//! - **Replaying**: late observers start from the current value.
//! - **Synchronous**: `set` returns after every live observer has run.
//! - **Re-entrant**: the value is not borrowed while observers run, so an
//!   observer may read the property or write to it again.
//! - **Single-threaded**: neither `Send` nor `Sync`.

use std::cell::RefCell;
use std::fmt;
use tether_core::{SubscriptionPoint, SubscriptionRegistry};

/// Observable value container.
///
/// ```
/// use tether::{Property, Unowned};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let property = Property::new(5);
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = seen.clone();
/// property
///     .point()
///     .observe(&Unowned, move |_, value| sink.borrow_mut().push(value));
///
/// property.set(17);
/// property.update(|value| *value += 1);
///
/// assert_eq!(property.get(), 18);
/// assert_eq!(*seen.borrow(), vec![5, 17, 18]);
/// ```
pub struct Property<V> {
    value: RefCell<V>,
    registry: SubscriptionRegistry<V>,
}

impl<V: Clone + 'static> Property<V> {
    #[must_use]
    pub fn new(initial: V) -> Self {
        Self {
            registry: SubscriptionRegistry::replaying(initial.clone()),
            value: RefCell::new(initial),
        }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> V {
        self.value.borrow().clone()
    }

    /// Runs `f` with a reference to the current value.
    ///
    /// # Panics
    ///
    /// Panics if `f` writes to this same property.
    pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Stores `value`, then delivers it to every live observer.
    pub fn set(&self, value: V) {
        self.replace(value);
    }

    /// Stores `value`, delivers it, and returns the previous value.
    pub fn replace(&self, value: V) -> V {
        let previous = self.value.replace(value.clone());
        self.registry.broadcast(value);
        previous
    }

    /// Mutates the value in place, then delivers the result.
    ///
    /// Observers are notified even if `f` leaves the value unchanged;
    /// `observe_distinct` is the way to react to actual changes only.
    ///
    /// # Panics
    ///
    /// Panics if `f` reads or writes this same property.
    pub fn update(&self, f: impl FnOnce(&mut V)) {
        let value = {
            let mut current = self.value.borrow_mut();
            f(&mut current);
            current.clone()
        };
        self.registry.broadcast(value);
    }

    /// The place where observers attach.
    #[must_use]
    pub fn point(&self) -> SubscriptionPoint<V> {
        self.registry.point()
    }
}

impl<V: Clone + Default + 'static> Default for Property<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V: fmt::Debug> fmt::Debug for Property<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.borrow())
            .field("registry", &self.registry)
            .finish()
    }
}
