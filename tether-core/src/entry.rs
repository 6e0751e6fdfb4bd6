// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::filter::Filter;
use crate::owner::Liveness;

/// Outcome of one delivery attempt against one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delivery {
    /// Owner alive, filter passed, callback ran.
    Delivered,
    /// Owner alive, filter rejected the value.
    Suppressed,
    /// Owner gone; the entry must be dropped.
    Expired,
}

type DeliverFn<V> = Box<dyn FnMut(&V) -> Delivery>;

/// One subscription: a weak owner, its filter state and the callback.
///
/// The owner is upgraded only for the duration of a delivery; between
/// broadcasts the entry holds nothing but the weak handle.
pub(crate) struct DeliveryEntry<V> {
    deliver: DeliverFn<V>,
}

impl<V: 'static> DeliveryEntry<V> {
    pub(crate) fn new<L, F, C>(liveness: L, mut filter: F, mut callback: C) -> Self
    where
        L: Liveness,
        F: Filter<V>,
        C: FnMut(L::Target, F::Output) + 'static,
    {
        Self {
            deliver: Box::new(move |value: &V| {
                let Some(owner) = liveness.upgrade() else {
                    return Delivery::Expired;
                };
                match filter.apply(value) {
                    Some(projected) => {
                        callback(owner, projected);
                        Delivery::Delivered
                    }
                    None => Delivery::Suppressed,
                }
            }),
        }
    }

    pub(crate) fn deliver(&mut self, value: &V) -> Delivery {
        (self.deliver)(value)
    }
}
