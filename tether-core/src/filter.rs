// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-subscription value filters.
//!
//! A [`Filter`] runs once per broadcast for each live subscription and decides
//! whether the value reaches the callback, and in what shape. Filter state is
//! owned by the subscription: two subscriptions using the same kind of filter
//! on the same registry never share memory.
//!
//! - [`Identity`] passes every value through unchanged.
//! - [`Distinct`] projects each value to a sub-value and fires only when the
//!   projection differs from the last one this subscription delivered.
//! - [`from_fn`] adapts an arbitrary `FnMut(&V) -> Option<T>`.

/// Decides whether, and as what, a broadcast value reaches one subscriber.
pub trait Filter<V>: 'static {
    /// What the subscriber's callback receives.
    type Output;

    /// Returns `None` to suppress delivery for this broadcast.
    fn apply(&mut self, value: &V) -> Option<Self::Output>;
}

/// Delivers every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<V: Clone> Filter<V> for Identity {
    type Output = V;

    fn apply(&mut self, value: &V) -> Option<V> {
        Some(value.clone())
    }
}

/// Delivers a projected sub-value only when it changes.
///
/// The first value is always delivered. After that, a value is delivered only
/// if its projection is not equal to the previously delivered projection, so
/// changes elsewhere in the value are ignored.
///
/// ```
/// use tether_core::filter::{Distinct, Filter};
///
/// let mut first = Distinct::new(|pair: &(i32, i32)| pair.0);
/// assert_eq!(first.apply(&(1, 12)), Some(1));
/// assert_eq!(first.apply(&(1, -8)), None);
/// assert_eq!(first.apply(&(7, -8)), Some(7));
/// ```
pub struct Distinct<F, T> {
    project: F,
    previous: Option<T>,
}

impl<F, T> Distinct<F, T> {
    #[must_use]
    pub const fn new(project: F) -> Self {
        Self {
            project,
            previous: None,
        }
    }

    /// The last projection delivered through this filter.
    #[must_use]
    pub const fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }
}

impl<V, T, F> Filter<V> for Distinct<F, T>
where
    F: FnMut(&V) -> T + 'static,
    T: PartialEq + Clone + 'static,
{
    type Output = T;

    fn apply(&mut self, value: &V) -> Option<T> {
        let current = (self.project)(value);
        if self.previous.as_ref() == Some(&current) {
            return None;
        }
        self.previous = Some(current.clone());
        Some(current)
    }
}

/// Filter built from a closure. See [`from_fn`].
pub struct FromFn<F>(F);

/// Wraps a closure returning `Option<T>` as a [`Filter`].
///
/// ```
/// use tether_core::filter::{from_fn, Filter};
///
/// let mut evens = from_fn(|n: &i32| (n % 2 == 0).then_some(*n));
/// assert_eq!(evens.apply(&3), None);
/// assert_eq!(evens.apply(&4), Some(4));
/// ```
pub const fn from_fn<F>(filter: F) -> FromFn<F> {
    FromFn(filter)
}

impl<V, T, F> Filter<V> for FromFn<F>
where
    F: FnMut(&V) -> Option<T> + 'static,
{
    type Output = T;

    fn apply(&mut self, value: &V) -> Option<T> {
        (self.0)(value)
    }
}
