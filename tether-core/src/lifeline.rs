// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::owner::{Liveness, Owner};
use std::fmt;
use std::rc::{self, Rc};

/// A standalone owner token.
///
/// Useful when the code that subscribes is not itself held in an `Rc`: keep a
/// `Lifeline` next to whatever state the callbacks touch, anchor the
/// subscriptions to it, and drop it to end them all. Clones share one control
/// block; subscriptions expire once the last clone is gone.
///
/// ```
/// use tether_core::{Lifeline, SubscriptionRegistry};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let registry = SubscriptionRegistry::<u32>::transient();
/// let hits = Rc::new(Cell::new(0));
/// let lifeline = Lifeline::new();
///
/// let counter = hits.clone();
/// registry.point().observe(&lifeline, move |_, _| counter.set(counter.get() + 1));
///
/// registry.broadcast(1);
/// drop(lifeline);
/// registry.broadcast(2);
/// assert_eq!(hits.get(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Lifeline {
    anchor: Rc<()>,
}

impl Lifeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a weak handle to this lifeline's control block.
    #[must_use]
    pub fn downgrade(&self) -> LifelineWeak {
        LifelineWeak {
            anchor: Rc::downgrade(&self.anchor),
        }
    }

    /// Returns `true` if other clones of this lifeline exist.
    ///
    /// Upgraded handles passed to running callbacks count as clones.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        Rc::strong_count(&self.anchor) > 1
    }
}

impl fmt::Debug for Lifeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifeline")
            .field("strong", &Rc::strong_count(&self.anchor))
            .finish()
    }
}

impl Owner for Lifeline {
    type Liveness = LifelineWeak;

    fn liveness(&self) -> LifelineWeak {
        self.downgrade()
    }
}

/// Weak handle to a [`Lifeline`].
#[derive(Clone)]
pub struct LifelineWeak {
    anchor: rc::Weak<()>,
}

impl LifelineWeak {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.anchor.strong_count() > 0
    }
}

impl fmt::Debug for LifelineWeak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifelineWeak")
            .field("alive", &self.is_alive())
            .finish()
    }
}

impl Liveness for LifelineWeak {
    type Target = Lifeline;

    fn upgrade(&self) -> Option<Lifeline> {
        self.anchor.upgrade().map(|anchor| Lifeline { anchor })
    }
}
