// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Cloneable log of values seen by a callback.
///
/// All clones append to the same log, so one clone can move into a callback
/// while the test keeps another for assertions.
pub struct Recorder<T> {
    values: Rc<RefCell<Vec<T>>>,
}

impl<T> Recorder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn push(&self, value: T) {
        self.values.borrow_mut().push(value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

impl<T: Clone> Recorder<T> {
    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.values.borrow().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.values.borrow().last().cloned()
    }
}

impl<T: 'static> Recorder<T> {
    /// A two-argument callback that ignores its first argument (the owner)
    /// and records the second.
    pub fn sink<O: 'static>(&self) -> impl FnMut(O, T) + 'static {
        let recorder = self.clone();
        move |_owner, value| recorder.push(value)
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: Rc::clone(&self.values),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Recorder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Recorder").field(&*self.values.borrow()).finish()
    }
}
