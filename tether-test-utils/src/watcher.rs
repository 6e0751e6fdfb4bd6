// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::rc::Rc;

/// An owner object for subscriptions. Carries a name for readable failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watcher {
    pub name: String,
}

impl Watcher {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// A watcher behind an `Rc`, ready to be passed as a subscription owner.
    #[must_use]
    pub fn shared(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::new(name))
    }
}
