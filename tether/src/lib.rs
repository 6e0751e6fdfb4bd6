// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Tether
//!
//! Observable values and event signals whose subscriptions are tied to the
//! lifetime of an owner object.
//!
//! ## Overview
//!
//! - [`Property<V>`] holds a value. Observers receive the current value as
//!   soon as they subscribe, then every new value.
//! - [`Signal<V>`] holds nothing. Observers receive only what is sent after
//!   they subscribe.
//!
//! Both expose a [`SubscriptionPoint`] through `point()`. Every observation is
//! bound to an owner (`Rc<T>`, `Arc<T>`, [`Lifeline`] or [`Unowned`]); the
//! subscription holds it weakly and silently goes away once the owner is
//! released. There is no unsubscribe call.
//!
//! ## Quick Start
//!
//! ```rust
//! use tether::{Property, Signal};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! struct Screen {
//!     log: RefCell<Vec<String>>,
//! }
//!
//! let volume = Property::new(5);
//! let clicks = Signal::<u32>::new();
//! let screen = Rc::new(Screen { log: RefCell::new(Vec::new()) });
//!
//! volume.point().observe(&screen, |screen, v| {
//!     screen.log.borrow_mut().push(format!("volume {v}"));
//! });
//! clicks.point().observe(&screen, |screen, n| {
//!     screen.log.borrow_mut().push(format!("click {n}"));
//! });
//!
//! volume.set(7);
//! clicks.send(1);
//!
//! assert_eq!(
//!     *screen.log.borrow(),
//!     vec!["volume 5", "volume 7", "click 1"]
//! );
//! ```
//!
//! ## Optional features
//!
//! - `tracing`: forwards to `tether-core/tracing`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod property;
pub mod signal;

pub use property::Property;
pub use signal::Signal;

// Re-export core types
pub use tether_core::filter::{self, Filter};
pub use tether_core::{
    Lifeline, LifelineWeak, Liveness, Owner, OwnerRef, SendError, Sender, SubscriptionPoint,
    Unowned,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Lifeline, Property, Signal, Unowned};
    pub use tether_core::{Sender, SubscriptionPoint};
}
