// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for tether.
//!
//! Designed for use in tests and benchmarks only, not for production code.
//! The crate has no dependency on `tether-core`, so every crate in the
//! workspace can use it as a dev-dependency.
//!
//! # Key Types
//!
//! - [`Recorder`]: shared, cloneable log of delivered values, with a
//!   [`sink`](Recorder::sink) that plugs straight into `observe`.
//! - [`Watcher`]: a plain owner object to anchor subscriptions to.
//! - [`Pair`]: a two-field value for sub-value observation tests.
//!
//! # Example
//!
//! ```rust
//! use tether_test_utils::{Recorder, Watcher};
//!
//! let recorder = Recorder::new();
//! let watcher = Watcher::shared("first");
//!
//! let mut sink = recorder.sink();
//! sink(watcher.clone(), 17);
//! sink(watcher, 42);
//!
//! assert_eq!(recorder.values(), vec![17, 42]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod pair;
pub mod recorder;
pub mod test_data;
pub mod watcher;

pub use pair::Pair;
pub use recorder::Recorder;
pub use watcher::Watcher;
