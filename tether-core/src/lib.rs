// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Owner-bound subscription registry.
//!
//! `tether-core` is the engine behind `tether`'s `Property` and `Signal`: a
//! registry of subscriptions whose lifetime is tied to an external owner
//! object instead of an explicit unsubscribe call.
//!
//! ## Architecture
//!
//! ```text
//!   producer                         consumers
//!      │                                 │
//!      │ broadcast(v)            observe(owner, ..)
//!      ▼                                 ▼
//! ┌───────────────────────┐      ┌───────────────────┐
//! │ SubscriptionRegistry  │◄─────│ SubscriptionPoint │
//! │  id → DeliveryEntry   │      └───────────────────┘
//! │  last (replay only)   │
//! └──────────┬────────────┘
//!            ▼ per entry
//!   owner.upgrade()? ── no ──► evict
//!            │ yes
//!   filter.apply(&v)? ── None ──► skip
//!            │ Some(t)
//!   callback(owner, t)
//! ```
//!
//! ## Key types
//!
//! | Type                     | Role                                               |
//! |--------------------------|----------------------------------------------------|
//! | [`SubscriptionRegistry`] | Owns the subscriptions, broadcasts, replays        |
//! | [`SubscriptionPoint`]    | Consumer handle: `observe`, `observe_distinct`     |
//! | [`Sender`]               | Detached producer handle, weakly bound             |
//! | [`Owner`] / [`Liveness`] | What a subscription is tied to, and its weak form  |
//! | [`Lifeline`]             | Standalone owner token                             |
//! | [`filter::Filter`]       | Per-subscription delivery decision                 |
//!
//! ## Optional features
//!
//! - `tracing`: emits `debug`/`trace` events for registration, replay,
//!   eviction and broadcast passes.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

mod entry;
pub mod error;
pub mod filter;
pub mod lifeline;
pub mod owner;
pub mod registry;
pub mod sender;
pub mod subscription_point;

pub use self::error::SendError;
pub use self::lifeline::{Lifeline, LifelineWeak};
pub use self::owner::{Liveness, Owner, OwnerRef, Unowned};
pub use self::registry::{SubscriptionRegistry, WeakRegistry};
pub use self::sender::Sender;
pub use self::subscription_point::SubscriptionPoint;
