// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Owners bound to subscriptions.
//!
//! A subscription never keeps its owner alive. At registration the registry
//! asks the owner for its [`Liveness`] handle (a weak reference) and stores
//! only that. Every delivery attempt upgrades the handle first; a failed
//! upgrade means the owner has been released elsewhere in the program and the
//! subscription is evicted.
//!
//! | Owner            | Stored handle        | Passed to callbacks |
//! |------------------|----------------------|---------------------|
//! | `Rc<O>`          | `rc::Weak<O>`        | `Rc<O>`             |
//! | `Arc<O>`         | `sync::Weak<O>`      | `Arc<O>`            |
//! | [`Lifeline`]     | [`LifelineWeak`]     | [`Lifeline`]        |
//! | [`Unowned`]      | [`Unowned`]          | [`Unowned`]         |
//!
//! [`Lifeline`]: crate::Lifeline
//! [`LifelineWeak`]: crate::LifelineWeak

use std::rc::{self, Rc};
use std::sync::{self, Arc};

/// Non-owning handle that can tell whether its referent is still alive.
pub trait Liveness: 'static {
    /// Strong handle produced by a successful upgrade.
    type Target;

    /// Returns a strong handle if the referent is alive, `None` otherwise.
    fn upgrade(&self) -> Option<Self::Target>;
}

/// An object that can anchor the lifetime of a subscription.
pub trait Owner {
    /// The weak form stored inside the registry.
    type Liveness: Liveness;

    /// Creates the weak handle for this owner.
    fn liveness(&self) -> Self::Liveness;
}

/// The strong owner handle a callback receives for an owner of type `W`.
pub type OwnerRef<W> = <<W as Owner>::Liveness as Liveness>::Target;

impl<O: ?Sized + 'static> Liveness for rc::Weak<O> {
    type Target = Rc<O>;

    fn upgrade(&self) -> Option<Rc<O>> {
        rc::Weak::upgrade(self)
    }
}

impl<O: ?Sized + 'static> Owner for Rc<O> {
    type Liveness = rc::Weak<O>;

    fn liveness(&self) -> rc::Weak<O> {
        Rc::downgrade(self)
    }
}

impl<O: ?Sized + 'static> Liveness for sync::Weak<O> {
    type Target = Arc<O>;

    fn upgrade(&self) -> Option<Arc<O>> {
        sync::Weak::upgrade(self)
    }
}

impl<O: ?Sized + 'static> Owner for Arc<O> {
    type Liveness = sync::Weak<O>;

    fn liveness(&self) -> sync::Weak<O> {
        Arc::downgrade(self)
    }
}

/// Owner for subscriptions that live as long as the registry itself.
///
/// An `Unowned` subscription is never evicted; it stops receiving values only
/// when the registry is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unowned;

impl Liveness for Unowned {
    type Target = Unowned;

    fn upgrade(&self) -> Option<Unowned> {
        Some(Unowned)
    }
}

impl Owner for Unowned {
    type Liveness = Unowned;

    fn liveness(&self) -> Unowned {
        Unowned
    }
}
