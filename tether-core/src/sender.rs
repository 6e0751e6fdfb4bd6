// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::SendError;
use crate::registry::WeakRegistry;
use std::fmt;

/// Producer-only handle to a broadcaster.
///
/// A `Sender` can broadcast but cannot subscribe, and does not keep the
/// broadcaster alive: once the owning registry is dropped, [`send`](Self::send)
/// hands the value back in a [`SendError`].
pub struct Sender<V> {
    registry: WeakRegistry<V>,
}

impl<V: Clone + 'static> Sender<V> {
    #[must_use]
    pub fn new(registry: WeakRegistry<V>) -> Self {
        Self { registry }
    }

    /// Broadcasts `value` to every live subscriber.
    ///
    /// # Errors
    ///
    /// Returns `SendError(value)` if the broadcaster has been dropped.
    pub fn send(&self, value: V) -> Result<(), SendError<V>> {
        match self.registry.upgrade() {
            Some(registry) => {
                registry.broadcast(value);
                Ok(())
            }
            None => {
                debug!("send on disconnected sender dropped a value");
                Err(SendError(value))
            }
        }
    }

    /// Returns `true` while the broadcaster is alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.registry.is_alive()
    }
}

impl<V> Clone for Sender<V> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<V> fmt::Debug for Sender<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender")
            .field("connected", &self.registry.is_alive())
            .finish()
    }
}
