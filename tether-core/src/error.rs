// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for tether.
//!
//! Registering, broadcasting, setting and sending are total: a subscription
//! whose owner is gone is evicted, not reported. The one fallible operation is
//! sending through a detached [`Sender`](crate::Sender) after the broadcaster
//! it was created from has been dropped.

/// Returned by [`Sender::send`](crate::Sender::send) when the broadcaster is gone.
///
/// Carries the value that could not be delivered.
///
/// ```
/// use tether_core::SendError;
///
/// let err = SendError(7);
/// assert_eq!(err.to_string(), "Send failed: signal dropped");
/// assert_eq!(err.into_inner(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Send failed: signal dropped")]
pub struct SendError<V>(pub V);

impl<V> SendError<V> {
    /// Recovers the undelivered value.
    pub fn into_inner(self) -> V {
        self.0
    }
}
