//! Subscription handle for cart observers.
//!
//! The display layer is a subscriber, not an intrinsic part of the store: it
//! receives a fresh [`CartView`](crate::CartView) after every committed
//! mutation and re-renders from that. Delivery is best-effort fan-out over
//! in-process channels; a dropped subscriber is pruned on the next publish.

use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to the cart's committed state changes.
///
/// Each subscription gets a copy of every view published after it was created
/// (broadcast semantics). Designed for single-threaded consumption: one
/// subscription per consumer.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}
