//! Flash message channel
//!
//! An explicit publish/subscribe channel for transient UI
//! notifications, passed to whichever component renders them. The
//! emitter never knows who is listening; the renderer owns its own
//! removal timing.

use tokio::sync::broadcast;

/// A transient UI notification
#[derive(Debug, Clone, PartialEq)]
pub struct FlashMessage {
    pub text: String,
}

impl FlashMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Broadcast bus for flash messages
#[derive(Debug, Clone)]
pub struct FlashBus {
    tx: broadcast::Sender<FlashMessage>,
}

impl FlashBus {
    /// Create a bus buffering up to `capacity` undelivered messages per subscriber
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a message to all current subscribers
    ///
    /// Returns the number of subscribers that received it; zero when
    /// nobody is listening, which is not an error.
    pub fn publish(&self, message: FlashMessage) -> usize {
        self.tx.send(message).unwrap_or(0)
    }

    /// Subscribe to subsequent messages
    pub fn subscribe(&self) -> broadcast::Receiver<FlashMessage> {
        self.tx.subscribe()
    }
}

impl Default for FlashBus {
    fn default() -> Self {
        Self::new(16)
    }
}
