//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] decouples the contact-message write path from the email
//! notification side effect. It is designed to be shared via `Arc<EventBus>`
//! across the application.

use folio_core::types::Timestamp;
use serde::Serialize;
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// ContactEvent
// ---------------------------------------------------------------------------

/// A contact-form submission that has been durably stored.
///
/// Carries the submitted field values exactly as stored; any formatting for
/// the outbound email happens downstream in [`compose`](crate::compose).
#[derive(Debug, Clone, Serialize)]
pub struct ContactEvent {
    /// Submitted sender name.
    pub name: String,
    /// Submitted sender email address.
    pub email: String,
    /// Submitted message text, line breaks intact.
    pub message: String,
    /// When the event was published (UTC).
    pub timestamp: Timestamp,
}

impl ContactEvent {
    /// Create an event from the stored submission fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`ContactEvent`].
pub struct EventBus {
    sender: broadcast::Sender<ContactEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Fire-and-forget: if there are no active subscribers (email delivery
    /// not configured) the event is silently dropped.
    pub fn publish(&self, event: ContactEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ContactEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
