//! Background contact-notification dispatcher.
//!
//! [`NotificationDispatcher`] subscribes to the
//! [`EventBus`](crate::bus::EventBus) broadcast channel and, for every
//! [`ContactEvent`], composes the notification email and hands it to a
//! [`NotificationDelivery`] channel. It runs as a long-lived background task
//! and shuts down gracefully when the bus sender is dropped.
//!
//! Each event runs to a terminal state: delivered, or failed. A failure is
//! logged for operator visibility and never propagates to the request that
//! published the event — the submitter has already been answered, and the
//! stored message is unaffected either way.

use tokio::sync::broadcast;

use crate::bus::ContactEvent;
use crate::compose::compose_contact_notification;
use crate::delivery::NotificationDelivery;

/// Background task that emails the site owner about new contact messages.
pub struct NotificationDispatcher<D: NotificationDelivery> {
    delivery: D,
    from: String,
    to: String,
}

impl<D: NotificationDelivery> NotificationDispatcher<D> {
    /// Create a dispatcher with fixed sender and destination addresses.
    pub fn new(delivery: D, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            delivery,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Run the dispatch loop.
    ///
    /// Receives events via the provided `receiver` and dispatches each one.
    /// The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](crate::bus::EventBus) is dropped). There is no
    /// caller-initiated cancellation; an event picked up before shutdown
    /// still runs to its terminal state.
    pub async fn run(self, mut receiver: broadcast::Receiver<ContactEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.dispatch(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        skipped = n,
                        "Notification dispatcher lagged, some notifications were not sent"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification dispatcher shutting down");
                    break;
                }
            }
        }
    }

    /// Compose and deliver the notification for one event.
    async fn dispatch(&self, event: &ContactEvent) {
        tracing::debug!(name = %event.name, "Dispatching contact notification");

        let email = compose_contact_notification(&self.from, &self.to, event);
        match self.delivery.deliver(&email).await {
            Ok(()) => {
                tracing::info!(name = %event.name, "Contact notification delivered");
            }
            Err(e) => {
                // Best-effort: the message is already stored, no retry here.
                tracing::error!(error = %e, name = %event.name, "Contact notification failed");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
