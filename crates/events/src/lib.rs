//! Contact-notification pipeline for the portfolio backend.
//!
//! Building blocks:
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`. The API handler publishes a [`ContactEvent`]
//!   after a contact message has been durably stored.
//! - [`compose`] — pure assembly of the notification email (subject and
//!   HTML body) from a contact event.
//! - [`NotificationDispatcher`] — long-lived background task that subscribes
//!   to the bus and drives each event to a terminal state (delivered or
//!   failed) through a [`NotificationDelivery`] channel.
//! - [`delivery`] — the SMTP delivery channel (`lettre`).

pub mod bus;
pub mod compose;
pub mod delivery;
pub mod dispatcher;

pub use bus::{ContactEvent, EventBus};
pub use compose::{compose_contact_notification, ComposedEmail};
pub use delivery::email::{EmailConfig, EmailDelivery, EmailError};
pub use delivery::NotificationDelivery;
pub use dispatcher::NotificationDispatcher;
