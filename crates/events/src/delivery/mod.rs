//! Delivery channels for composed notification emails.

pub mod email;

use crate::compose::ComposedEmail;
use crate::delivery::email::EmailError;

/// A channel that can transmit a composed email.
///
/// The production implementation is [`EmailDelivery`](email::EmailDelivery)
/// over SMTP; tests substitute a recording mock.
#[async_trait::async_trait]
pub trait NotificationDelivery: Send + Sync {
    /// Transmit the email, returning a delivery error on failure.
    async fn deliver(&self, email: &ComposedEmail) -> Result<(), EmailError>;
}
