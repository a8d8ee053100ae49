//! Assembly of the contact-notification email.
//!
//! Pure functions only; actual transmission lives in
//! [`delivery`](crate::delivery).

use crate::bus::ContactEvent;

/// A fully composed email, ready to hand to a delivery channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedEmail {
    /// RFC 5322 "From" address.
    pub from: String,
    /// Destination address (the site owner).
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

/// Compose the notification email for a contact-form submission.
///
/// Line breaks in the message text are converted to `<br>` so the body
/// renders as submitted. No other escaping is applied: by contract the
/// submitted content is rendered as-is into the HTML.
pub fn compose_contact_notification(from: &str, to: &str, event: &ContactEvent) -> ComposedEmail {
    let subject = format!("New Contact Form Message from {}", event.name);
    let html = format!(
        "<h2>New Contact Form Submission</h2>\n\
         <p><strong>From:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n\
         <hr>\n\
         <p><em>Sent from your portfolio contact form</em></p>",
        event.name,
        event.email,
        event.message.replace('\n', "<br>"),
    );

    ComposedEmail {
        from: from.to_string(),
        to: to.to_string(),
        subject,
        html,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
