use folio_contact::{ContactEmail, ContactError, ContactSubmission};

use crate::Email;

/// Fixed addressing for relayed contact submissions.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// Authenticated SMTP account; providers reject any other sender.
    pub sender: String,
    pub recipient: String,
}

pub fn contact_email(
    submission: &ContactSubmission,
    envelope: &Envelope,
) -> Result<Email, ContactError> {
    let rendered = ContactEmail::render(submission)?;

    Ok(Email {
        from_name: Some(rendered.sender_name),
        from: envelope.sender.to_owned(),
        to: envelope.recipient.to_owned(),
        reply_to: Some(rendered.reply_to),
        subject: rendered.subject,
        text: rendered.text,
        html: rendered.html,
    })
}
