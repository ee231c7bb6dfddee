use askama::Template;

use crate::{ContactError, ContactSubmission};

pub const SUBJECT_PREFIX: &str = "Novo Contato do Portfólio";

#[derive(Template)]
#[template(path = "emails/contact.html")]
struct ContactHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "emails/contact.txt")]
struct ContactTextTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Rendered contact notification, independent of any transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEmail {
    pub sender_name: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl ContactEmail {
    pub fn render(submission: &ContactSubmission) -> Result<Self, ContactError> {
        let html = ContactHtmlTemplate {
            name: submission.name(),
            email: submission.email(),
            lines: message_lines(submission.message()),
        }
        .render()?;

        let text = ContactTextTemplate {
            name: submission.name(),
            email: submission.email(),
            message: submission.message(),
        }
        .render()?;

        Ok(Self {
            sender_name: submission.name().to_owned(),
            reply_to: submission.email().to_owned(),
            subject: format!("{SUBJECT_PREFIX}: {}", submission.name()),
            text,
            html,
        })
    }
}

// Every '\n' becomes a line boundary, trailing ones included.
fn message_lines(message: &str) -> Vec<&str> {
    message
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
