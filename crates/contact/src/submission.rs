use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Missing fields")]
    MissingFields(#[from] validator::ValidationErrors),

    #[error("failed to render contact email: {0}")]
    Render(#[from] askama::Error),
}

/// Contact form body as it arrives on the wire.
///
/// Absent, `null` and empty values are all accepted here and rejected
/// together by [`ContactSubmission::try_from`].
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A contact submission whose three fields are known to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1))]
    name: String,
    #[validate(length(min = 1))]
    email: String,
    #[validate(length(min = 1))]
    message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ContactError> {
        let submission = Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        };

        submission.validate()?;

        Ok(submission)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<ContactPayload> for ContactSubmission {
    type Error = ContactError;

    fn try_from(payload: ContactPayload) -> Result<Self, Self::Error> {
        Self::new(
            payload.name.unwrap_or_default(),
            payload.email.unwrap_or_default(),
            payload.message.unwrap_or_default(),
        )
    }
}
