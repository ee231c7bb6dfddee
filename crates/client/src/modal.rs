use std::time::Duration;

use folio_contact::ContactSubmission;

use crate::{ClientError, RelayEndpoint, SubmissionEvent, SubmissionStatus, copy};

/// Delay before a successful modal closes itself.
pub const AUTO_DISMISS: Duration = Duration::from_millis(3000);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact modal state: form fields, submission status and visibility.
pub struct ContactModal<R> {
    relay: R,
    pub form: ContactForm,
    status: SubmissionStatus,
    history: Vec<SubmissionStatus>,
    open: bool,
}

impl<R: RelayEndpoint> ContactModal<R> {
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            form: ContactForm::default(),
            status: SubmissionStatus::Idle,
            history: vec![SubmissionStatus::Idle],
            open: true,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Every status the modal went through, starting with `idle`.
    pub fn history(&self) -> &[SubmissionStatus] {
        &self.history
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn shows_form(&self) -> bool {
        self.open && self.status.shows_form()
    }

    pub fn title(&self) -> &'static str {
        copy::TITLE
    }

    /// Confirmation title and body shown in place of the form after a success.
    pub fn confirmation(&self) -> Option<(&'static str, &'static str)> {
        (self.status == SubmissionStatus::Success)
            .then_some((copy::SUCCESS_TITLE, copy::SUCCESS_BODY))
    }

    /// The cancel control is hidden once the form is gone.
    pub fn cancel_label(&self) -> Option<&'static str> {
        self.shows_form().then_some(copy::CANCEL_LABEL)
    }

    pub fn error_notice(&self) -> Option<&'static str> {
        (self.status == SubmissionStatus::Error).then_some(copy::ERROR_NOTICE)
    }

    pub fn submit_label(&self) -> &'static str {
        copy::submit_label(self.status)
    }

    fn apply(&mut self, event: SubmissionEvent) -> Result<(), ClientError> {
        self.status = self.status.transition(event)?;
        self.history.push(self.status);
        Ok(())
    }

    /// Send the form once. Blank fields are refused before any request and
    /// leave the status untouched; a relay failure lands in `error`.
    pub async fn submit(&mut self) -> Result<SubmissionStatus, ClientError> {
        let sending = self.status.transition(SubmissionEvent::Submit)?;

        let submission = ContactSubmission::new(
            self.form.name.as_str(),
            self.form.email.as_str(),
            self.form.message.as_str(),
        )?;

        self.status = sending;
        self.history.push(sending);

        match self.relay.post(&submission).await {
            Ok(()) => self.apply(SubmissionEvent::Succeeded)?,
            Err(e) => {
                tracing::warn!(error = %e, "Contact submission failed");
                self.apply(SubmissionEvent::Failed)?;
            }
        }

        Ok(self.status)
    }

    /// Wait out [`AUTO_DISMISS`] after a success and close the modal.
    /// Returns whether the modal was closed.
    pub async fn auto_dismiss(&mut self) -> bool {
        if self.status != SubmissionStatus::Success || !self.open {
            return false;
        }

        tokio::time::sleep(AUTO_DISMISS).await;
        self.close();

        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
