use strum::{AsRefStr, Display};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionEvent {
    Submit,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot apply {event} while {from}")]
pub struct TransitionError {
    pub from: SubmissionStatus,
    pub event: SubmissionEvent,
}

impl SubmissionStatus {
    /// `idle -> sending -> {success, error}`, `error -> sending` on resubmission.
    /// `success` accepts nothing: the modal is torn down after it.
    pub fn transition(self, event: SubmissionEvent) -> Result<Self, TransitionError> {
        use SubmissionEvent::*;
        use SubmissionStatus::*;

        match (self, event) {
            (Idle | Error, Submit) => Ok(Sending),
            (Sending, Succeeded) => Ok(Success),
            (Sending, Failed) => Ok(Error),
            (from, event) => Err(TransitionError { from, event }),
        }
    }

    /// The submit control is disabled while sending and gone after success.
    pub fn can_submit(self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Error)
    }

    /// The form is replaced by a confirmation once the message is sent.
    pub fn shows_form(self) -> bool {
        self != SubmissionStatus::Success
    }
}
