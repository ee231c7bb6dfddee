use async_trait::async_trait;
use folio_contact::{ContactError, ContactSubmission};
use reqwest::StatusCode;
use url::Url;

use crate::TransitionError;

pub const DEFAULT_RELAY_PATH: &str = "/contact-relay";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("form is incomplete: {0}")]
    Incomplete(#[from] ContactError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("invalid relay url: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay answered {0}")]
    Status(StatusCode),
}

/// Where a contact submission is delivered.
#[async_trait]
pub trait RelayEndpoint: Send + Sync {
    async fn post(&self, submission: &ContactSubmission) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: reqwest::Client,
    url: Url,
}

impl HttpRelay {
    /// Relay at [`DEFAULT_RELAY_PATH`] on the site serving the form.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_path(base_url, DEFAULT_RELAY_PATH)
    }

    pub fn with_path(base_url: &str, path: &str) -> Result<Self, ClientError> {
        let url = Url::parse(base_url)?.join(path)?;

        Ok(Self {
            client: reqwest::Client::new(),
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl RelayEndpoint for HttpRelay {
    async fn post(&self, submission: &ContactSubmission) -> Result<(), ClientError> {
        // `json` sets Content-Type: application/json
        let response = self
            .client
            .post(self.url.clone())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        Ok(())
    }
}
