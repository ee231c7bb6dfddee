use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use folio::config::{Config, ContactConfig, LoggingConfig, ServerConfig};
use folio_notification::{Email, MailError, Mailer, SmtpConfig, build_message};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const SMTP_USER: &str = "relay@example.com";
pub const CONTACT_EMAIL: &str = "owner@example.com";

/// Accepts every message and keeps it for inspection.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Builds the real lettre message for every email and keeps its wire form.
#[derive(Clone, Default)]
pub struct FormattingMailer {
    pub formatted: Arc<Mutex<Vec<String>>>,
}

impl FormattingMailer {
    pub fn formatted(&self) -> Vec<String> {
        self.formatted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for FormattingMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let message = build_message(email)?;
        let formatted = String::from_utf8_lossy(&message.formatted()).into_owned();
        self.formatted.lock().unwrap().push(formatted);
        Ok(())
    }
}

/// Rejects every message with a detailed reason that must never reach the caller.
#[derive(Clone, Default)]
pub struct RejectingMailer {
    pub attempts: Arc<Mutex<usize>>,
}

pub const REJECTION_REASON: &str = "535 5.7.8 authentication failed for relay@example.com";

#[async_trait]
impl Mailer for RejectingMailer {
    async fn send(&self, _email: &Email) -> Result<(), MailError> {
        *self.attempts.lock().unwrap() += 1;
        Err(MailError::InvalidAddress(REJECTION_REASON.to_string()))
    }
}

pub fn test_config(contact_email: Option<&str>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8888,
        },
        smtp: SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 465,
            secure: true,
            username: SMTP_USER.to_string(),
            password: "secret".to_string(),
            timeout_secs: 5,
        },
        contact: ContactConfig {
            email: contact_email.map(str::to_string),
            ..ContactConfig::default()
        },
        logging: LoggingConfig::default(),
    }
}

pub fn create_test_app(mailer: Arc<dyn Mailer>, contact_email: Option<&str>) -> Router {
    let config = test_config(contact_email);
    let state = folio::AppState::new(&config, mailer);

    folio::router(state, &config.contact.path)
}

pub async fn post_json(router: &Router, body: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact-relay")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
