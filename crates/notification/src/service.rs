//! Email notification service using lettre

use std::{fmt, str::FromStr, time::Duration};

use async_trait::async_trait;
use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

#[derive(Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Implicit TLS when true, plain connection upgraded with STARTTLS when
    /// the server offers it otherwise.
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_smtp_timeout")]
    pub timeout_secs: u64,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_timeout() -> u64 {
    30
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_smtp_port(),
            secure: false,
            username: String::new(),
            password: String::new(),
            timeout_secs: default_smtp_timeout(),
        }
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Outgoing message handed to a [`Mailer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub from_name: Option<String>,
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, email: &Email) -> Result<(), MailError>;
}

/// SMTP mailer. A fresh transport is opened for every message and dropped
/// once the send resolves, whatever the outcome.
#[derive(Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        tracing::info!(
            smtp_host = %config.host,
            smtp_port = config.port,
            secure = config.secure,
            "Email service initialized with authentication"
        );

        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
        let builder = if self.config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)?
        } else {
            let tls = TlsParameters::new(self.config.host.clone())?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
                .tls(Tls::Opportunistic(tls))
        };

        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

        Ok(builder
            .port(self.config.port)
            .credentials(creds)
            .timeout(Some(Duration::from_secs(self.config.timeout_secs)))
            .build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[tracing::instrument(skip_all, fields(to = %email.to))]
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let message = build_message(email)?;
        let transport = self.transport()?;

        tracing::info!("Sending email");

        transport.send(message).await?;

        Ok(())
    }
}

fn parse_address(value: &str) -> Result<Address, MailError> {
    Address::from_str(value.trim()).map_err(|_| MailError::InvalidAddress(value.to_owned()))
}

fn parse_mailbox(value: &str) -> Result<Mailbox, MailError> {
    Mailbox::from_str(value.trim()).map_err(|_| MailError::InvalidAddress(value.to_owned()))
}

/// Builds the lettre message for `email`.
///
/// Sender and recipient come from configuration and must parse. The reply-to
/// is whatever the submitter typed, so one lettre cannot parse is dropped
/// with a warning instead of failing the send.
pub fn build_message(email: &Email) -> Result<Message, MailError> {
    let from = Mailbox::new(email.from_name.clone(), parse_address(&email.from)?);

    let mut builder = Message::builder()
        .from(from)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject.as_str());

    if let Some(reply_to) = &email.reply_to {
        match parse_mailbox(reply_to) {
            Ok(mailbox) => builder = builder.reply_to(mailbox),
            Err(e) => tracing::warn!(error = %e, "Sending without Reply-To"),
        }
    }

    Ok(builder.multipart(MultiPart::alternative_plain_html(
        email.text.clone(),
        email.html.clone(),
    ))?)
}
