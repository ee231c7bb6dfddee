use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_notification::SmtpConfig;
use lettre::Address;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Destination mailbox, `CONTACT_EMAIL`
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_contact_path")]
    pub path: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: None,
            path: default_contact_path(),
        }
    }
}

fn default_contact_path() -> String {
    "/contact-relay".to_string()
}

impl ContactConfig {
    /// Mailbox receiving contact submissions, falling back to the SMTP account.
    pub fn recipient<'a>(&'a self, smtp: &'a SmtpConfig) -> &'a str {
        self.email
            .as_deref()
            .filter(|email| !email.trim().is_empty())
            .unwrap_or(&smtp.username)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Reads a boolean-like flag such as `SMTP_SECURE`.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Bare SMTP variables (SMTP_HOST, SMTP_PORT, SMTP_SECURE, SMTP_USER, SMTP_PASS, CONTACT_EMAIL)
    /// 2. Prefixed environment variables (FOLIO__SMTP__HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8888)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(host) = env::var("SMTP_HOST") {
            builder = builder.set_override("smtp.host", host)?;
        }
        if let Ok(port) = env::var("SMTP_PORT") {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|e| ConfigError::Message(format!("invalid SMTP_PORT: {e}")))?;
            builder = builder.set_override("smtp.port", i64::from(port))?;
        }
        if let Ok(secure) = env::var("SMTP_SECURE") {
            builder = builder.set_override("smtp.secure", parse_flag(&secure))?;
        }
        if let Ok(username) = env::var("SMTP_USER") {
            builder = builder.set_override("smtp.username", username)?;
        }
        if let Ok(password) = env::var("SMTP_PASS") {
            builder = builder.set_override("smtp.password", password)?;
        }
        if let Ok(contact_email) = env::var("CONTACT_EMAIL") {
            builder = builder.set_override("contact.email", contact_email)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.smtp.host.trim().is_empty() {
            return Err("SMTP host is required (SMTP_HOST)".to_string());
        }
        if self.smtp.port == 0 {
            return Err("SMTP port must be greater than 0".to_string());
        }
        if self.smtp.username.trim().is_empty() || self.smtp.password.is_empty() {
            return Err("SMTP credentials are required (SMTP_USER, SMTP_PASS)".to_string());
        }
        if self.smtp.username.trim().parse::<Address>().is_err() {
            return Err("SMTP user must be an email address".to_string());
        }
        if let Some(email) = self.contact.email.as_deref().filter(|e| !e.trim().is_empty()) {
            if email.trim().parse::<Address>().is_err() {
                return Err("Contact email must be an email address".to_string());
            }
        }
        if !self.contact.path.starts_with('/') {
            return Err("Contact path must start with '/'".to_string());
        }
        Ok(())
    }
}
