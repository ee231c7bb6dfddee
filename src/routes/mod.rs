use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use folio_notification::{Mailer, contact::Envelope};

pub mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
    pub envelope: Arc<Envelope>,
}

impl AppState {
    pub fn new(config: &crate::config::Config, mailer: Arc<dyn Mailer>) -> Self {
        let envelope = Envelope {
            sender: config.smtp.username.trim().to_owned(),
            recipient: config.contact.recipient(&config.smtp).trim().to_owned(),
        };

        Self {
            mailer,
            envelope: Arc::new(envelope),
        }
    }
}

pub fn router(app_state: AppState, contact_path: &str) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            contact_path,
            post(contact::relay).fallback(contact::method_not_allowed),
        )
        .with_state(app_state)
}
