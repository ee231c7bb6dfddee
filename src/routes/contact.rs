use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use folio_contact::{ContactPayload, ContactSubmission};
use folio_notification::contact::contact_email;
use serde::Serialize;

use crate::{error::AppError, routes::AppState};

#[derive(Serialize)]
pub struct RelayResponse {
    pub message: &'static str,
}

/// POST /contact-relay - Relay a contact form submission to the site owner
///
/// The body is read as raw bytes so a missing or wrong Content-Type is not
/// treated differently from any other JSON body.
#[tracing::instrument(skip_all)]
pub async fn relay(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<RelayResponse>, AppError> {
    let payload: ContactPayload = serde_json::from_slice(&body)?;
    let submission = ContactSubmission::try_from(payload)?;
    let email = contact_email(&submission, &app_state.envelope)?;

    app_state.mailer.send(&email).await?;

    tracing::info!(to = %email.to, "Contact email relayed");

    Ok(Json(RelayResponse {
        message: "Email sent successfully",
    }))
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
