use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_contact::ContactError;
use folio_notification::MailError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("Missing fields")]
    MissingFields,

    #[error("Failed to render email: {0}")]
    Render(#[source] ContactError),

    #[error("Failed to send email: {0}")]
    Delivery(#[from] MailError),
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::MissingFields(_) => AppError::MissingFields,
            ContactError::Render(_) => AppError::Render(err),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error) = match self {
            AppError::MalformedRequest(e) => {
                tracing::warn!(error = %e, "Malformed contact request");
                (StatusCode::BAD_REQUEST, "Malformed request")
            }
            AppError::MissingFields => {
                tracing::info!("Contact request rejected: missing fields");
                (StatusCode::BAD_REQUEST, "Missing fields")
            }
            AppError::Render(e) => {
                tracing::error!(error = &e as &dyn std::error::Error, "Error rendering email");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
            }
            AppError::Delivery(e) => {
                tracing::error!(error = &e as &dyn std::error::Error, "Error sending email");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
            }
        };

        (status_code, Json(ErrorBody { error })).into_response()
    }
}
