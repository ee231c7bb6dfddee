use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use folio_client::{ContactForm, ContactModal, HttpRelay, SubmissionStatus, copy};

#[derive(Clone)]
struct Relay {
    status: StatusCode,
    received: Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>,
}

async fn handle(State(relay): State<Relay>, headers: HeaderMap, body: Bytes) -> StatusCode {
    let content_type = headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

    relay.received.lock().unwrap().push((content_type, json));
    relay.status
}

async fn spawn_relay(status: StatusCode) -> (String, Relay) {
    let relay = Relay {
        status,
        received: Arc::default(),
    };
    let app = Router::new()
        .route("/contact-relay", post(handle))
        .with_state(relay.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), relay)
}

fn filled(relay: HttpRelay) -> ContactModal<HttpRelay> {
    let mut modal = ContactModal::new(relay);
    modal.form = ContactForm {
        name: "Ana".to_owned(),
        email: "ana@x.com".to_owned(),
        message: "Oi\nTudo bem?".to_owned(),
    };
    modal
}

#[tokio::test]
async fn test_submission_posts_json_and_succeeds() {
    let (base_url, relay) = spawn_relay(StatusCode::OK).await;
    let mut modal = filled(HttpRelay::new(&base_url).unwrap());

    let status = modal.submit().await.unwrap();

    assert_eq!(status, SubmissionStatus::Success);
    assert!(!modal.shows_form());

    let received = relay.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (content_type, body) = &received[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        body,
        &serde_json::json!({"name": "Ana", "email": "ana@x.com", "message": "Oi\nTudo bem?"})
    );
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let (base_url, relay) = spawn_relay(StatusCode::INTERNAL_SERVER_ERROR).await;
    let mut modal = filled(HttpRelay::new(&base_url).unwrap());

    let status = modal.submit().await.unwrap();

    assert_eq!(status, SubmissionStatus::Error);
    assert!(modal.shows_form());
    assert_eq!(modal.error_notice(), Some(copy::ERROR_NOTICE));
    assert_eq!(relay.received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_network_failure_is_error() {
    // Nothing listens on the port once the listener is dropped
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut modal = filled(HttpRelay::new(&format!("http://{addr}")).unwrap());

    assert_eq!(modal.submit().await.unwrap(), SubmissionStatus::Error);
    assert_eq!(
        modal.history(),
        &[
            SubmissionStatus::Idle,
            SubmissionStatus::Sending,
            SubmissionStatus::Error
        ]
    );
}
