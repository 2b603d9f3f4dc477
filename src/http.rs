use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tracing::error;

use crate::store::{self, NewSubmission};
use crate::validate::{has_missing_field, is_valid_email, ContactForm};
use entity::submission_status::SubmissionStatus;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .with_state(AppState { db })
}

/// `POST /api/contact`. The body is taken raw rather than through the `Json`
/// extractor: an unparseable body is answered with the generic 500 payload,
/// not an extractor-generated 4xx.
async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let form: ContactForm = match serde_json::from_slice(&body) {
        Ok(form) => form,
        Err(e) => {
            error!("contact form error: {}", e);
            return server_error();
        }
    };

    if has_missing_field(&form) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "All fields are required" })),
        );
    }

    if !is_valid_email(&form.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid email address" })),
        );
    }

    let new = NewSubmission {
        name: form.name,
        email: form.email,
        subject: form.subject,
        message: form.message,
        submitted_at: Utc::now().timestamp_millis(),
        status: SubmissionStatus::New,
        ip_address: Some(client_ip(&headers)),
    };

    match store::insert(&state.db, new).await {
        Ok(id) => (StatusCode::OK, Json(json!({ "success": true, "id": id }))),
        Err(e) => {
            error!("contact form error: {}", e);
            server_error()
        }
    }
}

fn server_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to submit form" })),
    )
}

/// Best-effort client address from proxy headers, `"unknown"` otherwise.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .or_else(|| headers.get("x-real-ip"))
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| "unknown".to_owned())
}
