//! Mock submission endpoint.
//!
//! One route, `POST /api/v1/demo/submit`, that re-validates the posted body
//! against the shared schema and echoes a structured status. No data is
//! stored or forwarded; the endpoint exists so the form has a real API to
//! exercise.

use crate::models::{ApiResponse, ContactFormValues};
use crate::schema;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fixed processing latency applied to accepted submissions, emulating
/// realistic network timing for UI testing. No jitter, not configurable.
const PROCESSING_DELAY: Duration = Duration::from_millis(500);

/// Build the router for the mock API.
pub fn router() -> Router {
    Router::new().route(crate::client::SUBMIT_PATH, post(submit))
}

/// Handle a form submission.
///
/// The body is untrusted, so it is taken as raw bytes: a parse fault becomes
/// a generic internal error (500), a schema failure becomes per-field
/// validation messages (400), and anything else is accepted (200) after the
/// fixed processing delay.
async fn submit(body: Bytes) -> (StatusCode, Json<ApiResponse>) {
    let values: ContactFormValues = match serde_json::from_slice(&body) {
        Ok(values) => values,
        Err(e) => {
            warn!("Rejecting unparseable submission body: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::internal_error()),
            );
        }
    };

    if let Err(errors) = schema::validate(&values) {
        debug!("Submission failed validation: {:?}", errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::validation_error(errors)),
        );
    }

    tokio::time::sleep(PROCESSING_DELAY).await;

    info!("Accepted submission for {}", values.email);
    (StatusCode::OK, Json(ApiResponse::success()))
}

/// Start the mock API on the given address and serve until the process exits.
pub async fn serve(bind_addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Mock submission endpoint listening on http://{}", bind_addr);

    axum::serve(listener, router()).await?;
    Ok(())
}
