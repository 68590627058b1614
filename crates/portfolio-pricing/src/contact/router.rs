use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::{ContactError, ContactSubmission};
use super::relay::ContactRelay;
use super::service::ContactService;

/// Router exposing the contact form endpoint.
pub fn contact_router<R>(service: Arc<ContactService<R>>) -> Router
where
    R: ContactRelay + 'static,
{
    Router::new()
        .route("/api/v1/contact", post(submit_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ContactService<R>>>,
    axum::Json(submission): axum::Json<ContactSubmission>,
) -> Response
where
    R: ContactRelay + 'static,
{
    match service.submit(submission).await {
        Ok(receipt) => (StatusCode::ACCEPTED, axum::Json(receipt)).into_response(),
        Err(error) => {
            let status = match error {
                ContactError::MissingFields | ContactError::InvalidEmail => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ContactError::Relay(_) => StatusCode::BAD_GATEWAY,
            };
            let payload = json!({
                "error": error.user_message(),
            });
            (status, axum::Json(payload)).into_response()
        }
    }
}
