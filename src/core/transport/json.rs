//! JSON request extraction and error responses.
//!
//! Store errors become `{"detail": ...}` bodies: a list of field issues with
//! status 422 for validation failures, a message with status 404 for missing
//! records. Unreadable request bodies are folded into the validation path so
//! clients always see 422 for a bad payload.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::warn;

use crate::domains::store::{FieldIssue, StoreError, ValidationError};

/// A request body parsed as untyped JSON, awaiting resource validation.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = StoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_validation(&rejection).into()),
        }
    }
}

fn rejection_to_validation(rejection: &JsonRejection) -> ValidationError {
    let issue = match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            FieldIssue::new(&["body"], "Field required", "missing")
        }
        other => FieldIssue::new(&["body"], other.body_text(), "json_invalid"),
    };
    ValidationError::single(issue)
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::Validation(err) => {
                warn!("Rejected payload: {}", err);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": err.issues() })),
                )
                    .into_response()
            }
            StoreError::NotFound { detail } => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
            }
        }
    }
}
