use poem::{Response, error::ResponseError, http::StatusCode};
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Boundary conversion of a classified domain failure into an HTTP
/// response. Every error body has the same shape:
/// `{"success": false, "message": <text>}`.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ApiError(#[from] pub DomainError);

impl ResponseError for ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::AlreadyExists(_) => StatusCode::CONFLICT,
            DomainError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn as_response(&self) -> Response {
        // Unclassified failures are logged here and never reach the
        // caller in the body.
        let message = match &self.0 {
            DomainError::Other(err) => {
                tracing::error!("ERR: {err:?}");
                "Internal Server Error".to_string()
            }
            err => err.to_string(),
        };

        let body = serde_json::json!({
            "success": false,
            "message": message,
        });

        Response::builder()
            .status(self.status())
            .content_type("application/json")
            .body(body.to_string())
    }
}
