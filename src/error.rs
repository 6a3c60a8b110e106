use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

/// Shape of every error body this service produces.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing or empty. Raised before the model is
    /// invoked, with a fixed message naming the field.
    #[error("{0}")]
    Validation(&'static str),
    /// Anything that failed while encoding or building the response. Carries
    /// the underlying error's text verbatim.
    #[error("{0}")]
    Internal(String),
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(msg) = self {
            tracing::warn!("request failed: {msg}");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
