//! Error type for REST handlers and its mapping to HTTP responses.
//!
//! | Error | HTTP Status | `error` field |
//! |-------|-------------|---------------|
//! | Validation | 400 | `validation` |
//! | NotFound | 404 | `not-found` |
//! | BadRequest | 400 | `bad-request` |
//!
//! Core errors other than not-found (including unexpected failures) are reported as 400 with
//! their message. No error takes the process down.

use api_shared::{ErrorRes, FieldErrorRes};
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clinicare_core::ClinicError;

/// One invalid request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request validation failed")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
}

impl From<ClinicError> for ApiError {
    fn from(e: ClinicError) -> Self {
        match e {
            ClinicError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ClinicError::InvalidInput(_) => ApiError::BadRequest(e.to_string()),
            other => {
                tracing::error!("unexpected error handling request: {:?}", other);
                ApiError::BadRequest(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, kind, fields) = match self {
            ApiError::Validation(fields) => (StatusCode::BAD_REQUEST, "validation", fields),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not-found", Vec::new()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad-request", Vec::new()),
        };

        let body = ErrorRes {
            error: kind.into(),
            message,
            fields: fields
                .into_iter()
                .map(|f| FieldErrorRes {
                    field: f.field.into(),
                    message: f.message,
                })
                .collect(),
        };
        (status, Json(body)).into_response()
    }
}
