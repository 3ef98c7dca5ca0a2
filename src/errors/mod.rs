use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use std::fmt;

use crate::storage::StoreError;

/// Everything a request can fail with. All variants are client errors; none
/// is fatal to the process.
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be decoded into the expected shape.
    InvalidInput(String),
    /// Body decoded but breaks a semantic rule (empty name, negative
    /// age/salary, malformed phone number).
    ValidationFailed(String),
    /// Path id token is not a non-negative integer.
    InvalidId(String),
    /// No record at the requested id.
    NotFound(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidInput(msg) => write!(f, "failed to parse JSON: {}", msg),
            ApiError::ValidationFailed(msg) => write!(f, "invalid employee data: {}", msg),
            ApiError::InvalidId(raw) => write!(f, "id must be a non-negative number, got {:?}", raw),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        error!("{} (status_code={})", self, status.as_u16());
        HttpResponse::build(status).json(ErrorResponse {
            message: self.to_string(),
        })
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::ValidationFailed(err.to_string())
    }
}
