use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Validation failures surfaced to the caller. None of these are fatal to
/// the process; the boundary maps each to a status and a JSON error body.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid location")]
    InvalidLocation,

    #[error("Location and ReviewBody are required")]
    MissingField,

    #[error("Dates must be formatted YYYY-MM-DD")]
    InvalidDateFormat,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidLocation => StatusCode::BAD_REQUEST,
            AppError::MissingField => StatusCode::BAD_REQUEST,
            AppError::InvalidDateFormat => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
