//! Error types for salesview-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{context}: {message}")]
    Internal { context: String, message: String },
}

impl ApiError {
    /// Wrap a failure with the endpoint's fixed error label
    pub fn internal(context: &str, source: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            context: context.to_string(),
            message: source.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal { context, message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: context,
                    message,
                }),
            )
                .into_response(),
        }
    }
}
