use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use eth_tx::error::EthError;
use keystore::error::KeystoreError;

/// Request-level errors. Validation failures are the client's fault; key
/// provider and signing failures are ours. Nothing is retried; every error
/// is terminal for the current request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Keystore(#[from] KeystoreError),

    #[error("{0}")]
    Transaction(#[from] EthError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Keystore(_) | ApiError::Transaction(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
