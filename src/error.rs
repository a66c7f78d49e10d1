//! Error handling for the Invoicing Server
//!
//! Every failure surfaces as a JSON body of the form `{"error": "..."}` with
//! an appropriate status code. Internal failures are logged but not leaked.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Not enough stock for {0}")]
    InsufficientStock(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("PDF rendering error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InsufficientStock(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Database(_) | AppError::Pdf(_) | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_names_the_item() {
        let err = AppError::InsufficientStock("Widget".to_string());
        assert_eq!(err.to_string(), "Not enough stock for Widget");
    }

    #[test]
    fn not_found_names_the_resource() {
        let err = AppError::NotFound("Purchase".to_string());
        assert_eq!(err.to_string(), "Purchase not found");
    }
}
