use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    /// Model output that could not be read as the expected structure
    #[error("Parse error: {message}")]
    Parse { message: String, raw: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for failures of an upstream service (transport or non-2xx)
    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::HttpClient(_) | AppError::ExternalApi(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "error": "AI recommendations are currently unavailable",
                    "message": msg
                }),
            ),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, json!({ "error": msg })),
            // Transport details stay in the logs; request URLs may carry credentials
            AppError::HttpClient(_) => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": "Upstream service unavailable" }),
            ),
            AppError::Parse { message, raw } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": format!("Failed to process AI recommendations: {}", message),
                    "rawResponse": raw
                }),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
