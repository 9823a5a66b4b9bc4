//! API error types and response formatting.
//!
//! Client-facing bodies carry the platform's Spanish messages; `Display`
//! stays English for logs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bitacora_store::StoreError;

/// API error type that converts to appropriate HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No route matched the request path.
    #[error("route not found")]
    RouteNotFound,

    /// The path matched but the method is not GET or OPTIONS.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// The requested post does not exist or is not published.
    #[error("post not found")]
    PostNotFound,

    /// Content store query error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error (runtime, configuration, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::RouteNotFound => (
                StatusCode::NOT_FOUND,
                "Endpoint no encontrado.".to_string(),
            ),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Método no permitido.".to_string(),
            ),
            Self::PostNotFound => (
                StatusCode::NOT_FOUND,
                "Artículo no encontrado.".to_string(),
            ),
            Self::Store(err) => {
                tracing::error!(error = %err, "store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error del servidor: {err}"),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error del servidor: {err}"),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
