//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::DatabaseError;

/// One field-level validation message, serialized with the public API's
/// field names. `field` is omitted for failures not tied to a field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    #[serde(rename = "campo", skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// Error-list response body: `{"erros": [...]}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub erros: Vec<FieldError>,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, erros) = match self {
            ApiError::Validation(erros) => (StatusCode::BAD_REQUEST, erros),
            ApiError::Database(err) => {
                tracing::error!(error = %err, "API database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec![FieldError::server("Erro interno no servidor.")],
                )
            }
        };

        (status, Json(ErrorBody { erros })).into_response()
    }
}
