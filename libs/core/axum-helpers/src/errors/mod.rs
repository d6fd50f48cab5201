pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Returned for all error responses so clients always see the same shape:
/// - `statusCode`: the HTTP status repeated in the body
/// - `message`: human-readable error message
/// - `detail`: the inner cause when there is one, or the structured
///   field-violation map for validation failures; `null` otherwise
///
/// # JSON Example
///
/// ```json
/// {
///   "statusCode": 404,
///   "message": "Product with id 42 not found",
///   "detail": null
/// }
/// ```
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code repeated in the body
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Human-readable error message
    pub message: String,
    /// Optional inner cause or structured validation details
    pub detail: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// This is the sole translation point from failures to HTTP status/body:
/// handlers never catch, services never swallow, everything falls through
/// to this `IntoResponse` impl.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                (e.status(), e.body_text(), None)
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    messages::VALIDATION_FAILED.to_string(),
                    Some(validation_detail(&e)),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    messages::DB_ERROR.to_string(),
                    Some(serde_json::Value::String(e.to_string())),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg, None)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, msg, None)
            }
        };

        let body = Json(ErrorResponse {
            status_code: status.as_u16(),
            message,
            detail,
        });

        (status, body).into_response()
    }
}

/// Convert validator errors into a `{field: [violations]}` JSON map.
fn validation_detail(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::json!(error_messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1))]
        name: String,
        #[validate(range(min = 0))]
        stock: i32,
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_error_maps_to_400() {
        let probe = Probe {
            name: String::new(),
            stock: -1,
        };
        let errors = probe.validate().unwrap_err();
        let response = AppError::ValidationError(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_maps_to_500() {
        let response = AppError::InternalServerError("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_detail_is_keyed_by_field() {
        let probe = Probe {
            name: String::new(),
            stock: -1,
        };
        let errors = probe.validate().unwrap_err();
        let detail = validation_detail(&errors);
        let map = detail.as_object().unwrap();
        assert!(map.contains_key("name"));
        assert!(map.contains_key("stock"));
    }
}
