use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{messages, ErrorResponse};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        status_code: StatusCode::NOT_FOUND.as_u16(),
        message: messages::NOT_FOUND_RESOURCE.to_string(),
        detail: None,
    });

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    let body = Json(ErrorResponse {
        status_code: StatusCode::METHOD_NOT_ALLOWED.as_u16(),
        message: "The HTTP method is not allowed for this resource".to_string(),
        detail: None,
    });

    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}
