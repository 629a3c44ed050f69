use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockline_ai::AiError;
use stockline_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotAuthenticated => json_error(
            StatusCode::UNAUTHORIZED,
            "not_authenticated",
            "no company context for the acting user",
        ),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        DomainError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::Upstream(msg) => json_error(StatusCode::BAD_GATEWAY, "upstream_error", msg),
    }
}

/// Advisor failures: bad input is the caller's fault, everything else is the
/// prediction service's, reported verbatim.
pub fn ai_error_to_response(err: AiError) -> axum::response::Response {
    match err {
        AiError::InvalidInput(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        AiError::Upstream(msg) => json_error(StatusCode::BAD_GATEWAY, "upstream_error", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn forbidden(message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::FORBIDDEN, "forbidden", message)
}

/// A poisoned lock means a handler panicked mid-mutation; refuse further
/// traffic on this state rather than serving a half-applied store.
pub fn lock_error() -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "state_error",
        "shared state unavailable",
    )
}
