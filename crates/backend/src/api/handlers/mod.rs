pub mod f001_location;
pub mod f002_asset;
pub mod f003_work_order;
pub mod f004_booking;
pub mod users;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::shared::error::ServiceError;

/// One error shape for every handler: 404, 422 with the field map, or
/// a logged 500 without internals leaking to the client.
pub(crate) fn error_response(err: ServiceError) -> (StatusCode, Json<Value>) {
    match err {
        ServiceError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "not found"})),
        ),
        ServiceError::Validation(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::to_value(&errors).unwrap_or_else(|_| json!({"errors": {}}))),
        ),
        ServiceError::Other(e) => {
            tracing::error!("internal error: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "internal error"})),
            )
        }
    }
}

pub(crate) type HandlerError = (StatusCode, Json<Value>);

pub(crate) fn bad_request(message: &str) -> HandlerError {
    (StatusCode::BAD_REQUEST, Json(json!({"error": message})))
}
