use axum::{extract::Path, Json};
use contracts::system::users::{RegisterUserDto, ReviewUserDto, UpdateUserDto, User};
use serde_json::json;

use super::{bad_request, error_response, HandlerError};
use crate::system::users::service;

/// GET /api/system/users
pub async fn list() -> Result<Json<Vec<User>>, HandlerError> {
    service::list_all().await.map(Json).map_err(error_response)
}

/// GET /api/system/users/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<User>, HandlerError> {
    match service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(error_response(crate::shared::error::ServiceError::NotFound)),
        Err(e) => Err(error_response(e)),
    }
}

/// POST /api/system/users (registration; lands in Pending)
pub async fn register(
    Json(dto): Json<RegisterUserDto>,
) -> Result<Json<serde_json::Value>, HandlerError> {
    match service::register(dto).await {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err(error_response(e)),
    }
}

/// PUT /api/system/users/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<(), HandlerError> {
    if dto.id != id {
        return Err(bad_request("id mismatch"));
    }
    service::update(dto).await.map_err(error_response)
}

/// POST /api/system/users/:id/review
pub async fn review(
    Path(id): Path<String>,
    Json(dto): Json<ReviewUserDto>,
) -> Result<(), HandlerError> {
    if dto.user_id != id {
        return Err(bad_request("id mismatch"));
    }
    service::review(dto).await.map_err(error_response)
}

/// DELETE /api/system/users/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), HandlerError> {
    match service::delete(&id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(error_response(crate::shared::error::ServiceError::NotFound)),
        Err(e) => Err(error_response(e)),
    }
}
