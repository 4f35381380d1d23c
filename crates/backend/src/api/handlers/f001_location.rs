use axum::{extract::Path, Json};
use contracts::domain::f001_location::aggregate::{Location, LocationDto};
use serde_json::json;

use super::{bad_request, error_response, HandlerError};
use crate::domain::f001_location;

/// GET /api/locations
pub async fn list_all() -> Result<Json<Vec<Location>>, HandlerError> {
    f001_location::service::list_all()
        .await
        .map(Json)
        .map_err(error_response)
}

/// GET /api/locations/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Location>, HandlerError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;
    match f001_location::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(error_response(crate::shared::error::ServiceError::NotFound)),
        Err(e) => Err(error_response(e)),
    }
}

/// POST /api/locations
pub async fn upsert(Json(dto): Json<LocationDto>) -> Result<Json<serde_json::Value>, HandlerError> {
    let result = if dto.id.is_some() {
        let id = dto.id.clone().unwrap_or_default();
        f001_location::service::update(dto).await.map(|_| id)
    } else {
        f001_location::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err(error_response(e)),
    }
}

/// DELETE /api/locations/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), HandlerError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;
    match f001_location::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(error_response(crate::shared::error::ServiceError::NotFound)),
        Err(e) => Err(error_response(e)),
    }
}

/// POST /api/locations/testdata
pub async fn insert_test_data() -> Result<(), HandlerError> {
    f001_location::service::insert_test_data()
        .await
        .map_err(error_response)
}
