use axum::{extract::Path, Json};
use contracts::domain::f002_asset::aggregate::{Asset, AssetDto};
use serde_json::json;

use super::{bad_request, error_response, HandlerError};
use crate::domain::f002_asset;

/// GET /api/assets
pub async fn list_all() -> Result<Json<Vec<Asset>>, HandlerError> {
    f002_asset::service::list_all()
        .await
        .map(Json)
        .map_err(error_response)
}

/// GET /api/assets/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Asset>, HandlerError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;
    match f002_asset::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(error_response(crate::shared::error::ServiceError::NotFound)),
        Err(e) => Err(error_response(e)),
    }
}

/// POST /api/assets
pub async fn upsert(Json(dto): Json<AssetDto>) -> Result<Json<serde_json::Value>, HandlerError> {
    let result = if dto.id.is_some() {
        let id = dto.id.clone().unwrap_or_default();
        f002_asset::service::update(dto).await.map(|_| id)
    } else {
        f002_asset::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err(error_response(e)),
    }
}

/// DELETE /api/assets/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), HandlerError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;
    match f002_asset::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(error_response(crate::shared::error::ServiceError::NotFound)),
        Err(e) => Err(error_response(e)),
    }
}
