use axum::{extract::Path, Json};
use contracts::domain::f003_work_order::aggregate::{
    WorkOrder, WorkOrderDto, WorkOrderHistoryEntry,
};
use serde_json::json;

use super::{bad_request, error_response, HandlerError};
use crate::domain::f003_work_order;

/// GET /api/work_orders
pub async fn list_all() -> Result<Json<Vec<WorkOrder>>, HandlerError> {
    f003_work_order::service::list_all()
        .await
        .map(Json)
        .map_err(error_response)
}

/// GET /api/work_orders/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<WorkOrder>, HandlerError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;
    match f003_work_order::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(error_response(crate::shared::error::ServiceError::NotFound)),
        Err(e) => Err(error_response(e)),
    }
}

/// POST /api/work_orders
pub async fn upsert(
    Json(dto): Json<WorkOrderDto>,
) -> Result<Json<serde_json::Value>, HandlerError> {
    let result = if dto.id.is_some() {
        let id = dto.id.clone().unwrap_or_default();
        f003_work_order::service::update(dto).await.map(|_| id)
    } else {
        f003_work_order::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err(error_response(e)),
    }
}

/// DELETE /api/work_orders/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), HandlerError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;
    match f003_work_order::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(error_response(crate::shared::error::ServiceError::NotFound)),
        Err(e) => Err(error_response(e)),
    }
}

/// GET /api/work_orders/:id/history
pub async fn history(
    Path(id): Path<String>,
) -> Result<Json<Vec<WorkOrderHistoryEntry>>, HandlerError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;
    f003_work_order::service::history(uuid)
        .await
        .map(Json)
        .map_err(error_response)
}
