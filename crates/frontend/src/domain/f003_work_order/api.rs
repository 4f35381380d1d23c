use contracts::domain::f003_work_order::aggregate::{
    WorkOrder, WorkOrderDto, WorkOrderHistoryEntry,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_from_response, ApiError};

/// Fetch all work orders
pub async fn fetch_work_orders() -> Result<Vec<WorkOrder>, ApiError> {
    let response = Request::get(&api_url("/api/work_orders"))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<WorkOrder>>()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))
}

/// Fetch one work order by id
pub async fn fetch_work_order(id: &str) -> Result<WorkOrder, ApiError> {
    let response = Request::get(&api_url(&format!("/api/work_orders/{}", id)))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<WorkOrder>()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))
}

/// Create or update a work order; returns the record id
pub async fn upsert_work_order(dto: WorkOrderDto) -> Result<String, ApiError> {
    let response = Request::post(&api_url("/api/work_orders"))
        .json(&dto)
        .map_err(|e| ApiError::message(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Soft-delete a work order
pub async fn delete_work_order(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&format!("/api/work_orders/{}", id)))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

/// Fetch the ordered status history of one work order
pub async fn fetch_history(id: &str) -> Result<Vec<WorkOrderHistoryEntry>, ApiError> {
    let response = Request::get(&api_url(&format!("/api/work_orders/{}/history", id)))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<WorkOrderHistoryEntry>>()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))
}
