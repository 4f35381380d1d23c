use contracts::domain::f002_asset::aggregate::{Asset, AssetDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_from_response, ApiError};

/// Fetch all assets
pub async fn fetch_assets() -> Result<Vec<Asset>, ApiError> {
    let response = Request::get(&api_url("/api/assets"))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<Asset>>()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))
}

/// Fetch one asset by id
pub async fn fetch_asset(id: &str) -> Result<Asset, ApiError> {
    let response = Request::get(&api_url(&format!("/api/assets/{}", id)))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Asset>()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))
}

/// Create or update an asset; returns the record id
pub async fn upsert_asset(dto: AssetDto) -> Result<String, ApiError> {
    let response = Request::post(&api_url("/api/assets"))
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

/// Soft-delete an asset
pub async fn delete_asset(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&format!("/api/assets/{}", id)))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}
