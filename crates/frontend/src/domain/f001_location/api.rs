use contracts::domain::f001_location::aggregate::{Location, LocationDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_from_response, ApiError};

/// Fetch all locations (lookup table for selects and name resolution)
pub async fn fetch_locations() -> Result<Vec<Location>, ApiError> {
    let response = Request::get(&api_url("/api/locations"))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<Location>>()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))
}

/// Create or update a location; returns the record id.
///
/// Also used for ad-hoc venue creation straight from booking and
/// work-order forms.
pub async fn upsert_location(dto: LocationDto) -> Result<String, ApiError> {
    let response = Request::post(&api_url("/api/locations"))
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
