use contracts::domain::f004_booking::aggregate::{Booking, BookingDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_from_response, ApiError};

/// Fetch all bookings
pub async fn fetch_bookings() -> Result<Vec<Booking>, ApiError> {
    let response = Request::get(&api_url("/api/bookings"))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<Booking>>()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))
}

/// Fetch one booking by id
pub async fn fetch_booking(id: &str) -> Result<Booking, ApiError> {
    let response = Request::get(&api_url(&format!("/api/bookings/{}", id)))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Booking>()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))
}

/// Create or update a booking; returns the record id
pub async fn upsert_booking(dto: BookingDto) -> Result<String, ApiError> {
    let response = Request::post(&api_url("/api/bookings"))
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

/// Soft-delete a booking
pub async fn delete_booking(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&format!("/api/bookings/{}", id)))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}
