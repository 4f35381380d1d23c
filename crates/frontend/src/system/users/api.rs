use contracts::system::users::{RegisterUserDto, ReviewUserDto, UpdateUserDto, User};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_from_response, ApiError};

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    let response = Request::get(&api_url("/api/system/users"))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<User>>()
        .await
        .map_err(|e| ApiError::message(format!("Failed to parse response: {}", e)))
}

/// Register a new user (lands in Pending until reviewed)
pub async fn register_user(dto: RegisterUserDto) -> Result<String, ApiError> {
    let response = Request::post(&api_url("/api/system/users"))
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

/// Update a user record
pub async fn update_user(dto: UpdateUserDto) -> Result<(), ApiError> {
    let response = Request::put(&api_url(&format!("/api/system/users/{}", dto.id)))
        .json(&dto)
        .map_err(|e| ApiError::message(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

/// Approve or reject a pending registration
pub async fn review_user(dto: ReviewUserDto) -> Result<(), ApiError> {
    let response = Request::post(&api_url(&format!(
        "/api/system/users/{}/review",
        dto.user_id
    )))
    .json(&dto)
    .map_err(|e| ApiError::message(format!("Failed to serialize request: {}", e)))?
    .send()
    .await
    .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

/// Delete a user
pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&format!("/api/system/users/{}", id)))
        .send()
        .await
        .map_err(|e| ApiError::message(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}
