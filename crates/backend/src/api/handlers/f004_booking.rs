use axum::{extract::Path, Json};
use contracts::domain::f004_booking::aggregate::{Booking, BookingDto};
use serde_json::json;

use super::{bad_request, error_response, HandlerError};
use crate::domain::f004_booking;

/// GET /api/bookings
pub async fn list_all() -> Result<Json<Vec<Booking>>, HandlerError> {
    f004_booking::service::list_all()
        .await
        .map(Json)
        .map_err(error_response)
}

/// GET /api/bookings/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Booking>, HandlerError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;
    match f004_booking::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(error_response(crate::shared::error::ServiceError::NotFound)),
        Err(e) => Err(error_response(e)),
    }
}

/// POST /api/bookings
pub async fn upsert(Json(dto): Json<BookingDto>) -> Result<Json<serde_json::Value>, HandlerError> {
    let result = if dto.id.is_some() {
        let id = dto.id.clone().unwrap_or_default();
        f004_booking::service::update(dto).await.map(|_| id)
    } else {
        f004_booking::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err(error_response(e)),
    }
}

/// DELETE /api/bookings/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), HandlerError> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;
    match f004_booking::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(error_response(crate::shared::error::ServiceError::NotFound)),
        Err(e) => Err(error_response(e)),
    }
}
