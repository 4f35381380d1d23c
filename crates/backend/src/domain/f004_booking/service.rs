use super::repository;
use contracts::domain::f004_booking::aggregate::{Booking, BookingDto};
use uuid::Uuid;

use crate::shared::error::{ServiceError, ServiceResult};

/// Create a new booking
pub async fn create(dto: BookingDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("BK-{}", &Uuid::new_v4().to_string()[..8]));
    let mut aggregate = Booking::new_for_insert(
        code,
        dto.description,
        dto.venue_ref,
        dto.organizer,
        dto.contact_email,
        dto.starts_at,
        dto.ends_at,
        dto.attendees,
        dto.status.or_else(|| Some("Pending".to_string())),
        dto.comment,
    );

    aggregate.validate()?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Update an existing booking
pub async fn update(dto: BookingDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Other(anyhow::anyhow!("invalid id")))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    aggregate.update(&dto);
    aggregate.validate()?;
    aggregate.before_write();

    Ok(repository::update(&aggregate).await?)
}

/// Soft-delete a booking
pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

/// Fetch one booking
pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<Booking>> {
    Ok(repository::get_by_id(id).await?)
}

/// Fetch all bookings
pub async fn list_all() -> ServiceResult<Vec<Booking>> {
    Ok(repository::list_all().await?)
}
