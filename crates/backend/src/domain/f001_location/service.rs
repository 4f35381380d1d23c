use super::repository;
use contracts::domain::f001_location::aggregate::{Location, LocationDto};
use uuid::Uuid;

use crate::shared::error::{ServiceError, ServiceResult};

/// Create a new location
pub async fn create(dto: LocationDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("LOC-{}", &Uuid::new_v4().to_string()[..8]));
    let mut aggregate = Location::new_for_insert(
        code,
        dto.description,
        dto.building,
        dto.floor,
        dto.capacity,
        dto.comment,
    );

    aggregate.validate()?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Update an existing location
pub async fn update(dto: LocationDto) -> ServiceResult<()> {
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

/// Soft-delete a location
pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

/// Fetch one location
pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<Location>> {
    Ok(repository::get_by_id(id).await?)
}

/// Fetch all locations
pub async fn list_all() -> ServiceResult<Vec<Location>> {
    Ok(repository::list_all().await?)
}

/// Seed data so an empty installation has venues to book
pub async fn insert_test_data() -> ServiceResult<()> {
    let data = vec![
        LocationDto {
            id: None,
            code: Some("LOC-001".into()),
            description: "Main Hall".into(),
            building: "Building A".into(),
            floor: Some("1".into()),
            capacity: Some(250),
            comment: Some("Primary event venue".into()),
        },
        LocationDto {
            id: None,
            code: Some("LOC-002".into()),
            description: "Conference Room 2B".into(),
            building: "Building B".into(),
            floor: Some("2".into()),
            capacity: Some(16),
            comment: None,
        },
        LocationDto {
            id: None,
            code: Some("LOC-003".into()),
            description: "Boiler Room".into(),
            building: "Building A".into(),
            floor: Some("B1".into()),
            capacity: None,
            comment: Some("Restricted access".into()),
        },
    ];

    for dto in data {
        create(dto).await?;
    }
    Ok(())
}
