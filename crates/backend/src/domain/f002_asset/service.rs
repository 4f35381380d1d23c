use super::repository;
use contracts::domain::f002_asset::aggregate::{Asset, AssetDto};
use uuid::Uuid;

use crate::shared::error::{ServiceError, ServiceResult};

/// Create a new asset
pub async fn create(dto: AssetDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("AST-{}", &Uuid::new_v4().to_string()[..8]));
    let mut aggregate = Asset::new_for_insert(
        code,
        dto.description,
        dto.category,
        dto.serial_number,
        dto.location_ref,
        dto.status,
        dto.maintenance,
        dto.comment,
    );

    aggregate.validate()?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Update an existing asset
pub async fn update(dto: AssetDto) -> ServiceResult<()> {
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

/// Soft-delete an asset
pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

/// Fetch one asset
pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<Asset>> {
    Ok(repository::get_by_id(id).await?)
}

/// Fetch all assets
pub async fn list_all() -> ServiceResult<Vec<Asset>> {
    Ok(repository::list_all().await?)
}
