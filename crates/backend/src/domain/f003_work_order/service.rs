use super::repository;
use contracts::domain::f003_work_order::aggregate::{
    WorkOrder, WorkOrderDto, WorkOrderHistoryEntry,
};
use uuid::Uuid;

use crate::shared::error::{ServiceError, ServiceResult};

/// Create a new work order and record its initial status
pub async fn create(dto: WorkOrderDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("WO-{}", &Uuid::new_v4().to_string()[..8]));
    let mut aggregate = WorkOrder::new_for_insert(
        code,
        dto.description,
        dto.category,
        dto.priority,
        dto.status,
        dto.location_ref,
        dto.assignee_ref,
        dto.due_date,
        dto.comment,
    );

    aggregate.validate()?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    if let Some(status) = aggregate.status.as_deref() {
        repository::insert_history(id, status, Some("Created".to_string())).await?;
    }
    Ok(id)
}

/// Update an existing work order; a status transition appends a history entry
pub async fn update(dto: WorkOrderDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Other(anyhow::anyhow!("invalid id")))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let previous_status = aggregate.status.clone();

    aggregate.update(&dto);
    aggregate.validate()?;
    aggregate.before_write();

    repository::update(&aggregate).await?;

    let status_changed = match (previous_status.as_deref(), aggregate.status.as_deref()) {
        (Some(old), Some(new)) => !old.eq_ignore_ascii_case(new),
        (None, Some(_)) => true,
        _ => false,
    };
    if status_changed {
        if let Some(status) = aggregate.status.as_deref() {
            repository::insert_history(id, status, None).await?;
        }
    }
    Ok(())
}

/// Soft-delete a work order
pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

/// Fetch one work order
pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<WorkOrder>> {
    Ok(repository::get_by_id(id).await?)
}

/// Fetch all work orders
pub async fn list_all() -> ServiceResult<Vec<WorkOrder>> {
    Ok(repository::list_all().await?)
}

/// Ordered status history of one work order
pub async fn history(id: Uuid) -> ServiceResult<Vec<WorkOrderHistoryEntry>> {
    if repository::get_by_id(id).await?.is_none() {
        return Err(ServiceError::NotFound);
    }
    Ok(repository::list_history(id).await?)
}
