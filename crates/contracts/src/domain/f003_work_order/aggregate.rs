use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a work order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkOrderId(pub Uuid);

impl WorkOrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for WorkOrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(WorkOrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Work order: a compliance or safety task against a location/asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    #[serde(flatten)]
    pub base: BaseAggregate<WorkOrderId>,

    /// "Compliance" or "Safety"
    pub category: String,

    /// Low / Medium / High / Critical, server-supplied
    pub priority: Option<String>,

    /// Open / In Progress / Completed, server-supplied
    pub status: Option<String>,

    pub location_ref: Option<String>,
    pub assignee_ref: Option<String>,

    /// Due date, ISO `YYYY-MM-DD`
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
}

impl WorkOrder {
    /// Create a new work order for insertion into the DB
    pub fn new_for_insert(
        code: String,
        description: String,
        category: String,
        priority: Option<String>,
        status: Option<String>,
        location_ref: Option<String>,
        assignee_ref: Option<String>,
        due_date: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(WorkOrderId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            category,
            priority,
            status,
            location_ref,
            assignee_ref,
            due_date,
        }
    }

    /// Id as a string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO data to the aggregate
    pub fn update(&mut self, dto: &WorkOrderDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.category = dto.category.clone();
        self.priority = dto.priority.clone();
        self.status = dto.status.clone();
        self.location_ref = dto.location_ref.clone();
        self.assignee_ref = dto.assignee_ref.clone();
        self.due_date = dto.due_date.clone();
    }

    /// Field-level validation
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.base.description.trim().is_empty() {
            errors.add("description", "Title is required");
        }
        if self.category.trim().is_empty() {
            errors.add("category", "Category is required");
        }
        if let Some(due) = self.due_date.as_deref() {
            if !due.trim().is_empty()
                && chrono::NaiveDate::parse_from_str(due.trim(), "%Y-%m-%d").is_err()
            {
                errors.add("dueDate", "Due date must be a valid YYYY-MM-DD date");
            }
        }
        errors.into_result()
    }

    /// Hook before every write
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for WorkOrder {
    type Id = WorkOrderId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "f003"
    }

    fn collection_name() -> &'static str {
        "work_order"
    }

    fn element_name() -> &'static str {
        "Work order"
    }

    fn list_name() -> &'static str {
        "Work orders"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a work order
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkOrderDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub category: String,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub location_ref: Option<String>,
    pub assignee_ref: Option<String>,

    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,

    pub comment: Option<String>,
}

/// One entry of the per-order status history sub-resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrderHistoryEntry {
    pub status: String,

    #[serde(rename = "changedAt")]
    pub changed_at: String,

    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_with_due(due: Option<&str>) -> WorkOrder {
        WorkOrder::new_for_insert(
            "WO-001".into(),
            "Monthly fire-extinguisher check".into(),
            "Safety".into(),
            Some("High".into()),
            Some("Open".into()),
            None,
            None,
            due.map(Into::into),
            None,
        )
    }

    #[test]
    fn valid_order_passes() {
        assert!(order_with_due(Some("2026-09-01")).validate().is_ok());
        assert!(order_with_due(None).validate().is_ok());
    }

    #[test]
    fn malformed_due_date_is_a_field_error() {
        let err = order_with_due(Some("next tuesday")).validate().unwrap_err();
        assert!(err.get("dueDate").is_some());
    }

    #[test]
    fn missing_title_is_a_field_error() {
        let mut order = order_with_due(None);
        order.base.description = "  ".into();
        let err = order.validate().unwrap_err();
        assert_eq!(err.get("description"), Some("Title is required"));
    }
}
