use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::domain::f002_asset::schedule::MaintenanceSchedule;
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub Uuid);

impl AssetId {
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

impl AggregateId for AssetId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AssetId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Asset: a piece of facility equipment tracked in the inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    #[serde(flatten)]
    pub base: BaseAggregate<AssetId>,

    pub category: String,

    #[serde(rename = "serialNumber")]
    pub serial_number: String,

    /// Location the asset is installed at (string id, may be absent)
    pub location_ref: Option<String>,

    /// Operational status as supplied by the server
    pub status: Option<String>,

    /// Preventive-maintenance recurrence, if one is planned
    pub maintenance: Option<MaintenanceSchedule>,
}

impl Asset {
    /// Create a new asset for insertion into the DB
    pub fn new_for_insert(
        code: String,
        description: String,
        category: String,
        serial_number: String,
        location_ref: Option<String>,
        status: Option<String>,
        maintenance: Option<MaintenanceSchedule>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(AssetId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            category,
            serial_number,
            location_ref,
            status,
            maintenance,
        }
    }

    /// Id as a string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO data to the aggregate
    pub fn update(&mut self, dto: &AssetDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.category = dto.category.clone();
        self.serial_number = dto.serial_number.clone();
        self.location_ref = dto.location_ref.clone();
        self.status = dto.status.clone();
        self.maintenance = dto.maintenance.clone();
    }

    /// Field-level validation
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.base.description.trim().is_empty() {
            errors.add("description", "Name is required");
        }
        if self.category.trim().is_empty() {
            errors.add("category", "Category is required");
        }
        if let Some(MaintenanceSchedule::Weekly { interval }) = &self.maintenance {
            if *interval == 0 {
                errors.add("maintenance", "Weekly interval must be at least 1");
            }
        }
        errors.into_result()
    }

    /// Hook before every write
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Asset {
    type Id = AssetId;

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
        "f002"
    }

    fn collection_name() -> &'static str {
        "asset"
    }

    fn element_name() -> &'static str {
        "Asset"
    }

    fn list_name() -> &'static str {
        "Assets"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating an asset
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssetDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub category: String,

    #[serde(rename = "serialNumber")]
    pub serial_number: String,

    pub location_ref: Option<String>,
    pub status: Option<String>,
    pub maintenance: Option<MaintenanceSchedule>,
    pub comment: Option<String>,
}
