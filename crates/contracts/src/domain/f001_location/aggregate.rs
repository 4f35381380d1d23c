use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub Uuid);

impl LocationId {
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

impl AggregateId for LocationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LocationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Location: a bookable venue, room or service area within a facility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(flatten)]
    pub base: BaseAggregate<LocationId>,

    pub building: String,
    pub floor: Option<String>,
    pub capacity: Option<i32>,
}

impl Location {
    /// Create a new location for insertion into the DB
    pub fn new_for_insert(
        code: String,
        description: String,
        building: String,
        floor: Option<String>,
        capacity: Option<i32>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(LocationId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            building,
            floor,
            capacity,
        }
    }

    /// Id as a string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO data to the aggregate
    pub fn update(&mut self, dto: &LocationDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.building = dto.building.clone();
        self.floor = dto.floor.clone();
        self.capacity = dto.capacity;
    }

    /// Field-level validation
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.base.description.trim().is_empty() {
            errors.add("description", "Name is required");
        }
        if self.building.trim().is_empty() {
            errors.add("building", "Building is required");
        }
        if let Some(capacity) = self.capacity {
            if capacity < 0 {
                errors.add("capacity", "Capacity must not be negative");
            }
        }
        errors.into_result()
    }

    /// Hook before every write
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Location {
    type Id = LocationId;

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
        "f001"
    }

    fn collection_name() -> &'static str {
        "location"
    }

    fn element_name() -> &'static str {
        "Location"
    }

    fn list_name() -> &'static str {
        "Locations"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a location
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub building: String,
    pub floor: Option<String>,
    pub capacity: Option<i32>,
    pub comment: Option<String>,
}
