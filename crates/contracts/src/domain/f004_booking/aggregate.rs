use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub Uuid);

impl BookingId {
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

impl AggregateId for BookingId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BookingId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Booking: a reservation of a venue for an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(flatten)]
    pub base: BaseAggregate<BookingId>,

    /// Venue (location id); may be absent while the venue is still TBA
    pub venue_ref: Option<String>,

    pub organizer: String,

    #[serde(rename = "contactEmail")]
    pub contact_email: Option<String>,

    /// Event start, ISO datetime
    #[serde(rename = "startsAt")]
    pub starts_at: Option<String>,

    /// Event end, ISO datetime
    #[serde(rename = "endsAt")]
    pub ends_at: Option<String>,

    pub attendees: Option<i32>,

    /// Pending / Confirmed / Cancelled, server-supplied
    pub status: Option<String>,
}

fn parse_event_instant(value: &str) -> Option<chrono::NaiveDateTime> {
    let value = value.trim();
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
}

impl Booking {
    /// Create a new booking for insertion into the DB
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        venue_ref: Option<String>,
        organizer: String,
        contact_email: Option<String>,
        starts_at: Option<String>,
        ends_at: Option<String>,
        attendees: Option<i32>,
        status: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(BookingId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            venue_ref,
            organizer,
            contact_email,
            starts_at,
            ends_at,
            attendees,
            status,
        }
    }

    /// Id as a string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Apply DTO data to the aggregate
    pub fn update(&mut self, dto: &BookingDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.venue_ref = dto.venue_ref.clone();
        self.organizer = dto.organizer.clone();
        self.contact_email = dto.contact_email.clone();
        self.starts_at = dto.starts_at.clone();
        self.ends_at = dto.ends_at.clone();
        self.attendees = dto.attendees;
        self.status = dto.status.clone();
    }

    /// Field-level validation
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.base.description.trim().is_empty() {
            errors.add("description", "Event name is required");
        }
        if self.organizer.trim().is_empty() {
            errors.add("organizer", "Organizer is required");
        }
        if let Some(attendees) = self.attendees {
            if attendees < 0 {
                errors.add("attendees", "Attendee count must not be negative");
            }
        }
        let starts = self.starts_at.as_deref().and_then(parse_event_instant);
        let ends = self.ends_at.as_deref().and_then(parse_event_instant);
        if let (Some(starts), Some(ends)) = (starts, ends) {
            if ends < starts {
                errors.add("endsAt", "End must not be earlier than start");
            }
        }
        errors.into_result()
    }

    /// Hook before every write
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Booking {
    type Id = BookingId;

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
        "f004"
    }

    fn collection_name() -> &'static str {
        "booking"
    }

    fn element_name() -> &'static str {
        "Booking"
    }

    fn list_name() -> &'static str {
        "Bookings"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a booking
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BookingDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub venue_ref: Option<String>,
    pub organizer: String,

    #[serde(rename = "contactEmail")]
    pub contact_email: Option<String>,

    #[serde(rename = "startsAt")]
    pub starts_at: Option<String>,

    #[serde(rename = "endsAt")]
    pub ends_at: Option<String>,

    pub attendees: Option<i32>,
    pub status: Option<String>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(starts: Option<&str>, ends: Option<&str>) -> Booking {
        Booking::new_for_insert(
            "BK-001".into(),
            "Quarterly all-hands".into(),
            None,
            "J. Ramirez".into(),
            Some("ramirez@example.com".into()),
            starts.map(Into::into),
            ends.map(Into::into),
            Some(120),
            Some("Pending".into()),
            None,
        )
    }

    #[test]
    fn end_before_start_is_a_field_error() {
        let err = booking(Some("2026-05-10T14:00"), Some("2026-05-10T12:00"))
            .validate()
            .unwrap_err();
        assert!(err.get("endsAt").is_some());
    }

    #[test]
    fn open_interval_is_accepted() {
        assert!(booking(Some("2026-05-10T14:00"), None).validate().is_ok());
        assert!(booking(None, None).validate().is_ok());
    }
}
