use super::EntityMetadata;

/// Trait for aggregate roots.
///
/// Defines the instance accessors and the static class metadata every
/// aggregate of the system exposes.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ========================================================================
    // Instance methods (data of a concrete record)
    // ========================================================================

    /// Record id
    fn id(&self) -> Self::Id;

    /// Business code of the record (e.g. "WO-2026-001")
    fn code(&self) -> &str;

    /// Display name / title of the record
    fn description(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ========================================================================
    // Class metadata (static)
    // ========================================================================

    /// Aggregate index in the system (e.g. "f001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the DB (e.g. "location")
    fn collection_name() -> &'static str;

    /// UI name of one element (singular, e.g. "Location")
    fn element_name() -> &'static str;

    /// UI name of the list (plural, e.g. "Locations")
    fn list_name() -> &'static str;

    // ========================================================================
    // Default implementations
    // ========================================================================

    /// Full aggregate name (e.g. "f001_location")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// DB table name (matches the full aggregate name)
    fn table_name() -> String {
        Self::full_name()
    }
}
