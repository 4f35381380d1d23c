//! Field-keyed validation errors.
//!
//! The submission boundary returns failures as a map `field -> message`
//! (HTTP 422, body `{"errors": {...}}`). The same type is produced by
//! aggregate `validate()` methods and rendered inline next to form fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Validation messages keyed by field name.
///
/// `BTreeMap` keeps the serialized order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. The first message per field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for one field, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// `Ok(())` when no messages were recorded, `Err(self)` otherwise
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "Name is required");
        errors.add("name", "second message is ignored");
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.errors.len(), 1);
    }

    #[test]
    fn into_result_reflects_contents() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add("capacity", "Capacity must not be negative");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let mut errors = ValidationErrors::new();
        errors.add("organizer", "Organizer is required");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"errors":{"organizer":"Organizer is required"}}"#);
        let back: ValidationErrors = serde_json::from_str(&json).unwrap();
        assert_eq!(back, errors);
    }
}
