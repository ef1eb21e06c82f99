//! Field-level validation accumulator.
//!
//! Write endpoints check every submitted field and report all failures in a
//! single response. [`FieldErrors`] collects one message per field (the
//! first one recorded wins) keyed by the field's wire name.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;

/// Top-level message returned alongside field errors.
pub const INVALID_DATA_MESSAGE: &str = "The submitted data is invalid.";

/// Ordered map of wire field name to its first validation message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`. Later failures for the same field are
    /// dropped so the message stays stable.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(())` when nothing failed, otherwise [`CoreError::InvalidFields`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self))
        }
    }
}

#[cfg(test)]
impl FieldErrors {
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_accumulator_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("title", "Title cannot be blank.");
        errors.add("title", "Title is too long.");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("title"), Some("Title cannot be blank."));
    }

    #[test]
    fn non_empty_accumulator_becomes_invalid_fields() {
        let mut errors = FieldErrors::new();
        errors.add("title", "Title cannot be blank.");
        assert_matches!(errors.into_result(), Err(CoreError::InvalidFields(e)) if e.len() == 1);
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut errors = FieldErrors::new();
        errors.add("scaleFactor", "bad");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"scaleFactor": "bad"}));
    }
}
