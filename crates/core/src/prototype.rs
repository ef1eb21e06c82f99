//! Prototype field rules, defaults, and the device type enum.
//!
//! The checks here are shared by create (all required fields must be
//! present) and update (only submitted fields are checked). Project
//! accessibility needs the database and is checked by the caller, which
//! records failures under [`FIELD_PROJECT_ID`] with the messages below.
//!
//! Numeric fields accept JSON numbers and numeric strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::FieldErrors;

// ---------------------------------------------------------------------------
// Wire field names
// ---------------------------------------------------------------------------

pub const FIELD_PROJECT_ID: &str = "projectId";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_TYPE: &str = "type";
pub const FIELD_WIDTH: &str = "width";
pub const FIELD_HEIGHT: &str = "height";
pub const FIELD_SCALE_FACTOR: &str = "scaleFactor";

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

pub const DEFAULT_WIDTH: f64 = 0.0;
pub const DEFAULT_HEIGHT: f64 = 0.0;
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;

pub const PROJECT_ID_REQUIRED_MESSAGE: &str = "Project ID cannot be blank.";
/// Used for both missing and inaccessible projects so existence is not leaked.
pub const PROJECT_ID_INVALID_MESSAGE: &str = "Invalid project ID.";

// ---------------------------------------------------------------------------
// Prototype type
// ---------------------------------------------------------------------------

/// Target device of a prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrototypeType {
    #[default]
    Desktop,
    Mobile,
}

/// All valid prototype type strings.
pub const VALID_TYPE_STRINGS: &[&str] = &["desktop", "mobile"];

impl PrototypeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            _ => Err(CoreError::Validation(format!(
                "Invalid prototype type '{s}'. Must be one of: {}",
                VALID_TYPE_STRINGS.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be blank.".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title should contain at most {MAX_TITLE_LENGTH} characters."
        ));
    }
    Ok(())
}

pub fn validate_type(value: &str) -> Result<(), String> {
    PrototypeType::parse(value).map(|_| ()).map_err(|_| {
        format!(
            "Type is invalid. Must be one of: {}.",
            VALID_TYPE_STRINGS.join(", ")
        )
    })
}

/// Dimensions and scale factor share the same rule: a finite number `>= 0`.
pub fn validate_non_negative(label: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{label} must be a number."));
    }
    if value < 0.0 {
        return Err(format!("{label} must be no less than 0."));
    }
    Ok(())
}

/// Whether missing required fields are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

/// Write payload as received. Each field stays untyped JSON so a value of
/// the wrong type is reported against that field instead of rejecting the
/// whole body. `null` counts as omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrototypeInput {
    pub project_id: Option<Value>,
    pub title: Option<Value>,
    #[serde(rename = "type")]
    pub prototype_type: Option<Value>,
    pub width: Option<Value>,
    pub height: Option<Value>,
    pub scale_factor: Option<Value>,
}

/// Typed values of the submitted fields that passed validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrototypeChanges {
    pub project_id: Option<DbId>,
    pub title: Option<String>,
    pub prototype_type: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub scale_factor: Option<f64>,
}

/// Integer ids arrive as JSON numbers or numeric strings.
fn id_value(value: &Value) -> Option<DbId> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn number_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn check_number(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: Option<&Value>,
) -> Option<f64> {
    let value = value?;
    let Some(number) = number_value(value) else {
        errors.add(field, format!("{label} must be a number."));
        return None;
    };
    match validate_non_negative(label, number) {
        Ok(()) => Some(number),
        Err(message) => {
            errors.add(field, message);
            None
        }
    }
}

impl PrototypeInput {
    /// Check every submitted field, collecting all failures.
    ///
    /// `projectId` is only checked for presence and shape here; whether
    /// the project is accessible is up to the caller (see the module docs).
    pub fn validate(&self, mode: ValidationMode) -> (PrototypeChanges, FieldErrors) {
        let mut errors = FieldErrors::new();
        let mut changes = PrototypeChanges::default();

        match self.project_id.as_ref() {
            Some(value) => match id_value(value) {
                Some(id) => changes.project_id = Some(id),
                None => errors.add(FIELD_PROJECT_ID, PROJECT_ID_INVALID_MESSAGE),
            },
            None if mode == ValidationMode::Create => {
                errors.add(FIELD_PROJECT_ID, PROJECT_ID_REQUIRED_MESSAGE);
            }
            None => {}
        }

        match self.title.as_ref() {
            Some(Value::String(title)) => match validate_title(title) {
                Ok(()) => changes.title = Some(title.clone()),
                Err(message) => errors.add(FIELD_TITLE, message),
            },
            Some(_) => errors.add(FIELD_TITLE, "Title must be a string."),
            None if mode == ValidationMode::Create => {
                errors.add(FIELD_TITLE, "Title cannot be blank.");
            }
            None => {}
        }

        if let Some(value) = self.prototype_type.as_ref() {
            let t = value.as_str().unwrap_or_default();
            match validate_type(t) {
                Ok(()) => changes.prototype_type = Some(t.to_string()),
                Err(message) => errors.add(FIELD_TYPE, message),
            }
        }

        changes.width = check_number(&mut errors, FIELD_WIDTH, "Width", self.width.as_ref());
        changes.height = check_number(&mut errors, FIELD_HEIGHT, "Height", self.height.as_ref());
        changes.scale_factor = check_number(
            &mut errors,
            FIELD_SCALE_FACTOR,
            "Scale Factor",
            self.scale_factor.as_ref(),
        );

        (changes, errors)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn input(body: Value) -> PrototypeInput {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn type_parses_known_values() {
        assert_eq!(PrototypeType::parse("desktop").unwrap(), PrototypeType::Desktop);
        assert_eq!(PrototypeType::parse("mobile").unwrap(), PrototypeType::Mobile);
        assert_eq!(PrototypeType::default().as_str(), "desktop");
    }

    #[test]
    fn type_rejects_unknown_and_wrong_case() {
        assert_matches!(PrototypeType::parse("tablet"), Err(CoreError::Validation(_)));
        assert_matches!(PrototypeType::parse("Desktop"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn blank_title_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title("Home").is_ok());
    }

    #[test]
    fn title_length_limit() {
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH)).is_ok());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn non_negative_accepts_zero_and_positive() {
        assert!(validate_non_negative("Width", 0.0).is_ok());
        assert!(validate_non_negative("Width", 1440.0).is_ok());
        assert!(validate_non_negative("Width", -0.5).is_err());
        assert!(validate_non_negative("Width", f64::NAN).is_err());
        assert!(validate_non_negative("Width", f64::INFINITY).is_err());
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let body = input(json!({
            "title": "",
            "type": "invalid",
            "width": -10,
            "height": -10,
            "scaleFactor": -10
        }));
        let (changes, errors) = body.validate(ValidationMode::Update);
        for field in [FIELD_TITLE, FIELD_TYPE, FIELD_WIDTH, FIELD_HEIGHT, FIELD_SCALE_FACTOR] {
            assert!(errors.contains(field), "missing error for {field}");
        }
        assert_eq!(errors.len(), 5);
        assert_eq!(changes, PrototypeChanges::default());
    }

    #[test]
    fn wrong_json_types_become_field_errors() {
        let body = input(json!({
            "projectId": "abc",
            "title": 42,
            "type": true,
            "width": "wide",
            "height": [1],
            "scaleFactor": {"x": 1}
        }));
        let (_, errors) = body.validate(ValidationMode::Create);
        assert_eq!(errors.get(FIELD_PROJECT_ID), Some(PROJECT_ID_INVALID_MESSAGE));
        assert_eq!(errors.get(FIELD_TITLE), Some("Title must be a string."));
        assert!(errors.contains(FIELD_TYPE));
        assert_eq!(errors.get(FIELD_WIDTH), Some("Width must be a number."));
        assert_eq!(errors.get(FIELD_HEIGHT), Some("Height must be a number."));
        assert_eq!(
            errors.get(FIELD_SCALE_FACTOR),
            Some("Scale Factor must be a number.")
        );
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let body = input(json!({"projectId": "1001", "title": "x", "width": " 320 "}));
        let (changes, errors) = body.validate(ValidationMode::Create);
        assert!(errors.is_empty());
        assert_eq!(changes.project_id, Some(1001));
        assert_eq!(changes.width, Some(320.0));
    }

    #[test]
    fn create_requires_project_and_title() {
        let (_, errors) = PrototypeInput::default().validate(ValidationMode::Create);
        assert_eq!(errors.get(FIELD_PROJECT_ID), Some(PROJECT_ID_REQUIRED_MESSAGE));
        assert!(errors.contains(FIELD_TITLE));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn null_counts_as_omitted() {
        let body = input(json!({"title": null, "width": null}));
        let (changes, errors) = body.validate(ValidationMode::Update);
        assert!(errors.is_empty());
        assert_eq!(changes, PrototypeChanges::default());
    }

    #[test]
    fn valid_fields_pass() {
        let body = input(json!({
            "projectId": 1001,
            "title": "Landing",
            "type": "mobile",
            "width": 375,
            "height": 812.5,
            "scaleFactor": 0.5
        }));
        let (changes, errors) = body.validate(ValidationMode::Create);
        assert!(errors.is_empty());
        assert_eq!(
            changes,
            PrototypeChanges {
                project_id: Some(1001),
                title: Some("Landing".to_string()),
                prototype_type: Some("mobile".to_string()),
                width: Some(375.0),
                height: Some(812.5),
                scale_factor: Some(0.5),
            }
        );
    }
}
