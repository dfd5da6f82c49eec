//! Insertable projections of each entity and their validation.
//!
//! Request bodies arrive as untyped JSON. Each insertable type reads its
//! fields through [`Fields`], which records every problem it meets instead
//! of stopping at the first one, so a rejected request reports all of its
//! field errors at once. Validation is all-or-nothing: a body with any
//! field error produces no value. The same types derive `Deserialize`
//! with identical wire names for trusted input that needs no reporting.

mod inserts;

pub use inserts::{
    Credentials, MembershipRequest, NewDeliveryCompletion, NewGroup, NewGroupMember,
    NewNotification, NewProfessor, NewProject, NewProjectInterest, NewUser, NewWeeklySchedule,
    StatusChange, StudentRegistration,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::entity::{Choice, Outline};

/// A problem with a single input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field problems found in one request body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        Self(vec![FieldError {
            field: field.to_string(),
            message: message.into(),
        }])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

/// A type that can be built from a validated JSON object.
pub trait Insertable: Sized {
    /// Read every field, recording problems in `fields`. The returned value
    /// is discarded whenever any problem was recorded.
    fn from_fields(fields: &mut Fields<'_>) -> Option<Self>;
}

/// Validate a JSON value against the insertable schema `T`.
pub fn validate_insert<T: Insertable>(raw: &Value) -> Result<T, ValidationErrors> {
    let map = raw
        .as_object()
        .ok_or_else(|| ValidationErrors::single("body", "Expected a JSON object"))?;

    let mut fields = Fields::new(map);
    let parsed = T::from_fields(&mut fields);
    fields.finish(parsed)
}

/// Parse a raw request body and validate it against `T`.
///
/// An empty body is treated as `{}` so that every missing required field
/// is reported.
pub fn parse_body<T: Insertable>(bytes: &[u8]) -> Result<T, ValidationErrors> {
    let raw = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(bytes)
            .map_err(|e| ValidationErrors::single("body", format!("Malformed JSON: {}", e)))?
    };
    validate_insert(&raw)
}

/// Field reader over one JSON object that accumulates errors.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self {
            map,
            errors: Vec::new(),
        }
    }

    /// Record a problem with `field`.
    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    fn finish<T>(self, parsed: Option<T>) -> Result<T, ValidationErrors> {
        if !self.errors.is_empty() {
            return Err(ValidationErrors(self.errors));
        }
        parsed.ok_or_else(|| ValidationErrors::single("body", "Invalid input"))
    }

    // null counts as absent
    fn present(&self, name: &str) -> Option<&'a Value> {
        match self.map.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn required(&mut self, name: &str) -> Option<&'a Value> {
        let value = self.present(name);
        if value.is_none() {
            self.reject(name, "Required");
        }
        value
    }

    pub fn required_string(&mut self, name: &str) -> Option<String> {
        let value = self.required(name)?;
        self.as_string(name, value)
    }

    pub fn optional_string(&mut self, name: &str) -> Option<String> {
        let value = self.present(name)?;
        self.as_string(name, value)
    }

    fn as_string(&mut self, name: &str, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.reject(name, "Expected string");
                None
            }
        }
    }

    /// A required integer no smaller than `min`.
    pub fn required_u32(&mut self, name: &str, min: u32) -> Option<u32> {
        let value = self.required(name)?;
        let n = match (value.as_u64(), value.as_i64()) {
            (Some(n), _) => match u32::try_from(n) {
                Ok(n) => n,
                Err(_) => {
                    self.reject(name, format!("Must be at most {}", u32::MAX));
                    return None;
                }
            },
            (None, Some(_)) => {
                self.reject(name, format!("Must be at least {}", min));
                return None;
            }
            (None, None) => {
                self.reject(name, "Expected integer");
                return None;
            }
        };
        if n < min {
            self.reject(name, format!("Must be at least {}", min));
            return None;
        }
        Some(n)
    }

    pub fn optional_bool(&mut self, name: &str) -> Option<bool> {
        match self.present(name)? {
            Value::Bool(b) => Some(*b),
            _ => {
                self.reject(name, "Expected boolean");
                None
            }
        }
    }

    pub fn string_list(&mut self, name: &str) -> Option<Vec<String>> {
        let value = self.required(name)?;
        let items = value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(String::from))
                .collect::<Option<Vec<_>>>()
        });
        if items.is_none() {
            self.reject(name, "Expected array of strings");
        }
        items
    }

    pub fn outline(&mut self, name: &str) -> Option<Outline> {
        let value = self.required(name)?;
        match serde_json::from_value::<Outline>(value.clone()) {
            Ok(outline) => Some(outline),
            Err(_) => {
                self.reject(name, "Expected array of strings or object of strings");
                None
            }
        }
    }

    pub fn required_choice<C: Choice>(&mut self, name: &str) -> Option<C> {
        let value = self.required(name)?;
        self.as_choice(name, value)
    }

    pub fn optional_choice<C: Choice>(&mut self, name: &str) -> Option<C> {
        let value = self.present(name)?;
        self.as_choice(name, value)
    }

    fn as_choice<C: Choice>(&mut self, name: &str, value: &Value) -> Option<C> {
        let parsed = value.as_str().and_then(|s| s.parse::<C>().ok());
        if parsed.is_none() {
            let shown = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            self.reject(
                name,
                format!(
                    "Invalid value '{}'. Valid values: {}",
                    shown,
                    C::VARIANTS.join(", ")
                ),
            );
        }
        parsed
    }

    /// An RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
    pub fn required_datetime(&mut self, name: &str) -> Option<DateTime<Utc>> {
        let value = self.required(name)?;
        let parsed = value.as_str().and_then(parse_datetime);
        if parsed.is_none() {
            self.reject(
                name,
                "Invalid date. Expected ISO 8601 (YYYY-MM-DD or RFC 3339 timestamp)",
            );
        }
        parsed
    }
}

pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::GroupStatus;
    use serde_json::json;

    #[test]
    fn test_parse_body_rejects_malformed_json() {
        let err = parse_body::<NewGroup>(b"{not json").unwrap_err();
        assert!(err.has_field("body"));
        assert!(err.errors()[0].message.starts_with("Malformed JSON"));
    }

    #[test]
    fn test_parse_body_rejects_non_object() {
        let err = parse_body::<NewGroup>(b"[1, 2]").unwrap_err();
        assert!(err.has_field("body"));
    }

    #[test]
    fn test_empty_body_reports_missing_fields() {
        let err = parse_body::<NewGroup>(b"").unwrap_err();
        assert!(err.has_field("name"));
    }

    #[test]
    fn test_errors_accumulate_across_fields() {
        let raw = json!({ "title": 5, "description": "d", "theme": 0 });
        let err = validate_insert::<NewProject>(&raw).unwrap_err();

        assert!(err.has_field("title"));
        assert!(err.has_field("theme"));
        assert!(err.has_field("context"));
        assert!(err.has_field("architecture"));
        assert!(!err.has_field("description"));
    }

    #[test]
    fn test_choice_error_lists_valid_values() {
        let raw = json!({ "status": "archived" });
        let err = validate_insert::<StatusChange<GroupStatus>>(&raw).unwrap_err();
        let message = &err.errors()[0].message;
        assert!(message.contains("archived"));
        assert!(message.contains("pending, approved, rejected"));
    }

    #[test]
    fn test_null_optional_is_absent() {
        let raw = json!({ "name": "Team A", "projectId": null });
        let group = validate_insert::<NewGroup>(&raw).unwrap();
        assert!(group.project_id.is_none());
    }

    #[test]
    fn test_parse_datetime_accepts_date_and_timestamp() {
        let date = parse_datetime("2025-09-23").unwrap();
        assert_eq!(date.to_rfc3339(), "2025-09-23T00:00:00+00:00");

        let ts = parse_datetime("2025-09-23T12:30:00-03:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-09-23T15:30:00+00:00");

        assert!(parse_datetime("23/09/2025").is_none());
    }

    #[test]
    fn test_integer_bounds_messages() {
        let message_for = |theme: Value| {
            let err = validate_insert::<NewProject>(&json!({ "theme": theme })).unwrap_err();
            err.errors()
                .iter()
                .find(|e| e.field == "theme")
                .map(|e| e.message.clone())
                .unwrap()
        };

        assert_eq!(message_for(json!(0)), "Must be at least 1");
        assert_eq!(message_for(json!(-4)), "Must be at least 1");
        assert_eq!(message_for(json!(4294967296u64)), "Must be at most 4294967295");
        assert_eq!(message_for(json!(1.5)), "Expected integer");
        assert_eq!(message_for(json!("3")), "Expected integer");
    }

    #[test]
    fn test_display_joins_field_errors() {
        let err = ValidationErrors::single("name", "Required");
        assert_eq!(err.to_string(), "Validation failed: name: Required");
    }
}
