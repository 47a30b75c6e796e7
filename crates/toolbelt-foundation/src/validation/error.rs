//! Validation error types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A required field is absent from the payload.
pub const REQUIRED_FIELD_MISSING: &str = "REQUIRED_FIELD_MISSING";
/// A field has the wrong JSON type.
pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
/// The payload is not a JSON object.
pub const INVALID_PAYLOAD: &str = "INVALID_PAYLOAD";
/// Any other schema keyword failed.
pub const SCHEMA_VIOLATION: &str = "SCHEMA_VIOLATION";

/// Represents a single validation issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The field path where validation failed (e.g., "city", "filters.0")
    pub field: String,
    /// Human-readable error message
    pub message: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }

    pub fn is_missing_field(&self) -> bool {
        self.code == REQUIRED_FIELD_MISSING
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collection of validation issues for one payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn with_issues(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Split off missing-field issues, keeping the rest in `self`.
    pub fn take_missing_fields(&mut self) -> Vec<ValidationIssue> {
        let (missing, rest) = std::mem::take(&mut self.issues)
            .into_iter()
            .partition(ValidationIssue::is_missing_field);
        self.issues = rest;
        missing
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let report = ValidationReport::with_issues(vec![
            ValidationIssue::new("city", "Field 'city' is required", REQUIRED_FIELD_MISSING),
            ValidationIssue::new("days", "Field 'days' must be of type integer", TYPE_MISMATCH),
        ]);
        assert_eq!(
            report.to_string(),
            "city: Field 'city' is required; days: Field 'days' must be of type integer"
        );
        assert!(report.issues[0].is_missing_field());
        assert!(!report.issues[1].is_missing_field());
    }

    #[test]
    fn test_take_missing_fields() {
        let mut report = ValidationReport::with_issues(vec![
            ValidationIssue::new("city", "missing", REQUIRED_FIELD_MISSING),
            ValidationIssue::new("days", "bad type", TYPE_MISMATCH),
        ]);
        let missing = report.take_missing_fields();
        assert_eq!(missing.len(), 1);
        assert_eq!(report.len(), 1);
        assert_eq!(report.issues[0].field, "days");
    }
}
