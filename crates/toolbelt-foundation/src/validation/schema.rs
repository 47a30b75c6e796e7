//! Schema-based validation for tool inputs
//!
//! Input schemas are compiled once at registration and checked against every
//! payload before the handler runs.

use crate::validation::error::{
    INVALID_PAYLOAD, REQUIRED_FIELD_MISSING, SCHEMA_VIOLATION, TYPE_MISMATCH, ValidationIssue,
    ValidationReport,
};
use jsonschema::JSONSchema;
use jsonschema::error::ValidationErrorKind;
use serde_json::Value;
use toolbelt_kernel::{ToolError, ToolResult};

/// Compiled validator for one tool's input schema
pub struct SchemaValidator {
    compiled: JSONSchema,
    /// Top-level property defaults, in schema order
    defaults: Vec<(String, Value)>,
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// Compile `schema`; `tool` only labels the error.
    pub fn compile(tool: &str, schema: &Value) -> ToolResult<Self> {
        if !schema.is_object() {
            return Err(ToolError::invalid_schema(tool, "schema must be a JSON object"));
        }

        let compiled = JSONSchema::compile(schema)
            .map_err(|e| ToolError::invalid_schema(tool, e.to_string()))?;

        let defaults = schema
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .filter_map(|(name, prop)| {
                        prop.get("default").map(|d| (name.clone(), d.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { compiled, defaults })
    }

    /// Insert declared defaults for absent top-level fields. Returns how many
    /// were filled; non-object payloads are left alone.
    pub fn apply_defaults(&self, input: &mut Value) -> usize {
        let Some(obj) = input.as_object_mut() else {
            return 0;
        };

        let mut filled = 0;
        for (field, default) in &self.defaults {
            if !obj.contains_key(field) {
                obj.insert(field.clone(), default.clone());
                filled += 1;
            }
        }
        filled
    }

    /// Validate a payload against the compiled schema
    pub fn validate(&self, input: &Value) -> ValidationReport {
        if !input.is_object() {
            return ValidationReport::with_issues(vec![ValidationIssue::new(
                "input",
                "Tool input must be a JSON object",
                INVALID_PAYLOAD,
            )]);
        }

        match self.compiled.validate(input) {
            Ok(()) => ValidationReport::default(),
            Err(errors) => ValidationReport::with_issues(errors.map(|e| to_issue(&e)).collect()),
        }
    }
}

/// "/filters/0" -> "filters.0"; the root pointer becomes "input".
fn field_path(pointer: &str) -> String {
    let trimmed = pointer.trim_start_matches('/');
    if trimmed.is_empty() {
        "input".to_string()
    } else {
        trimmed.replace('/', ".")
    }
}

fn to_issue(error: &jsonschema::ValidationError<'_>) -> ValidationIssue {
    let pointer = error.instance_path.to_string();

    match &error.kind {
        ValidationErrorKind::Required { property } => {
            let name = property
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| property.to_string());
            let field = if pointer.is_empty() {
                name
            } else {
                format!("{}.{}", field_path(&pointer), name)
            };
            let message = format!("Field '{field}' is required");
            ValidationIssue::new(field, message, REQUIRED_FIELD_MISSING)
        }
        ValidationErrorKind::Type { .. } => {
            let field = field_path(&pointer);
            let message = format!("Field '{field}' has the wrong type: {error}");
            ValidationIssue::new(field, message, TYPE_MISMATCH)
        }
        _ => ValidationIssue::new(field_path(&pointer), error.to_string(), SCHEMA_VIOLATION),
    }
}
