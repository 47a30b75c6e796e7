//! Input validation for tool invocations
//!
//! - **Schema validation**: payloads are checked against the tool's JSON Schema
//!   (draft 7 semantics) compiled once at registration
//! - **Defaults**: `default` values declared on top-level properties are filled
//!   into the payload before validation
//! - **Detailed error reporting**: every violation becomes a [`ValidationIssue`]
//!   with a field path and an error code

pub mod error;
pub mod schema;

pub use error::{
    INVALID_PAYLOAD, REQUIRED_FIELD_MISSING, SCHEMA_VIOLATION, TYPE_MISMATCH, ValidationIssue,
    ValidationReport,
};
pub use schema::SchemaValidator;
