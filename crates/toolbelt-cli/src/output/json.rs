//! JSON output formatting

use crate::CliError;
use serde::Serialize;
use serde_json::{Value, json};

/// Trait for types that can be serialized to JSON output
pub trait JsonOutput {
    /// Convert to JSON value
    fn to_json(&self) -> Value;

    /// Pretty-printed JSON for stdout
    fn to_pretty_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

impl<T: Serialize> JsonOutput for T {
    fn to_json(&self) -> Value {
        json!(self)
    }
}
