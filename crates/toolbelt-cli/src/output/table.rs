//! Table formatting for CLI output

use comfy_table::{ContentArrangement, Table as ComfyTable};
use serde_json::Value;

/// Table for CLI output
#[derive(Debug, Clone)]
pub struct Table {
    inner: ComfyTable,
}

impl Table {
    /// Create a table from a JSON array of flat objects
    pub fn from_json_array(arr: &[Value]) -> Self {
        let mut table = ComfyTable::new();

        if arr.is_empty() {
            return Self { inner: table };
        }

        // Headers come from the first object
        if let Some(first) = arr.first()
            && let Some(obj) = first.as_object()
        {
            let headers: Vec<String> = obj.keys().cloned().collect();
            table.set_header(&headers);
        }

        for item in arr {
            if let Some(obj) = item.as_object() {
                let row: Vec<String> = obj
                    .values()
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        Value::Null => "".to_string(),
                        _ => v.to_string(),
                    })
                    .collect();
                table.add_row(row);
            }
        }

        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(120);

        Self { inner: table }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
