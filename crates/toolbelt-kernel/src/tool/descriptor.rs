//! 工具描述符
//! Tool descriptor
//!
//! 注册时创建，之后不可变
//! Created once at registration time, immutable afterwards

use crate::error::{ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 输入 Schema 包装
/// Input schema wrapper, serialized as `{"json": <JSON Schema>}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    pub json: Value,
}

/// 工具描述符
/// Tool descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// 工具名称 (注册中心内唯一)
    /// Tool name (unique within a registry)
    pub name: String,
    /// 工具描述
    /// Tool description
    pub description: String,
    /// 输入 Schema
    /// Input schema
    #[serde(rename = "inputSchema")]
    pub input_schema: InputSchema,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: InputSchema { json: schema },
        }
    }

    /// 从 JSON 文档加载
    /// Load a descriptor declared as a JSON document
    pub fn from_json_str(raw: &str) -> ToolResult<Self> {
        let descriptor: Self = serde_json::from_str(raw)?;
        if descriptor.name.trim().is_empty() {
            return Err(ToolError::invalid_schema("<unnamed>", "tool name cannot be empty"));
        }
        Ok(descriptor)
    }

    pub fn schema(&self) -> &Value {
        &self.input_schema.json
    }

    /// 必填字段
    /// Required fields, in declaration order
    pub fn required_fields(&self) -> Vec<&str> {
        self.schema()
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}
