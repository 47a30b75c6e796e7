//! 调用信封
//! Invocation envelope
//!
//! 每次工具调用交换的请求/响应对
//! The request/response pair exchanged per tool call
//!
//! ```text
//! request:  { "toolUseId": "...", "input": { ... }, "name": "..." }
//! response: { "toolUseId": "...", "status": "success" | "error", "content": [ { "text": "..." } ] }
//! ```

use crate::error::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn empty_input() -> Value {
    Value::Object(serde_json::Map::new())
}

/// 调用请求
/// Invocation request
///
/// 由编排器创建，单次消费
/// Created by the orchestrator, consumed once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// 调用 ID (响应中原样返回)
    /// Invocation id (echoed in the response)
    #[serde(rename = "toolUseId")]
    pub tool_use_id: String,
    /// 目标工具名称 (可选，用于路由)
    /// Target tool name (optional, used for routing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 输入参数
    /// Input payload
    #[serde(default = "empty_input")]
    pub input: Value,
}

impl ToolInvocation {
    /// 创建新的调用请求
    /// Create a new invocation
    pub fn new(tool_use_id: impl Into<String>, input: Value) -> Self {
        Self {
            tool_use_id: tool_use_id.into(),
            name: None,
            input,
        }
    }

    /// 设置目标工具
    /// Set the target tool
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// 获取参数值
    /// Get a raw input value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.input.get(key)
    }

    /// 获取字符串参数
    /// Get a string parameter
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.input.get(key).and_then(Value::as_str)
    }

    /// 获取整数参数
    /// Get an integer parameter
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.input.get(key).and_then(Value::as_i64)
    }

    /// 反序列化为类型化参数
    /// Decode a parameter into a typed value
    pub fn get_as<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.input
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// 输入是否为对象
    /// Whether the payload is a JSON object
    pub fn has_object_input(&self) -> bool {
        self.input.is_object()
    }
}

/// 调用状态
/// Invocation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

impl std::fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// 响应内容项
/// Response content item
///
/// Serialized as `{"text": ...}` or `{"json": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentBlock {
    Text(String),
    Json(Value),
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }
}

/// 调用响应
/// Invocation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// 原始调用 ID
    /// Originating invocation id
    #[serde(rename = "toolUseId")]
    pub tool_use_id: String,
    /// 状态
    /// Status
    pub status: ToolStatus,
    /// 有序内容列表
    /// Ordered content items
    pub content: Vec<ContentBlock>,
}

impl ToolResponse {
    /// 创建文本成功响应
    /// Create a text success response
    pub fn success_text(tool_use_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tool_use_id: tool_use_id.into(),
            status: ToolStatus::Success,
            content: vec![ContentBlock::text(text)],
        }
    }

    /// 创建 JSON 成功响应
    /// Create a JSON success response
    pub fn success_json(tool_use_id: impl Into<String>, value: Value) -> Self {
        Self {
            tool_use_id: tool_use_id.into(),
            status: ToolStatus::Success,
            content: vec![ContentBlock::Json(value)],
        }
    }

    /// 创建失败响应
    /// Create an error response
    pub fn error(tool_use_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tool_use_id: tool_use_id.into(),
            status: ToolStatus::Error,
            content: vec![ContentBlock::text(message)],
        }
    }

    /// 从错误创建失败响应
    /// Create an error response from a [`ToolError`]
    pub fn from_error(tool_use_id: impl Into<String>, err: &ToolError) -> Self {
        Self::error(tool_use_id, format!("Error: {err}"))
    }

    /// 追加内容项
    /// Append a content item
    pub fn with_content(mut self, block: ContentBlock) -> Self {
        self.content.push(block);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }

    /// 第一个文本内容
    /// First text content item
    pub fn text(&self) -> Option<&str> {
        self.content.iter().find_map(ContentBlock::as_text)
    }
}
