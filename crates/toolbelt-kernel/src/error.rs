//! 工具错误类型定义
//! Tool error types
//!
//! 统一的工具调用错误处理
//! Unified error handling for tool invocation

use thiserror::Error;

/// 工具操作结果类型
/// Result type for tool operations
pub type ToolResult<T> = Result<T, ToolError>;

/// 工具错误类型
/// Tool error type
#[derive(Debug, Error)]
pub enum ToolError {
    /// 工具未找到
    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// 工具重名
    /// Duplicate tool name
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    /// 输入 Schema 无效
    /// Input schema does not compile
    #[error("Invalid input schema for tool {tool}: {message}")]
    InvalidSchema { tool: String, message: String },

    /// 输入校验失败
    /// Input failed schema validation
    #[error("Validation failed for tool {tool}: {message}")]
    ValidationFailed { tool: String, message: String },

    /// 参数无法解析为工具的参数类型
    /// Arguments could not be decoded into the tool's argument type
    #[error("Invalid arguments for tool {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    /// 工具执行失败
    /// Tool execution failed
    #[error("Tool execution failed: {tool}: {message}")]
    ExecutionFailed { tool: String, message: String },

    /// 调用请求未指定工具
    /// The invocation does not name a tool
    #[error("Invocation {0} does not name a tool")]
    UnnamedInvocation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// 序列化错误
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl ToolError {
    pub fn invalid_schema(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            tool: tool.into(),
            message: message.into(),
        }
    }

    pub fn validation_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// 创建工具执行失败错误
    /// Create a tool execution failure
    pub fn execution_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ToolError::ToolNotFound("weather".to_string());
        assert_eq!(err.to_string(), "Tool not found: weather");
    }

    #[test]
    fn test_validation_failed() {
        let err = ToolError::validation_failed("weather_module", "city: Field 'city' is required");
        assert!(err.to_string().contains("weather_module"));
        assert!(err.to_string().contains("Field 'city' is required"));
    }

    #[test]
    fn test_from_serde_json() {
        let err: ToolError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ToolError::Serialization(_)));
    }
}
