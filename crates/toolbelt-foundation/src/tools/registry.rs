//! 工具注册中心
//!
//! 启动时通过 builder 构建，之后只读；调用前按配置执行 Schema 校验

use crate::validation::SchemaValidator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use toolbelt_kernel::{
    MissingFieldPolicy, Tool, ToolDescriptor, ToolError, ToolInvocation,
    ToolRegistry as ToolRegistryTrait, ToolResult, ToolbeltConfig,
};
use tracing::{debug, info, warn};

/// 已注册工具及其编译后的 Schema
struct RegisteredTool {
    tool: Arc<dyn Tool>,
    validator: SchemaValidator,
}

/// 工具注册中心
///
/// 名称到 (Schema, 处理函数) 的只读映射
///
/// # 示例
///
/// ```rust,ignore
/// use toolbelt_foundation::tools::{ToolRegistry, builtin};
/// use toolbelt_kernel::ToolRegistry as _;
///
/// let registry = ToolRegistry::builder()
///     .register(builtin::hello_tool().into_dynamic())?
///     .register(builtin::weather_tool().into_dynamic())?
///     .build();
///
/// for tool in registry.list() {
///     info!("{}: {}", tool.name, tool.description);
/// }
/// ```
pub struct ToolRegistry {
    /// 工具存储
    tools: HashMap<String, RegisteredTool>,
    /// 校验配置
    config: ToolbeltConfig,
}

impl ToolRegistry {
    /// 创建构建器
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::new()
    }

    /// 当前配置
    pub fn config(&self) -> &ToolbeltConfig {
        &self.config
    }

    /// 获取工具描述符
    pub fn descriptor(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name).map(|entry| entry.tool.descriptor())
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.tools.keys().collect();
        names.sort();
        f.debug_struct("ToolRegistry")
            .field("tools", &names)
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl ToolRegistryTrait for ToolRegistry {
    fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).map(|entry| entry.tool.clone())
    }

    fn list(&self) -> Vec<ToolDescriptor> {
        let mut descriptors: Vec<ToolDescriptor> = self
            .tools
            .values()
            .map(|entry| entry.tool.descriptor().clone())
            .collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    fn count(&self) -> usize {
        self.tools.len()
    }

    fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    fn validate(&self, tool: &dyn Tool, invocation: &mut ToolInvocation) -> ToolResult<()> {
        let name = tool.name();
        let entry = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::ToolNotFound(name.to_string()))?;

        if self.config.apply_defaults {
            let filled = entry.validator.apply_defaults(&mut invocation.input);
            if filled > 0 {
                debug!(tool = name, filled, "filled schema defaults");
            }
        }

        let mut report = entry.validator.validate(&invocation.input);

        if self.config.missing_fields == MissingFieldPolicy::Substitute {
            for issue in report.take_missing_fields() {
                warn!(
                    tool = name,
                    tool_use_id = %invocation.tool_use_id,
                    field = %issue.field,
                    "required field missing, handler fallback applies"
                );
            }
        }

        if report.is_valid() {
            Ok(())
        } else {
            Err(ToolError::validation_failed(name, report.to_string()))
        }
    }
}

/// 注册中心构建器
pub struct ToolRegistryBuilder {
    tools: HashMap<String, RegisteredTool>,
    config: ToolbeltConfig,
}

impl ToolRegistryBuilder {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            config: ToolbeltConfig::default(),
        }
    }

    /// 设置校验配置
    pub fn with_config(mut self, config: ToolbeltConfig) -> Self {
        self.config = config;
        self
    }

    /// 注册工具：名称必须唯一，Schema 必须可编译
    pub fn register(mut self, tool: Arc<dyn Tool>) -> ToolResult<Self> {
        let name = tool.name().to_string();
        if name.trim().is_empty() {
            return Err(ToolError::invalid_schema("<unnamed>", "tool name cannot be empty"));
        }
        if self.tools.contains_key(&name) {
            return Err(ToolError::DuplicateTool(name));
        }

        let validator = SchemaValidator::compile(&name, tool.input_schema())?;
        debug!(tool = %name, "registered tool");
        self.tools.insert(name, RegisteredTool { tool, validator });
        Ok(self)
    }

    /// 批量注册工具
    pub fn register_all(self, tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> ToolResult<Self> {
        tools.into_iter().try_fold(self, |builder, tool| builder.register(tool))
    }

    pub fn build(self) -> ToolRegistry {
        info!(
            tools = self.tools.len(),
            missing_fields = %self.config.missing_fields,
            "tool registry ready"
        );
        ToolRegistry {
            tools: self.tools,
            config: self.config,
        }
    }
}

impl Default for ToolRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::adapters::DescriptorTool;
    use serde_json::json;
    use toolbelt_kernel::{InvocationContext, ToolExt, ToolResponse, ToolStatus};

    fn echo_tool(name: &str, schema: serde_json::Value) -> Arc<dyn Tool> {
        DescriptorTool::new(
            ToolDescriptor::new(name, "Echo the input back", schema),
            |invocation: &ToolInvocation, _ctx: &InvocationContext| {
                ToolResponse::success_json(&invocation.tool_use_id, invocation.input.clone())
            },
        )
        .into_dynamic()
    }

    fn note_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "pinned": { "type": "boolean", "default": false }
            },
            "required": ["title"]
        })
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = ToolRegistry::builder()
            .register(echo_tool("note", note_schema()))
            .and_then(|b| b.register(echo_tool("note", note_schema())));
        assert!(matches!(result, Err(ToolError::DuplicateTool(ref n)) if n == "note"));
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let result = ToolRegistry::builder().register(echo_tool("bad", json!({ "type": "nope" })));
        assert!(matches!(result, Err(ToolError::InvalidSchema { .. })));
    }

    #[test]
    fn test_list_is_sorted() {
        let registry = ToolRegistry::builder()
            .register_all(vec![
                echo_tool("zeta", json!({ "type": "object" })),
                echo_tool("alpha", json!({ "type": "object" })),
            ])
            .unwrap()
            .build();

        assert_eq!(registry.count(), 2);
        assert_eq!(registry.list_names(), vec!["alpha", "zeta"]);
        let names: Vec<String> = registry.list().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert!(registry.descriptor("alpha").is_some());
        assert!(!registry.contains("beta"));
    }

    #[tokio::test]
    async fn test_defaults_filled_before_dispatch() {
        let registry = ToolRegistry::builder()
            .register(echo_tool("note", note_schema()))
            .unwrap()
            .build();

        let response = registry
            .invoke(
                "note",
                ToolInvocation::new("call-1", json!({ "title": "groceries" })),
                &InvocationContext::default(),
            )
            .await;

        assert_eq!(response.status, ToolStatus::Success);
        assert_eq!(
            response.content[0],
            toolbelt_kernel::ContentBlock::Json(json!({ "title": "groceries", "pinned": false }))
        );
    }

    #[tokio::test]
    async fn test_defaults_can_be_disabled() {
        let registry = ToolRegistry::builder()
            .with_config(ToolbeltConfig::default().with_apply_defaults(false))
            .register(echo_tool("note", note_schema()))
            .unwrap()
            .build();

        let response = registry
            .invoke(
                "note",
                ToolInvocation::new("call-2", json!({ "title": "groceries" })),
                &InvocationContext::default(),
            )
            .await;
        assert_eq!(
            response.content[0],
            toolbelt_kernel::ContentBlock::Json(json!({ "title": "groceries" }))
        );
    }

    #[tokio::test]
    async fn test_reject_policy_blocks_missing_field() {
        let registry = ToolRegistry::builder()
            .register(echo_tool("note", note_schema()))
            .unwrap()
            .build();

        let response = registry
            .invoke(
                "note",
                ToolInvocation::new("call-3", json!({ "pinned": true })),
                &InvocationContext::default(),
            )
            .await;

        assert_eq!(response.status, ToolStatus::Error);
        assert_eq!(response.tool_use_id, "call-3");
        let text = response.text().unwrap();
        assert!(text.contains("Validation failed for tool note"), "{text}");
        assert!(text.contains("Field 'title' is required"), "{text}");
    }

    #[tokio::test]
    async fn test_substitute_policy_passes_missing_field() {
        let registry = ToolRegistry::builder()
            .with_config(ToolbeltConfig::default().with_missing_fields(MissingFieldPolicy::Substitute))
            .register(echo_tool("note", note_schema()))
            .unwrap()
            .build();

        let response = registry
            .invoke(
                "note",
                ToolInvocation::new("call-4", json!({ "pinned": true })),
                &InvocationContext::default(),
            )
            .await;
        assert_eq!(response.status, ToolStatus::Success);
    }

    #[tokio::test]
    async fn test_substitute_policy_still_rejects_type_errors() {
        let registry = ToolRegistry::builder()
            .with_config(ToolbeltConfig::default().with_missing_fields(MissingFieldPolicy::Substitute))
            .register(echo_tool("note", note_schema()))
            .unwrap()
            .build();

        let response = registry
            .invoke(
                "note",
                ToolInvocation::new("call-5", json!({ "title": 42 })),
                &InvocationContext::default(),
            )
            .await;
        assert_eq!(response.status, ToolStatus::Error);
        assert!(response.text().unwrap().contains("title"));
    }

    #[tokio::test]
    async fn test_non_object_payload_rejected() {
        let registry = ToolRegistry::builder()
            .register(echo_tool("note", note_schema()))
            .unwrap()
            .build();

        let response = registry
            .invoke(
                "note",
                ToolInvocation::new("call-6", json!(["groceries"])),
                &InvocationContext::default(),
            )
            .await;
        assert_eq!(response.status, ToolStatus::Error);
        assert!(response.text().unwrap().contains("must be a JSON object"));
    }
}
