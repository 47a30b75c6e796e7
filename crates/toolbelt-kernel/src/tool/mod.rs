//! 工具组件
//! Tool Component
//!
//! 定义统一的工具接口与注册中心接口
//! Defines the unified tool interface and the registry interface
//!
//! - `envelope` - 调用请求/响应 (ToolInvocation, ToolResponse)
//! - `envelope` - Invocation request/response
//! - `descriptor` - 工具描述符 (ToolDescriptor)
//! - `descriptor` - Tool descriptor
//! - `context` - 调用上下文 (InvocationContext)
//! - `context` - Invocation context

pub mod context;
pub mod descriptor;
pub mod envelope;

pub use context::InvocationContext;
pub use descriptor::{InputSchema, ToolDescriptor};
pub use envelope::{ContentBlock, ToolInvocation, ToolResponse, ToolStatus};

use crate::error::{ToolError, ToolResult};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// 统一工具 Trait
/// Unified Tool Trait
///
/// # 示例
/// # Example
///
/// ```rust,ignore
/// use toolbelt_kernel::{InvocationContext, Tool, ToolDescriptor, ToolInvocation, ToolResponse};
///
/// struct Echo {
///     descriptor: ToolDescriptor,
/// }
///
/// #[async_trait]
/// impl Tool for Echo {
///     fn descriptor(&self) -> &ToolDescriptor {
///         &self.descriptor
///     }
///
///     async fn invoke(&self, invocation: ToolInvocation, _ctx: &InvocationContext) -> ToolResponse {
///         let text = invocation.get_str("text").unwrap_or_default().to_string();
///         ToolResponse::success_text(invocation.tool_use_id, text)
///     }
/// }
/// ```
#[async_trait]
pub trait Tool: Send + Sync {
    /// 工具描述符
    /// Tool descriptor
    fn descriptor(&self) -> &ToolDescriptor;

    /// 工具名称 (唯一标识符)
    /// Tool name (unique identifier)
    fn name(&self) -> &str {
        &self.descriptor().name
    }

    /// 工具描述
    /// Tool description
    fn description(&self) -> &str {
        &self.descriptor().description
    }

    /// 输入 JSON Schema
    /// Input JSON Schema
    fn input_schema(&self) -> &Value {
        self.descriptor().schema()
    }

    /// 执行工具，响应必须回显调用 ID
    /// Execute the tool; the response must echo the invocation id
    async fn invoke(&self, invocation: ToolInvocation, ctx: &InvocationContext) -> ToolResponse;
}

/// 工具扩展方法
/// Tool extension methods
pub trait ToolExt: Tool + Sized + 'static {
    /// 转换为动态工具
    /// Convert into a shared dynamic tool
    fn into_dynamic(self) -> Arc<dyn Tool> {
        Arc::new(self)
    }
}

impl<T: Tool + 'static> ToolExt for T {}

// ============================================================================
// 工具注册中心 Trait (接口仅在此定义)
// Tool Registry Trait (Interface defined here only)
// ============================================================================

/// 定义工具查找与调用的接口，具体实现在 foundation 层。
/// Defines tool lookup and invocation; the concrete registry lives in the foundation layer.
///
/// 注册中心构建后不可变，因此这里没有注册方法。
/// Registries are immutable once built, so there is no registration method here.
#[async_trait]
pub trait ToolRegistry: Send + Sync {
    /// 获取工具
    /// Get tool
    fn get(&self, name: &str) -> Option<Arc<dyn Tool>>;

    /// 列出所有工具
    /// List all tools
    fn list(&self) -> Vec<ToolDescriptor>;

    /// 获取工具数量
    /// Get tool count
    fn count(&self) -> usize;

    /// 列出所有工具名称
    /// List all tool names
    fn list_names(&self) -> Vec<String> {
        self.list().into_iter().map(|d| d.name).collect()
    }

    /// 检查工具是否存在
    /// Check if tool exists
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 调用前校验 (可修改输入，例如填充默认值)
    /// Pre-dispatch validation; may rewrite the input, e.g. to fill defaults
    ///
    /// The default only checks that the payload is an object holding every
    /// field the descriptor lists as required. Registries with a full schema
    /// validator override it.
    fn validate(&self, tool: &dyn Tool, invocation: &mut ToolInvocation) -> ToolResult<()> {
        let Some(input) = invocation.input.as_object() else {
            return Err(ToolError::validation_failed(
                tool.name(),
                "input: Tool input must be a JSON object",
            ));
        };

        let missing: Vec<String> = tool
            .descriptor()
            .required_fields()
            .into_iter()
            .filter(|field| !input.contains_key(*field))
            .map(|field| format!("{field}: Field '{field}' is required"))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ToolError::validation_failed(tool.name(), missing.join("; ")))
        }
    }

    /// 执行工具，错误以 error 状态响应返回
    /// Execute a tool; failures come back as error responses
    async fn invoke(
        &self,
        name: &str,
        mut invocation: ToolInvocation,
        ctx: &InvocationContext,
    ) -> ToolResponse {
        let Some(tool) = self.get(name) else {
            warn!(tool = name, tool_use_id = %invocation.tool_use_id, "invocation of unknown tool");
            return ToolResponse::from_error(
                invocation.tool_use_id,
                &ToolError::ToolNotFound(name.to_string()),
            );
        };

        if let Err(err) = self.validate(tool.as_ref(), &mut invocation) {
            warn!(tool = name, tool_use_id = %invocation.tool_use_id, error = %err, "invocation rejected");
            return ToolResponse::from_error(invocation.tool_use_id, &err);
        }

        debug!(tool = name, tool_use_id = %invocation.tool_use_id, "dispatching invocation");
        let tool_use_id = invocation.tool_use_id.clone();
        let mut response = tool.invoke(invocation, ctx).await;
        if response.tool_use_id != tool_use_id {
            warn!(
                tool = name,
                expected = %tool_use_id,
                actual = %response.tool_use_id,
                "tool answered with a foreign invocation id"
            );
            response.tool_use_id = tool_use_id;
        }
        response
    }

    /// 按调用请求中的工具名路由
    /// Route by the tool name carried in the invocation
    async fn dispatch(&self, invocation: ToolInvocation, ctx: &InvocationContext) -> ToolResponse {
        match invocation.name.clone() {
            Some(name) => self.invoke(&name, invocation, ctx).await,
            None => {
                let err = ToolError::UnnamedInvocation(invocation.tool_use_id.clone());
                ToolResponse::from_error(invocation.tool_use_id, &err)
            }
        }
    }
}
