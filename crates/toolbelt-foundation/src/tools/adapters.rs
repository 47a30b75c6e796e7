//! 工具适配器
//! Tool adapters
//!
//! 两种把普通函数接入 [`Tool`] 的方式
//! Two ways of turning a plain function into a [`Tool`]
//!
//! - [`TypedTool`]: direct-parameter style. The schema is inferred from a typed
//!   argument struct and the display name is supplied separately.
//! - [`DescriptorTool`]: descriptor-driven style. The descriptor is declared by
//!   hand and the handler receives the whole invocation.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use toolbelt_kernel::{
    InvocationContext, Tool, ToolDescriptor, ToolError, ToolInvocation, ToolResponse,
};
use tracing::debug;

/// Infer an input schema from an argument type.
///
/// The `$schema` and `title` keys schemars adds are dropped so the result reads
/// like a hand-written descriptor schema.
pub fn inferred_schema<A: JsonSchema>() -> Value {
    let mut schema = schemars::schema_for!(A).to_value();
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
    }
    schema
}

/// 类型化工具
/// Typed Tool
///
/// 从函数及其参数类型创建工具
/// Create a tool from a function and its argument type
///
/// # 示例
///
/// ```rust,ignore
/// use toolbelt_foundation::tools::TypedTool;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct ShoutArgs {
///     /// Text to shout
///     text: String,
/// }
///
/// let tool = TypedTool::new("shout", "Upper-case some text", |args: ShoutArgs| {
///     args.text.to_uppercase()
/// });
/// ```
pub struct TypedTool<A, F>
where
    F: Fn(A) -> String + Send + Sync,
{
    descriptor: ToolDescriptor,
    handler: F,
    _args: PhantomData<fn(A)>,
}

impl<A, F> TypedTool<A, F>
where
    A: DeserializeOwned + JsonSchema,
    F: Fn(A) -> String + Send + Sync,
{
    /// 创建新的类型化工具
    /// Create a new typed tool
    pub fn new(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self {
        Self {
            descriptor: ToolDescriptor::new(name, description, inferred_schema::<A>()),
            handler,
            _args: PhantomData,
        }
    }

    /// 直接调用，不经过信封
    /// Call the handler directly, bypassing the envelope
    pub fn call(&self, args: A) -> String {
        (self.handler)(args)
    }
}

#[async_trait]
impl<A, F> Tool for TypedTool<A, F>
where
    A: DeserializeOwned + JsonSchema + Send + 'static,
    F: Fn(A) -> String + Send + Sync + 'static,
{
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    async fn invoke(&self, invocation: ToolInvocation, _ctx: &InvocationContext) -> ToolResponse {
        match serde_json::from_value::<A>(invocation.input) {
            Ok(args) => ToolResponse::success_text(invocation.tool_use_id, self.call(args)),
            Err(e) => {
                debug!(tool = %self.descriptor.name, error = %e, "argument decoding failed");
                let err = ToolError::invalid_arguments(&self.descriptor.name, e.to_string());
                ToolResponse::from_error(invocation.tool_use_id, &err)
            }
        }
    }
}

/// 描述符工具
/// Descriptor Tool
///
/// 描述符与函数分开声明，函数接收完整的调用请求
/// The descriptor is declared apart from the function, which receives the
/// whole invocation plus the context
///
/// # 示例
///
/// ```rust,ignore
/// use toolbelt_foundation::tools::DescriptorTool;
///
/// let tool = DescriptorTool::new(
///     ToolDescriptor::new("add", "Add two numbers", json!({ "type": "object" })),
///     |invocation, _ctx| {
///         let a = invocation.get_i64("a").unwrap_or(0);
///         let b = invocation.get_i64("b").unwrap_or(0);
///         ToolResponse::success_text(&invocation.tool_use_id, format!("{}", a + b))
///     },
/// );
/// ```
pub struct DescriptorTool<F>
where
    F: Fn(&ToolInvocation, &InvocationContext) -> ToolResponse + Send + Sync,
{
    descriptor: ToolDescriptor,
    handler: F,
}

impl<F> DescriptorTool<F>
where
    F: Fn(&ToolInvocation, &InvocationContext) -> ToolResponse + Send + Sync,
{
    /// 创建新的描述符工具
    /// Create a new descriptor tool
    pub fn new(descriptor: ToolDescriptor, handler: F) -> Self {
        Self {
            descriptor,
            handler,
        }
    }
}

#[async_trait]
impl<F> Tool for DescriptorTool<F>
where
    F: Fn(&ToolInvocation, &InvocationContext) -> ToolResponse + Send + Sync + 'static,
{
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    async fn invoke(&self, invocation: ToolInvocation, ctx: &InvocationContext) -> ToolResponse {
        (self.handler)(&invocation, ctx)
    }
}
