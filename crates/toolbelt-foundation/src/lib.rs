//! Toolbelt foundation layer
//!
//! Concrete registry, schema validation and the built-in tools on top of the
//! contracts in `toolbelt-kernel`.

pub mod tools;
pub mod validation;

pub use tools::{
    DescriptorTool, ToolRegistry, ToolRegistryBuilder, TypedTool, build_builtin_registry,
    builtin_registry, builtin_tools,
};
pub use validation::{SchemaValidator, ValidationIssue, ValidationReport};

// Kernel contracts, so callers can depend on this crate alone.
pub use toolbelt_kernel::{
    ContentBlock, InvocationContext, MissingFieldPolicy, Tool, ToolDescriptor, ToolError,
    ToolExt, ToolInvocation, ToolResponse, ToolResult, ToolStatus, ToolbeltConfig,
};
