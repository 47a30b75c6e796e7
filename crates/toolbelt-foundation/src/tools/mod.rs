//! 工具模块
//! Tool module
//!
//! - `adapters` - 函数到工具的适配器 (TypedTool, DescriptorTool)
//! - `registry` - 工具注册中心实现
//! - `builtin` - 内置工具

pub mod adapters;
pub mod builtin;
pub mod registry;

pub use adapters::{DescriptorTool, TypedTool, inferred_schema};
pub use builtin::{build_builtin_registry, builtin_registry, builtin_tools};
pub use registry::{ToolRegistry, ToolRegistryBuilder};
