//! 问候工具
//! Greeting tool

use crate::tools::adapters::TypedTool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name the greeting tool is registered under.
pub const HELLO_TOOL_NAME: &str = "hello_test";

/// Arguments of the greeting tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HelloArgs {
    /// The name of the person to greet
    pub name: String,
}

/// Concrete type of the registered greeting tool
pub type HelloTool = TypedTool<HelloArgs, fn(HelloArgs) -> String>;

/// Say hello to a person by name.
pub fn hello(name: &str) -> String {
    format!("Hello, {name}!")
}

fn greet(args: HelloArgs) -> String {
    hello(&args.name)
}

/// 创建问候工具
/// Create the greeting tool
pub fn hello_tool() -> HelloTool {
    TypedTool::new(
        HELLO_TOOL_NAME,
        "Say hello to a person by name.",
        greet as fn(HelloArgs) -> String,
    )
}
