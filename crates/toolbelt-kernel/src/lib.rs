// error module
pub mod error;
pub use error::{ToolError, ToolResult};

// tool module (envelope, descriptor, context, traits)
pub mod tool;
pub use tool::*;

// configuration module
pub mod config;
pub use config::{MissingFieldPolicy, ToolbeltConfig};
