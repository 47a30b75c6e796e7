//! CLI context providing access to the tool registry

use crate::cli::Cli;
use crate::error::CliError;
use toolbelt_foundation::{ToolRegistry, build_builtin_registry};
use toolbelt_kernel::{InvocationContext, ToolbeltConfig};
use tracing::debug;

/// Agent name reported to tools invoked from the command line
pub const CLI_AGENT_NAME: &str = "toolbelt-cli";

/// Shared context for CLI commands
pub struct CliContext {
    /// Registry of the built-in tools, configured from file and flags
    pub registry: ToolRegistry,
}

impl CliContext {
    pub fn new(config: ToolbeltConfig) -> Result<Self, CliError> {
        let registry = build_builtin_registry(config)?;
        Ok(Self { registry })
    }

    /// Context handed to every tool invocation
    pub fn invocation_context(&self) -> InvocationContext {
        InvocationContext::new().with_agent_name(CLI_AGENT_NAME)
    }
}

/// Resolve configuration: the `--config` file or defaults, then `TOOLBELT__*`
/// environment overrides, then command-line flags on top.
pub fn load_config(cli: &Cli) -> Result<ToolbeltConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            let path = path.to_string_lossy();
            debug!(path = %path, "loading configuration");
            ToolbeltConfig::load(&path)?
        }
        None => ToolbeltConfig::from_env()?,
    };

    if let Some(policy) = cli.missing_fields {
        config.missing_fields = policy;
    }

    Ok(config)
}
