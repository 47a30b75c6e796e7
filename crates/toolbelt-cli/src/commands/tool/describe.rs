//! `toolbelt describe` command implementation

use crate::context::CliContext;
use crate::error::CliError;
use crate::output::JsonOutput;

/// Execute the `toolbelt describe` command
pub fn run(ctx: &CliContext, name: &str) -> anyhow::Result<()> {
    let descriptor = ctx
        .registry
        .descriptor(name)
        .ok_or_else(|| CliError::ToolNotFound(name.to_string()))?;

    println!("{}", descriptor.to_pretty_json()?);
    Ok(())
}
