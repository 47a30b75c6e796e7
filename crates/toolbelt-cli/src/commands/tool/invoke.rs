//! `toolbelt invoke` command implementation

use crate::cli::InvokeArgs;
use crate::context::CliContext;
use crate::error::CliError;
use crate::output::JsonOutput;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use toolbelt_kernel::{ToolInvocation, ToolRegistry as _};
use tracing::debug;

/// Execute the `toolbelt invoke` command
///
/// Prints the response envelope whatever its status; only unusable
/// command-line input is an error.
pub async fn run(ctx: &CliContext, args: InvokeArgs) -> anyhow::Result<()> {
    let invocation = build_invocation(args)?;
    debug!(
        tool = invocation.name.as_deref().unwrap_or_default(),
        tool_use_id = %invocation.tool_use_id,
        "invoking"
    );

    let response = ctx
        .registry
        .dispatch(invocation, &ctx.invocation_context())
        .await;

    println!("{}", response.to_pretty_json()?);
    Ok(())
}

fn build_invocation(args: InvokeArgs) -> Result<ToolInvocation, CliError> {
    if let Some(path) = &args.request {
        let raw = read_request(path)?;
        let mut invocation: ToolInvocation = serde_json::from_str(&raw)
            .map_err(|e| CliError::InvalidInput(format!("request envelope: {e}")))?;
        if let Some(name) = args.name {
            invocation.name = Some(name);
        }
        if invocation.name.is_none() {
            return Err(CliError::InvalidInput(
                "request has no tool name; pass one as an argument".to_string(),
            ));
        }
        return Ok(invocation);
    }

    let name = args
        .name
        .ok_or_else(|| CliError::InvalidInput("missing tool name".to_string()))?;
    let input = match args.input.as_deref() {
        Some(raw) => parse_input(raw)?,
        None => Value::Object(serde_json::Map::new()),
    };
    let id = args
        .id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    Ok(ToolInvocation::new(id, input).with_name(name))
}

fn parse_input(raw: &str) -> Result<Value, CliError> {
    serde_json::from_str(raw).map_err(|e| CliError::InvalidInput(format!("--input: {e}")))
}

fn read_request(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
