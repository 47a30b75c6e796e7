//! `toolbelt list` command implementation

use crate::context::CliContext;
use crate::output::{JsonOutput, OutputFormat, Table};
use colored::Colorize;
use serde::Serialize;
use toolbelt_kernel::{ToolDescriptor, ToolRegistry as _};

/// Execute the `toolbelt list` command
pub fn run(ctx: &CliContext, format: OutputFormat) -> anyhow::Result<()> {
    let descriptors = ctx.registry.list();

    match format {
        OutputFormat::Json => {
            println!("{}", descriptors.to_pretty_json()?);
        }
        OutputFormat::Table => {
            let rows: Vec<ToolRow> = descriptors.iter().map(ToolRow::from).collect();
            let json = serde_json::to_value(&rows)?;
            if let Some(arr) = json.as_array() {
                println!("{}", Table::from_json_array(arr));
            }
        }
        OutputFormat::Text => {
            println!("{} {} registered tools", "→".green(), descriptors.len());
            println!();

            let width = descriptors.iter().map(|d| d.name.len()).max().unwrap_or(0);
            for descriptor in &descriptors {
                let name = format!("{:<width$}", descriptor.name);
                println!("  {}  {}", name.cyan(), descriptor.description);
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize)]
struct ToolRow {
    name: String,
    description: String,
    required: String,
}

impl From<&ToolDescriptor> for ToolRow {
    fn from(descriptor: &ToolDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            description: descriptor.description.clone(),
            required: descriptor.required_fields().join(", "),
        }
    }
}
