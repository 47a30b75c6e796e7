//! Toolbelt CLI - list, describe and invoke registered tools

mod cli;
mod commands;
mod context;
mod error;
mod output;

pub use error::CliError;

use clap::Parser;
use cli::{Cli, Commands};
use context::CliContext;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = context::load_config(&cli)?;

    // Logs go to stderr; stdout carries command output only
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_command_async(cli, config))
}

async fn run_command_async(cli: Cli, config: toolbelt_kernel::ToolbeltConfig) -> anyhow::Result<()> {
    let ctx = CliContext::new(config)?;
    let format = cli.output.unwrap_or_default();

    match cli.command {
        Commands::List => {
            commands::tool::list::run(&ctx, format)?;
        }

        Commands::Describe { name } => {
            commands::tool::describe::run(&ctx, &name)?;
        }

        Commands::Invoke(args) => {
            commands::tool::invoke::run(&ctx, args).await?;
        }
    }

    Ok(())
}
