//! CLI command definitions using clap

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use toolbelt_kernel::MissingFieldPolicy;

/// Toolbelt CLI - Inspect and invoke agent tools
#[derive(Parser)]
#[command(name = "toolbelt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json, table)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Handling of absent required fields (reject, substitute)
    #[arg(long, global = true)]
    pub missing_fields: Option<MissingFieldPolicy>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List registered tools
    List,

    /// Show a tool descriptor
    Describe {
        /// Tool name
        name: String,
    },

    /// Invoke a tool and print the response
    Invoke(InvokeArgs),
}

/// Arguments of `toolbelt invoke`
#[derive(Args, Debug, Clone)]
pub struct InvokeArgs {
    /// Tool name (optional with --request when the request carries one)
    pub name: Option<String>,

    /// Input payload as a JSON object
    #[arg(short, long, conflicts_with = "request")]
    pub input: Option<String>,

    /// Invocation id (a UUID is generated when absent)
    #[arg(long, conflicts_with = "request")]
    pub id: Option<String>,

    /// Read a full request envelope from a file, or `-` for stdin
    #[arg(short, long)]
    pub request: Option<PathBuf>,
}
