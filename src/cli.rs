//! CLI argument parsing for the prompt package generator.
//!
//! The CLI only gathers inputs; synthesis and flattening live in
//! `synthesize` so the browser form shares the same core.
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_SERVE_ADDR: &str = "127.0.0.1:8080";

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "promptgen",
    version,
    about = "Deterministic prompt package generator",
    after_help = "Examples:\n  promptgen generate --project-name Demo --end-goals \"Do things\"\n  promptgen generate --style tone=formal --out-dir build/prompt\n  promptgen render --package prompt_package.json\n  promptgen blocks --id style-tone --tone formal\n  promptgen serve --addr 127.0.0.1:8080",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Emit debug logs to stderr (PROMPTGEN_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Generate(GenerateArgs),
    Render(RenderArgs),
    Blocks(BlocksArgs),
    Init(InitArgs),
    Serve(ServeArgs),
}

/// Generate command inputs. Unset flags fall back to the config file, then
/// to built-in defaults.
#[derive(Parser, Debug, Default)]
#[command(about = "Synthesize a prompt package and write its artifacts")]
pub struct GenerateArgs {
    /// Project name (prompted for when omitted)
    #[arg(long, value_name = "NAME")]
    pub project_name: Option<String>,

    /// Target framework [default: none]
    #[arg(long, value_name = "FRAMEWORK")]
    pub target_framework: Option<String>,

    /// Output target [default: both]
    #[arg(long, value_name = "TARGET")]
    pub output_target: Option<String>,

    /// Intended audience [default: engineer]
    #[arg(long, value_name = "AUDIENCE")]
    pub audience: Option<String>,

    /// End goals for the system mission (prompted for when omitted)
    #[arg(long, value_name = "GOALS")]
    pub end_goals: Option<String>,

    /// Style choice as KEY=VALUE; repeatable
    #[arg(long = "style", value_name = "KEY=VALUE")]
    pub style: Vec<String>,

    /// JSON file holding an array of variable records
    #[arg(long, value_name = "PATH")]
    pub variables: Option<PathBuf>,

    /// Explicit assembly order as comma-separated block ids
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    pub assembly_order: Option<Vec<String>>,

    /// Config file with input defaults (else PROMPTGEN_CONFIG, else the user config)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for the generated artifacts [default: .]
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Pin HEADER timestamps to an RFC 3339 instant for reproducible output
    #[arg(long, value_name = "RFC3339")]
    pub timestamp: Option<String>,

    /// Fail instead of prompting for missing required fields
    #[arg(long)]
    pub no_input: bool,
}

/// Render command inputs.
#[derive(Parser, Debug)]
#[command(about = "Print the flattened prompt of an existing package")]
pub struct RenderArgs {
    /// Path to a prompt_package.json
    #[arg(long, value_name = "PATH")]
    pub package: PathBuf,
}

/// Blocks command inputs.
#[derive(Parser, Debug, Default)]
#[command(about = "List or render the reusable block catalog")]
pub struct BlocksArgs {
    /// Render only the catalog block with this id
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Tone for the style-tone block
    #[arg(long)]
    pub tone: Option<String>,

    /// Goal text for the output-contract block
    #[arg(long)]
    pub goals: Option<String>,

    /// JSON file holding variables for the io-variables block
    #[arg(long, value_name = "PATH")]
    pub variables: Option<PathBuf>,

    /// Emit blocks as JSON
    #[arg(long)]
    pub json: bool,
}

/// Init command inputs.
#[derive(Parser, Debug)]
#[command(about = "Write a default config file")]
pub struct InitArgs {
    /// Destination (defaults to the user config path)
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

/// Serve command inputs.
#[derive(Parser, Debug)]
#[command(about = "Serve the browser form")]
pub struct ServeArgs {
    /// Listen address
    #[arg(long, value_name = "HOST:PORT", default_value = DEFAULT_SERVE_ADDR)]
    pub addr: SocketAddr,
}
