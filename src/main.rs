use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod blocks;
mod cli;
mod clock;
mod config;
mod interactive;
mod output;
mod schema;
mod synthesize;
mod web;
mod workflow;

use cli::{Command, RootArgs};

const LOG_ENV_VAR: &str = "PROMPTGEN_LOG";

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Generate(args) => workflow::run_generate(args),
        Command::Render(args) => workflow::run_render(args),
        Command::Blocks(args) => workflow::run_blocks(args),
        Command::Init(args) => workflow::run_init(args),
        Command::Serve(args) => workflow::run_serve(args),
    }
}

/// Logs go to stderr so `render` output on stdout stays pipeable.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
