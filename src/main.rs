//! maxtweeter - rank the authors of a CSV export of posts
//!
//! maxtweeter provides:
//! - A comma splitter and header resolver for simple (unquoted) CSV
//! - Per-author post counting
//! - Top-K reporting as text, json or jsonl

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(err) if !err.use_stderr() => {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            err.print()?;
            std::process::exit(1);
        }
    };

    init_tracing(cli.log_level());
    cli::run(cli)
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
