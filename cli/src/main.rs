//! Connect Four in the terminal.
//!
//! Two modes:
//! - `human`: play Yellow against the Red MCTS bot
//! - `selfplay`: two bots with independent search budgets play each other

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod config;
mod session;

use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(
        mode = %config.mode,
        iterations = config.iterations,
        exploration = config.exploration,
        "configuration loaded"
    );

    session::run(&config)
}
