//! Configuration for the terminal front end.
//!
//! CLI arguments take highest priority; environment variables provide the
//! defaults.

use anyhow::{anyhow, Result};
use clap::Parser;
use mcts::MctsConfig;
use tracing::level_filters::LevelFilter;

// Default value functions that fall back from env vars to built-ins
fn default_mode() -> String {
    std::env::var("C4_MODE").unwrap_or_else(|_| "human".to_string())
}

fn default_iterations() -> u32 {
    std::env::var("C4_ITERATIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000)
}

fn default_exploration() -> f32 {
    std::env::var("C4_EXPLORATION")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1.41)
}

fn default_opponent_iterations() -> u32 {
    std::env::var("C4_OPPONENT_ITERATIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000)
}

fn default_opponent_exploration() -> f32 {
    std::env::var("C4_OPPONENT_EXPLORATION")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1.32)
}

fn default_log_level() -> String {
    std::env::var("C4_LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
}

#[derive(Parser, Debug, Clone)]
#[command(name = "connect4-cli")]
#[command(about = "Connect Four against an MCTS bot in the terminal")]
#[command(
    long_about = "Plays Connect Four in the terminal. In human mode you play
Yellow against the Red bot; in selfplay mode two bots with independent search
budgets play each other.

Environment variables (C4_MODE, C4_ITERATIONS, ...) provide defaults; CLI
arguments take highest priority."
)]
pub struct Config {
    /// Game mode: human (play the bot) or selfplay (bot vs bot)
    #[arg(long, default_value_t = default_mode())]
    pub mode: String,

    /// MCTS iterations per move for the Red bot
    #[arg(long, default_value_t = default_iterations())]
    pub iterations: u32,

    /// UCB1 exploration constant for the Red bot
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f32,

    /// MCTS iterations per move for the Yellow bot (selfplay mode)
    #[arg(long, default_value_t = default_opponent_iterations())]
    pub opponent_iterations: u32,

    /// UCB1 exploration constant for the Yellow bot (selfplay mode)
    #[arg(long, default_value_t = default_opponent_exploration())]
    pub opponent_exploration: f32,

    /// RNG seed for reproducible bot play (entropy-based when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.mode != "human" && self.mode != "selfplay" {
            return Err(anyhow!(
                "unknown mode '{}', expected 'human' or 'selfplay'",
                self.mode
            ));
        }

        for (name, value) in [
            ("exploration", self.exploration),
            ("opponent_exploration", self.opponent_exploration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(anyhow!("{} must be finite and non-negative", name));
            }
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// Search configuration for the Red bot.
    pub fn red_config(&self) -> MctsConfig {
        MctsConfig::default()
            .with_iterations(self.iterations)
            .with_exploration_constant(self.exploration)
    }

    /// Search configuration for the Yellow bot (selfplay mode).
    pub fn yellow_config(&self) -> MctsConfig {
        MctsConfig::default()
            .with_iterations(self.opponent_iterations)
            .with_exploration_constant(self.opponent_exploration)
    }
}
