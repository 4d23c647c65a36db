pub mod clock;
pub mod commands;
pub mod config;
pub mod db;
pub mod progress;
pub mod state;
pub mod stores;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Cli;
use crate::config::TrackerConfig;
use crate::state::AppState;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output stays valid JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = TrackerConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let mut state = AppState::open(config)?;
    tracing::debug!(
        reset_hour = state.config.daily_reset_hour,
        policy = state.config.rotation_policy.as_str(),
        "tracker ready"
    );
    commands::execute(&mut state.tracker, cli.command)?;

    Ok(())
}
