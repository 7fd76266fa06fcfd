mod config;
mod controller;
mod input;
mod ledger;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;
use clap::Parser;

use config::{Cli, Config, Mode};

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse());
    logging::init(&config.log_filter, config.log_target()?)?;
    tracing::debug!(mode = ?config.mode, "starting budgety");

    match config.mode {
        Mode::Tui => run::as_tui(),
        Mode::Replay(source) => run::replay(source),
        Mode::Summary(source) => run::summary(source),
    }
}
