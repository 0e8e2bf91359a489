#![warn(rust_2018_idioms, unused_lifetimes)]

pub mod handlers;
pub mod models;

use crate::handlers::{ranks, replay};
use crate::models::args::{Cli, Commands};

use anyhow::{Context, Result};
use clap::Parser;
use mymove::domain::config::LoggingConfig;
use mymove_logger::{LogFormat, Logger, parse_level};

const LOGGER_NAME: &str = "mymove-intake";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mymove::load_intake_config(cli.config.as_deref())
        .context("Failed to load intake configuration")?;
    let _logger = init_logger(&config.logging)?;

    match cli.command {
        Commands::Replay { scenario, ub, alaska } => {
            replay::replay_scenario(config, &scenario, ub, alaska).await?;
        },
        Commands::Ranks { affiliation } => ranks::print_ranks(&affiliation).await?,
    }

    Ok(())
}

fn init_logger(logging: &LoggingConfig) -> Result<Logger> {
    let format = if logging.json { LogFormat::Json } else { LogFormat::Compact };
    let builder = Logger::builder()
        .name(LOGGER_NAME)
        .level(parse_level(&logging.level)?)
        .console_format(format);

    let logger = match &logging.directory {
        Some(directory) => builder.directory(directory).json_files(logging.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
