use crate::cli::cli::{Cli, Commands, SerialModeArg};
use crate::config::config::{Config, ConfigError};
use crate::logging::{init_tracing, LogTarget};
use crate::tui;
use crate::vault::handlers::{ShowOptions, Vault};
use crate::vault::store::SerialMode;
use clap::Parser;
use std::path::PathBuf;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui {
            serial_mode,
            mask_limit,
        } => {
            let mut config = Config::create(None)?;
            if let Some(mode) = serial_mode {
                config.serial_mode = match mode {
                    SerialModeArg::Monotonic => SerialMode::Monotonic,
                    SerialModeArg::Length => SerialMode::Length,
                };
            }
            match mask_limit {
                Some(0) => return Err(ConfigError::InvalidMaskLimit("0".to_string()).into()),
                Some(limit) => config.mask_limit = limit,
                None => {}
            }
            init_tracing(&config, LogTarget::Screen)?;
            tui::launch(&config)?;
        }
        Commands::Show {
            seed,
            query,
            reveal,
            json,
        } => {
            let config = Config::create(seed.map(PathBuf::from))?;
            init_tracing(&config, LogTarget::Stderr)?;
            let vault = Vault::create(&config);
            vault
                .handle_show(ShowOptions {
                    query,
                    reveal,
                    json,
                })
                .await?;
        }
    }

    Ok(())
}
