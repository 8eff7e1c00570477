//! CLI for dealerscan.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use dealerscan_core::config;
use dealerscan_core::geo::Coordinates;
use std::path::PathBuf;

use commands::{run_completions, run_search, run_show_config, SearchOptions};

/// Top-level CLI for dealerscan.
#[derive(Debug, Parser)]
#[command(name = "dealerscan")]
#[command(about = "dealerscan: list dealer inventory near a postal code", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch inventory from dealers near a postal code.
    Search {
        /// Postal code to search around (sent as-is).
        postal_code: String,

        /// Maximum number of dealers to include (default from config).
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        max_dealers: Option<u32>,

        /// Model year to query (default from config).
        #[arg(long)]
        year: Option<u16>,

        /// File holding the session cookie (default from config, `.cookie`).
        #[arg(long, value_name = "PATH")]
        cookie_file: Option<PathBuf>,

        /// Also write every row to a CSV file.
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Number of rows shown in the preview.
        #[arg(long, default_value = "5", value_name = "N")]
        limit: usize,

        /// Add distance from this point and sort nearest first.
        #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
        origin: Option<Coordinates>,

        /// Print all rows as JSON instead of the preview table.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file path and effective settings.
    Config,

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            return run_completions(shell);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Search {
                postal_code,
                max_dealers,
                year,
                cookie_file,
                csv,
                limit,
                origin,
                json,
            } => {
                let opts = SearchOptions {
                    postal_code,
                    max_dealers,
                    year,
                    cookie_file,
                    csv,
                    limit,
                    origin,
                    json,
                };
                run_search(&cfg, &opts)?;
            }
            CliCommand::Config => run_show_config(&cfg)?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
