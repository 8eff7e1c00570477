//! `dealerscan search <postal-code>` – fetch, flatten, preview, optionally export.

use anyhow::{Context, Result};
use dealerscan_core::config::DealerscanConfig;
use dealerscan_core::geo::Coordinates;
use dealerscan_core::table::{render_preview, write_csv};
use dealerscan_core::{fetch_inventory, InventoryClient, InventoryQuery};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Flags of the search command; `None` falls back to config.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub postal_code: String,
    pub max_dealers: Option<u32>,
    pub year: Option<u16>,
    pub cookie_file: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub limit: usize,
    pub origin: Option<Coordinates>,
    pub json: bool,
}

pub fn run_search(cfg: &DealerscanConfig, opts: &SearchOptions) -> Result<()> {
    let max_dealers = opts.max_dealers.unwrap_or(cfg.max_dealers);
    let year = opts.year.unwrap_or(cfg.model_year);
    let cookie_file = opts
        .cookie_file
        .clone()
        .unwrap_or_else(|| cfg.cookie_file.clone());

    let query = InventoryQuery::new(opts.postal_code.as_str(), max_dealers, year)?;
    let client = InventoryClient::new(cfg.endpoint.clone());
    let mut table = fetch_inventory(&client, &query, &cookie_file)?;

    if let Some(origin) = opts.origin {
        table = table.with_origin(origin);
        table.sort_by_distance();
        tracing::debug!("sorted {} rows by distance from {}", table.len(), origin);
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(table.records())?);
    } else {
        println!(
            "Found {} {} {} vehicles near {}",
            table.len(),
            year,
            cfg.endpoint.model_group,
            opts.postal_code
        );
        if let Some(origin) = opts.origin {
            println!("Nearest first from {origin}");
        }
        if !table.is_empty() && opts.limit > 0 {
            println!("\nFirst {} results:", opts.limit.min(table.len()));
            println!("{}", render_preview(&table, opts.limit));
        }
    }

    if let Some(path) = &opts.csv {
        let file = File::create(path)
            .with_context(|| format!("create CSV file: {}", path.display()))?;
        write_csv(&table, BufWriter::new(file))?;
        println!("\nData saved to {}", path.display());
    }
    Ok(())
}
