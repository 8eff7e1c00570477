//! `dealerscan config` – show where the config lives and what it resolves to.

use anyhow::Result;
use dealerscan_core::config::{self, DealerscanConfig};

pub fn run_show_config(cfg: &DealerscanConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", cfg.to_toml_string()?);
    Ok(())
}
