use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::credential::DEFAULT_CREDENTIAL_FILE;

/// Inventory endpoint and request shaping (`[endpoint]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Endpoint URL without the query string.
    pub base_url: String,
    /// `productDivisionCode` query value.
    pub product_division: String,
    /// `modelGroup` query value.
    pub model_group: String,
    /// `Referer` header sent with the request.
    pub referer: String,
    /// `User-Agent` header sent with the request.
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout.
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "https://automobiles.honda.com/platform/api/v3/inventoryAndDealers"
                .to_string(),
            product_division: "A".to_string(),
            model_group: "odyssey".to_string(),
            referer: "https://automobiles.honda.com/tools/search-inventory?modelseries=odyssey"
                .to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/140.0.0.0 Safari/537.36"
                .to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/dealerscan/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealerscanConfig {
    /// Credential file; relative paths resolve against the working directory.
    pub cookie_file: PathBuf,
    /// Default `maxDealers` when the CLI flag is not given.
    pub max_dealers: u32,
    /// Default `modelYear` when the CLI flag is not given.
    pub model_year: u16,
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

impl Default for DealerscanConfig {
    fn default() -> Self {
        Self {
            cookie_file: PathBuf::from(DEFAULT_CREDENTIAL_FILE),
            max_dealers: 50,
            model_year: 2025,
            endpoint: EndpointConfig::default(),
        }
    }
}

impl DealerscanConfig {
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dealerscan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DealerscanConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DealerscanConfig::default();
        let toml = default_cfg.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DealerscanConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = DealerscanConfig::default();
        assert_eq!(cfg.cookie_file, PathBuf::from(".cookie"));
        assert_eq!(cfg.max_dealers, 50);
        assert_eq!(cfg.model_year, 2025);
        assert_eq!(cfg.endpoint.model_group, "odyssey");
        assert_eq!(cfg.endpoint.timeout_secs, 30);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DealerscanConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DealerscanConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.cookie_file, cfg.cookie_file);
        assert_eq!(parsed.max_dealers, cfg.max_dealers);
        assert_eq!(parsed.endpoint.base_url, cfg.endpoint.base_url);
    }

    #[test]
    fn config_toml_without_endpoint_uses_defaults() {
        let toml = r#"
            cookie_file = "/home/me/.odyssey-cookie"
            max_dealers = 10
            model_year = 2026
        "#;
        let cfg: DealerscanConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.cookie_file, PathBuf::from("/home/me/.odyssey-cookie"));
        assert_eq!(cfg.max_dealers, 10);
        assert_eq!(cfg.model_year, 2026);
        assert_eq!(cfg.endpoint.product_division, "A");
    }

    #[test]
    fn config_toml_custom_endpoint() {
        let toml = r#"
            cookie_file = ".cookie"
            max_dealers = 25
            model_year = 2025

            [endpoint]
            base_url = "http://127.0.0.1:8080/inventory"
            product_division = "B"
            model_group = "pilot"
            referer = "http://127.0.0.1:8080/"
            user_agent = "dealerscan-test"
            connect_timeout_secs = 2
            timeout_secs = 5
        "#;
        let cfg: DealerscanConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.endpoint.base_url, "http://127.0.0.1:8080/inventory");
        assert_eq!(cfg.endpoint.model_group, "pilot");
        assert_eq!(cfg.endpoint.timeout_secs, 5);
    }
}
