//! Query parameters, URL and header construction.

use url::Url;

use crate::config::EndpointConfig;
use crate::credential::Credential;
use crate::error::InventoryError;

/// Parameters of a single inventory lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryQuery {
    /// Passed through untouched; the endpoint decides what it accepts.
    pub postal_code: String,
    pub max_dealers: u32,
    pub model_year: u16,
}

impl InventoryQuery {
    pub fn new(
        postal_code: impl Into<String>,
        max_dealers: u32,
        model_year: u16,
    ) -> Result<Self, InventoryError> {
        if max_dealers == 0 {
            return Err(InventoryError::InvalidQuery(
                "max dealers must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            postal_code: postal_code.into(),
            max_dealers,
            model_year,
        })
    }

    /// Full request URL with percent-encoded query parameters.
    pub fn build_url(&self, endpoint: &EndpointConfig) -> Result<Url, InventoryError> {
        let year = self.model_year.to_string();
        let max_dealers = self.max_dealers.to_string();
        Url::parse_with_params(
            &endpoint.base_url,
            &[
                ("productDivisionCode", endpoint.product_division.as_str()),
                ("modelYear", year.as_str()),
                ("modelGroup", endpoint.model_group.as_str()),
                ("zipCode", self.postal_code.as_str()),
                ("maxDealers", max_dealers.as_str()),
                ("preferredDealerId", ""),
                ("showOnlineRetailingURL", "true"),
            ],
        )
        .map_err(|e| {
            InventoryError::InvalidQuery(format!("base url {:?}: {e}", endpoint.base_url))
        })
    }
}

/// Request headers in send order. `User-Agent` is set on the handle separately.
pub fn request_headers(endpoint: &EndpointConfig, credential: &Credential) -> Vec<(&'static str, String)> {
    vec![
        ("Accept", "*/*".to_string()),
        ("Accept-Language", "en-US,en;q=0.9".to_string()),
        ("Cache-Control", "no-cache".to_string()),
        ("Pragma", "no-cache".to_string()),
        ("Referer", endpoint.referer.clone()),
        ("Cookie", credential.as_str().to_string()),
    ]
}
