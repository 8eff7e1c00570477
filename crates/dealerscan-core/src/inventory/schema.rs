//! Wire shape of the inventory response.
//!
//! The body is a JSON array of dealers, each carrying its own `Inventory`
//! array. Required fields are plain types so a dealer or vehicle missing one
//! fails the whole parse.

use serde::{Deserialize, Deserializer};

use super::price::Price;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DealerEntry {
    pub name: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub longitude: Option<f64>,
    #[serde(default, rename = "OnlineRetailingURL")]
    pub online_retailing_url: Option<String>,
    /// Absent or null means the dealer has nothing in stock.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inventory: Vec<VehicleEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VehicleEntry {
    #[serde(rename = "VIN", deserialize_with = "non_blank")]
    pub vin: String,
    #[serde(default, rename = "ModelTrim")]
    pub model_trim: Option<String>,
    #[serde(default, rename = "InventoryType")]
    pub inventory_type: Option<String>,
    #[serde(default, rename = "ExteriorColor")]
    pub exterior_color: Option<String>,
    /// Used when `ExteriorColor` is absent.
    #[serde(default, rename = "ModelBaseColor")]
    pub model_base_color: Option<String>,
    #[serde(default, rename = "InteriorColor")]
    pub interior_color: Option<String>,
    #[serde(default, rename = "ModelMSRP")]
    pub model_msrp: Option<Price>,
}

/// Coordinates arrive either as numbers or as numeric strings.
fn coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid coordinate {s:?}"))),
    }
}

/// Rows are keyed by VIN, so a blank one is as bad as a missing one.
fn non_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        return Err(serde::de::Error::custom("blank VIN"));
    }
    Ok(s)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
