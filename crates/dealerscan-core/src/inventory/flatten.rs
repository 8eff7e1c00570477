//! Dealer × vehicle join.

use serde::Serialize;

use super::price::Price;
use super::schema::{DealerEntry, VehicleEntry};
use crate::error::InventoryError;

/// One vehicle at one dealer. Dealer fields repeat on every row of that dealer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRecord {
    pub dealer: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub postal: String,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub retail_url: Option<String>,
    pub vin: String,
    pub trim: Option<String>,
    pub inventory_type: Option<String>,
    pub exterior_color: Option<String>,
    pub interior_color: Option<String>,
    pub price: Option<Price>,
    pub model_year: u16,
    /// Filled in only when the caller supplies an origin point.
    pub distance_miles: Option<f64>,
    /// Estimated hours at an average road speed; set together with `distance_miles`.
    pub drive_hours: Option<f64>,
}

/// Parses a response body into dealer entries.
pub fn parse_response(body: &[u8]) -> Result<Vec<DealerEntry>, InventoryError> {
    Ok(serde_json::from_slice(body)?)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// One record per (dealer, vehicle). Dealers without vehicles add nothing.
pub fn flatten(dealers: Vec<DealerEntry>, model_year: u16) -> Vec<InventoryRecord> {
    let mut records = Vec::new();
    for dealer in dealers {
        let DealerEntry {
            name,
            address1,
            city,
            state,
            zip_code,
            phone,
            latitude,
            longitude,
            online_retailing_url,
            inventory,
        } = dealer;
        let phone = non_empty(phone);
        let retail_url = non_empty(online_retailing_url);

        for vehicle in inventory {
            let VehicleEntry {
                vin,
                model_trim,
                inventory_type,
                exterior_color,
                model_base_color,
                interior_color,
                model_msrp,
            } = vehicle;
            records.push(InventoryRecord {
                dealer: name.clone(),
                address1: address1.clone(),
                city: city.clone(),
                state: state.clone(),
                postal: zip_code.clone(),
                phone: phone.clone(),
                latitude,
                longitude,
                retail_url: retail_url.clone(),
                vin,
                trim: non_empty(model_trim),
                inventory_type: non_empty(inventory_type),
                exterior_color: non_empty(exterior_color).or_else(|| non_empty(model_base_color)),
                interior_color: non_empty(interior_color),
                price: model_msrp,
                model_year,
                distance_miles: None,
                drive_hours: None,
            });
        }
    }
    records
}
