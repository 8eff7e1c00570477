//! The flattened record set and its renderers.

mod csv_export;
mod preview;

pub use csv_export::{write_csv, COLUMNS};
pub use preview::render_preview;

use std::cmp::Ordering;

use crate::geo::{driving_hours, haversine_miles, Coordinates, DEFAULT_SPEED_MPH};
use crate::inventory::InventoryRecord;

/// Ordered rows from one lookup, in response order unless re-sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryTable {
    records: Vec<InventoryRecord>,
}

impl InventoryTable {
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InventoryRecord> {
        self.records.iter()
    }

    /// Fills `distance_miles` and `drive_hours` for every row whose dealer has coordinates.
    pub fn with_origin(mut self, origin: Coordinates) -> Self {
        for r in &mut self.records {
            let dealer = match (r.latitude, r.longitude) {
                (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
                _ => None,
            };
            r.distance_miles = dealer.map(|d| haversine_miles(origin, d));
            r.drive_hours = dealer.map(|d| driving_hours(origin, d, DEFAULT_SPEED_MPH));
        }
        self
    }

    /// Nearest first; rows without a distance go last. Stable.
    pub fn sort_by_distance(&mut self) {
        self.records
            .sort_by(|a, b| match (a.distance_miles, b.distance_miles) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
    }
}

impl<'a> IntoIterator for &'a InventoryTable {
    type Item = &'a InventoryRecord;
    type IntoIter = std::slice::Iter<'a, InventoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(vin: &str, lat: Option<f64>, lon: Option<f64>) -> InventoryRecord {
        InventoryRecord {
            dealer: format!("Dealer {vin}"),
            address1: "1 Main St".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            postal: "78723".to_string(),
            phone: None,
            latitude: lat,
            longitude: lon,
            retail_url: None,
            vin: vin.to_string(),
            trim: Some("EX-L".to_string()),
            inventory_type: Some("N".to_string()),
            exterior_color: Some("Platinum White Pearl".to_string()),
            interior_color: None,
            price: None,
            model_year: 2025,
            distance_miles: None,
            drive_hours: None,
        }
    }

    #[test]
    fn origin_fills_distance_only_with_coordinates() {
        let table = InventoryTable::new(vec![
            record("A", Some(30.2672), Some(-97.7431)),
            record("B", None, Some(-97.0)),
        ])
        .with_origin(Coordinates::new(30.2672, -97.7431));
        assert_eq!(table.records()[0].distance_miles, Some(0.0));
        assert_eq!(table.records()[0].drive_hours, Some(0.0));
        assert!(table.records()[1].distance_miles.is_none());
        assert!(table.records()[1].drive_hours.is_none());
    }

    #[test]
    fn sort_by_distance_nearest_first_unknown_last() {
        let mut table = InventoryTable::new(vec![
            record("FAR", Some(32.7767), Some(-96.7970)),
            record("NONE", None, None),
            record("NEAR", Some(30.5), Some(-97.7)),
        ])
        .with_origin(Coordinates::new(30.2672, -97.7431));
        table.sort_by_distance();
        let vins: Vec<&str> = table.iter().map(|r| r.vin.as_str()).collect();
        assert_eq!(vins, ["NEAR", "FAR", "NONE"]);
    }

    #[test]
    fn empty_table() {
        let t = InventoryTable::default();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
    }
}
