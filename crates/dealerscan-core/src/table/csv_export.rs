//! CSV export with the `csv` crate.

use std::io::Write;

use anyhow::Result;

use super::InventoryTable;
use crate::inventory::price::display_price;
use crate::inventory::InventoryRecord;

/// Header row, in column order.
pub const COLUMNS: [&str; 18] = [
    "dealer",
    "address1",
    "city",
    "state",
    "postal",
    "phone",
    "lat",
    "lon",
    "retail_url",
    "trim",
    "inv_type",
    "color",
    "vin",
    "price",
    "interior_color",
    "year",
    "distance_miles",
    "drive_hours",
];

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_num(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn row(r: &InventoryRecord) -> [String; 18] {
    [
        r.dealer.clone(),
        r.address1.clone(),
        r.city.clone(),
        r.state.clone(),
        r.postal.clone(),
        opt(&r.phone),
        opt_num(r.latitude),
        opt_num(r.longitude),
        opt(&r.retail_url),
        opt(&r.trim),
        opt(&r.inventory_type),
        opt(&r.exterior_color),
        r.vin.clone(),
        display_price(r.price.as_ref()),
        opt(&r.interior_color),
        r.model_year.to_string(),
        r.distance_miles.map(|d| format!("{d:.1}")).unwrap_or_default(),
        r.drive_hours.map(|h| format!("{h:.2}")).unwrap_or_default(),
    ]
}

/// Writes a header plus one line per record. Absent values are empty cells,
/// except price, which reads `N/A`.
pub fn write_csv<W: Write>(table: &InventoryTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for r in table {
        wtr.write_record(row(r))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Price;
    use crate::table::tests::record;

    #[test]
    fn header_only_for_empty_table() {
        let mut out = Vec::new();
        write_csv(&InventoryTable::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("dealer,address1,city,state,postal,phone,lat,lon,"));
    }

    #[test]
    fn rows_quote_commas_and_format_price() {
        let mut r = record("5FNRL6H70SB000001", Some(30.5), Some(-97.68));
        r.dealer = "Honda of Austin, LLC".to_string();
        r.price = Some(Price::Amount(45295.0));
        let mut out = Vec::new();
        write_csv(&InventoryTable::new(vec![r]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let line = text.lines().nth(1).unwrap();
        assert!(line.starts_with("\"Honda of Austin, LLC\",1 Main St,Austin,TX,78723,,30.5,-97.68,,"));
        assert!(line.contains("5FNRL6H70SB000001,\"$45,295\",,2025,"));
    }

    #[test]
    fn absent_price_is_na() {
        let mut out = Vec::new();
        write_csv(&InventoryTable::new(vec![record("VIN0009", None, None)]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let line = text.lines().nth(1).unwrap();
        assert!(line.contains(",VIN0009,N/A,,2025,,"), "got {line}");
    }
}
