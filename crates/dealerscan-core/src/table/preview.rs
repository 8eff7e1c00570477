//! Terminal preview with `comfy-table`.

use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use super::InventoryTable;
use crate::inventory::price::display_price;

const HEADERS: [&str; 10] = [
    "Dealer", "City", "State", "Trim", "Type", "Color", "VIN", "Price", "Miles", "Hours",
];

/// Renders the first `limit` rows. Absent text shows as `-`.
pub fn render_preview(table: &InventoryTable, limit: usize) -> String {
    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(
        HEADERS
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    let dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    for r in table.iter().take(limit) {
        out.add_row(vec![
            r.dealer.clone(),
            r.city.clone(),
            r.state.clone(),
            dash(&r.trim),
            dash(&r.inventory_type),
            dash(&r.exterior_color),
            r.vin.clone(),
            display_price(r.price.as_ref()),
            r.distance_miles
                .map(|d| format!("{d:.0}"))
                .unwrap_or_else(|| "-".to_string()),
            r.drive_hours
                .map(|h| format!("{h:.1}"))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out.to_string()
}
