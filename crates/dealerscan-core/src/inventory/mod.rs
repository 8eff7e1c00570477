//! Inventory lookup: one GET against the dealer inventory endpoint, flattened
//! into one row per vehicle.
//!
//! The request carries the browser session cookie as-is; a stale cookie shows
//! up as HTTP 401/403 and is reported as [`InventoryError::AuthenticationExpired`].

mod fetch;
mod flatten;
pub(crate) mod price;
mod query;
mod schema;

pub use fetch::{classify_status, InventoryClient};
pub use flatten::{flatten, parse_response, InventoryRecord};
pub use price::Price;
pub use query::{request_headers, InventoryQuery};
pub use schema::{DealerEntry, VehicleEntry};

use std::path::Path;

use crate::credential::load_credential;
use crate::error::InventoryError;
use crate::table::InventoryTable;

/// Loads the credential at `credential_path`, then runs the query.
///
/// Credential problems fail before any network traffic.
pub fn fetch_inventory(
    client: &InventoryClient,
    query: &InventoryQuery,
    credential_path: &Path,
) -> Result<InventoryTable, InventoryError> {
    let credential = load_credential(credential_path)?;
    client.fetch(query, &credential)
}
