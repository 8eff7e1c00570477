pub mod config;
pub mod logging;

pub mod credential;
pub mod error;
pub mod geo;
pub mod inventory;
pub mod table;

pub use credential::{load_credential, Credential};
pub use error::InventoryError;
pub use inventory::{fetch_inventory, InventoryClient, InventoryQuery, InventoryRecord};
pub use table::InventoryTable;
