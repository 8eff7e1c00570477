//! CLI command handlers.

mod completions;
mod config;
mod search;

pub use completions::run_completions;
pub use config::run_show_config;
pub use search::{run_search, SearchOptions};
