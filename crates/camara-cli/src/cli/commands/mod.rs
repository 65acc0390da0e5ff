//! CLI command handlers, one per file.

mod caption;
mod run;

pub use caption::run_caption;
pub use run::run_scrape;
