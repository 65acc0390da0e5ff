//! `camara run` – scrape one day of the gallery.

use anyhow::Result;
use camara_core::categories::CategoryLookup;
use camara_core::config::ScraperConfig;
use camara_core::http::CurlClient;
use camara_core::pipeline;
use chrono::NaiveDate;

pub fn run_scrape(cfg: &ScraperConfig, date: NaiveDate) -> Result<()> {
    println!("{}", date.format("%Y-%m-%d"));

    let lookup = CategoryLookup::load(&cfg.category_per_state, &cfg.category_per_party)?;
    let client = CurlClient::new(&cfg.http());
    let summary = pipeline::run_for_date(&client, cfg, &lookup, date)?;

    println!(
        "{} page(s), {} image(s): {} saved, {} already credited",
        summary.pages_fetched,
        summary.images_found,
        summary.records.len(),
        summary.skipped_attributed
    );
    println!("sheet: {}", summary.csv_path.display());
    Ok(())
}
