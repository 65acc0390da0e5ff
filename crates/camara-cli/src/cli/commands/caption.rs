//! `camara caption` – preview caption parsing.

use anyhow::Result;
use camara_core::caption::{find_congressmen, CaptionParser};
use camara_core::config::ScraperConfig;
use chrono::NaiveDate;

pub fn run_caption(cfg: &ScraperConfig, text: &str, date: NaiveDate) -> Result<()> {
    let parser = CaptionParser::first_period(cfg.unsplit_caption, cfg.institution.clone());
    let stem = parser.file_stem(text, &date.format("%Y-%m-%d").to_string());
    println!("file: {}", stem);

    match find_congressmen(text) {
        Some(found) => {
            println!("{:<30} {:<10} {}", "DEPUTY", "PARTY", "STATE");
            for (name, affiliation) in found.iter() {
                println!("{:<30} {:<10} {}", name, affiliation.party, affiliation.state);
            }
        }
        None => println!("no deputies found"),
    }
    Ok(())
}
