//! CLI for the image-bank scraper.

mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use camara_core::config;
use std::path::PathBuf;

use commands::{run_caption, run_scrape};

/// Top-level CLI. With no subcommand, scrapes yesterday's photos.
#[derive(Debug, Parser)]
#[command(name = "camara")]
#[command(
    about = "Collect uncredited Câmara dos Deputados photos and build an OpenRefine sheet for Commons",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download one day of gallery photos and write the OpenRefine sheet.
    Run {
        /// Day to scrape (defaults to yesterday, local time).
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
        /// Root directory for `<date>/` output (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Stop with an error if the gallery still offers more pages after N.
        #[arg(long, value_name = "N")]
        max_pages: Option<u32>,
    },

    /// Show the file name and deputies derived from a caption (no network).
    Caption {
        /// Caption text as it appears in the image's alt attribute.
        text: String,
        /// Date used in the derived file name (defaults to yesterday).
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::Run {
            date: None,
            output_dir: None,
            max_pages: None,
        }
    }
}

fn yesterday() -> Result<NaiveDate> {
    chrono::Local::now()
        .date_naive()
        .pred_opt()
        .ok_or_else(|| anyhow::anyhow!("no day before today"))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command.unwrap_or_default() {
            CliCommand::Run {
                date,
                output_dir,
                max_pages,
            } => {
                if let Some(dir) = output_dir {
                    cfg.output_dir = dir;
                }
                if let Some(n) = max_pages {
                    cfg.max_pages = n;
                }
                let date = match date {
                    Some(d) => d,
                    None => yesterday()?,
                };
                run_scrape(&cfg, date)?;
            }
            CliCommand::Caption { text, date } => {
                let date = match date {
                    Some(d) => d,
                    None => yesterday()?,
                };
                run_caption(&cfg, &text, date)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
