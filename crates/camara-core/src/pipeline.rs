//! One scraping run: gallery pages → images → downloads → OpenRefine sheet.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::caption::{find_congressmen, CaptionParser};
use crate::categories::CategoryLookup;
use crate::config::ScraperConfig;
use crate::downloader::download_image;
use crate::extractor::extract_images;
use crate::gallery::{fetch_gallery_html, GalleryQuery};
use crate::http::HttpClient;
use crate::record::ImageRecord;
use crate::table::write_openrefine_csv;
use crate::url_model;

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub date: NaiveDate,
    pub output_dir: PathBuf,
    pub csv_path: PathBuf,
    pub pages_fetched: u32,
    pub images_found: usize,
    pub skipped_attributed: usize,
    pub records: Vec<ImageRecord>,
}

/// Scrapes the gallery for `date` into `<output_dir>/<date>/` using the
/// default caption parser from `cfg`.
pub fn run_for_date(
    client: &dyn HttpClient,
    cfg: &ScraperConfig,
    lookup: &CategoryLookup,
    date: NaiveDate,
) -> Result<RunSummary> {
    let captions = CaptionParser::first_period(cfg.unsplit_caption, cfg.institution.clone());
    run_with_parser(client, cfg, lookup, &captions, date)
}

/// Like [`run_for_date`] with a caller-supplied caption parser.
pub fn run_with_parser(
    client: &dyn HttpClient,
    cfg: &ScraperConfig,
    lookup: &CategoryLookup,
    captions: &CaptionParser,
    date: NaiveDate,
) -> Result<RunSummary> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let output_dir = cfg.output_dir.join(&date_str);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    tracing::info!(date = %date_str, dir = %output_dir.display(), "starting gallery run");

    let query = GalleryQuery::new(cfg.gallery_url.clone(), Some(date));
    let pages = fetch_gallery_html(client, &query, &cfg.more_pages_marker, cfg.max_pages)?;
    let images = extract_images(&pages.html)?;
    let images_found = images.len();

    let mut records = Vec::new();
    let mut skipped_attributed = 0;
    for (i, image) in images.into_iter().enumerate() {
        if image.is_attributed() {
            skipped_attributed += 1;
            continue;
        }
        tracing::debug!("image {} of {}", i + 1, images_found);

        let src = url_model::absolutize(&cfg.gallery_url, &image.src)?;
        let stem = captions.file_stem(&image.alt, &date_str);
        let saved = download_image(client, &output_dir, &stem, &src, &cfg.low_res_token)?;

        records.push(ImageRecord {
            file_name: saved.file_name,
            file_path: saved.path,
            author: image.author,
            date: date_str.clone(),
            source: saved.source,
            congressmen: find_congressmen(&image.alt),
            alt_text: image.alt,
        });
    }

    let csv_path = output_dir.join(&cfg.csv_file_name);
    write_openrefine_csv(&records, lookup, &csv_path)?;

    tracing::info!(
        pages = pages.pages_fetched,
        found = images_found,
        skipped = skipped_attributed,
        saved = records.len(),
        "gallery run finished"
    );

    Ok(RunSummary {
        date,
        output_dir,
        csv_path,
        pages_fetched: pages.pages_fetched,
        images_found,
        skipped_attributed,
        records,
    })
}
