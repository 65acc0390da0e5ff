//! OpenRefine input sheet.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::categories::CategoryLookup;
use crate::record::ImageRecord;
use crate::wikitext::render_wikitext;

/// Header row, in column order. `congressmen` is internal and not exported.
pub const COLUMNS: [&str; 7] = [
    "file_name",
    "file_path",
    "author",
    "date",
    "source",
    "alt_text",
    "wikitext",
];

#[derive(Debug, Serialize)]
struct Row<'a> {
    file_name: &'a str,
    file_path: String,
    author: Option<&'a str>,
    date: &'a str,
    source: &'a str,
    alt_text: &'a str,
    wikitext: String,
}

impl<'a> Row<'a> {
    fn new(record: &'a ImageRecord, lookup: &CategoryLookup) -> Self {
        Row {
            file_name: &record.file_name,
            file_path: record.file_path.display().to_string(),
            author: record.author.as_deref(),
            date: &record.date,
            source: &record.source,
            alt_text: &record.alt_text,
            wikitext: render_wikitext(record, lookup),
        }
    }
}

/// Writes every record as one CSV row under a header. The header is written
/// even when `records` is empty.
pub fn write_openrefine_csv(
    records: &[ImageRecord],
    lookup: &CategoryLookup,
    path: &Path,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;

    writer.write_record(COLUMNS)?;
    for record in records {
        writer
            .serialize(Row::new(record, lookup))
            .with_context(|| format!("write row for {}", record.file_name))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;

    tracing::info!(rows = records.len(), path = %path.display(), "openrefine sheet written");
    Ok(())
}
