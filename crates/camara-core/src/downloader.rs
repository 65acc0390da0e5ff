//! Full-resolution image download.
//!
//! Rewrites the thumbnail URL, fetches the whole body with one GET and hands
//! it to storage. Errors propagate; there is no retry.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::http::HttpClient;
use crate::storage;
use crate::url_model::{self, DEFAULT_EXTENSION};

/// Where an image ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedImage {
    pub file_name: String,
    pub path: PathBuf,
    /// URL actually fetched (after thumbnail rewrite).
    pub source: String,
    pub bytes: u64,
}

/// Downloads `src` (absolute) into `dest_dir` as `<file_stem>.<ext>`.
///
/// The extension comes from the thumbnail URL. An occupied name gets a
/// numeric suffix instead of being overwritten.
pub fn download_image(
    client: &dyn HttpClient,
    dest_dir: &Path,
    file_stem: &str,
    src: &str,
    low_res_token: &str,
) -> Result<DownloadedImage> {
    let ext = url_model::extension_from_url(src).unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    let source = url_model::resolve_full_resolution(src, low_res_token);
    let file_name = url_model::file_name_for(file_stem, &ext);

    let body = client
        .get(&source)
        .with_context(|| format!("download {}", source))?;
    let path = storage::write_collision_safe(dest_dir, &file_name, &body)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or(file_name);
    tracing::debug!(path = %path.display(), bytes = body.len(), "image saved");

    Ok(DownloadedImage {
        file_name,
        path,
        source,
        bytes: body.len() as u64,
    })
}
