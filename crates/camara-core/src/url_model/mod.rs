//! Image URL handling and file-name derivation.
//!
//! Resolves gallery thumbnails to their full-resolution originals and turns
//! caption-derived stems into safe local file names.

mod path;
mod sanitize;

pub use path::{extension_from_url, DEFAULT_EXTENSION};
pub use sanitize::{sanitize_file_stem, NAME_MAX};

use anyhow::{Context, Result};

/// Room kept for `_<n>` added on collision.
const COLLISION_SUFFIX_RESERVE: usize = 8;

/// Rewrites a thumbnail URL to the original by dropping `token` before the extension.
///
/// `.../fotoPEQ.jpg` becomes `.../foto.jpg`. Only the last occurrence is
/// rewritten; URLs without the token come back unchanged.
pub fn resolve_full_resolution(url: &str, token: &str) -> String {
    let Some(ext) = extension_from_url(url) else {
        return url.to_string();
    };
    let low_res = format!("{}.{}", token, ext);
    match url.rfind(&low_res) {
        Some(idx) => format!("{}.{}{}", &url[..idx], ext, &url[idx + low_res.len()..]),
        None => url.to_string(),
    }
}

/// Resolves a possibly relative `src` against the page it came from.
pub fn absolutize(base: &str, src: &str) -> Result<String> {
    if let Ok(absolute) = url::Url::parse(src) {
        return Ok(absolute.to_string());
    }
    let base = url::Url::parse(base).with_context(|| format!("invalid base URL: {}", base))?;
    let joined = base
        .join(src)
        .with_context(|| format!("cannot resolve image src {:?}", src))?;
    Ok(joined.to_string())
}

/// `"<stem>.<ext>"`, sanitized and short enough to take a collision suffix.
pub fn file_name_for(stem: &str, ext: &str) -> String {
    let budget = NAME_MAX.saturating_sub(ext.len() + 1 + COLLISION_SUFFIX_RESERVE);
    format!("{}.{}", sanitize_file_stem(stem, budget), ext)
}
