//! Gallery page fetcher.
//!
//! The endpoint returns one HTML fragment per page and keeps emitting a
//! "load more" button while further pages exist. Pages are requested in order
//! and concatenated; the walk is capped so a server that never drops the
//! button cannot keep us looping.

mod query;

pub use query::GalleryQuery;

use anyhow::Result;

use crate::http::HttpClient;

/// Distinct failure conditions of the page walk.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("pagination did not terminate: more-pages marker still present after {max_pages} page(s)")]
    PaginationDidNotTerminate { max_pages: u32 },
}

/// Concatenated HTML of every page that carried at least one image.
#[derive(Debug, Clone, Default)]
pub struct GalleryPages {
    pub html: String,
    pub pages_fetched: u32,
}

fn has_img_tag(body: &str) -> bool {
    body.to_ascii_lowercase().contains("<img")
}

/// Requests pages 1, 2, … until a page lacks `marker`.
///
/// Fails with [`GalleryError::PaginationDidNotTerminate`] when page `max_pages`
/// still carries the marker. Network errors propagate unchanged.
pub fn fetch_gallery_html(
    client: &dyn HttpClient,
    query: &GalleryQuery,
    marker: &str,
    max_pages: u32,
) -> Result<GalleryPages> {
    let mut pages = GalleryPages::default();

    for page in 1..=max_pages {
        let url = query.page_url(page);
        let body = client.post(&url)?;
        pages.pages_fetched = page;

        if has_img_tag(&body) {
            pages.html.push_str(&body);
        } else {
            tracing::debug!(page, "gallery page has no images");
        }

        if !body.contains(marker) {
            tracing::info!(pages = page, bytes = pages.html.len(), "gallery pagination finished");
            return Ok(pages);
        }
        tracing::debug!(page, "more pages marker present");
    }

    Err(GalleryError::PaginationDidNotTerminate { max_pages }.into())
}
