//! Extension extraction from URL path.

/// Used when the image URL path carries no extension.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Extension of the last path segment, without the dot.
///
/// Falls back to the raw string (minus query/fragment) when `url` does not
/// parse as an absolute URL, so relative `src` values work too.
pub fn extension_from_url(url: &str) -> Option<String> {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };
    let segment = path.split('/').filter(|s| !s.is_empty()).last()?;
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_string())
}
