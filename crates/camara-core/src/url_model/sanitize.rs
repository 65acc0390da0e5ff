//! Filesystem-safe file stems derived from captions.

/// Linux NAME_MAX, in bytes.
pub const NAME_MAX: usize = 255;

/// Sanitizes a caption-derived stem for use as a file name on Linux.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Trims leading/trailing spaces and dots
/// - Truncates to `max_bytes` on a char boundary
///
/// Spaces, commas and accents are kept: they are part of the Commons title.
pub fn sanitize_file_stem(stem: &str, max_bytes: usize) -> String {
    let replaced: String = stem
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = replaced.trim_matches(|c: char| c.is_whitespace() || c == '.');

    if trimmed.len() > max_bytes {
        let mut take = max_bytes;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].trim_end().to_string()
    } else {
        trimmed.to_string()
    }
}
