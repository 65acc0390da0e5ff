use std::path::PathBuf;

use crate::caption::Congressmen;

/// One downloaded, unattributed gallery image and what we know about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Name actually written, including any collision suffix.
    pub file_name: String,
    pub file_path: PathBuf,
    pub author: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Full-resolution URL the bytes came from.
    pub source: String,
    pub alt_text: String,
    /// Deputies named in the caption; `None` when no mention was recognised.
    pub congressmen: Option<Congressmen>,
}
