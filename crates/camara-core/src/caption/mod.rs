//! Caption heuristics: who is in the photo, and what the file should be called.
//!
//! Captions look like `"Sessão deliberativa. Dep. Fulano (PT-SP). Ciclano"`:
//! a narrative sentence followed by period-separated person descriptors.
//! The name heuristic is a [`NameStrategy`] so it can be swapped without
//! touching the rest of the pipeline.

mod congressmen;
mod file_name;

pub use congressmen::{find_congressmen, Affiliation, Congressmen};
pub use file_name::FirstPeriodSplit;

use serde::{Deserialize, Serialize};

/// Turns a caption into the ordered person-name fragments it mentions.
///
/// `None` means no names could be identified; the caller then falls back to
/// the caption text itself.
pub trait NameStrategy {
    fn person_names(&self, caption: &str) -> Option<Vec<String>>;
}

impl<F> NameStrategy for F
where
    F: Fn(&str) -> Option<Vec<String>>,
{
    fn person_names(&self, caption: &str) -> Option<Vec<String>> {
        self(caption)
    }
}

/// Naming of captions that contain no period at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsplitCaption {
    /// No descriptors: the whole caption (periods and quotes removed) names the file.
    #[default]
    Caption,
    /// The whole caption is one person descriptor; its last comma token is the name.
    Descriptor,
}

/// Derives file stems from captions.
pub struct CaptionParser {
    names: Box<dyn NameStrategy>,
    institution: String,
}

impl CaptionParser {
    pub fn new(names: Box<dyn NameStrategy>, institution: impl Into<String>) -> Self {
        Self {
            names,
            institution: institution.into(),
        }
    }

    /// Parser using [`FirstPeriodSplit`].
    pub fn first_period(unsplit: UnsplitCaption, institution: impl Into<String>) -> Self {
        Self::new(Box::new(FirstPeriodSplit::new(unsplit)), institution)
    }

    /// `"<names>, <institution>, <date>"`, without extension.
    pub fn file_stem(&self, caption: &str, date: &str) -> String {
        let subject = match self.names.person_names(caption) {
            Some(names) if !names.is_empty() => names.join(", "),
            _ => caption_as_name(caption),
        };
        format!("{}, {}, {}", subject, self.institution, date)
    }
}

/// Fallback name: the caption with periods and double quotes dropped.
fn caption_as_name(caption: &str) -> String {
    caption
        .chars()
        .filter(|c| *c != '.' && *c != '"')
        .collect::<String>()
        .trim()
        .to_string()
}
