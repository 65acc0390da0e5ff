//! Default name heuristic: everything after the first period lists people.

use super::{NameStrategy, UnsplitCaption};

/// Splits the caption on its first period; the rest is a list of
/// period-separated descriptors such as `"Relator, Dep. Fulano"`, whose last
/// comma-separated token is taken as the person's name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPeriodSplit {
    unsplit: UnsplitCaption,
}

impl FirstPeriodSplit {
    pub fn new(unsplit: UnsplitCaption) -> Self {
        Self { unsplit }
    }

    fn descriptors<'a>(&self, caption: &'a str) -> &'a str {
        match caption.split_once('.') {
            Some((_, rest)) => rest,
            None => match self.unsplit {
                UnsplitCaption::Caption => "",
                UnsplitCaption::Descriptor => caption,
            },
        }
    }
}

impl NameStrategy for FirstPeriodSplit {
    fn person_names(&self, caption: &str) -> Option<Vec<String>> {
        let names: Vec<String> = self
            .descriptors(caption)
            .split('.')
            .filter(|d| !d.trim().is_empty())
            .filter_map(|d| d.rsplit(',').next())
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        (!names.is_empty()).then_some(names)
    }
}
