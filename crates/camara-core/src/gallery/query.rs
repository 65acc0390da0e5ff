//! Page URL construction for the gallery endpoint.

use chrono::NaiveDate;

/// Which gallery listing to page through.
#[derive(Debug, Clone)]
pub struct GalleryQuery {
    pub base_url: String,
    /// Restrict to photos of a single day; `None` lists everything.
    pub date: Option<NaiveDate>,
}

impl GalleryQuery {
    pub fn new(base_url: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            base_url: base_url.into(),
            date,
        }
    }

    /// URL of the 1-based page `page`.
    ///
    /// The dated form keeps the endpoint's own `&?buscar=` quirk verbatim.
    pub fn page_url(&self, page: u32) -> String {
        match self.date {
            Some(date) => {
                let d = date.format("%d/%m/%Y");
                format!(
                    "{}?pagina={}&?buscar=&dataInicio={}&dataFim={}",
                    self.base_url, page, d, d
                )
            }
            None => format!("{}?pagina={}", self.base_url, page),
        }
    }
}
