#![allow(dead_code)]

pub mod gallery_server;

use camara_core::config::ScraperConfig;
use std::path::Path;

pub const MARKER_BUTTON: &str = r#"<button id="botao-mais-fotos">Carregar mais</button>"#;

/// Config pointing at `gallery_url` and writing below `output_dir`.
pub fn test_config(gallery_url: &str, output_dir: &Path) -> ScraperConfig {
    ScraperConfig {
        gallery_url: gallery_url.to_string(),
        output_dir: output_dir.to_path_buf(),
        max_pages: 10,
        ..ScraperConfig::default()
    }
}

/// Gallery markup for one photo card.
pub fn card(author: &str, src: &str, alt: &str) -> String {
    format!(
        r#"<div class="foto" data-autor="{}"><a href="/foto"><img src="{}" alt="{}"></a></div>"#,
        author, src, alt
    )
}
