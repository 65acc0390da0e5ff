use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::caption::UnsplitCaption;

/// HTTP client parameters (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout; image downloads share it with page requests.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("camara-scraper/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout_secs: 15,
            timeout_secs: 120,
        }
    }
}

/// Global configuration loaded from `~/.config/camara/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Gallery endpoint that serves paginated HTML fragments.
    pub gallery_url: String,
    /// Substring present in a page while more pages remain.
    pub more_pages_marker: String,
    /// Upper bound on pages requested in one run.
    pub max_pages: u32,
    /// Root directory; each run writes into `<output_dir>/<YYYY-MM-DD>/`.
    pub output_dir: PathBuf,
    pub csv_file_name: String,
    /// JSON object mapping state codes (e.g. "SP") to Commons categories.
    pub category_per_state: PathBuf,
    /// JSON object mapping party codes (e.g. "PT") to Commons categories.
    pub category_per_party: PathBuf,
    /// Label placed between the people names and the date in file names.
    pub institution: String,
    /// Marker the gallery appends to thumbnail file names (`fotoPEQ.jpg`).
    pub low_res_token: String,
    /// How captions without any period are named.
    #[serde(default)]
    pub unsplit_caption: UnsplitCaption,
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            gallery_url: "https://www.camara.leg.br/banco-imagens//maisfotos".to_string(),
            more_pages_marker: r#"id="botao-mais-fotos""#.to_string(),
            max_pages: 200,
            output_dir: PathBuf::from("images"),
            csv_file_name: "openrefine_input.csv".to_string(),
            category_per_state: PathBuf::from("category_per_state.json"),
            category_per_party: PathBuf::from("category_per_party.json"),
            institution: "Câmara dos Deputados do Brasil".to_string(),
            low_res_token: "PEQ".to_string(),
            unsplit_caption: UnsplitCaption::default(),
            http: None,
        }
    }
}

impl ScraperConfig {
    /// HTTP settings, falling back to built-in defaults when the section is absent.
    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("camara")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScraperConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScraperConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ScraperConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ScraperConfig::default();
        assert_eq!(cfg.max_pages, 200);
        assert_eq!(cfg.more_pages_marker, "id=\"botao-mais-fotos\"");
        assert_eq!(cfg.csv_file_name, "openrefine_input.csv");
        assert_eq!(cfg.low_res_token, "PEQ");
        assert_eq!(cfg.unsplit_caption, UnsplitCaption::Caption);
        assert!(cfg.http.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ScraperConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ScraperConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.gallery_url, cfg.gallery_url);
        assert_eq!(parsed.output_dir, cfg.output_dir);
        assert_eq!(parsed.category_per_state, cfg.category_per_state);
        assert_eq!(parsed.institution, cfg.institution);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            gallery_url = "http://localhost:8080/maisfotos"
            more_pages_marker = "load-more"
            max_pages = 5
            output_dir = "/tmp/out"
            csv_file_name = "sheet.csv"
            category_per_state = "states.json"
            category_per_party = "parties.json"
            institution = "Chamber"
            low_res_token = "SMALL"
            unsplit_caption = "descriptor"
        "#;
        let cfg: ScraperConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.max_pages, 5);
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(cfg.low_res_token, "SMALL");
        assert_eq!(cfg.unsplit_caption, UnsplitCaption::Descriptor);
        assert_eq!(cfg.http().connect_timeout_secs, 15);
    }

    #[test]
    fn config_toml_http_section() {
        let toml = r#"
            gallery_url = "http://localhost/maisfotos"
            more_pages_marker = "more"
            max_pages = 1
            output_dir = "images"
            csv_file_name = "out.csv"
            category_per_state = "s.json"
            category_per_party = "p.json"
            institution = "X"
            low_res_token = "PEQ"

            [http]
            user_agent = "test-agent"
            connect_timeout_secs = 3
            timeout_secs = 9
        "#;
        let cfg: ScraperConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.unsplit_caption, UnsplitCaption::Caption);
        let http = cfg.http();
        assert_eq!(http.user_agent, "test-agent");
        assert_eq!(http.connect_timeout_secs, 3);
        assert_eq!(http.timeout_secs, 9);
    }
}
