//! Blocking HTTP access for the gallery and image hosts.
//!
//! The pipeline only depends on [`HttpClient`]; [`CurlClient`] is the libcurl
//! implementation used by the CLI.

use anyhow::{Context, Result};
use std::time::Duration;

use crate::config::HttpConfig;

/// Minimal request surface the pipeline needs.
pub trait HttpClient {
    /// POST with an empty body and return the response text.
    fn post(&self, url: &str) -> Result<String>;
    /// GET and return the raw response body.
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// libcurl-backed client. Follows redirects; one easy handle per request.
#[derive(Debug, Clone)]
pub struct CurlClient {
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlClient {
    pub fn new(cfg: &HttpConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }

    fn easy(&self, url: &str) -> Result<curl::easy::Easy> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        Ok(easy)
    }

    fn perform(&self, method: &str, url: &str, mut easy: curl::easy::Easy) -> Result<Vec<u8>> {
        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer
                .perform()
                .with_context(|| format!("{} {} failed", method, url))?;
        }

        let code = easy.response_code().context("no response code")?;
        if !(200..300).contains(&code) {
            anyhow::bail!("{} {} returned HTTP {}", method, url, code);
        }
        tracing::debug!(method, url, bytes = body.len(), "http response");
        Ok(body)
    }
}

impl Default for CurlClient {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

impl HttpClient for CurlClient {
    fn post(&self, url: &str) -> Result<String> {
        let mut easy = self.easy(url)?;
        // Empty form body; sends Content-Length: 0.
        easy.post(true)?;
        easy.post_fields_copy(&[])?;
        let body = self.perform("POST", url, easy)?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let easy = self.easy(url)?;
        self.perform("GET", url, easy)
    }
}
