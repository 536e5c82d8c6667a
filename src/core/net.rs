// src/core/net.rs

// Blocking HTTP GET (reqwest). Everything that reads a remote page goes
// through `PageSource`, so the pipeline can be driven from fixtures.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use url::Url;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

pub trait PageSource {
    /// Fetch `url` and return the body as text. Non-2xx is an error.
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        // The proxy and the site both key off this to serve the AJAX fragment
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    /// Raw bytes (thumbnails).
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        Ok(resp.bytes()?.to_vec())
    }
}

impl PageSource for HttpSource {
    fn get(&self, url: &str) -> Result<String> {
        logd!("GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        Ok(resp.text()?)
    }
}

/// Resolve `href` (absolute, root-relative or relative) against `base`.
pub fn resolve(base: &str, href: &str) -> Result<Url> {
    let base = Url::parse(base).map_err(|_| ScrapeError::Url(s!(base)))?;
    base.join(href).map_err(|_| ScrapeError::Url(s!(href)))
}
