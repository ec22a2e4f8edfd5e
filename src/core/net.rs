// src/core/net.rs
// Where the menu markup comes from.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

use super::sanitize::repair_markup;

/// Something that can hand over the current menu document.
pub trait Source {
    fn fetch(&self) -> Result<String>;
}

/// Fixed-document source; handy for replays of a saved page.
impl Source for str {
    fn fetch(&self) -> Result<String> {
        Ok(s!(self))
    }
}

/// The live menu page over HTTP(S).
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Source for HttpSource {
    fn fetch(&self) -> Result<String> {
        info!("fetching {}", self.url);
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let resp = client.get(&self.url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { status: status.as_u16(), url: self.url.clone() });
        }

        let bytes = resp.bytes()?;
        debug!("{} bytes from {}", bytes.len(), self.url);
        let body = decode_body(&self.url, bytes.to_vec())?;
        Ok(repair_markup(&body))
    }
}

/// The page is UTF-8; anything else is a failed fetch.
fn decode_body(url: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|source| Error::Decode { url: s!(url), source })
}
