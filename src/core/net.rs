// src/core/net.rs

// Blocking HTTPS GET with a browser User-Agent.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};

#[derive(Error, Debug)]
pub enum NetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },
}

/// Anything that can turn a listing URL into page HTML.
/// Workers share one source across threads.
pub trait PageSource: Sync {
    fn fetch(&self, url: &str) -> Result<String, NetError>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, NetError> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, NetError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpClient {
    fn fetch(&self, url: &str) -> Result<String, NetError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(NetError::Status { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp.text()?)
    }
}
