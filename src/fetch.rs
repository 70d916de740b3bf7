// src/fetch.rs
//
// The only I/O boundary in the crate. Everything downstream works on an
// already-fetched `FetchedPage`, so tests and alternative transports plug in
// through the `Fetch` trait.

use std::time::Duration;

use thiserror::Error;

use crate::params::{REQUEST_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A successfully fetched document. `final_url` is the URL after redirects;
/// the site answers unknown player names with a redirect to its root, which
/// callers detect through it.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub final_url: String,
    pub body: String,
}

pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Production fetcher: blocking HTTP GET with a fixed timeout and a browser
/// User-Agent.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        log::debug!("GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            log::warn!("GET {url} -> {status}");
            return Err(FetchError::Status(status.as_u16()));
        }
        let final_url = resp.url().to_string();
        let body = resp.text()?;
        Ok(FetchedPage { final_url, body })
    }
}
