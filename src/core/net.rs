// src/core/net.rs
//
// Blocking HTTP GET. One client per app; every call runs to completion on the caller's thread.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;

#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Status line + decoded body. Non-200 statuses are not errors at this layer.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    #[inline]
    pub fn is_ok(&self) -> bool { self.status == 200 }
}

#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
}

impl Http {
    pub fn new(timeout: Duration) -> Result<Self, NetError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(NetError::Client)?;
        Ok(Self { client })
    }

    pub fn get(&self, url: &str) -> Result<Response, NetError> {
        logd!("GET {}", url);
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        logd!("GET {} → {} ({} bytes)", url, status, body.len());
        Ok(Response { status, body })
    }
}
