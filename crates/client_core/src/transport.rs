//! Network seam between the dispatcher and the remote recording server.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Performs one GET and yields the response status code, or a readable failure reason.
#[async_trait]
pub trait CommandTransport: Send + Sync {
    async fn get(&self, url: &str) -> std::result::Result<u16, String>;
}

#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http })
    }
}

#[async_trait]
impl CommandTransport for HttpTransport {
    async fn get(&self, url: &str) -> std::result::Result<u16, String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| describe_error_chain(&err))?;
        Ok(response.status().as_u16())
    }
}

/// Joins an error with its sources so "operation timed out" or "connection refused"
/// survives reqwest's generic top-level message.
pub(crate) fn describe_error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}
