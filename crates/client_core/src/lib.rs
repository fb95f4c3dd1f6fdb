use std::time::Duration;

use anyhow::Result;
use shared::{
    domain::{DispatchRequest, Endpoint},
    error::DispatchError,
    status::StatusMessage,
};
use tracing::{info, warn};

pub mod config;
pub mod transport;

pub use config::{load_settings, Settings};
pub use transport::{CommandTransport, HttpTransport};

const SCHEME: &str = "http";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub fn build_url(address: &str, port: u16, endpoint: Endpoint) -> String {
    format!("{SCHEME}://{address}:{port}{}", endpoint.path())
}

/// Sends one recording command per call and turns the outcome into a status line.
///
/// Failures are terminal: nothing is retried and no state is carried between calls.
pub struct Dispatcher<T = HttpTransport> {
    transport: T,
    port: u16,
}

impl Dispatcher<HttpTransport> {
    pub fn new(settings: &Settings) -> Result<Self> {
        let transport = HttpTransport::new(settings.timeout())?;
        Ok(Self::with_transport(transport, settings.port))
    }
}

impl<T: CommandTransport> Dispatcher<T> {
    pub fn with_transport(transport: T, port: u16) -> Self {
        Self { transport, port }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// URL the request would hit, or `None` when the address is blank.
    pub fn url_for(&self, request: &DispatchRequest) -> Option<String> {
        request
            .target()
            .map(|address| build_url(address, self.port, request.endpoint))
    }

    pub async fn dispatch(&self, address: &str, endpoint: Endpoint) -> StatusMessage {
        self.dispatch_request(&DispatchRequest::new(address, endpoint))
            .await
    }

    pub async fn dispatch_request(&self, request: &DispatchRequest) -> StatusMessage {
        match self.try_dispatch(request).await {
            Ok(()) => StatusMessage::accepted(request.endpoint),
            Err(err) => err.into(),
        }
    }

    pub async fn try_dispatch(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        let Some(url) = self.url_for(request) else {
            warn!(endpoint = %request.endpoint, "dispatch skipped: empty address");
            return Err(DispatchError::EmptyAddress);
        };

        match self.transport.get(&url).await {
            Ok(200) => {
                info!(%url, endpoint = %request.endpoint, "command accepted");
                Ok(())
            }
            Ok(status) => {
                warn!(%url, status, "server rejected command");
                Err(DispatchError::UnexpectedStatus { status })
            }
            Err(reason) => {
                warn!(%url, %reason, "command request failed");
                Err(DispatchError::Transport { reason })
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
