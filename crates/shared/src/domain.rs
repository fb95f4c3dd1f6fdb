use std::fmt;

use serde::{Deserialize, Serialize};

/// Remote recording command exposed by the controlled server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Start,
    Stop,
}

impl Endpoint {
    pub const ALL: [Endpoint; 2] = [Endpoint::Start, Endpoint::Stop];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Start => "/start",
            Endpoint::Stop => "/stop",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Endpoint::Start => "Start recording",
            Endpoint::Stop => "Stop recording",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One trigger of the panel: where to send and which command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub address: String,
    pub endpoint: Endpoint,
}

impl DispatchRequest {
    pub fn new(address: impl Into<String>, endpoint: Endpoint) -> Self {
        Self {
            address: address.into(),
            endpoint,
        }
    }

    /// Address exactly as entered, or `None` when the field is empty.
    pub fn target(&self) -> Option<&str> {
        (!self.address.is_empty()).then_some(self.address.as_str())
    }
}
