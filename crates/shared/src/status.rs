use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{domain::Endpoint, error::DispatchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Accepted,
    InputError,
    ServerError,
    TransportError,
}

/// Human-readable summary of the last dispatch outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn accepted(endpoint: Endpoint) -> Self {
        Self {
            kind: StatusKind::Accepted,
            text: format!("Success: {endpoint} command sent"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Accepted
    }
}

impl From<DispatchError> for StatusMessage {
    fn from(err: DispatchError) -> Self {
        let (kind, prefix) = match &err {
            DispatchError::EmptyAddress => (StatusKind::InputError, "Error"),
            DispatchError::UnexpectedStatus { .. } => (StatusKind::ServerError, "Failed"),
            DispatchError::Transport { .. } => (StatusKind::TransportError, "Error"),
        };
        Self {
            kind,
            text: format!("{prefix}: {err}"),
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_status_names_the_endpoint() {
        let status = StatusMessage::accepted(Endpoint::Start);
        assert!(status.is_success());
        assert_eq!(status.text, "Success: /start command sent");
    }

    #[test]
    fn server_error_keeps_status_code_verbatim() {
        let status = StatusMessage::from(DispatchError::UnexpectedStatus { status: 503 });
        assert_eq!(status.kind, StatusKind::ServerError);
        assert_eq!(status.text, "Failed: server returned status code 503");
    }

    #[test]
    fn transport_error_carries_reason_on_its_own_line() {
        let status = StatusMessage::from(DispatchError::Transport {
            reason: "connection refused".to_string(),
        });
        assert_eq!(status.kind, StatusKind::TransportError);
        assert_eq!(
            status.text,
            "Error: could not connect to server\nconnection refused"
        );
    }

    #[test]
    fn serializes_kind_in_snake_case() {
        let status = StatusMessage::from(DispatchError::EmptyAddress);
        let json = serde_json::to_value(&status).expect("serialize");
        assert_eq!(json["kind"], "input_error");
    }
}
