use thiserror::Error;

/// Terminal outcomes of a dispatch that did not end in HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("please enter a server IP address")]
    EmptyAddress,
    #[error("server returned status code {status}")]
    UnexpectedStatus { status: u16 },
    #[error("could not connect to server\n{reason}")]
    Transport { reason: String },
}
