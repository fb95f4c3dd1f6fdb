//! Backend commands queued from UI to backend worker.

use shared::domain::DispatchRequest;

#[derive(Debug)]
pub enum BackendCommand {
    Dispatch(DispatchRequest),
}
