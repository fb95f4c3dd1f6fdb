//! Command orchestration helpers from UI triggers to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::Endpoint;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::reducer::PanelState;

/// Handles a button press: validates against the panel state and queues one dispatch.
pub fn trigger_endpoint(cmd_tx: &Sender<BackendCommand>, state: &mut PanelState, endpoint: Endpoint) {
    if let Some(request) = state.begin_dispatch(endpoint) {
        dispatch_backend_command(cmd_tx, BackendCommand::Dispatch(request), state);
    }
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    state: &mut PanelState,
) {
    let cmd_name = match &cmd {
        BackendCommand::Dispatch(request) => request.endpoint.path(),
    };

    let failure = match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            return;
        }
        Err(TrySendError::Full(_)) => "UI command queue is full; please retry",
        Err(TrySendError::Disconnected(_)) => {
            "Backend command processor disconnected (possible startup/runtime failure)"
        }
    };
    state.apply(UiEvent::Error(UiError::from_message(
        UiErrorContext::Dispatch,
        failure,
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::reducer::DispatchPhase;
    use crossbeam_channel::bounded;
    use shared::domain::DispatchRequest;

    #[test]
    fn queues_one_dispatch_per_trigger() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut state = PanelState::new("192.168.1.100");

        trigger_endpoint(&cmd_tx, &mut state, Endpoint::Start);
        trigger_endpoint(&cmd_tx, &mut state, Endpoint::Stop);

        let queued: Vec<_> = cmd_rx.try_iter().collect();
        assert_eq!(queued.len(), 1);
        let BackendCommand::Dispatch(request) = &queued[0];
        assert_eq!(
            *request,
            DispatchRequest::new("192.168.1.100", Endpoint::Start)
        );
    }

    #[test]
    fn full_queue_returns_panel_to_idle() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        cmd_tx
            .try_send(BackendCommand::Dispatch(DispatchRequest::new(
                "10.0.0.1",
                Endpoint::Stop,
            )))
            .expect("prefill");
        let mut state = PanelState::new("10.0.0.1");

        trigger_endpoint(&cmd_tx, &mut state, Endpoint::Start);

        assert_eq!(state.phase(), DispatchPhase::Idle);
        assert_eq!(
            state.status(),
            "Status: Transport error: UI command queue is full; please retry"
        );
    }

    #[test]
    fn disconnected_backend_is_reported() {
        let (cmd_tx, cmd_rx) = bounded(1);
        drop(cmd_rx);
        let mut state = PanelState::new("10.0.0.1");

        trigger_endpoint(&cmd_tx, &mut state, Endpoint::Start);

        assert_eq!(state.phase(), DispatchPhase::Idle);
        assert!(state.status().starts_with("Status: Transport error: Backend command processor disconnected"));
    }

    #[test]
    fn blank_address_never_reaches_the_queue() {
        let (cmd_tx, cmd_rx) = bounded(1);
        let mut state = PanelState::new("");

        trigger_endpoint(&cmd_tx, &mut state, Endpoint::Start);

        assert!(cmd_rx.try_recv().is_err());
        assert!(state.status().contains("please enter a server IP address"));
    }
}
