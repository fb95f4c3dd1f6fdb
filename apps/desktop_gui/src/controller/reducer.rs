//! Panel state and the transitions driven by user triggers and backend events.

use shared::{
    domain::{DispatchRequest, Endpoint},
    error::DispatchError,
    status::{StatusKind, StatusMessage},
};

use crate::controller::events::{UiError, UiEvent};

pub fn status_line(message: &str) -> String {
    format!("Status: {message}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPhase {
    Idle,
    Pending { endpoint: Endpoint },
    /// Backend never came up; triggers stay disabled.
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct PanelState {
    pub address: String,
    status: String,
    last_kind: Option<StatusKind>,
    phase: DispatchPhase,
}

impl PanelState {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            status: status_line("Not connected"),
            last_kind: None,
            phase: DispatchPhase::Idle,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn last_kind(&self) -> Option<StatusKind> {
        self.last_kind
    }

    pub fn phase(&self) -> DispatchPhase {
        self.phase
    }

    pub fn accepts_triggers(&self) -> bool {
        self.phase == DispatchPhase::Idle
    }

    /// Moves to `Pending` and hands back the request to enqueue.
    ///
    /// Returns `None` while another dispatch is in flight, and for an empty address,
    /// which is reported locally without reaching the backend.
    pub fn begin_dispatch(&mut self, endpoint: Endpoint) -> Option<DispatchRequest> {
        if !self.accepts_triggers() {
            tracing::debug!(%endpoint, phase = ?self.phase, "trigger ignored");
            return None;
        }

        let request = DispatchRequest::new(self.address.clone(), endpoint);
        if request.target().is_none() {
            self.show(StatusMessage::from(DispatchError::EmptyAddress));
            return None;
        }

        self.phase = DispatchPhase::Pending { endpoint };
        Some(request)
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::DispatchStarted { url, .. } => {
                self.status = status_line(&format!("Sending request to {url}..."));
            }
            UiEvent::DispatchFinished { endpoint, status } => {
                if self.phase != (DispatchPhase::Pending { endpoint }) {
                    tracing::warn!(%endpoint, phase = ?self.phase, "unexpected dispatch completion");
                }
                if self.phase != DispatchPhase::Unavailable {
                    self.phase = DispatchPhase::Idle;
                }
                self.show(status);
            }
            UiEvent::Error(err) => self.fail(err),
        }
    }

    fn show(&mut self, status: StatusMessage) {
        self.last_kind = Some(status.kind);
        self.status = status_line(&status.text);
    }

    fn fail(&mut self, err: UiError) {
        tracing::warn!(
            category = ?err.category(),
            context = ?err.context(),
            "backend error: {}",
            err.message()
        );
        self.phase = if err.is_recoverable() {
            DispatchPhase::Idle
        } else {
            DispatchPhase::Unavailable
        };
        self.last_kind = None;
        self.status = status_line(&format!(
            "{} error: {}",
            err.category().label(),
            err.message()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiErrorContext;

    #[test]
    fn starts_idle_with_not_connected_status() {
        let state = PanelState::new("192.168.1.100");
        assert_eq!(state.status(), "Status: Not connected");
        assert_eq!(state.phase(), DispatchPhase::Idle);
        assert!(state.accepts_triggers());
    }

    #[test]
    fn trigger_moves_to_pending_and_refuses_overlap() {
        let mut state = PanelState::new("192.168.1.100");

        let request = state.begin_dispatch(Endpoint::Start).expect("request");
        assert_eq!(request, DispatchRequest::new("192.168.1.100", Endpoint::Start));
        assert_eq!(
            state.phase(),
            DispatchPhase::Pending {
                endpoint: Endpoint::Start
            }
        );

        assert!(state.begin_dispatch(Endpoint::Stop).is_none());
        assert_eq!(
            state.phase(),
            DispatchPhase::Pending {
                endpoint: Endpoint::Start
            }
        );
    }

    #[test]
    fn blank_address_reports_input_error_and_stays_idle() {
        let mut state = PanelState::new("");

        assert!(state.begin_dispatch(Endpoint::Start).is_none());
        assert_eq!(state.phase(), DispatchPhase::Idle);
        assert_eq!(state.last_kind(), Some(StatusKind::InputError));
        assert_eq!(
            state.status(),
            "Status: Error: please enter a server IP address"
        );
    }

    #[test]
    fn started_then_finished_round_trip() {
        let mut state = PanelState::new("10.0.0.5");
        state.begin_dispatch(Endpoint::Stop).expect("request");

        state.apply(UiEvent::DispatchStarted {
            endpoint: Endpoint::Stop,
            url: "http://10.0.0.5:5000/stop".to_string(),
        });
        assert_eq!(
            state.status(),
            "Status: Sending request to http://10.0.0.5:5000/stop..."
        );
        assert!(!state.accepts_triggers());

        state.apply(UiEvent::DispatchFinished {
            endpoint: Endpoint::Stop,
            status: StatusMessage::accepted(Endpoint::Stop),
        });
        assert!(state.accepts_triggers());
        assert_eq!(state.last_kind(), Some(StatusKind::Accepted));
        assert_eq!(state.status(), "Status: Success: /stop command sent");
    }

    #[test]
    fn server_error_status_is_shown_with_prefix() {
        let mut state = PanelState::new("10.0.0.5");
        state.begin_dispatch(Endpoint::Start).expect("request");

        state.apply(UiEvent::DispatchFinished {
            endpoint: Endpoint::Start,
            status: DispatchError::UnexpectedStatus { status: 404 }.into(),
        });

        assert!(state.status().starts_with("Status: "));
        assert!(state.status().contains("404"));
        assert_eq!(state.last_kind(), Some(StatusKind::ServerError));
    }

    #[test]
    fn startup_error_disables_triggers() {
        let mut state = PanelState::new("10.0.0.5");
        state.apply(UiEvent::Error(UiError::from_message(
            UiErrorContext::BackendStartup,
            "backend worker startup failure: failed to build runtime",
        )));

        assert_eq!(state.phase(), DispatchPhase::Unavailable);
        assert!(state.begin_dispatch(Endpoint::Start).is_none());
        assert_eq!(
            state.status(),
            "Status: Unexpected error: backend worker startup failure: failed to build runtime"
        );
    }

    #[test]
    fn dispatch_error_returns_pending_panel_to_idle() {
        let mut state = PanelState::new("10.0.0.5");
        state.begin_dispatch(Endpoint::Start).expect("request");

        state.apply(UiEvent::Error(UiError::from_message(
            UiErrorContext::Dispatch,
            "UI command queue is full; please retry",
        )));

        assert!(state.accepts_triggers());
        assert_eq!(state.last_kind(), None);
        assert_eq!(
            state.status(),
            "Status: Transport error: UI command queue is full; please retry"
        );
    }
}
