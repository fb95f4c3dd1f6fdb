//! Runtime bridge between the UI command queue and backend event intake.
//!
//! The worker thread owns the tokio runtime and the dispatcher. Results travel back
//! over `ui_tx` and are applied on the UI thread when it drains its receiver, so no
//! panel state is ever written from here.

use std::thread;

use client_core::{CommandTransport, Dispatcher, Settings};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    settings: Settings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    repaint: impl Fn() + Send + 'static,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                report_startup_failure(&ui_tx, &repaint, format!("failed to build runtime: {err}"));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let dispatcher = match Dispatcher::new(&settings) {
            Ok(dispatcher) => dispatcher,
            Err(err) => {
                report_startup_failure(&ui_tx, &repaint, format!("{err:#}"));
                tracing::error!("failed to build dispatcher: {err:#}");
                return;
            }
        };

        tracing::info!(
            port = dispatcher.port(),
            timeout_ms = settings.timeout_ms,
            "backend worker ready"
        );
        runtime.block_on(serve_commands(&dispatcher, &cmd_rx, &ui_tx, &repaint));
        tracing::info!("backend worker stopped: command queue closed");
    })
}

/// Runs queued commands one at a time until every sender is dropped.
pub async fn serve_commands<T: CommandTransport>(
    dispatcher: &Dispatcher<T>,
    cmd_rx: &Receiver<BackendCommand>,
    ui_tx: &Sender<UiEvent>,
    repaint: &dyn Fn(),
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::Dispatch(request) => {
                if let Some(url) = dispatcher.url_for(&request) {
                    if let Err(err) = ui_tx.try_send(UiEvent::DispatchStarted {
                        endpoint: request.endpoint,
                        url,
                    }) {
                        tracing::warn!(endpoint = %request.endpoint, "dropped dispatch-started event: {err}");
                    }
                    repaint();
                }

                let status = dispatcher.dispatch_request(&request).await;
                // The panel stays pending until this arrives.
                if ui_tx
                    .send(UiEvent::DispatchFinished {
                        endpoint: request.endpoint,
                        status,
                    })
                    .is_err()
                {
                    tracing::warn!(endpoint = %request.endpoint, "ui receiver gone; stopping worker");
                    return;
                }
                repaint();
            }
        }
    }
}

fn report_startup_failure(ui_tx: &Sender<UiEvent>, repaint: &dyn Fn(), detail: String) {
    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
        UiErrorContext::BackendStartup,
        format!("backend worker startup failure: {detail}"),
    )));
    repaint();
}
