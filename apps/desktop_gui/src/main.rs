mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{load_settings, Settings};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{RemotePanelApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Start/stop a remote recorder over HTTP")]
struct Args {
    /// Server address prefilled in the input field.
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,
}

impl Args {
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(v) = self.address {
            settings.default_address = v;
        }
        if let Some(v) = self.port {
            settings.port = v;
        }
        if let Some(v) = self.timeout_ms {
            settings.timeout_ms = v;
        }
        settings
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Args::parse().apply(load_settings());
    tracing::info!(
        address = %settings.default_address,
        port = settings.port,
        timeout_ms = settings.timeout_ms,
        "starting remote control panel"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(8);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    let startup = StartupConfig {
        address: settings.default_address.clone(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Remote Recording Control")
            .with_inner_size([420.0, 360.0])
            .with_min_inner_size([320.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Remote Recording Control",
        options,
        Box::new(move |cc| {
            let egui_ctx = cc.egui_ctx.clone();
            backend_bridge::runtime::launch(settings, cmd_rx, ui_tx, move || {
                egui_ctx.request_repaint()
            });
            Ok(Box::new(RemotePanelApp::bootstrap(cmd_tx, ui_rx, startup)))
        }),
    )
}
