use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{domain::Endpoint, status::StatusKind};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::trigger_endpoint;
use crate::controller::reducer::{DispatchPhase, PanelState};

const STATUS_FONT_SIZE: f32 = 20.0;
const INPUT_FONT_SIZE: f32 = 18.0;
const BUTTON_FONT_SIZE: f32 = 20.0;
const PANEL_SPACING: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub address: String,
}

fn status_color(kind: Option<StatusKind>) -> egui::Color32 {
    match kind {
        Some(StatusKind::Accepted) => egui::Color32::from_rgb(70, 170, 90),
        Some(StatusKind::ServerError) => egui::Color32::from_rgb(220, 150, 40),
        Some(StatusKind::InputError) | Some(StatusKind::TransportError) => {
            egui::Color32::from_rgb(220, 70, 70)
        }
        None => egui::Color32::GRAY,
    }
}

pub struct RemotePanelApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: PanelState,
}

impl RemotePanelApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: PanelState::new(startup.address),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply(event);
        }
    }

    fn show_panel(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin::same(20));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(PANEL_SPACING, PANEL_SPACING);
            ui.vertical_centered_justified(|ui| {
                ui.label(
                    egui::RichText::new(self.state.status())
                        .size(STATUS_FONT_SIZE)
                        .color(status_color(self.state.last_kind())),
                );

                let editable = self.state.phase() != DispatchPhase::Unavailable;
                ui.add_enabled(
                    editable,
                    egui::TextEdit::singleline(&mut self.state.address)
                        .hint_text("Server IP address")
                        .font(egui::FontId::proportional(INPUT_FONT_SIZE)),
                );

                let enabled = self.state.accepts_triggers();
                for endpoint in Endpoint::ALL {
                    let label = match self.state.phase() {
                        DispatchPhase::Pending { endpoint: pending } if pending == endpoint => {
                            format!("{}...", endpoint.button_label())
                        }
                        _ => endpoint.button_label().to_string(),
                    };
                    let button = egui::Button::new(egui::RichText::new(label).size(BUTTON_FONT_SIZE))
                        .min_size(egui::vec2(0.0, 56.0));
                    if ui.add_enabled(enabled, button).clicked() {
                        trigger_endpoint(&self.cmd_tx, &mut self.state, endpoint);
                    }
                }
            });
        });
    }
}

impl eframe::App for RemotePanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_panel(ctx);

        if matches!(self.state.phase(), DispatchPhase::Pending { .. }) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
