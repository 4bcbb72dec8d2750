use std::path::PathBuf;

use eframe::egui;

use crate::config::{self, GuiSettings};
use crate::logic::Logic;
use crate::state::AppState;
use crate::ui::{help, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TuthubApp {
    pub state: AppState,
    prefs_path: PathBuf,
    /// Set once preferences have been written for this shutdown.
    prefs_saved: bool,
}

impl TuthubApp {
    pub fn new(logic: Logic, prefs_path: PathBuf) -> Self {
        Self {
            state: AppState::new(logic),
            prefs_path,
            prefs_saved: false,
        }
    }

    /// Record the current window geometry and write preferences to disk.
    fn save_prefs(&mut self, ctx: &egui::Context) {
        let (inner, outer) = ctx.input(|i| (i.viewport().inner_rect, i.viewport().outer_rect));
        let mut settings: GuiSettings = self.state.logic.gui_settings().clone();
        if let Some(inner) = inner {
            settings.window_width = inner.width();
            settings.window_height = inner.height();
        }
        if let Some(outer) = outer {
            settings.window_x = Some(outer.min.x);
            settings.window_y = Some(outer.min.y);
        }
        self.state.logic.set_gui_settings(settings);

        if let Err(e) = config::save_prefs(&self.prefs_path, self.state.logic.model().user_prefs()) {
            log::error!("Failed to save preferences: {e:#}");
        }
    }
}

/// Preferences are written once, on the first frame that is shutting down.
fn needs_prefs_save(closing: bool, exit_requested: bool, already_saved: bool) -> bool {
    (closing || exit_requested) && !already_saved
}

impl eframe::App for TuthubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::F1)) {
            self.state.help_open = true;
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panels: status bar, then result display + command box ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });
        egui::TopBottomPanel::bottom("command_panel")
            .resizable(false)
            .show(ctx, |ui| {
                panels::command_panel(ui, &mut self.state);
            });

        // ---- Right side panel: tutor details, only while viewing ----
        if let Some(tutor) = &self.state.detail {
            egui::SidePanel::right("detail_panel")
                .default_width(320.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::tutor_details(ui, tutor);
                });
        }

        // ---- Central panel: tutor list ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::tutor_list(ui, &self.state);
        });

        help::help_window(ctx, &mut self.state.help_open);

        let closing = ctx.input(|i| i.viewport().close_requested());
        if needs_prefs_save(closing, self.state.exit_requested, self.prefs_saved) {
            self.save_prefs(ctx);
            self.prefs_saved = true;
        }
        if self.state.exit_requested && !closing {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
