use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::logic::commands::ALL_USAGES;

/// Floating help window listing every command. `open` is cleared when the
/// user closes it.
pub fn help_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("Help")
        .open(open)
        .default_width(560.0)
        .resizable(true)
        .show(ctx, |ui: &mut Ui| {
            ui.label("Type a command into the box at the bottom and press Enter.");
            ui.separator();
            ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                for usage in ALL_USAGES {
                    ui.label(RichText::new(*usage).monospace());
                    ui.add_space(6.0);
                }
            });
        });
}
