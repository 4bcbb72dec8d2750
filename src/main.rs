mod app;
mod color;
mod config;
mod data;
mod logic;
mod state;
mod ui;

#[cfg(test)]
mod testutil;

use app::TuthubApp;
use data::model::Model;
use eframe::egui;
use logic::Logic;

fn main() -> eframe::Result {
    env_logger::init();

    let prefs_path = config::prefs_path();
    let prefs = config::load_prefs(&prefs_path);
    let tuthub = data::storage::load_tuthub_or_default(&prefs.tuthub_file_path);
    let gui = prefs.gui_settings.clone();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([gui.window_width, gui.window_height])
        .with_min_inner_size([600.0, 400.0]);
    if let (Some(x), Some(y)) = (gui.window_x, gui.window_y) {
        viewport = viewport.with_position([x, y]);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let logic = Logic::new(Model::new(tuthub, prefs));
    eframe::run_native(
        "Tuthub",
        options,
        Box::new(move |_cc| Ok(Box::new(TuthubApp::new(logic, prefs_path)))),
    )
}
