use eframe::egui::{self, Align, Color32, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::tag_color;
use crate::data::tutor::Tutor;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Exit").clicked() {
                state.exit_requested = true;
                ui.close_menu();
            }
        });
        ui.menu_button("Help", |ui: &mut Ui| {
            if ui.button("Help  (F1)").clicked() {
                state.help_open = true;
                ui.close_menu();
            }
        });

        ui.separator();

        let model = state.logic.model();
        ui.label(format!(
            "{} tutors, {} listed",
            model.tuthub().len(),
            model.filtered_len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Tutor list (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered tutor list as a table. Row numbers are the indices
/// that `edit`, `delete` and `view` accept.
pub fn tutor_list(ui: &mut Ui, state: &AppState) {
    if state.logic.model().filtered_len() == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No tutors to show");
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(32.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in ["#", "Name", "Module", "Year", "Rating", "Tags"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for (i, tutor) in state.logic.filtered_tutors().enumerate() {
                body.row(24.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{}.", i + 1));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(tutor.name.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(tutor.module.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(tutor.year.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.1}", tutor.rating.numeric()));
                    });
                    row.col(|ui: &mut Ui| {
                        tag_chips(ui, tutor);
                    });
                });
            }
        });
}

fn tag_chips(ui: &mut Ui, tutor: &Tutor) {
    ui.horizontal(|ui: &mut Ui| {
        for tag in &tutor.tags {
            ui.label(
                RichText::new(format!(" {} ", tag.as_str()))
                    .color(Color32::WHITE)
                    .background_color(tag_color(tag.as_str())),
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Detail panel
// ---------------------------------------------------------------------------

/// Render every field of one tutor. Shown after a successful `view`.
pub fn tutor_details(ui: &mut Ui, tutor: &Tutor) {
    ui.heading(tutor.name.as_str());
    ui.separator();

    egui::Grid::new("tutor_details")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            let rows = [
                ("Phone", tutor.phone.to_string()),
                ("Email", tutor.email.to_string()),
                ("Module", tutor.module.to_string()),
                ("Year", tutor.year.to_string()),
                ("Student ID", tutor.student_id.to_string()),
                ("Teaching nominations", tutor.teaching_nomination.to_string()),
                ("Rating", format!("{} / 5.0", tutor.rating)),
            ];
            for (label, value) in rows {
                ui.strong(label);
                ui.label(value);
                ui.end_row();
            }
        });

    if !tutor.tags.is_empty() {
        ui.add_space(8.0);
        ui.strong("Tags");
        tag_chips(ui, tutor);
    }
}

// ---------------------------------------------------------------------------
// Result display + command box (bottom)
// ---------------------------------------------------------------------------

/// Render the feedback area above a single-line command box.
pub fn command_panel(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .max_height(90.0)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            let mut text = RichText::new(&state.feedback).monospace();
            if state.last_failed {
                text = text.color(Color32::RED);
            }
            ui.label(text);
        });

    ui.separator();

    let mut edit = egui::TextEdit::singleline(&mut state.command_input)
        .hint_text("Enter command here...")
        .desired_width(f32::INFINITY)
        .font(egui::TextStyle::Monospace);
    if state.last_failed {
        edit = edit.text_color(Color32::RED);
    }
    let response = ui.add(edit);

    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        state.submit_command();
        response.request_focus();
    } else if response.changed() {
        state.last_failed = false;
    }
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{}", state.logic.tuthub_file_path().display()));
        if let Some(msg) = &state.status_message {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                ui.label(RichText::new(msg).color(Color32::RED));
            });
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tutor data")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.open_data_file(path);
    }
}
