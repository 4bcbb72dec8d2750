use std::path::PathBuf;

use crate::data::tutor::Tutor;
use crate::logic::commands::CommandResult;
use crate::logic::Logic;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Command pipeline and the model behind it.
    pub logic: Logic,

    /// Text currently in the command box.
    pub command_input: String,

    /// Feedback from the last command, shown in the result display.
    pub feedback: String,

    /// Whether the last submission failed (command box shown in error style).
    pub last_failed: bool,

    /// Tutor shown in the detail panel, if any.
    pub detail: Option<Tutor>,

    /// Whether the help window is open.
    pub help_open: bool,

    /// Set once the user asked to quit; the app closes the window.
    pub exit_requested: bool,

    /// Status / error message shown in the status bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(logic: Logic) -> Self {
        Self {
            logic,
            command_input: String::new(),
            feedback: String::new(),
            last_failed: false,
            detail: None,
            help_open: false,
            exit_requested: false,
            status_message: None,
        }
    }

    /// Run whatever is in the command box.
    ///
    /// On success the box is cleared; on failure the text stays so the user
    /// can fix it, and the detail panel is left as it was.
    pub fn submit_command(&mut self) {
        let text = self.command_input.clone();
        match self.logic.execute(&text) {
            Ok(result) => {
                self.command_input.clear();
                self.last_failed = false;
                self.apply_result(result);
            }
            Err(e) => {
                self.feedback = e.to_string();
                self.last_failed = true;
            }
        }
    }

    fn apply_result(&mut self, result: CommandResult) {
        if result.is_view() {
            self.detail = result.view;
        } else {
            // Any other command closes the detail panel.
            self.detail = None;
        }
        self.feedback = result.feedback;
        if result.show_help {
            self.help_open = true;
        }
        if result.exit {
            self.exit_requested = true;
        }
    }

    /// Load another data file chosen by the user.
    pub fn open_data_file(&mut self, path: PathBuf) {
        match self.logic.open_data_file(path) {
            Ok(()) => {
                self.detail = None;
                self.status_message = None;
                self.feedback = format!(
                    "Opened {} ({} tutors)",
                    self.logic.tuthub_file_path().display(),
                    self.logic.model().tuthub().len()
                );
            }
            Err(e) => {
                log::error!("Failed to open data file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserPrefs;
    use crate::data::model::{Model, Tuthub};
    use crate::testutil::typical_tutors;

    fn state_in(dir: &std::path::Path) -> AppState {
        let prefs = UserPrefs {
            tuthub_file_path: dir.join("tuthub.json"),
            ..Default::default()
        };
        let tuthub = Tuthub::from_tutors(typical_tutors()).unwrap();
        AppState::new(Logic::new(Model::new(tuthub, prefs)))
    }

    #[test]
    fn successful_command_clears_input_and_shows_detail() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.command_input = "view 2".to_string();
        state.submit_command();
        assert!(state.command_input.is_empty());
        assert!(!state.last_failed);
        assert_eq!(state.feedback, "Viewing Tutor: Bob Choo");
        assert_eq!(state.detail.as_ref().map(|t| t.name.as_str()), Some("Bob Choo"));

        state.command_input = "list".to_string();
        state.submit_command();
        assert!(state.detail.is_none());
    }

    #[test]
    fn failed_command_keeps_input_and_detail() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.command_input = "view 1".to_string();
        state.submit_command();

        state.command_input = "delete 99".to_string();
        state.submit_command();
        assert_eq!(state.command_input, "delete 99");
        assert!(state.last_failed);
        assert_eq!(state.feedback, "The tutor index provided is invalid");
        assert!(state.detail.is_some());
    }

    #[test]
    fn help_and_exit_flags_reach_the_ui() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.command_input = "help".to_string();
        state.submit_command();
        assert!(state.help_open);
        assert!(!state.exit_requested);

        state.command_input = "exit".to_string();
        state.submit_command();
        assert!(state.exit_requested);
    }

    #[test]
    fn opening_unreadable_file_sets_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();

        state.open_data_file(bad);
        assert!(state.status_message.is_some());
        assert_eq!(state.logic.model().tuthub().len(), 4);
    }
}
