/// Command layer: text in, `CommandResult` out.
///
/// ```text
///   "edit 2 r/4.5"
///        │
///        ▼
///   ┌───────────┐
///   │  parser   │  dispatcher + tokenizer + field parsers → Command
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ commands  │  Command::execute(&mut Model) → CommandResult
///   └───────────┘
///        │
///        ▼
///   storage::save_tuthub
/// ```

pub mod commands;
pub mod error;
pub mod parser;
pub mod tokenizer;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::GuiSettings;
use crate::data::model::Model;
use crate::data::storage::{read_tuthub, save_tuthub};
use crate::data::tutor::Tutor;

use commands::CommandResult;
use error::{CommandError, LogicError};
use parser::parse_command;

/// Owns the model and runs user input against it.
pub struct Logic {
    model: Model,
}

impl Logic {
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    /// Parse and run one line of input, then persist the tutor list.
    ///
    /// If the save fails the model is put back as it was before the command.
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        log::info!("----------------[USER COMMAND][{command_text}]");

        let command = parse_command(command_text).inspect_err(|e| {
            log::info!("Invalid command {command_text:?}: {e}");
        })?;
        let before = self.model.clone();
        let result = command.execute(&mut self.model).inspect_err(|e| {
            log::info!("Command {command_text:?} failed: {e}");
        })?;

        if let Err(e) = self.save() {
            self.model = before;
            return Err(e.into());
        }
        log::info!("Result: {}", result.feedback);
        Ok(result)
    }

    fn save(&self) -> Result<(), CommandError> {
        save_tuthub(self.model.tuthub_file_path(), self.model.tuthub()).map_err(|e| {
            log::error!("Failed to save tutors: {e:#}");
            CommandError::Storage(format!("{e:#}"))
        })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn filtered_tutors(&self) -> impl Iterator<Item = &Tutor> + '_ {
        self.model.filtered_tutors()
    }

    pub fn tuthub_file_path(&self) -> &Path {
        self.model.tuthub_file_path()
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        self.model.gui_settings()
    }

    pub fn set_gui_settings(&mut self, settings: GuiSettings) {
        self.model.set_gui_settings(settings);
    }

    /// Switch to another data file. A missing file opens as an empty Tuthub.
    pub fn open_data_file(&mut self, path: PathBuf) -> Result<()> {
        let tuthub = read_tuthub(&path)?.unwrap_or_default();
        log::info!("Opened {} with {} tutors", path.display(), tuthub.len());
        self.model.set_tuthub(tuthub);
        self.model.set_tuthub_file_path(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserPrefs;
    use crate::data::model::Tuthub;
    use crate::logic::error::ParseError;
    use crate::testutil::{typical_tutors, TutorBuilder};

    fn logic_in(dir: &Path) -> Logic {
        let prefs = UserPrefs {
            tuthub_file_path: dir.join("tuthub.json"),
            ..Default::default()
        };
        let tuthub = Tuthub::from_tutors(typical_tutors()).unwrap();
        Logic::new(Model::new(tuthub, prefs))
    }

    #[test]
    fn find_by_module_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = UserPrefs {
            tuthub_file_path: dir.path().join("tuthub.json"),
            ..Default::default()
        };
        let tuthub = Tuthub::from_tutors(vec![
            TutorBuilder::alice().module("CS2103").build(),
            TutorBuilder::bob().module("CS2101").build(),
        ])
        .unwrap();
        let mut logic = Logic::new(Model::new(tuthub, prefs));

        let result = logic.execute("findmodule CS2103").unwrap();
        assert_eq!(result.feedback, "1 tutors listed!");
        let shown: Vec<&Tutor> = logic.filtered_tutors().collect();
        assert_eq!(shown, vec![&logic.model().tuthub().tutors()[0]]);
    }

    #[test]
    fn successful_command_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut logic = logic_in(dir.path());

        logic.execute("delete 1").unwrap();
        let saved = read_tuthub(logic.tuthub_file_path()).unwrap().unwrap();
        assert_eq!(&saved, logic.model().tuthub());
        assert_eq!(saved.len(), 3);
    }

    #[test]
    fn errors_surface_verbatim_and_change_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut logic = logic_in(dir.path());

        let parse_err = logic.execute("frobnicate").unwrap_err();
        assert_eq!(parse_err, LogicError::Parse(ParseError::UnknownCommand));
        assert_eq!(parse_err.to_string(), "Unknown command");

        let exec_err = logic.execute("edit 9 n/Nobody").unwrap_err();
        assert_eq!(exec_err.to_string(), "The tutor index provided is invalid");
        assert_eq!(logic.model().tuthub().len(), 4);
        assert!(!logic.tuthub_file_path().exists());
    }

    #[test]
    fn unwritable_data_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let prefs = UserPrefs {
            tuthub_file_path: blocker.join("tuthub.json"),
            ..Default::default()
        };
        let mut logic = Logic::new(Model::new(Tuthub::default(), prefs));

        let err = logic.execute("list").unwrap_err();
        assert!(matches!(err, LogicError::Command(CommandError::Storage(_))));
        assert!(err.to_string().starts_with("Could not save data to file: "));
    }

    #[test]
    fn failed_save_rolls_back_the_command() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let prefs = UserPrefs {
            tuthub_file_path: blocker.join("tuthub.json"),
            ..Default::default()
        };
        let mut logic = Logic::new(Model::new(Tuthub::default(), prefs));
        let add = "add n/Eve Lim p/98765432 e/eve@example.com m/CS2103T y/2 s/A0000009Z tn/1 r/4.0";

        let err = logic.execute(add).unwrap_err();
        assert!(matches!(err, LogicError::Command(CommandError::Storage(_))));
        assert_eq!(logic.model().tuthub().len(), 0);
        assert_eq!(logic.filtered_tutors().count(), 0);

        // Retrying hits the same storage error, not a duplicate.
        let err = logic.execute(add).unwrap_err();
        assert!(matches!(err, LogicError::Command(CommandError::Storage(_))));
        assert_eq!(logic.model().tuthub().len(), 0);
    }

    #[test]
    fn open_data_file_replaces_tutors_and_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut logic = logic_in(dir.path());
        logic.execute("findmodule CS2101").unwrap();

        let other = dir.path().join("other.json");
        let one = Tuthub::from_tutors(vec![TutorBuilder::carl().build()]).unwrap();
        save_tuthub(&other, &one).unwrap();

        logic.open_data_file(other.clone()).unwrap();
        assert_eq!(logic.model().tuthub(), &one);
        assert_eq!(logic.filtered_tutors().count(), 1);
        assert_eq!(logic.tuthub_file_path(), other.as_path());
    }
}
