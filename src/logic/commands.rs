use std::collections::BTreeSet;

use crate::data::fields::{
    Email, Module, Name, Phone, Rating, StudentId, Tag, TeachingNomination, Year,
};
use crate::data::filter::{
    ModuleContainsKeywordPredicate, NameContainsKeywordsPredicate, TutorFilter,
};
use crate::data::model::{Model, Tuthub};
use crate::data::tutor::Tutor;

use super::error::CommandError;

// ---------------------------------------------------------------------------
// Index and CommandResult
// ---------------------------------------------------------------------------

/// Position in the displayed list. Users type one-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(usize);

impl Index {
    #[cfg(test)]
    pub fn from_zero_based(i: usize) -> Self {
        Index(i)
    }

    /// `None` for zero.
    pub fn from_one_based(i: usize) -> Option<Self> {
        i.checked_sub(1).map(Index)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

/// What the UI should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
    /// Tutor to show in the detail panel, set only by `view`.
    pub view: Option<Tutor>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
            view: None,
        }
    }

    pub fn is_view(&self) -> bool {
        self.view.is_some()
    }
}

/// Resolve a displayed index to a backing-list index.
fn resolve(model: &Model, index: Index) -> Result<usize, CommandError> {
    model
        .backing_index(index.zero_based())
        .ok_or(CommandError::InvalidTutorIndex)
}

// ---------------------------------------------------------------------------
// Command enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    View(ViewCommand),
    Find(FindCommand),
    FindByModule(FindByModuleCommand),
    List(ListCommand),
    Clear(ClearCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    /// Run against `model`. On error the model is left untouched.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(c) => c.execute(model),
            Command::Edit(c) => c.execute(model),
            Command::Delete(c) => c.execute(model),
            Command::View(c) => c.execute(model),
            Command::Find(c) => Ok(c.execute(model)),
            Command::FindByModule(c) => Ok(c.execute(model)),
            Command::List(c) => Ok(c.execute(model)),
            Command::Clear(c) => Ok(c.execute(model)),
            Command::Help(c) => Ok(c.execute()),
            Command::Exit(c) => Ok(c.execute()),
        }
    }
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    pub to_add: Tutor,
}

impl AddCommand {
    pub const WORD: &'static str = "add";
    pub const USAGE: &'static str = "add: Adds a tutor to Tuthub. \
Parameters: n/NAME p/PHONE e/EMAIL m/MODULE y/YEAR s/STUDENT_ID tn/TEACHING_NOMINATIONS r/RATING [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com m/CS2103T y/3 s/A0123456X tn/1 r/4.5 t/friendly";

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.add_tutor(self.to_add.clone())?;
        Ok(CommandResult::new(format!("New tutor added: {}", self.to_add)))
    }
}

// ---------------------------------------------------------------------------
// edit
// ---------------------------------------------------------------------------

/// Fields to overwrite. `None` keeps the tutor's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTutorDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub module: Option<Module>,
    pub year: Option<Year>,
    pub student_id: Option<StudentId>,
    pub teaching_nomination: Option<TeachingNomination>,
    pub rating: Option<Rating>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditTutorDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.module.is_some()
            || self.year.is_some()
            || self.student_id.is_some()
            || self.teaching_nomination.is_some()
            || self.rating.is_some()
            || self.tags.is_some()
    }

    /// Build the edited copy of `tutor`.
    pub fn apply(&self, tutor: &Tutor) -> Tutor {
        Tutor {
            name: self.name.clone().unwrap_or_else(|| tutor.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| tutor.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| tutor.email.clone()),
            module: self.module.clone().unwrap_or_else(|| tutor.module.clone()),
            year: self.year.clone().unwrap_or_else(|| tutor.year.clone()),
            student_id: self
                .student_id
                .clone()
                .unwrap_or_else(|| tutor.student_id.clone()),
            teaching_nomination: self
                .teaching_nomination
                .clone()
                .unwrap_or_else(|| tutor.teaching_nomination.clone()),
            rating: self.rating.clone().unwrap_or_else(|| tutor.rating.clone()),
            tags: self.tags.clone().unwrap_or_else(|| tutor.tags.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    pub index: Index,
    pub descriptor: EditTutorDescriptor,
}

impl EditCommand {
    pub const WORD: &'static str = "edit";
    pub const USAGE: &'static str = "edit: Edits the details of the tutor identified \
by the index number used in the displayed tutor list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [m/MODULE] [y/YEAR] \
[s/STUDENT_ID] [tn/TEACHING_NOMINATIONS] [r/RATING] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = resolve(model, self.index)?;
        let edited = self.descriptor.apply(&model.tuthub().tutors()[target]);
        model.set_tutor(target, edited.clone())?;
        Ok(CommandResult::new(format!("Edited Tutor: {edited}")))
    }
}

// ---------------------------------------------------------------------------
// delete
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    pub index: Index,
}

impl DeleteCommand {
    pub const WORD: &'static str = "delete";
    pub const USAGE: &'static str = "delete: Deletes the tutor identified by the index number \
used in the displayed tutor list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = resolve(model, self.index)?;
        let deleted = model.delete_tutor(target);
        Ok(CommandResult::new(format!("Deleted Tutor: {deleted}")))
    }
}

// ---------------------------------------------------------------------------
// view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCommand {
    pub index: Index,
}

impl ViewCommand {
    pub const WORD: &'static str = "view";
    pub const USAGE: &'static str = "view: Shows the full details of the tutor identified \
by the index number used in the displayed tutor list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: view 1";

    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = resolve(model, self.index)?;
        let tutor = model.tuthub().tutors()[target].clone();
        Ok(CommandResult {
            view: Some(tutor.clone()),
            ..CommandResult::new(format!("Viewing Tutor: {}", tutor.name))
        })
    }
}

// ---------------------------------------------------------------------------
// find / findmodule
// ---------------------------------------------------------------------------

fn listed_overview(model: &Model) -> CommandResult {
    CommandResult::new(format!("{} tutors listed!", model.filtered_len()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    pub predicate: NameContainsKeywordsPredicate,
}

impl FindCommand {
    pub const WORD: &'static str = "find";
    pub const USAGE: &'static str = "find: Finds all tutors whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

    fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_filter(TutorFilter::Name(self.predicate.clone()));
        listed_overview(model)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindByModuleCommand {
    pub predicate: ModuleContainsKeywordPredicate,
}

impl FindByModuleCommand {
    pub const WORD: &'static str = "findmodule";
    pub const USAGE: &'static str = "findmodule: Finds all tutors whose module matches any of \
the specified module codes (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: MODULE [MORE_MODULES]...\n\
Example: findmodule CS2103T CS2101";

    fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_filter(TutorFilter::Module(self.predicate.clone()));
        listed_overview(model)
    }
}

// ---------------------------------------------------------------------------
// list / clear / help / exit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const WORD: &'static str = "list";
    pub const USAGE: &'static str = "list: Lists all tutors.\nExample: list";

    fn execute(self, model: &mut Model) -> CommandResult {
        model.update_filter(TutorFilter::All);
        CommandResult::new("Listed all tutors")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const WORD: &'static str = "clear";
    pub const USAGE: &'static str = "clear: Deletes every tutor.\nExample: clear";

    fn execute(self, model: &mut Model) -> CommandResult {
        model.set_tuthub(Tuthub::default());
        CommandResult::new("Tuthub has been cleared!")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const WORD: &'static str = "help";
    pub const USAGE: &'static str = "help: Shows program usage instructions.\nExample: help";

    fn execute(self) -> CommandResult {
        CommandResult {
            show_help: true,
            ..CommandResult::new("Opened help window.")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const WORD: &'static str = "exit";
    pub const USAGE: &'static str = "exit: Exits Tuthub.\nExample: exit";

    fn execute(self) -> CommandResult {
        CommandResult {
            exit: true,
            ..CommandResult::new("Exiting Tuthub as requested ...")
        }
    }
}

/// Usage text of every command, in the order the help window lists them.
pub const ALL_USAGES: &[&str] = &[
    AddCommand::USAGE,
    EditCommand::USAGE,
    DeleteCommand::USAGE,
    ViewCommand::USAGE,
    FindCommand::USAGE,
    FindByModuleCommand::USAGE,
    ListCommand::USAGE,
    ClearCommand::USAGE,
    HelpCommand::USAGE,
    ExitCommand::USAGE,
];
