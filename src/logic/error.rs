use crate::data::fields::InvalidField;
use crate::data::model::DuplicateTutor;

/// Command text could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Arguments do not fit the command's grammar. Carries its usage text.
    #[error("Invalid command format! \n{0}")]
    InvalidCommandFormat(&'static str),

    #[error("Unknown command")]
    UnknownCommand,

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    /// A field value failed its constraint.
    #[error("{0}")]
    Constraint(&'static str),

    #[error("Multiple values specified for the following single-valued field(s): {0}")]
    DuplicatePrefixes(String),

    #[error("At least one field to edit must be provided.")]
    NoFieldEdited,
}

impl From<InvalidField> for ParseError {
    fn from(e: InvalidField) -> Self {
        ParseError::Constraint(e.constraint)
    }
}

/// A parsed command could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("The tutor index provided is invalid")]
    InvalidTutorIndex,

    #[error("This tutor already exists in Tuthub")]
    DuplicateTutor,

    #[error("Could not save data to file: {0}")]
    Storage(String),
}

impl From<DuplicateTutor> for CommandError {
    fn from(_: DuplicateTutor) -> Self {
        CommandError::DuplicateTutor
    }
}

/// Anything that can go wrong between command text and result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}
