use std::collections::BTreeSet;

use crate::data::fields::{
    Email, Module, Name, Phone, Rating, StudentId, Tag, TeachingNomination, Year,
};
use crate::data::filter::{ModuleContainsKeywordPredicate, NameContainsKeywordsPredicate};
use crate::data::tutor::Tutor;

use super::commands::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, EditTutorDescriptor,
    ExitCommand, FindByModuleCommand, FindCommand, HelpCommand, Index, ListCommand, ViewCommand,
};
use super::error::ParseError;
use super::tokenizer::{
    tokenize, ArgumentMultimap, Prefix, ALL_PREFIXES, PREFIX_EMAIL, PREFIX_MODULE, PREFIX_NAME,
    PREFIX_PHONE, PREFIX_RATING, PREFIX_STUDENT_ID, PREFIX_TAG, PREFIX_TEACHING_NOMINATION,
    PREFIX_YEAR, SINGLE_VALUED_PREFIXES,
};

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Turn one line of user input into a command.
///
/// The first whitespace-delimited word picks the command; the rest, with its
/// leading whitespace intact, is handed to that command's parser.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidCommandFormat(HelpCommand::USAGE));
    }
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };

    match word {
        AddCommand::WORD => parse_add(args).map(Command::Add),
        EditCommand::WORD => parse_edit(args).map(Command::Edit),
        DeleteCommand::WORD => parse_delete(args).map(Command::Delete),
        ViewCommand::WORD => parse_view(args).map(Command::View),
        FindCommand::WORD => parse_find(args).map(Command::Find),
        FindByModuleCommand::WORD => parse_find_by_module(args).map(Command::FindByModule),
        ListCommand::WORD => Ok(Command::List(ListCommand)),
        ClearCommand::WORD => Ok(Command::Clear(ClearCommand)),
        HelpCommand::WORD => Ok(Command::Help(HelpCommand)),
        ExitCommand::WORD => Ok(Command::Exit(ExitCommand)),
        _ => Err(ParseError::UnknownCommand),
    }
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// One-based, non-zero, unsigned. Surrounding whitespace is ignored.
pub fn parse_index(text: &str) -> Result<Index, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

pub fn parse_name(text: &str) -> Result<Name, ParseError> {
    Ok(Name::new(text.trim())?)
}

pub fn parse_phone(text: &str) -> Result<Phone, ParseError> {
    Ok(Phone::new(text.trim())?)
}

pub fn parse_email(text: &str) -> Result<Email, ParseError> {
    Ok(Email::new(text.trim())?)
}

pub fn parse_module(text: &str) -> Result<Module, ParseError> {
    Ok(Module::new(text.trim())?)
}

pub fn parse_year(text: &str) -> Result<Year, ParseError> {
    Ok(Year::new(text.trim())?)
}

pub fn parse_student_id(text: &str) -> Result<StudentId, ParseError> {
    Ok(StudentId::new(text.trim())?)
}

pub fn parse_teaching_nomination(text: &str) -> Result<TeachingNomination, ParseError> {
    Ok(TeachingNomination::new(text.trim())?)
}

pub fn parse_rating(text: &str) -> Result<Rating, ParseError> {
    Ok(Rating::new(text.trim())?)
}

pub fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    values
        .iter()
        .map(|v| Tag::new(v.trim()).map_err(ParseError::from))
        .collect()
}

/// Applies `parse` to the value of a prefix if one was given.
fn parse_optional<T>(
    map: &ArgumentMultimap,
    prefix: Prefix,
    parse: fn(&str) -> Result<T, ParseError>,
) -> Result<Option<T>, ParseError> {
    map.value(prefix).map(parse).transpose()
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

fn parse_add(args: &str) -> Result<AddCommand, ParseError> {
    let map = tokenize(args, ALL_PREFIXES);
    let all_present = SINGLE_VALUED_PREFIXES.iter().all(|p| map.contains(*p));
    if !all_present || !map.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat(AddCommand::USAGE));
    }
    map.verify_no_duplicate_prefixes(SINGLE_VALUED_PREFIXES)?;

    let field = |prefix: Prefix| map.value(prefix).unwrap_or_default();
    let to_add = Tutor {
        name: parse_name(field(PREFIX_NAME))?,
        phone: parse_phone(field(PREFIX_PHONE))?,
        email: parse_email(field(PREFIX_EMAIL))?,
        module: parse_module(field(PREFIX_MODULE))?,
        year: parse_year(field(PREFIX_YEAR))?,
        student_id: parse_student_id(field(PREFIX_STUDENT_ID))?,
        teaching_nomination: parse_teaching_nomination(field(PREFIX_TEACHING_NOMINATION))?,
        rating: parse_rating(field(PREFIX_RATING))?,
        tags: parse_tags(map.all_values(PREFIX_TAG))?,
    };
    Ok(AddCommand { to_add })
}

// ---------------------------------------------------------------------------
// edit
// ---------------------------------------------------------------------------

fn parse_edit(args: &str) -> Result<EditCommand, ParseError> {
    let map = tokenize(args, ALL_PREFIXES);
    let index = parse_index(map.preamble())
        .map_err(|_| ParseError::InvalidCommandFormat(EditCommand::USAGE))?;
    map.verify_no_duplicate_prefixes(SINGLE_VALUED_PREFIXES)?;

    let descriptor = EditTutorDescriptor {
        name: parse_optional(&map, PREFIX_NAME, parse_name)?,
        phone: parse_optional(&map, PREFIX_PHONE, parse_phone)?,
        email: parse_optional(&map, PREFIX_EMAIL, parse_email)?,
        module: parse_optional(&map, PREFIX_MODULE, parse_module)?,
        year: parse_optional(&map, PREFIX_YEAR, parse_year)?,
        student_id: parse_optional(&map, PREFIX_STUDENT_ID, parse_student_id)?,
        teaching_nomination: parse_optional(
            &map,
            PREFIX_TEACHING_NOMINATION,
            parse_teaching_nomination,
        )?,
        rating: parse_optional(&map, PREFIX_RATING, parse_rating)?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(EditCommand { index, descriptor })
}

/// `None` when no `t/` was given; a lone empty `t/` clears every tag.
fn parse_tags_for_edit(values: &[String]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values).map(Some),
    }
}

// ---------------------------------------------------------------------------
// delete / view
// ---------------------------------------------------------------------------

fn parse_delete(args: &str) -> Result<DeleteCommand, ParseError> {
    let index =
        parse_index(args).map_err(|_| ParseError::InvalidCommandFormat(DeleteCommand::USAGE))?;
    Ok(DeleteCommand { index })
}

fn parse_view(args: &str) -> Result<ViewCommand, ParseError> {
    let index =
        parse_index(args).map_err(|_| ParseError::InvalidCommandFormat(ViewCommand::USAGE))?;
    Ok(ViewCommand { index })
}

// ---------------------------------------------------------------------------
// find / findmodule
// ---------------------------------------------------------------------------

/// Whitespace-separated keywords, or a format error carrying `usage`.
fn keywords(args: &str, usage: &'static str) -> Result<Vec<String>, ParseError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidCommandFormat(usage));
    }
    Ok(trimmed.split_whitespace().map(str::to_string).collect())
}

fn parse_find(args: &str) -> Result<FindCommand, ParseError> {
    let predicate = NameContainsKeywordsPredicate::new(keywords(args, FindCommand::USAGE)?);
    Ok(FindCommand { predicate })
}

fn parse_find_by_module(args: &str) -> Result<FindByModuleCommand, ParseError> {
    let predicate =
        ModuleContainsKeywordPredicate::new(keywords(args, FindByModuleCommand::USAGE)?);
    Ok(FindByModuleCommand { predicate })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TutorBuilder;

    const ALICE_ARGS: &str = " n/Alice Pauline p/94351253 e/alice@example.com m/CS2103 \
y/3 s/A0000001A tn/2 r/4.5";

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn format_error(usage: &'static str) -> Result<Command, ParseError> {
        Err(ParseError::InvalidCommandFormat(usage))
    }

    // -- find / findmodule --

    #[test]
    fn findmodule_splits_keywords_on_whitespace_runs() {
        let expected = Command::FindByModule(FindByModuleCommand {
            predicate: ModuleContainsKeywordPredicate::new(strings(&["CS2103", "cs2101"])),
        });
        assert_eq!(parse_command("findmodule CS2103 cs2101"), Ok(expected.clone()));
        assert_eq!(parse_command("  findmodule \n CS2103 \n \t cs2101  \t"), Ok(expected));
    }

    #[test]
    fn findmodule_keywords_round_trip() {
        let sequences: &[&[&str]] = &[
            &["CS2103"],
            &["MA1521", "CS2103T", "CS2103T"],
            &["a", "B", "c", "d", "e", "f"],
        ];
        for seq in sequences {
            let Ok(Command::FindByModule(cmd)) =
                parse_command(&format!("findmodule {}", seq.join(" ")))
            else {
                panic!("{seq:?} did not parse");
            };
            assert_eq!(cmd.predicate.keywords(), strings(seq).as_slice());
        }
    }

    #[test]
    fn findmodule_without_keywords_is_format_error() {
        assert_eq!(parse_command("findmodule"), format_error(FindByModuleCommand::USAGE));
        assert_eq!(
            parse_find_by_module("   \t "),
            Err(ParseError::InvalidCommandFormat(FindByModuleCommand::USAGE))
        );
        let message = parse_find_by_module("").unwrap_err().to_string();
        assert_eq!(
            message,
            format!("Invalid command format! \n{}", FindByModuleCommand::USAGE)
        );
    }

    #[test]
    fn find_parses_name_keywords() {
        let expected = Command::Find(FindCommand {
            predicate: NameContainsKeywordsPredicate::new(strings(&["Alice", "Bob"])),
        });
        assert_eq!(parse_command("find Alice   Bob"), Ok(expected));
        assert_eq!(parse_command("find  "), format_error(FindCommand::USAGE));
    }

    // -- dispatcher --

    #[test]
    fn blank_input_and_unknown_words() {
        assert_eq!(parse_command(""), format_error(HelpCommand::USAGE));
        assert_eq!(parse_command("   "), format_error(HelpCommand::USAGE));
        assert_eq!(parse_command("unknownCommand"), Err(ParseError::UnknownCommand));
        assert_eq!(parse_command("ADD n/x"), Err(ParseError::UnknownCommand));
    }

    #[test]
    fn argumentless_commands_ignore_trailing_text() {
        assert_eq!(parse_command("list"), Ok(Command::List(ListCommand)));
        assert_eq!(parse_command("list 3"), Ok(Command::List(ListCommand)));
        assert_eq!(parse_command("clear all"), Ok(Command::Clear(ClearCommand)));
        assert_eq!(parse_command("help me"), Ok(Command::Help(HelpCommand)));
        assert_eq!(parse_command("exit now"), Ok(Command::Exit(ExitCommand)));
    }

    // -- index commands --

    #[test]
    fn parse_index_rules() {
        assert_eq!(parse_index(" 1 ").map(Index::zero_based), Ok(0));
        assert_eq!(parse_index("007").map(Index::one_based), Ok(7));
        for bad in ["0", "-1", "+1", "a", "", "1 2", "99999999999999999999999"] {
            assert_eq!(parse_index(bad), Err(ParseError::InvalidIndex), "{bad:?}");
        }
    }

    #[test]
    fn delete_and_view_need_an_index() {
        let first = Index::from_one_based(1).unwrap();
        assert_eq!(
            parse_command("delete 1"),
            Ok(Command::Delete(DeleteCommand { index: first }))
        );
        assert_eq!(
            parse_command("view 1"),
            Ok(Command::View(ViewCommand { index: first }))
        );
        assert_eq!(parse_command("delete a"), format_error(DeleteCommand::USAGE));
        assert_eq!(parse_command("view"), format_error(ViewCommand::USAGE));
    }

    // -- add --

    #[test]
    fn add_builds_tutor_from_every_field() {
        let expected = TutorBuilder::alice().tags(&["friendly", "punctual"]).build();
        let input = format!("add{ALICE_ARGS} t/punctual t/friendly");
        assert_eq!(
            parse_command(&input),
            Ok(Command::Add(AddCommand { to_add: expected }))
        );
    }

    #[test]
    fn add_tolerates_any_field_order_and_extra_spaces() {
        let input = "add   r/4.5 tn/2  s/A0000001A y/3 m/CS2103 e/alice@example.com \
p/94351253   n/Alice Pauline  ";
        assert_eq!(
            parse_command(input),
            Ok(Command::Add(AddCommand {
                to_add: TutorBuilder::alice().build()
            }))
        );
    }

    #[test]
    fn add_missing_field_or_preamble_is_format_error() {
        let without_rating = ALICE_ARGS.replace(" r/4.5", "");
        assert_eq!(
            parse_command(&format!("add{without_rating}")),
            format_error(AddCommand::USAGE)
        );
        assert_eq!(
            parse_command(&format!("add preamble{ALICE_ARGS}")),
            format_error(AddCommand::USAGE)
        );
    }

    #[test]
    fn add_reports_first_invalid_field() {
        let bad_rating = ALICE_ARGS.replace("r/4.5", "r/5.1");
        assert_eq!(
            parse_command(&format!("add{bad_rating}")),
            Err(ParseError::Constraint(Rating::CONSTRAINTS))
        );

        let bad_phone_and_rating = bad_rating.replace("p/94351253", "p/9a");
        assert_eq!(
            parse_command(&format!("add{bad_phone_and_rating}")),
            Err(ParseError::Constraint(Phone::CONSTRAINTS))
        );

        let bad_tag = format!("add{ALICE_ARGS} t/best*friend");
        assert_eq!(
            parse_command(&bad_tag),
            Err(ParseError::Constraint(Tag::CONSTRAINTS))
        );
    }

    #[test]
    fn add_rejects_repeated_single_valued_prefix() {
        let input = format!("add{ALICE_ARGS} n/Bob Choo");
        assert_eq!(
            parse_command(&input),
            Err(ParseError::DuplicatePrefixes("n/".to_string()))
        );
    }

    // -- edit --

    #[test]
    fn edit_collects_only_given_fields() {
        let command = parse_command("edit 2 p/91234567 r/3 t/patient").unwrap();
        let expected = EditCommand {
            index: Index::from_one_based(2).unwrap(),
            descriptor: EditTutorDescriptor {
                phone: Some(Phone::new("91234567").unwrap()),
                rating: Some(Rating::new("3").unwrap()),
                tags: Some([Tag::new("patient").unwrap()].into_iter().collect()),
                ..Default::default()
            },
        };
        assert_eq!(command, Command::Edit(expected));
    }

    #[test]
    fn edit_empty_tag_prefix_clears_tags() {
        let Ok(Command::Edit(command)) = parse_command("edit 1 t/") else {
            panic!("edit did not parse");
        };
        assert_eq!(command.descriptor.tags, Some(BTreeSet::new()));
    }

    #[test]
    fn edit_errors() {
        assert_eq!(parse_command("edit 1"), Err(ParseError::NoFieldEdited));
        assert_eq!(parse_command("edit n/Alice"), format_error(EditCommand::USAGE));
        assert_eq!(parse_command("edit 0 n/Alice"), format_error(EditCommand::USAGE));
        assert_eq!(parse_command("edit 1 some n/Alice"), format_error(EditCommand::USAGE));
        assert_eq!(
            parse_command("edit 1 y/7"),
            Err(ParseError::Constraint(Year::CONSTRAINTS))
        );
        assert_eq!(
            parse_command("edit 1 t/ t/friendly"),
            Err(ParseError::Constraint(Tag::CONSTRAINTS))
        );
        assert_eq!(
            parse_command("edit 1 r/1 r/2"),
            Err(ParseError::DuplicatePrefixes("r/".to_string()))
        );
    }
}
