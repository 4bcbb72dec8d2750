use super::tutor::Tutor;

// ---------------------------------------------------------------------------
// Keyword predicates
// ---------------------------------------------------------------------------

/// True iff some whitespace-delimited word of `sentence` equals `word`,
/// ignoring ASCII case. No substring matching.
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    sentence
        .split_whitespace()
        .any(|token| token.eq_ignore_ascii_case(word))
}

/// Matches tutors whose module contains any of the keywords as a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleContainsKeywordPredicate {
    keywords: Vec<String>,
}

impl ModuleContainsKeywordPredicate {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    #[cfg(test)]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test(&self, tutor: &Tutor) -> bool {
        self.keywords
            .iter()
            .any(|kw| contains_word_ignore_case(tutor.module.as_str(), kw))
    }
}

/// Matches tutors whose name contains any of the keywords as a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    #[cfg(test)]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test(&self, tutor: &Tutor) -> bool {
        self.keywords
            .iter()
            .any(|kw| contains_word_ignore_case(tutor.name.as_str(), kw))
    }
}

// ---------------------------------------------------------------------------
// TutorFilter – the active predicate held by the model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TutorFilter {
    /// No constraint: every tutor is shown.
    #[default]
    All,
    Name(NameContainsKeywordsPredicate),
    Module(ModuleContainsKeywordPredicate),
}

impl TutorFilter {
    pub fn test(&self, tutor: &Tutor) -> bool {
        match self {
            TutorFilter::All => true,
            TutorFilter::Name(p) => p.test(tutor),
            TutorFilter::Module(p) => p.test(tutor),
        }
    }
}

/// Return indices of tutors that pass `filter`, in list order.
pub fn filtered_indices(tutors: &[Tutor], filter: &TutorFilter) -> Vec<usize> {
    tutors
        .iter()
        .enumerate()
        .filter(|(_, tutor)| filter.test(tutor))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TutorBuilder;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn module_predicate_matches_whole_token_only() {
        let predicate = ModuleContainsKeywordPredicate::new(keywords(&["CS2103"]));
        assert!(predicate.test(&TutorBuilder::alice().module("CS2103").build()));
        assert!(!predicate.test(&TutorBuilder::alice().module("CS2103T").build()));
        assert!(!predicate.test(&TutorBuilder::alice().module("cs2104").build()));
    }

    #[test]
    fn module_predicate_ignores_case_and_needs_one_keyword() {
        let predicate = ModuleContainsKeywordPredicate::new(keywords(&["ma1521", "cs2103"]));
        assert!(predicate.test(&TutorBuilder::alice().module("CS2103").build()));
        assert!(predicate.test(&TutorBuilder::alice().module("MA1521").build()));
        assert!(!predicate.test(&TutorBuilder::alice().module("CS2101").build()));
    }

    #[test]
    fn module_predicate_with_no_keywords_matches_nothing() {
        let predicate = ModuleContainsKeywordPredicate::new(Vec::new());
        assert!(!predicate.test(&TutorBuilder::alice().build()));
    }

    #[test]
    fn predicate_equality_is_order_sensitive() {
        let first = ModuleContainsKeywordPredicate::new(keywords(&["CS2103", "CS2101"]));
        let same = ModuleContainsKeywordPredicate::new(keywords(&["CS2103", "CS2101"]));
        let swapped = ModuleContainsKeywordPredicate::new(keywords(&["CS2101", "CS2103"]));
        assert_eq!(first, same);
        assert_ne!(first, swapped);
    }

    #[test]
    fn name_predicate_matches_any_word() {
        let predicate = NameContainsKeywordsPredicate::new(keywords(&["pauline", "Kurz"]));
        assert!(predicate.test(&TutorBuilder::alice().build()));
        assert!(predicate.test(&TutorBuilder::carl().build()));
        assert!(!predicate.test(&TutorBuilder::bob().build()));
        assert!(!NameContainsKeywordsPredicate::new(keywords(&["Pau"]))
            .test(&TutorBuilder::alice().build()));
    }

    #[test]
    fn filtered_indices_keep_list_order() {
        let tutors = vec![
            TutorBuilder::alice().build(),
            TutorBuilder::bob().build(),
            TutorBuilder::carl().build(),
        ];
        let filter = TutorFilter::Module(ModuleContainsKeywordPredicate::new(keywords(&[
            "CS2103T", "CS2103",
        ])));
        assert_eq!(filtered_indices(&tutors, &filter), vec![0, 2]);
        assert_eq!(filtered_indices(&tutors, &TutorFilter::All), vec![0, 1, 2]);
    }
}
