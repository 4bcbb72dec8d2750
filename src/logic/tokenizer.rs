use std::collections::HashMap;
use std::fmt;

use super::error::ParseError;

// ---------------------------------------------------------------------------
// Prefixes
// ---------------------------------------------------------------------------

/// Marks the start of a field value in command arguments, e.g. `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(pub &'static str);

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_MODULE: Prefix = Prefix("m/");
pub const PREFIX_YEAR: Prefix = Prefix("y/");
pub const PREFIX_STUDENT_ID: Prefix = Prefix("s/");
pub const PREFIX_TEACHING_NOMINATION: Prefix = Prefix("tn/");
pub const PREFIX_RATING: Prefix = Prefix("r/");
pub const PREFIX_TAG: Prefix = Prefix("t/");

/// Every prefix that takes at most one value, in validation order.
pub const SINGLE_VALUED_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_MODULE,
    PREFIX_YEAR,
    PREFIX_STUDENT_ID,
    PREFIX_TEACHING_NOMINATION,
    PREFIX_RATING,
];

pub const ALL_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_MODULE,
    PREFIX_YEAR,
    PREFIX_STUDENT_ID,
    PREFIX_TEACHING_NOMINATION,
    PREFIX_RATING,
    PREFIX_TAG,
];

// ---------------------------------------------------------------------------
// ArgumentMultimap
// ---------------------------------------------------------------------------

/// Tokenized arguments: the preamble plus every value seen for each prefix,
/// in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|vals| vals.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Fail if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let repeated: Vec<String> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(|p| p.to_string())
            .collect();
        if repeated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(repeated.join(" ")))
        }
    }
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Split `args` on the given prefixes.
///
/// A prefix only counts when it directly follows whitespace, so `n/` inside
/// `tn/` or inside a value like `a/n/b` is ignored. Each value runs up to the
/// next recognised prefix and is trimmed.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| prefix_positions(args, prefix))
        .collect();
    positions.sort_by_key(|&(pos, _)| pos);

    let preamble_end = positions.first().map_or(args.len(), |&(pos, _)| pos);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, &(start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.0.len();
        let value_end = positions.get(i + 1).map_or(args.len(), |&(next, _)| next);
        map.values
            .entry(prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }
    map
}

fn prefix_positions(args: &str, prefix: Prefix) -> Vec<(usize, Prefix)> {
    let mut found = Vec::new();
    let mut from = 0;
    while let Some(offset) = args[from..].find(prefix.0) {
        let pos = from + offset;
        let after_whitespace = args[..pos]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        if after_whitespace {
            found.push((pos, prefix));
        }
        from = pos + prefix.0.len();
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_prefixes_is_all_preamble() {
        let map = tokenize("  some random string /t tag with leading and trailing spaces ", ALL_PREFIXES);
        assert_eq!(
            map.preamble(),
            "some random string /t tag with leading and trailing spaces"
        );
        assert!(!map.contains(PREFIX_TAG));
    }

    #[test]
    fn preamble_and_values_are_trimmed() {
        let map = tokenize(" 3  n/  Alice Tan   m/CS2103 ", ALL_PREFIXES);
        assert_eq!(map.preamble(), "3");
        assert_eq!(map.value(PREFIX_NAME), Some("Alice Tan"));
        assert_eq!(map.value(PREFIX_MODULE), Some("CS2103"));
        assert_eq!(map.value(PREFIX_PHONE), None);
    }

    #[test]
    fn prefix_must_follow_whitespace() {
        let map = tokenize(" n/Alice tn/4 x/n/Bob", ALL_PREFIXES);
        assert_eq!(map.value(PREFIX_NAME), Some("Alice"));
        assert_eq!(map.value(PREFIX_TEACHING_NOMINATION), Some("4 x/n/Bob"));
        assert_eq!(map.all_values(PREFIX_NAME).len(), 1);
    }

    #[test]
    fn prefix_at_start_without_whitespace_is_preamble() {
        let map = tokenize("n/Alice", ALL_PREFIXES);
        assert_eq!(map.preamble(), "n/Alice");
        assert!(!map.contains(PREFIX_NAME));
    }

    #[test]
    fn repeated_prefixes_keep_order() {
        let map = tokenize(" t/first n/Alice t/second t/", ALL_PREFIXES);
        assert_eq!(map.all_values(PREFIX_TAG), &["first", "second", ""]);
        assert!(map.verify_no_duplicate_prefixes(SINGLE_VALUED_PREFIXES).is_ok());
    }

    #[test]
    fn duplicate_single_valued_prefixes_are_listed() {
        let map = tokenize(" n/Alice p/123 n/Bob r/1 r/2", ALL_PREFIXES);
        assert_eq!(map.value(PREFIX_NAME), Some("Bob"));
        assert_eq!(
            map.verify_no_duplicate_prefixes(SINGLE_VALUED_PREFIXES),
            Err(ParseError::DuplicatePrefixes("n/ r/".to_string()))
        );
    }
}
