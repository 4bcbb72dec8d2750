use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// InvalidField – constraint violation raised by a value object
// ---------------------------------------------------------------------------

/// A field value failed its constraint. Carries the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{constraint}")]
pub struct InvalidField {
    pub constraint: &'static str,
}

impl InvalidField {
    pub fn new(constraint: &'static str) -> Self {
        Self { constraint }
    }
}

/// Shared plumbing for the single-string value objects below.
///
/// Each type provides `new(&str) -> Result<Self, InvalidField>`; this adds
/// `as_str`, `Display`, and the `String` conversions serde uses so that
/// values are revalidated whenever they are deserialized.
macro_rules! text_field {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = InvalidField;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.0
            }
        }
    };
}

fn validated<T>(ok: bool, make: impl FnOnce() -> T, constraint: &'static str) -> Result<T, InvalidField> {
    if ok {
        Ok(make())
    } else {
        Err(InvalidField::new(constraint))
    }
}

// ---------------------------------------------------------------------------
// Name
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn new(name: &str) -> Result<Self, InvalidField> {
        validated(Self::is_valid(name), || Self(name.to_string()), Self::CONSTRAINTS)
    }

    /// First character alphanumeric, the rest alphanumeric or spaces.
    pub fn is_valid(test: &str) -> bool {
        let mut chars = test.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
            }
            _ => false,
        }
    }
}

text_field!(Name);

// ---------------------------------------------------------------------------
// Phone
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn new(phone: &str) -> Result<Self, InvalidField> {
        validated(Self::is_valid(phone), || Self(phone.to_string()), Self::CONSTRAINTS)
    }

    pub fn is_valid(test: &str) -> bool {
        test.len() >= 3 && test.bytes().all(|b| b.is_ascii_digit())
    }
}

text_field!(Phone);

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

const EMAIL_SPECIAL_CHARACTERS: &str = "+_.-";

impl Email {
    pub const CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    pub fn new(email: &str) -> Result<Self, InvalidField> {
        validated(Self::is_valid(email), || Self(email.to_string()), Self::CONSTRAINTS)
    }

    pub fn is_valid(test: &str) -> bool {
        let Some((local, domain)) = test.split_once('@') else {
            return false;
        };
        is_valid_local_part(local) && is_valid_domain(domain)
    }
}

text_field!(Email);

/// Alphanumeric runs joined by single special characters.
fn is_valid_local_part(local: &str) -> bool {
    let mut after_special = true;
    for c in local.chars() {
        if c.is_ascii_alphanumeric() {
            after_special = false;
        } else if EMAIL_SPECIAL_CHARACTERS.contains(c) && !after_special {
            after_special = true;
        } else {
            return false;
        }
    }
    !after_special
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let last_ok = labels.last().is_some_and(|last| last.len() >= 2);
    last_ok && labels.iter().all(|label| is_valid_domain_label(label))
}

fn is_valid_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && !label.contains("--")
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

// ---------------------------------------------------------------------------
// Module
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Module(String);

impl Module {
    pub const CONSTRAINTS: &'static str = "Module codes should consist of 2-3 letters, \
followed by 4 digits and an optional letter, e.g. CS2103T";

    pub fn new(module: &str) -> Result<Self, InvalidField> {
        validated(Self::is_valid(module), || Self(module.to_string()), Self::CONSTRAINTS)
    }

    pub fn is_valid(test: &str) -> bool {
        let letters = test.bytes().take_while(u8::is_ascii_alphabetic).count();
        if !(2..=3).contains(&letters) {
            return false;
        }
        let rest = &test.as_bytes()[letters..];
        if rest.len() < 4 || !rest[..4].iter().all(u8::is_ascii_digit) {
            return false;
        }
        match &rest[4..] {
            [] => true,
            [suffix] => suffix.is_ascii_alphabetic(),
            _ => false,
        }
    }
}

text_field!(Module);

// ---------------------------------------------------------------------------
// Year
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Year(String);

impl Year {
    pub const CONSTRAINTS: &'static str = "Year should be a single digit from 1 to 6";

    pub fn new(year: &str) -> Result<Self, InvalidField> {
        validated(Self::is_valid(year), || Self(year.to_string()), Self::CONSTRAINTS)
    }

    pub fn is_valid(test: &str) -> bool {
        matches!(test.as_bytes(), [b'1'..=b'6'])
    }
}

text_field!(Year);

// ---------------------------------------------------------------------------
// StudentId
// ---------------------------------------------------------------------------

/// Matriculation number, e.g. `A0123456X`. Compared case-insensitively when
/// deciding tutor identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
    pub const CONSTRAINTS: &'static str =
        "Student ID should start with A, followed by 7 digits and end with a letter, e.g. A0123456X";

    pub fn new(id: &str) -> Result<Self, InvalidField> {
        validated(Self::is_valid(id), || Self(id.to_string()), Self::CONSTRAINTS)
    }

    pub fn is_valid(test: &str) -> bool {
        match test.as_bytes() {
            [first, digits @ .., last] if digits.len() == 7 => {
                first.eq_ignore_ascii_case(&b'A')
                    && digits.iter().all(u8::is_ascii_digit)
                    && last.is_ascii_alphabetic()
            }
            _ => false,
        }
    }

    pub fn matches(&self, other: &StudentId) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

text_field!(StudentId);

// ---------------------------------------------------------------------------
// TeachingNomination
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeachingNomination(String);

impl TeachingNomination {
    pub const CONSTRAINTS: &'static str = "Teaching nominations should be a non-negative integer";

    pub fn new(count: &str) -> Result<Self, InvalidField> {
        validated(Self::is_valid(count), || Self(count.to_string()), Self::CONSTRAINTS)
    }

    pub fn is_valid(test: &str) -> bool {
        !test.is_empty() && test.bytes().all(|b| b.is_ascii_digit()) && test.parse::<u32>().is_ok()
    }

    pub fn count(&self) -> u32 {
        self.0.parse().unwrap_or_default()
    }
}

text_field!(TeachingNomination);

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// A tutor's rating in `[MIN_RATING, MAX_RATING]`.
///
/// Equality and hashing use the stored text: `"5"` and `"5.0"` are both valid
/// but are different ratings. Use [`Rating::numeric`] to compare values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rating(String);

impl Rating {
    pub const MIN_RATING: f64 = 0.0;
    pub const MAX_RATING: f64 = 5.0;
    pub const CONSTRAINTS: &'static str = "Rating should only contain positive decimal values \
including zero with no spaces in between, and it should not be blank. \
It should be between 0.0 and 5.0 inclusive";

    pub fn new(rating: &str) -> Result<Self, InvalidField> {
        validated(Self::is_valid(rating), || Self(rating.to_string()), Self::CONSTRAINTS)
    }

    pub fn is_valid(test: &str) -> bool {
        is_plain_decimal(test) && Self::is_in_range(test)
    }

    pub fn is_in_range(test: &str) -> bool {
        test.parse::<f64>()
            .is_ok_and(|v| (Self::MIN_RATING..=Self::MAX_RATING).contains(&v))
    }

    pub fn numeric(&self) -> f64 {
        self.0.parse().unwrap_or(Self::MIN_RATING)
    }
}

text_field!(Rating);

/// Digits, optionally followed by `.` and at least one more digit.
fn is_plain_decimal(test: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match test.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(test),
    }
}

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub const CONSTRAINTS: &'static str = "Tag names should be alphanumeric";

    pub fn new(tag: &str) -> Result<Self, InvalidField> {
        validated(Self::is_valid(tag), || Self(tag.to_string()), Self::CONSTRAINTS)
    }

    pub fn is_valid(test: &str) -> bool {
        !test.is_empty() && test.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = InvalidField;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> String {
        value.0
    }
}
