use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields::{
    Email, Module, Name, Phone, Rating, StudentId, Tag, TeachingNomination, Year,
};

// ---------------------------------------------------------------------------
// Tutor – one row of the directory
// ---------------------------------------------------------------------------

/// A tutor record. Every field is validated on construction, so a `Tutor`
/// that exists is always well formed. Edits build a new `Tutor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub module: Module,
    pub year: Year,
    pub student_id: StudentId,
    pub teaching_nomination: TeachingNomination,
    pub rating: Rating,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Tutor {
    /// Identity check used for duplicate detection: same student id,
    /// ignoring case. Weaker than `==`, which compares every field.
    pub fn is_same_tutor(&self, other: &Tutor) -> bool {
        self.student_id.matches(&other.student_id)
    }
}

impl fmt::Display for Tutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Module: {}; Year: {}; Student ID: {}; \
             Teaching Nominations: {}; Rating: {}",
            self.name,
            self.phone,
            self.email,
            self.module,
            self.year,
            self.student_id,
            self.teaching_nomination,
            self.rating,
        )?;
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        Ok(())
    }
}
