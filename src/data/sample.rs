use std::collections::BTreeSet;

use super::fields::{
    Email, InvalidField, Module, Name, Phone, Rating, StudentId, Tag, TeachingNomination, Year,
};
use super::model::Tuthub;
use super::tutor::Tutor;

/// One built-in tutor, as raw text fed through the usual validation.
struct SampleTutor {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    module: &'static str,
    year: &'static str,
    student_id: &'static str,
    nominations: &'static str,
    rating: &'static str,
    tags: &'static [&'static str],
}

const SAMPLE_TUTORS: &[SampleTutor] = &[
    SampleTutor {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        module: "CS2103T",
        year: "3",
        student_id: "A0212345X",
        nominations: "1",
        rating: "4.5",
        tags: &["friendly"],
    },
    SampleTutor {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        module: "CS2100",
        year: "2",
        student_id: "A0223456Y",
        nominations: "3",
        rating: "4.8",
        tags: &["patient", "punctual"],
    },
    SampleTutor {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        module: "CS2103T",
        year: "4",
        student_id: "A0234567Z",
        nominations: "0",
        rating: "3.9",
        tags: &[],
    },
    SampleTutor {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        module: "MA1521",
        year: "2",
        student_id: "A0245678W",
        nominations: "2",
        rating: "4.1",
        tags: &["strict"],
    },
    SampleTutor {
        name: "Irfan Ibrahim",
        phone: "92492021",
        email: "irfan@example.com",
        module: "CS1101S",
        year: "3",
        student_id: "A0256789V",
        nominations: "5",
        rating: "4.9",
        tags: &["funny"],
    },
    SampleTutor {
        name: "Roy Balakrishnan",
        phone: "92624417",
        email: "royb@example.com",
        module: "GEA1000",
        year: "1",
        student_id: "A0267890U",
        nominations: "0",
        rating: "3.2",
        tags: &[],
    },
];

impl SampleTutor {
    fn to_tutor(&self) -> Result<Tutor, InvalidField> {
        Ok(Tutor {
            name: Name::new(self.name)?,
            phone: Phone::new(self.phone)?,
            email: Email::new(self.email)?,
            module: Module::new(self.module)?,
            year: Year::new(self.year)?,
            student_id: StudentId::new(self.student_id)?,
            teaching_nomination: TeachingNomination::new(self.nominations)?,
            rating: Rating::new(self.rating)?,
            tags: self
                .tags
                .iter()
                .map(|t| Tag::new(t))
                .collect::<Result<BTreeSet<_>, _>>()?,
        })
    }
}

/// Tutors shown on first launch, before any data file exists.
pub fn sample_tuthub() -> Tuthub {
    let tutors = SAMPLE_TUTORS
        .iter()
        .filter_map(|sample| match sample.to_tutor() {
            Ok(tutor) => Some(tutor),
            Err(e) => {
                log::error!("Skipping invalid sample tutor {}: {e}", sample.name);
                None
            }
        })
        .collect();
    Tuthub::from_tutors(tutors).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_tutor_is_valid() {
        for sample in SAMPLE_TUTORS {
            assert!(sample.to_tutor().is_ok(), "{} failed validation", sample.name);
        }
        assert_eq!(sample_tuthub().len(), SAMPLE_TUTORS.len());
    }
}
