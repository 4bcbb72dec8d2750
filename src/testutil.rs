//! Test fixtures: a builder for tutors and a handful of typical records.

use std::collections::BTreeSet;

use crate::data::fields::{
    Email, Module, Name, Phone, Rating, StudentId, Tag, TeachingNomination, Year,
};
use crate::data::model::{Model, Tuthub};
use crate::data::tutor::Tutor;

pub struct TutorBuilder {
    tutor: Tutor,
}

impl TutorBuilder {
    #[allow(clippy::too_many_arguments)]
    fn with(
        name: &str,
        phone: &str,
        email: &str,
        module: &str,
        year: &str,
        student_id: &str,
        nominations: &str,
        rating: &str,
    ) -> Self {
        Self {
            tutor: Tutor {
                name: Name::new(name).unwrap(),
                phone: Phone::new(phone).unwrap(),
                email: Email::new(email).unwrap(),
                module: Module::new(module).unwrap(),
                year: Year::new(year).unwrap(),
                student_id: StudentId::new(student_id).unwrap(),
                teaching_nomination: TeachingNomination::new(nominations).unwrap(),
                rating: Rating::new(rating).unwrap(),
                tags: BTreeSet::new(),
            },
        }
    }

    pub fn alice() -> Self {
        Self::with(
            "Alice Pauline", "94351253", "alice@example.com", "CS2103", "3", "A0000001A", "2", "4.5",
        )
    }

    pub fn bob() -> Self {
        Self::with(
            "Bob Choo", "22222222", "bob@example.com", "CS2101", "2", "A0000002B", "0", "3.0",
        )
    }

    pub fn carl() -> Self {
        Self::with(
            "Carl Kurz", "95352563", "carl@example.com", "CS2103T", "4", "A0000003C", "5", "5",
        )
    }

    pub fn daniel() -> Self {
        Self::with(
            "Daniel Meier", "87652533", "daniel@example.com", "MA1521", "1", "A0000004D", "1", "2.5",
        )
    }

    pub fn name(mut self, name: &str) -> Self {
        self.tutor.name = Name::new(name).unwrap();
        self
    }

    pub fn module(mut self, module: &str) -> Self {
        self.tutor.module = Module::new(module).unwrap();
        self
    }

    pub fn student_id(mut self, id: &str) -> Self {
        self.tutor.student_id = StudentId::new(id).unwrap();
        self
    }

    pub fn rating(mut self, rating: &str) -> Self {
        self.tutor.rating = Rating::new(rating).unwrap();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tutor.tags = tags.iter().map(|t| Tag::new(t).unwrap()).collect();
        self
    }

    pub fn build(self) -> Tutor {
        self.tutor
    }
}

/// Alice, Bob, Carl and Daniel, in that order.
pub fn typical_tutors() -> Vec<Tutor> {
    vec![
        TutorBuilder::alice().tags(&["friendly"]).build(),
        TutorBuilder::bob().build(),
        TutorBuilder::carl().build(),
        TutorBuilder::daniel().tags(&["punctual", "friendly"]).build(),
    ]
}

pub fn typical_model() -> Model {
    let tuthub = Tuthub::from_tutors(typical_tutors()).unwrap();
    Model::new(tuthub, Default::default())
}
