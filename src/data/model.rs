use std::path::{Path, PathBuf};

use crate::config::{GuiSettings, UserPrefs};

use super::filter::{filtered_indices, TutorFilter};
use super::tutor::Tutor;

// ---------------------------------------------------------------------------
// Tuthub – the backing list, unique by tutor identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Tutors list contains duplicate tutor(s).")]
pub struct DuplicateTutor;

/// All tutors, in insertion order. No two share an identity
/// (see [`Tutor::is_same_tutor`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tuthub {
    tutors: Vec<Tutor>,
}

impl Tuthub {
    pub fn from_tutors(tutors: Vec<Tutor>) -> Result<Self, DuplicateTutor> {
        let mut tuthub = Tuthub::default();
        for tutor in tutors {
            tuthub.add_tutor(tutor)?;
        }
        Ok(tuthub)
    }

    pub fn tutors(&self) -> &[Tutor] {
        &self.tutors
    }

    pub fn len(&self) -> usize {
        self.tutors.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tutors.is_empty()
    }

    pub fn has_tutor(&self, tutor: &Tutor) -> bool {
        self.tutors.iter().any(|t| t.is_same_tutor(tutor))
    }

    pub fn add_tutor(&mut self, tutor: Tutor) -> Result<(), DuplicateTutor> {
        if self.has_tutor(&tutor) {
            return Err(DuplicateTutor);
        }
        self.tutors.push(tutor);
        Ok(())
    }

    /// Replace the tutor at `index`. The replacement may keep the identity of
    /// the tutor it replaces but not that of any other tutor.
    pub fn set_tutor(&mut self, index: usize, edited: Tutor) -> Result<(), DuplicateTutor> {
        let clashes = self
            .tutors
            .iter()
            .enumerate()
            .any(|(i, t)| i != index && t.is_same_tutor(&edited));
        if clashes {
            return Err(DuplicateTutor);
        }
        self.tutors[index] = edited;
        Ok(())
    }

    pub fn remove_tutor(&mut self, index: usize) -> Tutor {
        self.tutors.remove(index)
    }
}

// ---------------------------------------------------------------------------
// Model – backing list, active filter and user preferences
// ---------------------------------------------------------------------------

/// In-memory state that commands execute against.
///
/// `visible` always holds the indices of tutors in `tuthub` that pass
/// `filter`, in backing-list order. Every mutation recomputes it.
#[derive(Debug, Clone)]
pub struct Model {
    tuthub: Tuthub,
    filter: TutorFilter,
    visible: Vec<usize>,
    prefs: UserPrefs,
}

impl Model {
    pub fn new(tuthub: Tuthub, prefs: UserPrefs) -> Self {
        let visible = (0..tuthub.len()).collect();
        Self {
            tuthub,
            filter: TutorFilter::All,
            visible,
            prefs,
        }
    }

    // -- Backing list --

    pub fn tuthub(&self) -> &Tuthub {
        &self.tuthub
    }

    /// Replace every tutor at once. The filter resets to show all.
    pub fn set_tuthub(&mut self, tuthub: Tuthub) {
        self.tuthub = tuthub;
        self.update_filter(TutorFilter::All);
    }

    /// Append a tutor. The filter resets to show all so the new tutor is visible.
    pub fn add_tutor(&mut self, tutor: Tutor) -> Result<(), DuplicateTutor> {
        self.tuthub.add_tutor(tutor)?;
        self.update_filter(TutorFilter::All);
        Ok(())
    }

    /// Replace the tutor at backing `index`. The filter resets to show all.
    pub fn set_tutor(&mut self, index: usize, edited: Tutor) -> Result<(), DuplicateTutor> {
        self.tuthub.set_tutor(index, edited)?;
        self.update_filter(TutorFilter::All);
        Ok(())
    }

    /// Remove the tutor at backing `index`. The active filter is kept.
    pub fn delete_tutor(&mut self, index: usize) -> Tutor {
        let removed = self.tuthub.remove_tutor(index);
        self.refilter();
        removed
    }

    // -- Filtered view --

    #[cfg(test)]
    pub fn filter(&self) -> &TutorFilter {
        &self.filter
    }

    pub fn update_filter(&mut self, filter: TutorFilter) {
        self.filter = filter;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = filtered_indices(self.tuthub.tutors(), &self.filter);
    }

    /// Backing-list indices of the visible tutors.
    #[cfg(test)]
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn filtered_tutors(&self) -> impl Iterator<Item = &Tutor> + '_ {
        self.visible.iter().map(|&i| &self.tuthub.tutors()[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    /// Map a zero-based position in the filtered view to a backing index.
    pub fn backing_index(&self, filtered_index: usize) -> Option<usize> {
        self.visible.get(filtered_index).copied()
    }

    // -- Preferences --

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.prefs
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        &self.prefs.gui_settings
    }

    pub fn set_gui_settings(&mut self, settings: GuiSettings) {
        self.prefs.gui_settings = settings;
    }

    pub fn tuthub_file_path(&self) -> &Path {
        &self.prefs.tuthub_file_path
    }

    pub fn set_tuthub_file_path(&mut self, path: PathBuf) {
        self.prefs.tuthub_file_path = path;
    }
}
