use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::model::{Exercise, ExerciseDraft, ExerciseError, ExerciseId, Section};
use crate::progress::ProgressStore;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate exercise id {0}")]
    DuplicateExercise(ExerciseId),

    #[error("duplicate section key {0}")]
    DuplicateSection(String),

    #[error("exercise {id} refers to undeclared section {section}")]
    UnknownSection { id: ExerciseId, section: String },

    #[error(transparent)]
    Exercise(#[from] ExerciseError),
}

/// Navigation direction for cyclic stepping through the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Exercises of one part of a section, in declaration order.
#[derive(Debug, Clone)]
pub struct PartGroup<'a> {
    pub part: &'a str,
    pub exercises: Vec<&'a Exercise>,
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Read-only collection of sections and exercises.
///
/// Declaration order is significant: it drives navigation and display.
#[derive(Debug, Clone)]
pub struct Catalog {
    sections: Vec<Section>,
    exercises: Vec<Exercise>,
    index: HashMap<ExerciseId, usize>,
}

impl Catalog {
    /// Builds a catalog from validated exercises.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on duplicate ids or section keys, or when an
    /// exercise names a section that is not declared.
    pub fn new(sections: Vec<Section>, exercises: Vec<Exercise>) -> Result<Self, CatalogError> {
        let mut keys = HashSet::with_capacity(sections.len());
        for section in &sections {
            if !keys.insert(section.key()) {
                return Err(CatalogError::DuplicateSection(section.key().to_string()));
            }
        }

        let mut index = HashMap::with_capacity(exercises.len());
        for (position, exercise) in exercises.iter().enumerate() {
            if !keys.contains(exercise.section()) {
                return Err(CatalogError::UnknownSection {
                    id: exercise.id().clone(),
                    section: exercise.section().to_string(),
                });
            }
            if index.insert(exercise.id().clone(), position).is_some() {
                return Err(CatalogError::DuplicateExercise(exercise.id().clone()));
            }
        }

        Ok(Self {
            sections,
            exercises,
            index,
        })
    }

    /// Validates every draft, then builds the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first draft validation failure or catalog consistency error.
    pub fn from_drafts(
        sections: Vec<Section>,
        drafts: impl IntoIterator<Item = ExerciseDraft>,
    ) -> Result<Self, CatalogError> {
        let exercises = drafts
            .into_iter()
            .map(ExerciseDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sections, exercises)
    }

    #[must_use]
    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key() == key)
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Exercise> {
        self.index.get(id).map(|&i| &self.exercises[i])
    }

    /// Exercises of a section, optionally narrowed to one part.
    pub fn in_section<'a>(
        &'a self,
        section: &'a str,
        part: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Exercise> + 'a {
        self.exercises
            .iter()
            .filter(move |e| e.section() == section && part.is_none_or(|p| e.part() == p))
    }

    /// Exercises of a section grouped by part, parts in first-appearance order.
    #[must_use]
    pub fn by_section(&self, section: &str) -> Vec<PartGroup<'_>> {
        let mut groups: Vec<PartGroup<'_>> = Vec::new();
        for exercise in self.exercises.iter().filter(|e| e.section() == section) {
            match groups.iter_mut().find(|g| g.part == exercise.part()) {
                Some(group) => group.exercises.push(exercise),
                None => groups.push(PartGroup {
                    part: exercise.part(),
                    exercises: vec![exercise],
                }),
            }
        }
        groups
    }

    /// Picks uniformly among exercises not yet mastered in `progress`, or
    /// among all exercises once everything is mastered.
    ///
    /// Returns `None` only for an empty catalog.
    pub fn random_unmastered<R: Rng + ?Sized>(
        &self,
        progress: &ProgressStore,
        rng: &mut R,
    ) -> Option<&Exercise> {
        let unmastered: Vec<&Exercise> = self
            .exercises
            .iter()
            .filter(|e| !progress.is_mastered(e.id().as_str()))
            .collect();

        if unmastered.is_empty() {
            self.exercises.choose(rng)
        } else {
            unmastered.choose(rng).copied()
        }
    }

    /// Cyclic step through the whole catalog in declaration order.
    ///
    /// An id that is not in the catalog steps to the first exercise going
    /// forward and to the last going backward.
    #[must_use]
    pub fn next(&self, current: &str, direction: Direction) -> Option<&Exercise> {
        let len = self.exercises.len();
        if len == 0 {
            return None;
        }

        let target = match (self.index.get(current), direction) {
            (Some(&i), Direction::Forward) => (i + 1) % len,
            (Some(&i), Direction::Backward) => (i + len - 1) % len,
            (None, Direction::Forward) => 0,
            (None, Direction::Backward) => len - 1,
        };
        self.exercises.get(target)
    }
}
