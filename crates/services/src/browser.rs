use rand::Rng;
use tracing::debug;

use proof_core::catalog::{Catalog, Direction};
use proof_core::grading::{TableGrade, grade_exercise, grade_truth_table};
use proof_core::model::{Exercise, TruthValue};
use proof_core::progress::ProgressStore;
use proof_core::remix;

use crate::error::StudyError;

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// The answer was shown without grading anything.
    Revealed,
}

/// What the learner sees after submitting or revealing.
///
/// `answer` is always the canonical answer of the active exercise, so a
/// remixed copy shows its own recomputed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub verdict: Verdict,
    pub answer: String,
}

//
// ─── BROWSER ───────────────────────────────────────────────────────────────────
//

/// Exercise-bank browsing mode.
///
/// Holds the selected section and the active exercise, which may be a
/// remixed copy. Progress is owned by the caller and passed in for every
/// operation that grades.
#[derive(Debug)]
pub struct ExerciseBrowser<'a> {
    catalog: &'a Catalog,
    section: Option<String>,
    active: Option<Exercise>,
    feedback: Option<Feedback>,
    table: Option<TableGrade>,
    hint_visible: bool,
}

impl<'a> ExerciseBrowser<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            section: catalog.sections().first().map(|s| s.key().to_string()),
            active: None,
            feedback: None,
            table: None,
            hint_visible: false,
        }
    }

    #[must_use]
    pub fn selected_section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    #[must_use]
    pub fn active(&self) -> Option<&Exercise> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Row-by-row result of the last truth-table check on the active exercise.
    #[must_use]
    pub fn table_grade(&self) -> Option<&TableGrade> {
        self.table.as_ref()
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn show_hint(&mut self) {
        self.hint_visible = true;
    }

    fn load(&mut self, exercise: Exercise) -> &Exercise {
        self.section = Some(exercise.section().to_string());
        self.feedback = None;
        self.table = None;
        self.hint_visible = false;
        self.active.insert(exercise)
    }

    /// Opens the catalog exercise with the given id.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::UnknownExercise` if the id is not in the catalog.
    pub fn open(&mut self, id: &str) -> Result<&Exercise, StudyError> {
        let exercise = self
            .catalog
            .by_id(id)
            .ok_or_else(|| StudyError::UnknownExercise(id.to_string()))?
            .clone();
        Ok(self.load(exercise))
    }

    /// Selects a section and opens its first exercise, if it has any.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::UnknownSection` if the key is not a catalog section.
    pub fn open_section(&mut self, key: &str) -> Result<Option<&Exercise>, StudyError> {
        let catalog = self.catalog;
        if catalog.section(key).is_none() {
            return Err(StudyError::UnknownSection(key.to_string()));
        }

        match catalog.in_section(key, None).next() {
            Some(first) => Ok(Some(self.load(first.clone()))),
            None => {
                self.section = Some(key.to_string());
                self.active = None;
                self.feedback = None;
                self.table = None;
                self.hint_visible = false;
                Ok(None)
            }
        }
    }

    /// Replaces the active exercise with a fresh variant.
    ///
    /// Non-remixable exercises are left as they are. The variant is always
    /// generated from the catalog original.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::NothingOpen` when no exercise is active.
    pub fn remix(&mut self) -> Result<&Exercise, StudyError> {
        let catalog = self.catalog;
        let active = self.active.as_ref().ok_or(StudyError::NothingOpen)?;
        let original = catalog.by_id(active.id().as_str()).unwrap_or(active);
        let variant = remix(original);
        debug!(id = %variant.id(), remixed = variant.is_remix(), "remixed exercise");
        Ok(self.load(variant))
    }

    /// Opens a random exercise not yet mastered in `progress`.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Empty` for an empty catalog.
    pub fn random<R: Rng + ?Sized>(
        &mut self,
        progress: &ProgressStore,
        rng: &mut R,
    ) -> Result<&Exercise, StudyError> {
        let exercise = self
            .catalog
            .random_unmastered(progress, rng)
            .ok_or(StudyError::Empty)?
            .clone();
        Ok(self.load(exercise))
    }

    /// Steps cyclically through the whole catalog from the active exercise.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Empty` for an empty catalog.
    pub fn navigate(&mut self, direction: Direction) -> Result<&Exercise, StudyError> {
        let catalog = self.catalog;
        let current = self.active.as_ref().map_or("", |e| e.id().as_str());
        let exercise = catalog
            .next(current, direction)
            .ok_or(StudyError::Empty)?
            .clone();
        Ok(self.load(exercise))
    }

    /// Grades free-text input against the active exercise and records it.
    ///
    /// Blank input is ignored and returns `Ok(None)`. The record is keyed by
    /// the exercise id, which a remixed copy shares with its original.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::NothingOpen` when no exercise is active.
    pub fn submit(
        &mut self,
        text: &str,
        progress: &mut ProgressStore,
    ) -> Result<Option<&Feedback>, StudyError> {
        let exercise = self.active.as_ref().ok_or(StudyError::NothingOpen)?;
        if text.trim().is_empty() {
            return Ok(None);
        }

        let correct = grade_exercise(text, exercise.answer());
        let record = progress.record(exercise.id(), correct);
        debug!(
            id = %exercise.id(),
            correct,
            attempts = record.attempts,
            "graded exercise submission"
        );

        let feedback = Feedback {
            verdict: if correct {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            },
            answer: exercise.answer().to_string(),
        };
        Ok(Some(&*self.feedback.insert(feedback)))
    }

    /// Shows the answer and hint without recording anything.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::NothingOpen` when no exercise is active.
    pub fn reveal(&mut self) -> Result<&Feedback, StudyError> {
        let exercise = self.active.as_ref().ok_or(StudyError::NothingOpen)?;
        let feedback = Feedback {
            verdict: Verdict::Revealed,
            answer: exercise.answer().to_string(),
        };
        self.hint_visible = true;
        Ok(&*self.feedback.insert(feedback))
    }

    /// Checks a filled-in result column of a truth-table exercise.
    ///
    /// Records a correct attempt only when every row matches.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::NothingOpen` when no exercise is active and
    /// `StudyError::NotATruthTable` for other kinds.
    pub fn grade_table(
        &mut self,
        selections: &[Option<TruthValue>],
        progress: &mut ProgressStore,
    ) -> Result<&TableGrade, StudyError> {
        let exercise = self.active.as_ref().ok_or(StudyError::NothingOpen)?;
        let table = exercise
            .kind()
            .truth_table()
            .ok_or_else(|| StudyError::NotATruthTable(exercise.id().clone()))?;

        let grade = grade_truth_table(table, selections);
        progress.record(exercise.id(), grade.is_fully_correct());
        debug!(
            id = %exercise.id(),
            correct_rows = grade.correct_rows,
            total_rows = grade.total_rows(),
            "graded truth table"
        );
        Ok(&*self.table.insert(grade))
    }
}
