use std::fmt;

use thiserror::Error;

use crate::model::ids::{ExerciseId, ParseIdError};
use crate::model::truth_table::TruthTable;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error(transparent)]
    InvalidId(#[from] ParseIdError),

    #[error("exercise {id} is declared in section {declared} but its id says {from_id}")]
    SectionMismatch {
        id: ExerciseId,
        declared: String,
        from_id: String,
    },

    #[error("exercise {id} is declared in part {declared} but its id says {from_id}")]
    PartMismatch {
        id: ExerciseId,
        declared: String,
        from_id: String,
    },

    #[error("exercise {0} has an empty question")]
    EmptyQuestion(ExerciseId),

    #[error("exercise {0} has an empty answer")]
    EmptyAnswer(ExerciseId),
}

//
// ─── KIND & VARIATION ──────────────────────────────────────────────────────────
//

/// Input widget an exercise is answered with.
///
/// Only `TruthTable` changes grading: it is graded row by row against the table
/// it carries; every other kind is graded as free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseKind {
    List,
    Builder,
    Cardinality,
    TrueFalse,
    TruthTable(TruthTable),
}

impl ExerciseKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseKind::List => "list",
            ExerciseKind::Builder => "builder",
            ExerciseKind::Cardinality => "cardinality",
            ExerciseKind::TrueFalse => "tfq",
            ExerciseKind::TruthTable(_) => "truth_table",
        }
    }

    #[must_use]
    pub fn truth_table(&self) -> Option<&TruthTable> {
        match self {
            ExerciseKind::TruthTable(table) => Some(table),
            _ => None,
        }
    }
}

/// Replacement text produced by a remix generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemixOutput {
    pub question: String,
    pub answer: String,
    pub query_hint: String,
}

/// Generator for a fresh variant of an exercise. Takes no input and captures
/// no state, so it may be called any number of times.
pub type RemixFn = fn() -> RemixOutput;

/// Whether an exercise can produce parameterized variants of itself.
#[derive(Clone, Copy)]
pub enum Variation {
    Fixed,
    Remixable(RemixFn),
}

impl fmt::Debug for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variation::Fixed => f.write_str("Fixed"),
            Variation::Remixable(_) => f.write_str("Remixable(..)"),
        }
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated exercise as written in the content tables.
#[derive(Debug, Clone)]
pub struct ExerciseDraft {
    pub id: String,
    pub section: String,
    pub part: String,
    pub kind: ExerciseKind,
    pub question: String,
    pub answer: String,
    pub hint: String,
    pub query_hint: String,
    pub variation: Variation,
}

impl ExerciseDraft {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        section: impl Into<String>,
        part: impl Into<String>,
        kind: ExerciseKind,
    ) -> Self {
        Self {
            id: id.into(),
            section: section.into(),
            part: part.into(),
            kind,
            question: String::new(),
            answer: String::new(),
            hint: String::new(),
            query_hint: String::new(),
            variation: Variation::Fixed,
        }
    }

    #[must_use]
    pub fn question(mut self, text: impl Into<String>) -> Self {
        self.question = text.into();
        self
    }

    #[must_use]
    pub fn answer(mut self, text: impl Into<String>) -> Self {
        self.answer = text.into();
        self
    }

    #[must_use]
    pub fn hint(mut self, text: impl Into<String>) -> Self {
        self.hint = text.into();
        self
    }

    #[must_use]
    pub fn query_hint(mut self, text: impl Into<String>) -> Self {
        self.query_hint = text.into();
        self
    }

    #[must_use]
    pub fn remixable(mut self, generate: RemixFn) -> Self {
        self.variation = Variation::Remixable(generate);
        self
    }

    /// Checks the id against the declared section/part and requires non-blank
    /// question and answer text.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError` describing the first problem found.
    pub fn validate(self) -> Result<Exercise, ExerciseError> {
        let id = ExerciseId::new(self.id);
        let parts = id.parts()?;

        if parts.section != self.section {
            return Err(ExerciseError::SectionMismatch {
                declared: self.section,
                from_id: parts.section.to_string(),
                id,
            });
        }
        if parts.part != self.part {
            return Err(ExerciseError::PartMismatch {
                declared: self.part,
                from_id: parts.part.to_string(),
                id,
            });
        }
        if self.question.trim().is_empty() {
            return Err(ExerciseError::EmptyQuestion(id));
        }
        if self.answer.trim().is_empty() {
            return Err(ExerciseError::EmptyAnswer(id));
        }

        Ok(Exercise {
            id,
            section: self.section,
            part: self.part,
            kind: self.kind,
            question: self.question,
            answer: self.answer,
            hint: self.hint,
            query_hint: self.query_hint,
            variation: self.variation,
            remixed: false,
        })
    }
}

//
// ─── EXERCISE ──────────────────────────────────────────────────────────────────
//

/// One gradable problem.
///
/// Catalog entries are never mutated. A remix produces a separate copy that
/// keeps `id`, `section` and `part`, so progress is always keyed by the
/// catalog id.
#[derive(Debug, Clone)]
pub struct Exercise {
    id: ExerciseId,
    section: String,
    part: String,
    kind: ExerciseKind,
    question: String,
    answer: String,
    hint: String,
    query_hint: String,
    variation: Variation,
    remixed: bool,
}

impl Exercise {
    #[must_use]
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    #[must_use]
    pub fn part(&self) -> &str {
        &self.part
    }

    #[must_use]
    pub fn kind(&self) -> &ExerciseKind {
        &self.kind
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Text suitable for forwarding to the query proxy to check the answer.
    #[must_use]
    pub fn query_hint(&self) -> &str {
        &self.query_hint
    }

    #[must_use]
    pub fn variation(&self) -> Variation {
        self.variation
    }

    #[must_use]
    pub fn is_remixable(&self) -> bool {
        matches!(self.variation, Variation::Remixable(_))
    }

    /// Display marker: true for a remixed copy. Never part of progress keying.
    #[must_use]
    pub fn is_remix(&self) -> bool {
        self.remixed
    }

    pub(crate) fn with_remix(&self, output: RemixOutput) -> Self {
        Self {
            question: output.question,
            answer: output.answer,
            query_hint: output.query_hint,
            remixed: true,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ExerciseDraft {
        ExerciseDraft::new("1.1.C.29", "1.1", "C", ExerciseKind::Cardinality)
            .question("Find |{{1}, {2,{3,4}}, ∅}|.")
            .answer("3")
            .hint("Count the top-level elements.")
            .query_hint("cardinality of {{1},{2,{3,4}},{}}")
    }

    #[test]
    fn valid_draft_becomes_exercise() {
        let exercise = draft().validate().unwrap();
        assert_eq!(exercise.id().as_str(), "1.1.C.29");
        assert_eq!(exercise.section(), "1.1");
        assert_eq!(exercise.part(), "C");
        assert_eq!(exercise.kind().label(), "cardinality");
        assert!(!exercise.is_remixable());
        assert!(!exercise.is_remix());
    }

    #[test]
    fn section_must_match_id() {
        let mut d = draft();
        d.section = "1.2".into();
        let err = d.validate().unwrap_err();
        assert!(matches!(err, ExerciseError::SectionMismatch { .. }));
    }

    #[test]
    fn part_must_match_id() {
        let mut d = draft();
        d.part = "B".into();
        assert!(matches!(
            d.validate().unwrap_err(),
            ExerciseError::PartMismatch { .. }
        ));
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = draft().question("   ").validate().unwrap_err();
        assert!(matches!(err, ExerciseError::EmptyQuestion(_)));

        let err = draft().answer("").validate().unwrap_err();
        assert!(matches!(err, ExerciseError::EmptyAnswer(_)));
    }

    #[test]
    fn malformed_id_is_rejected() {
        let d = ExerciseDraft::new("1.1.C", "1.1", "C", ExerciseKind::List)
            .question("q")
            .answer("a");
        assert!(matches!(
            d.validate().unwrap_err(),
            ExerciseError::InvalidId(_)
        ));
    }
}
