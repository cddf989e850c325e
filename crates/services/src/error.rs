//! Shared error types for the services crate.

use thiserror::Error;

use proof_core::model::ExerciseId;

/// Errors emitted by the study modes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudyError {
    #[error("no exercise with id {0}")]
    UnknownExercise(String),
    #[error("no section with key {0}")]
    UnknownSection(String),
    #[error("no deck at index {0}")]
    UnknownDeck(usize),
    #[error("no exercise is open")]
    NothingOpen,
    #[error("exercise {0} is not a truth-table exercise")]
    NotATruthTable(ExerciseId),
    #[error("nothing to study")]
    Empty,
    #[error("session already completed")]
    Completed,
}

/// Errors emitted by `QueryClient`.
///
/// The display strings are shown to the learner as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    /// The proxy answered with an `error` field.
    #[error("{0}")]
    Rejected(String),
    #[error("No result from the compute engine.")]
    NoResult,
    #[error("Proxy error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
