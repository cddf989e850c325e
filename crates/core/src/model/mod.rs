mod exercise;
mod ids;
mod mastery;
mod practice;
mod section;
pub mod truth_table;

pub use exercise::{Exercise, ExerciseDraft, ExerciseError, ExerciseKind, RemixFn, RemixOutput, Variation};
pub use ids::{ExerciseId, IdParts, ParseIdError};
pub use mastery::MasteryRecord;
pub use practice::{Flashcard, FlashcardDeck, MatchPair, PartialHint, PracticeProblem};
pub use section::{Definition, Section};
pub use truth_table::{TruthRow, TruthTable, TruthTableError, TruthValue};
