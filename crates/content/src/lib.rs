//! Static study material: textbook sections, the exercise bank, flashcard
//! decks, matching pairs and guided practice problems.

#![forbid(unsafe_code)]

mod exercises;
mod flashcards;
mod matching;
mod practice;
pub mod remixes;
mod sections;

use proof_core::catalog::{Catalog, CatalogError};
use proof_core::model::TruthTableError;
use thiserror::Error;

pub use exercises::exercise_drafts;
pub use flashcards::flashcard_decks;
pub use matching::matching_pairs;
pub use practice::practice_problems;
pub use sections::sections;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error(transparent)]
    TruthTable(#[from] TruthTableError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Validates the bundled exercise bank and builds the catalog.
///
/// # Errors
///
/// Returns `ContentError` if any bundled exercise or table is inconsistent.
pub fn catalog() -> Result<Catalog, ContentError> {
    Ok(Catalog::from_drafts(sections(), exercise_drafts()?)?)
}
