#![forbid(unsafe_code)]

pub mod browser;
pub mod error;
pub mod flashcards;
pub mod matching;
pub mod practice;
pub mod query_client;
pub mod rapid_fire;

pub use proof_core::Clock;

pub use browser::{ExerciseBrowser, Feedback, Verdict};
pub use error::{QueryError, StudyError};
pub use flashcards::FlashcardSession;
pub use matching::{MatchOutcome, MatchingGame};
pub use practice::{GuidedPractice, PracticeFeedback, PracticeState};
pub use query_client::{
    HttpQueryTransport, QueryClient, QueryPanel, QueryReply, QueryTicket, QueryTransport,
    external_url,
};
pub use rapid_fire::{RapidFire, RapidFireSummary, Rating, RecallResult};
