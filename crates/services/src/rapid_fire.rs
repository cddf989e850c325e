//! Timed recall drill over a shuffled sample of every flashcard deck.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::debug;

use proof_core::Clock;
use proof_core::grading::grade_recall;
use proof_core::model::{Flashcard, FlashcardDeck};
use proof_core::progress::percentage;

use crate::error::StudyError;

/// Cards drawn per round.
pub const ROUND_SIZE: usize = 20;

/// Recorded as the given answer when a card runs out of time.
pub const TIMED_OUT: &str = "(timed out)";

#[must_use]
pub fn time_limit() -> Duration {
    Duration::seconds(30)
}

/// End-of-round badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Trophy,
    Star,
    Book,
}

impl Rating {
    /// Rating for a rapid-fire round by raw correct count.
    #[must_use]
    pub fn for_recall(correct: usize) -> Self {
        match correct {
            16.. => Self::Trophy,
            10.. => Self::Star,
            _ => Self::Book,
        }
    }

    /// Rating for a matching game by accuracy percentage.
    #[must_use]
    pub fn for_accuracy(pct: u32) -> Self {
        match pct {
            90.. => Self::Trophy,
            70.. => Self::Star,
            _ => Self::Book,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Trophy => "🏆",
            Self::Star => "⭐",
            Self::Book => "📚",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecallResult {
    pub prompt: String,
    pub answer: String,
    pub given: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RapidFireSummary {
    pub correct: usize,
    pub total: usize,
    pub accuracy: u32,
    pub rating: Rating,
    pub results: Vec<RecallResult>,
}

#[derive(Debug, Clone)]
pub struct RapidFire {
    cards: Vec<Flashcard>,
    index: usize,
    card_started: DateTime<Utc>,
    answered: Option<RecallResult>,
    results: Vec<RecallResult>,
    done: bool,
}

impl RapidFire {
    /// Shuffles every card of every deck and keeps the first [`ROUND_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Empty` when the decks hold no cards.
    pub fn new<R: Rng + ?Sized>(
        decks: &[FlashcardDeck],
        rng: &mut R,
        clock: &Clock,
    ) -> Result<Self, StudyError> {
        let mut cards: Vec<Flashcard> = decks.iter().flat_map(|d| d.cards.iter().cloned()).collect();
        if cards.is_empty() {
            return Err(StudyError::Empty);
        }
        cards.shuffle(rng);
        cards.truncate(ROUND_SIZE);
        debug!(cards = cards.len(), "rapid fire round started");

        Ok(Self {
            cards,
            index: 0,
            card_started: clock.now(),
            answered: None,
            results: Vec::new(),
            done: false,
        })
    }

    #[must_use]
    pub fn current(&self) -> Option<&Flashcard> {
        if self.done {
            None
        } else {
            self.cards.get(self.index)
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.cards.len()
    }

    /// Result for the current card, once it has been answered or has expired.
    #[must_use]
    pub fn answered(&self) -> Option<&RecallResult> {
        self.answered.as_ref()
    }

    #[must_use]
    pub fn results(&self) -> &[RecallResult] {
        &self.results
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn time_left(&self, clock: &Clock) -> Duration {
        clock.remaining(self.card_started, time_limit())
    }

    /// Grades an answer to the current card.
    ///
    /// Blank input and second answers to the same card are ignored. An answer
    /// arriving after the time limit is recorded as timed out.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Completed` once the round is over.
    pub fn submit(&mut self, text: &str, clock: &Clock) -> Result<Option<&RecallResult>, StudyError> {
        if self.done {
            return Err(StudyError::Completed);
        }
        if self.answered.is_some() || text.trim().is_empty() {
            return Ok(None);
        }
        if self.time_left(clock) <= Duration::zero() {
            return Ok(self.expire(clock));
        }
        let Some(card) = self.cards.get(self.index) else {
            return Err(StudyError::Completed);
        };

        let correct = grade_recall(text, &card.answer);
        Ok(Some(self.settle(text.trim().to_string(), correct)))
    }

    /// Records a timed-out result if the current card is unanswered and its
    /// time is up.
    pub fn expire(&mut self, clock: &Clock) -> Option<&RecallResult> {
        if self.done || self.answered.is_some() || self.time_left(clock) > Duration::zero() {
            return None;
        }
        debug!(card = self.index, "rapid fire card timed out");
        Some(self.settle(TIMED_OUT.to_string(), false))
    }

    fn settle(&mut self, given: String, correct: bool) -> &RecallResult {
        let (prompt, answer) = self
            .cards
            .get(self.index)
            .map(|c| (c.prompt.clone(), c.answer.clone()))
            .unwrap_or_default();
        let result = RecallResult {
            prompt,
            answer,
            given,
            correct,
        };
        self.results.push(result.clone());
        self.answered.insert(result)
    }

    /// Moves to the next card and restarts its timer. Returns `false` once
    /// past the last card.
    pub fn next(&mut self, clock: &Clock) -> bool {
        if self.done {
            return false;
        }
        self.answered = None;
        if self.index + 1 >= self.cards.len() {
            self.done = true;
            return false;
        }
        self.index += 1;
        self.card_started = clock.now();
        true
    }

    #[must_use]
    pub fn summary(&self) -> RapidFireSummary {
        let correct = self.results.iter().filter(|r| r.correct).count();
        RapidFireSummary {
            correct,
            total: self.cards.len(),
            accuracy: percentage(correct, self.cards.len()),
            rating: Rating::for_recall(correct),
            results: self.results.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proof_core::time::fixed_clock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn decks(cards: usize) -> Vec<FlashcardDeck> {
        let cards = (0..cards)
            .map(|i| Flashcard::new(format!("prompt {i}"), format!("answer number {i}"), "", ""))
            .collect();
        vec![FlashcardDeck {
            name: "Deck".into(),
            cards,
        }]
    }

    #[test]
    fn round_is_capped_at_round_size() {
        let clock = fixed_clock();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(RapidFire::new(&decks(50), &mut rng, &clock).unwrap().total(), ROUND_SIZE);
        assert_eq!(RapidFire::new(&decks(3), &mut rng, &clock).unwrap().total(), 3);
        assert_eq!(
            RapidFire::new(&[], &mut rng, &clock).unwrap_err(),
            StudyError::Empty
        );
    }

    #[test]
    fn answers_are_graded_once_per_card() {
        let clock = fixed_clock();
        let mut rng = StdRng::seed_from_u64(8);
        let mut round = RapidFire::new(&decks(2), &mut rng, &clock).unwrap();
        let answer = round.current().unwrap().answer.clone();

        assert!(round.submit("   ", &clock).unwrap().is_none());
        let result = round.submit(&answer, &clock).unwrap().unwrap();
        assert!(result.correct);
        assert!(round.submit("again", &clock).unwrap().is_none());
        assert_eq!(round.results().len(), 1);
    }

    #[test]
    fn expiry_records_a_timeout() {
        let mut clock = fixed_clock();
        let mut rng = StdRng::seed_from_u64(9);
        let mut round = RapidFire::new(&decks(2), &mut rng, &clock).unwrap();

        clock.advance(Duration::seconds(29));
        assert!(round.expire(&clock).is_none());
        assert_eq!(round.time_left(&clock), Duration::seconds(1));

        clock.advance(Duration::seconds(1));
        let answer = round.current().unwrap().answer.clone();
        let result = round.submit(&answer, &clock).unwrap().unwrap();
        assert_eq!(result.given, TIMED_OUT);
        assert!(!result.correct);

        assert!(round.next(&clock));
        assert_eq!(round.time_left(&clock), time_limit());
    }

    #[test]
    fn summary_counts_unanswered_cards_as_missed() {
        let clock = fixed_clock();
        let mut rng = StdRng::seed_from_u64(10);
        let mut round = RapidFire::new(&decks(4), &mut rng, &clock).unwrap();

        let answer = round.current().unwrap().answer.clone();
        round.submit(&answer, &clock).unwrap();
        while round.next(&clock) {}

        assert!(round.is_done());
        assert!(!round.next(&clock));
        let summary = round.summary();
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.accuracy, 25);
        assert_eq!(summary.rating, Rating::Book);
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(Rating::for_recall(16), Rating::Trophy);
        assert_eq!(Rating::for_recall(15), Rating::Star);
        assert_eq!(Rating::for_recall(10), Rating::Star);
        assert_eq!(Rating::for_recall(9), Rating::Book);
        assert_eq!(Rating::for_accuracy(90), Rating::Trophy);
        assert_eq!(Rating::for_accuracy(70), Rating::Star);
        assert_eq!(Rating::for_accuracy(69).symbol(), "📚");
    }
}
