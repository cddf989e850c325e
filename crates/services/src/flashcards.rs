use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use proof_core::model::{Flashcard, FlashcardDeck};

use crate::error::StudyError;

/// One pass through a shuffled deck, sorting cards into known and review piles.
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    decks: Vec<FlashcardDeck>,
    deck: usize,
    order: Vec<usize>,
    position: usize,
    flipped: bool,
    known: BTreeSet<usize>,
    review: BTreeSet<usize>,
    done: bool,
}

impl FlashcardSession {
    /// Opens the first deck.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Empty` if there are no decks or the first is empty.
    pub fn new<R: Rng + ?Sized>(decks: Vec<FlashcardDeck>, rng: &mut R) -> Result<Self, StudyError> {
        if decks.first().is_none_or(|d| d.cards.is_empty()) {
            return Err(StudyError::Empty);
        }
        let mut session = Self {
            decks,
            deck: 0,
            order: Vec::new(),
            position: 0,
            flipped: false,
            known: BTreeSet::new(),
            review: BTreeSet::new(),
            done: false,
        };
        session.restart(rng);
        Ok(session)
    }

    #[must_use]
    pub fn decks(&self) -> &[FlashcardDeck] {
        &self.decks
    }

    #[must_use]
    pub fn deck_index(&self) -> usize {
        self.deck
    }

    #[must_use]
    pub fn deck(&self) -> &FlashcardDeck {
        &self.decks[self.deck]
    }

    #[must_use]
    pub fn current(&self) -> Option<&Flashcard> {
        if self.done {
            return None;
        }
        self.order
            .get(self.position)
            .and_then(|&i| self.deck().cards.get(i))
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    #[must_use]
    pub fn review_count(&self) -> usize {
        self.review.len()
    }

    /// Cards marked for review, in deck order.
    pub fn review_cards(&self) -> impl Iterator<Item = &Flashcard> + '_ {
        self.review.iter().filter_map(|&i| self.deck().cards.get(i))
    }

    pub fn flip(&mut self) {
        if !self.done {
            self.flipped = !self.flipped;
        }
    }

    pub fn mark_known(&mut self) {
        if let Some(&card) = self.order.get(self.position).filter(|_| !self.done) {
            self.known.insert(card);
            self.advance();
        }
    }

    pub fn mark_review(&mut self) {
        if let Some(&card) = self.order.get(self.position).filter(|_| !self.done) {
            self.review.insert(card);
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.flipped = false;
        if self.position + 1 >= self.order.len() {
            self.done = true;
            debug!(
                deck = self.deck,
                known = self.known.len(),
                review = self.review.len(),
                "flashcard pass finished"
            );
        } else {
            self.position += 1;
        }
    }

    /// Reshuffles the current deck and clears both piles.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order = (0..self.deck().cards.len()).collect();
        self.order.shuffle(rng);
        self.position = 0;
        self.flipped = false;
        self.known.clear();
        self.review.clear();
        self.done = self.order.is_empty();
    }

    /// Switches to another deck and starts it fresh.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::UnknownDeck` if `index` is out of range.
    pub fn change_deck<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> Result<&FlashcardDeck, StudyError> {
        if index >= self.decks.len() {
            return Err(StudyError::UnknownDeck(index));
        }
        self.deck = index;
        self.restart(rng);
        debug!(deck = index, cards = self.order.len(), "flashcard deck changed");
        Ok(self.deck())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn decks() -> Vec<FlashcardDeck> {
        let deck = |name: &str, n: usize| FlashcardDeck {
            name: name.into(),
            cards: (0..n)
                .map(|i| Flashcard::new(format!("{name} {i}"), "a", "", ""))
                .collect(),
        };
        vec![deck("Laws", 3), deck("Sets", 2)]
    }

    #[test]
    fn pass_sorts_cards_and_finishes() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut session = FlashcardSession::new(decks(), &mut rng).unwrap();

        session.flip();
        assert!(session.is_flipped());
        session.mark_known();
        assert!(!session.is_flipped());
        session.mark_review();
        assert!(!session.is_done());
        session.mark_known();

        assert!(session.is_done());
        assert!(session.current().is_none());
        assert_eq!(session.known_count(), 2);
        assert_eq!(session.review_count(), 1);
        assert_eq!(session.review_cards().count(), 1);

        session.mark_known();
        assert_eq!(session.known_count(), 2);
    }

    #[test]
    fn restart_and_change_deck_clear_state() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut session = FlashcardSession::new(decks(), &mut rng).unwrap();
        session.mark_review();

        session.restart(&mut rng);
        assert_eq!(session.review_count(), 0);
        assert_eq!(session.position(), 0);

        session.mark_known();
        let deck = session.change_deck(1, &mut rng).unwrap();
        assert_eq!(deck.name, "Sets");
        assert_eq!(session.known_count(), 0);
        assert!(session.current().unwrap().prompt.starts_with("Sets"));

        assert_eq!(
            session.change_deck(5, &mut rng).unwrap_err(),
            StudyError::UnknownDeck(5)
        );
        assert_eq!(session.deck_index(), 1);
    }

    #[test]
    fn empty_decks_are_rejected() {
        let mut rng = StdRng::seed_from_u64(23);
        assert_eq!(
            FlashcardSession::new(Vec::new(), &mut rng).unwrap_err(),
            StudyError::Empty
        );
    }
}
