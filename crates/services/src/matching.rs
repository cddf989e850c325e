use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use proof_core::model::MatchPair;
use proof_core::progress::percentage;

use crate::error::StudyError;
use crate::rapid_fire::Rating;

pub const PAIRS_PER_GAME: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched,
    Mismatch,
    /// Nothing selected, prompt already matched, or answer no longer in the bank.
    Ignored,
}

/// Pair each prompt with its answer from a shuffled bank.
#[derive(Debug, Clone)]
pub struct MatchingGame {
    pairs: Vec<MatchPair>,
    prompts: Vec<usize>,
    bank: Vec<usize>,
    matched: Vec<bool>,
    selected: Option<usize>,
    errors: usize,
}

impl MatchingGame {
    /// # Errors
    ///
    /// Returns `StudyError::Empty` if `pairs` is empty.
    pub fn new<R: Rng + ?Sized>(pairs: &[MatchPair], rng: &mut R) -> Result<Self, StudyError> {
        if pairs.is_empty() {
            return Err(StudyError::Empty);
        }
        let mut pairs = pairs.to_vec();
        pairs.shuffle(rng);
        pairs.truncate(PAIRS_PER_GAME);

        let mut prompts: Vec<usize> = (0..pairs.len()).collect();
        let mut bank = prompts.clone();
        prompts.shuffle(rng);
        bank.shuffle(rng);

        Ok(Self {
            matched: vec![false; pairs.len()],
            pairs,
            prompts,
            bank,
            selected: None,
            errors: 0,
        })
    }

    /// Prompts in display order with whether each has been matched.
    pub fn prompts(&self) -> impl Iterator<Item = (usize, &str, bool)> + '_ {
        self.prompts
            .iter()
            .map(|&i| (i, self.pairs[i].prompt.as_str(), self.matched[i]))
    }

    /// Answers still waiting to be placed.
    pub fn bank(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.bank.iter().map(|&i| (i, self.pairs[i].answer.as_str()))
    }

    #[must_use]
    pub fn pair(&self, index: usize) -> Option<&MatchPair> {
        self.pairs.get(index)
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selects the prompt at `index`. Returns `false` if it is unknown or
    /// already matched.
    pub fn select_prompt(&mut self, index: usize) -> bool {
        if self.matched.get(index).copied().unwrap_or(true) {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Tries the bank answer belonging to pair `answer` against the selected prompt.
    ///
    /// A mismatch counts an error and keeps the selection.
    pub fn select_answer(&mut self, answer: usize) -> MatchOutcome {
        let Some(prompt) = self.selected else {
            return MatchOutcome::Ignored;
        };
        let Some(slot) = self.bank.iter().position(|&i| i == answer) else {
            return MatchOutcome::Ignored;
        };

        if self.pairs[prompt].answer == self.pairs[answer].answer {
            self.bank.remove(slot);
            self.matched[prompt] = true;
            self.selected = None;
            debug!(prompt, score = self.score(), "pair matched");
            MatchOutcome::Matched
        } else {
            self.errors += 1;
            debug!(prompt, answer, errors = self.errors, "pair mismatched");
            MatchOutcome::Mismatch
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.matched.iter().filter(|m| **m).count()
    }

    #[must_use]
    pub fn errors(&self) -> usize {
        self.errors
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.score() == self.pairs.len()
    }

    /// Matched pairs over all attempts, as a rounded percentage.
    #[must_use]
    pub fn accuracy(&self) -> u32 {
        let score = self.score();
        percentage(score, (score + self.errors).max(1))
    }

    #[must_use]
    pub fn rating(&self) -> Rating {
        Rating::for_accuracy(self.accuracy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pairs(n: usize) -> Vec<MatchPair> {
        (0..n)
            .map(|i| MatchPair::new(format!("p{i}"), format!("a{i}"), "Logic"))
            .collect()
    }

    fn answer_for(game: &MatchingGame, prompt: usize) -> usize {
        let wanted = &game.pair(prompt).unwrap().answer;
        game.bank().find(|(_, a)| a == wanted).unwrap().0
    }

    #[test]
    fn game_uses_ten_pairs() {
        let mut rng = StdRng::seed_from_u64(11);
        let game = MatchingGame::new(&pairs(15), &mut rng).unwrap();
        assert_eq!(game.total(), PAIRS_PER_GAME);
        assert_eq!(game.bank().count(), PAIRS_PER_GAME);
        assert_eq!(game.accuracy(), 0);
    }

    #[test]
    fn mismatch_keeps_selection_and_counts_error() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut game = MatchingGame::new(&pairs(3), &mut rng).unwrap();

        assert_eq!(game.select_answer(0), MatchOutcome::Ignored);
        assert!(game.select_prompt(0));
        let wrong = (0..3).find(|&i| i != answer_for(&game, 0)).unwrap();
        assert_eq!(game.select_answer(wrong), MatchOutcome::Mismatch);
        assert_eq!(game.selected(), Some(0));
        assert_eq!(game.errors(), 1);

        let right = answer_for(&game, 0);
        assert_eq!(game.select_answer(right), MatchOutcome::Matched);
        assert_eq!(game.selected(), None);
        assert!(!game.select_prompt(0));
        assert_eq!(game.bank().count(), 2);

        assert!(game.select_prompt(1));
        assert_eq!(game.select_answer(right), MatchOutcome::Ignored);
    }

    #[test]
    fn accuracy_and_rating() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut game = MatchingGame::new(&pairs(10), &mut rng).unwrap();
        for prompt in 0..10 {
            game.select_prompt(prompt);
            if prompt < 3 {
                let wrong = game.bank().map(|(i, _)| i).find(|&i| i != prompt).unwrap();
                game.select_answer(wrong);
            }
            let right = answer_for(&game, prompt);
            assert_eq!(game.select_answer(right), MatchOutcome::Matched);
        }
        assert!(game.is_done());
        // 10 / 13
        assert_eq!(game.accuracy(), 77);
        assert_eq!(game.rating(), Rating::Star);
    }
}
