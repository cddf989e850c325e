use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use proof_core::grading::{OpenClass, grade_open_answer};
use proof_core::model::PracticeProblem;

use crate::error::StudyError;

pub const ENCOURAGEMENT: [&str; 5] = [
    "🎉 Nailed it! That's exactly right.",
    "✅ Perfect — textbook answer.",
    "🔥 Yes! That's the one.",
    "💯 Correct!",
    "⭐ Spot on!",
];

pub const CLOSE_LINES: [&str; 3] = [
    "🤏 So close! One more try?",
    "💡 Really close! Check notation.",
    "🔍 Nearly perfect — one small thing off.",
];

pub const NUDGES: [&str; 3] = [
    "Not quite — want a hint?",
    "Hmm, that's not it. Want me to guide you?",
    "Keep thinking — here's a nudge...",
];

/// Shown for a partial match that carries no diagnostic of its own.
pub const PARTIAL_FALLBACK: &str = "You've got part of it.";

fn pick<R: Rng + ?Sized>(lines: &[&'static str], rng: &mut R) -> &'static str {
    lines.choose(rng).copied().unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeState {
    Idle,
    Graded(OpenClass),
    Revealed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeFeedback {
    pub class: OpenClass,
    pub message: String,
}

/// Guided practice over open-ended problems, presented in order.
#[derive(Debug, Clone)]
pub struct GuidedPractice {
    problems: Vec<PracticeProblem>,
    index: usize,
    attempts: u32,
    score: usize,
    scored_current: bool,
    hint_visible: bool,
    state: PracticeState,
    feedback: Option<PracticeFeedback>,
    done: bool,
}

impl GuidedPractice {
    /// # Errors
    ///
    /// Returns `StudyError::Empty` if `problems` is empty.
    pub fn new(problems: Vec<PracticeProblem>) -> Result<Self, StudyError> {
        if problems.is_empty() {
            return Err(StudyError::Empty);
        }
        Ok(Self {
            problems,
            index: 0,
            attempts: 0,
            score: 0,
            scored_current: false,
            hint_visible: false,
            state: PracticeState::Idle,
            feedback: None,
            done: false,
        })
    }

    #[must_use]
    pub fn current(&self) -> Option<&PracticeProblem> {
        if self.done {
            None
        } else {
            self.problems.get(self.index)
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.problems.len()
    }

    /// Attempts on the current problem.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Problems answered correctly at least once.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn state(&self) -> PracticeState {
        self.state
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&PracticeFeedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Grades an answer to the current problem.
    ///
    /// Blank input is ignored. A wrong answer reveals the hint.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Completed` once every problem has been passed.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        text: &str,
        rng: &mut R,
    ) -> Result<Option<&PracticeFeedback>, StudyError> {
        if self.done {
            return Err(StudyError::Completed);
        }
        if text.trim().is_empty() {
            return Ok(None);
        }
        let Some(problem) = self.problems.get(self.index) else {
            return Err(StudyError::Completed);
        };

        let grade = grade_open_answer(text, problem);
        self.attempts += 1;

        let message = match grade.class {
            OpenClass::Correct => {
                if !self.scored_current {
                    self.scored_current = true;
                    self.score += 1;
                }
                pick(&ENCOURAGEMENT, rng).to_string()
            }
            OpenClass::Close => match grade.message {
                Some(detail) => format!("{} {detail}", pick(&CLOSE_LINES, rng)),
                None => pick(&CLOSE_LINES, rng).to_string(),
            },
            OpenClass::Partial => grade
                .message
                .unwrap_or_else(|| PARTIAL_FALLBACK.to_string()),
            OpenClass::Wrong => {
                self.hint_visible = true;
                pick(&NUDGES, rng).to_string()
            }
        };

        debug!(
            problem = self.index,
            class = ?grade.class,
            attempts = self.attempts,
            "graded practice answer"
        );
        self.state = PracticeState::Graded(grade.class);
        Ok(Some(&*self.feedback.insert(PracticeFeedback {
            class: grade.class,
            message,
        })))
    }

    /// Shows the model answer and hint for the current problem.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Completed` once every problem has been passed.
    pub fn reveal(&mut self) -> Result<&PracticeProblem, StudyError> {
        if self.done {
            return Err(StudyError::Completed);
        }
        self.state = PracticeState::Revealed;
        self.hint_visible = true;
        self.problems.get(self.index).ok_or(StudyError::Completed)
    }

    /// Moves to the next problem. Returns `false` once past the last one.
    pub fn next(&mut self) -> bool {
        if self.index + 1 >= self.problems.len() {
            self.done = true;
            return false;
        }
        self.index += 1;
        self.attempts = 0;
        self.scored_current = false;
        self.hint_visible = false;
        self.state = PracticeState::Idle;
        self.feedback = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn problems() -> Vec<PracticeProblem> {
        vec![
            PracticeProblem::new("Simplify ¬(P ⟹ Q).", "P ∧ ¬Q")
                .keywords(["P ∧ ¬Q", "P and not Q", "P∧¬Q"])
                .partial_hint("∨", "The negation of P⟹Q doesn't have an OR.")
                .hint("P⟹Q fails exactly when P is true AND Q is false"),
            PracticeProblem::new("Find A ∩ B.", "{3, 4, 5}")
                .keywords(["3", "4", "5", "six", "seven"])
                .hint("Elements in both"),
        ]
    }

    #[test]
    fn correct_answer_scores_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut practice = GuidedPractice::new(problems()).unwrap();

        let feedback = practice.submit("p∧¬q", &mut rng).unwrap().unwrap();
        assert_eq!(feedback.class, OpenClass::Correct);
        assert!(ENCOURAGEMENT.contains(&feedback.message.as_str()));

        practice.submit("P ∧ ¬Q", &mut rng).unwrap();
        assert_eq!(practice.score(), 1);
        assert_eq!(practice.attempts(), 2);
    }

    #[test]
    fn trigger_message_is_used_for_partial() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut practice = GuidedPractice::new(problems()).unwrap();
        let feedback = practice.submit("¬P ∨ Q", &mut rng).unwrap().unwrap();
        assert_eq!(feedback.class, OpenClass::Partial);
        assert_eq!(feedback.message, "The negation of P⟹Q doesn't have an OR.");
        assert!(!practice.hint_visible());
    }

    #[test]
    fn wrong_answer_reveals_hint() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut practice = GuidedPractice::new(problems()).unwrap();
        let feedback = practice.submit("Q", &mut rng).unwrap().unwrap();
        assert_eq!(feedback.class, OpenClass::Wrong);
        assert!(NUDGES.contains(&feedback.message.as_str()));
        assert!(practice.hint_visible());
    }

    #[test]
    fn close_and_generic_partial_messages() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut practice = GuidedPractice::new(problems()).unwrap();
        assert!(practice.next());

        let feedback = practice.submit("3 and 4 and 5", &mut rng).unwrap().unwrap();
        assert_eq!(feedback.class, OpenClass::Close);
        assert!(CLOSE_LINES.iter().any(|line| feedback.message.starts_with(line)));

        let feedback = practice.submit("3 and 4", &mut rng).unwrap().unwrap();
        assert_eq!(feedback.class, OpenClass::Partial);
        assert_ne!(feedback.message, PARTIAL_FALLBACK);
    }

    #[test]
    fn blank_is_ignored_and_next_finishes() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut practice = GuidedPractice::new(problems()).unwrap();
        assert!(practice.submit("  ", &mut rng).unwrap().is_none());
        assert_eq!(practice.attempts(), 0);

        assert!(practice.next());
        assert!(!practice.next());
        assert!(practice.is_done());
        assert!(practice.current().is_none());
        assert_eq!(
            practice.submit("x", &mut rng).unwrap_err(),
            StudyError::Completed
        );
    }

    #[test]
    fn empty_problem_list_is_rejected() {
        assert_eq!(GuidedPractice::new(Vec::new()).unwrap_err(), StudyError::Empty);
    }
}
