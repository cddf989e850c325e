use serde::{Deserialize, Serialize};

/// Per-exercise mastery, created on the first graded submission.
///
/// `correct` is sticky: once an exercise has been answered correctly it stays
/// mastered for the rest of the session, whatever later attempts look like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryRecord {
    pub correct: bool,
    pub attempts: u32,
}

impl MasteryRecord {
    /// Folds one graded submission into the record.
    pub fn record(&mut self, was_correct: bool) {
        self.correct = self.correct || was_correct;
        self.attempts = self.attempts.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_never_downgrades() {
        let mut record = MasteryRecord::default();
        record.record(false);
        assert!(!record.correct);
        record.record(true);
        record.record(false);
        assert!(record.correct);
        assert_eq!(record.attempts, 3);
    }
}
