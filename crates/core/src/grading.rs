//! Textual answer grading.
//!
//! Grading here is a set of deliberately lenient string heuristics, not a
//! check of mathematical equivalence. The thresholds are matched against the
//! existing exercise data and must not be tightened.

use serde::{Deserialize, Serialize};

use crate::model::{PracticeProblem, TruthTable, TruthValue};

/// Characters of the canonical answer a submission may contain to count as correct.
pub const PREFIX_MATCH_CHARS: usize = 8;

/// Keyword ratio at or above which an open answer is `Close`.
pub const CLOSE_RATIO: f64 = 0.6;

/// Keyword ratio at or above which an open answer is `Partial`.
pub const PARTIAL_RATIO: f64 = 0.3;

/// Message attached to a `Close` keyword match.
pub const CLOSE_MESSAGE: &str =
    "Really close! You've got the right idea. Just tighten up the notation.";

/// Message attached to a `Partial` keyword match with no trigger phrase.
pub const PARTIAL_MESSAGE: &str = "You're on the right track. Re-read the hint and try again.";

//
// ─── NORMALIZATION ────────────────────────────────────────────────────────────
//

/// Lower-cases and removes every whitespace character.
///
/// `"x + 1"` and `"X+1"` both normalize to `"x+1"`. Idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

//
// ─── CATALOG EXERCISES ────────────────────────────────────────────────────────
//

/// Binary grading for catalog exercises.
///
/// With `u` and `c` the normalized submission and canonical answer, the
/// submission is correct when `u == c`, when `c` contains `u`, or when `u`
/// contains the first [`PREFIX_MATCH_CHARS`] characters of `c`.
///
/// A blank submission is contained in every answer; callers refuse blank
/// input before grading.
#[must_use]
pub fn grade_exercise(submitted: &str, answer: &str) -> bool {
    let u = normalize(submitted);
    let c = normalize(answer);
    if u == c || c.contains(&u) {
        return true;
    }

    let prefix: String = c.chars().take(PREFIX_MATCH_CHARS).collect();
    u.contains(&prefix)
}

//
// ─── OPEN-ENDED PRACTICE ──────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenClass {
    Correct,
    Close,
    Partial,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGrade {
    pub class: OpenClass,
    pub message: Option<String>,
}

impl OpenGrade {
    fn bare(class: OpenClass) -> Self {
        Self {
            class,
            message: None,
        }
    }

    fn with_message(class: OpenClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: Some(message.into()),
        }
    }
}

/// Fraction of `keywords` found in `submitted` (case-insensitive substring).
///
/// Whitespace is significant here, unlike [`normalize`]. An empty keyword
/// list yields `0.0`.
#[must_use]
pub fn keyword_ratio(submitted: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }

    let u = submitted.trim().to_lowercase();
    let found = keywords
        .iter()
        .filter(|k| u.contains(&k.to_lowercase()))
        .count();

    #[allow(clippy::cast_precision_loss)]
    let ratio = found as f64 / keywords.len() as f64;
    ratio
}

/// Four-way grading for open-ended practice problems.
///
/// Order matters: exact match, then the first trigger phrase in declaration
/// order, then the keyword ratio thresholds.
#[must_use]
pub fn grade_open_answer(submitted: &str, problem: &PracticeProblem) -> OpenGrade {
    let u = normalize(submitted);
    if u == normalize(&problem.answer) {
        return OpenGrade::bare(OpenClass::Correct);
    }

    if let Some(hit) = problem
        .partial_hints
        .iter()
        .find(|h| u.contains(&normalize(&h.trigger)))
    {
        return OpenGrade::with_message(OpenClass::Partial, hit.message.clone());
    }

    let ratio = keyword_ratio(submitted, &problem.keywords);
    if ratio >= CLOSE_RATIO {
        OpenGrade::with_message(OpenClass::Close, CLOSE_MESSAGE)
    } else if ratio >= PARTIAL_RATIO {
        OpenGrade::with_message(OpenClass::Partial, PARTIAL_MESSAGE)
    } else {
        OpenGrade::bare(OpenClass::Wrong)
    }
}

//
// ─── RAPID-FIRE RECALL ────────────────────────────────────────────────────────
//

/// Lenient recall check used by timed drills.
///
/// Correct when the lower-cased answer contains the trimmed, lower-cased
/// submission, or the submission contains the first 70% (rounded down) of
/// the answer's characters. Whitespace is kept.
#[must_use]
pub fn grade_recall(submitted: &str, answer: &str) -> bool {
    let u = submitted.trim().to_lowercase();
    let a = answer.to_lowercase();
    if a.contains(&u) {
        return true;
    }

    let take = answer.chars().count() * 7 / 10;
    let prefix: String = a.chars().take(take).collect();
    u.contains(&prefix)
}

//
// ─── TRUTH TABLES ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    pub assignment: Vec<TruthValue>,
    pub selected: Option<TruthValue>,
    pub expected: TruthValue,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrade {
    pub rows: Vec<RowOutcome>,
    pub correct_rows: usize,
}

impl TableGrade {
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_fully_correct(&self) -> bool {
        self.correct_rows == self.rows.len()
    }
}

/// Grades a filled-in result column row by row.
///
/// `selections[i]` is the value picked for row `i`; a missing or unset
/// selection counts as wrong.
#[must_use]
pub fn grade_truth_table(table: &TruthTable, selections: &[Option<TruthValue>]) -> TableGrade {
    let rows: Vec<RowOutcome> = table
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let selected = selections.get(index).copied().flatten();
            let expected = row.expected();
            RowOutcome {
                assignment: row.inputs.clone(),
                selected,
                expected,
                correct: selected == Some(expected),
            }
        })
        .collect();

    let correct_rows = rows.iter().filter(|r| r.correct).count();
    TableGrade { rows, correct_rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TruthValue::{False as F, True as T};

    fn problem(keywords: &[&str]) -> PracticeProblem {
        PracticeProblem::new("q", "the full canonical answer").keywords(keywords.iter().copied())
    }

    #[test]
    fn normalize_strips_whitespace_and_case() {
        assert_eq!(normalize("  X +\t1 \n"), "x+1");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["", "  A ∪ B  ", "{..., −11, −6}", "P ⟹ Q\n≡ ¬P ∨ Q", "ǅ Σ"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn exact_answer_is_correct() {
        assert!(grade_exercise("42", "42"));
        assert!(grade_exercise("{3, −3}", "{3,−3}"));
    }

    #[test]
    fn substring_of_canonical_is_correct() {
        assert!(!grade_exercise("3", "0 (empty set — |∅| = 0)"));
        assert!(grade_exercise("0", "0 (empty set — |∅| = 0)"));
        assert!(grade_exercise("empty", "the empty set"));
    }

    #[test]
    fn eight_character_prefix_cutoff() {
        // normalized canonical: "{1,2,3,4,5}", prefix "{1,2,3,4"
        let canonical = "{1, 2, 3, 4, 5}";
        assert!(grade_exercise("{1,2,3,4;9}", canonical));
        assert!(grade_exercise("so {1, 2, 3, 4, 6} I think", canonical));
        // differs at the eighth character
        assert!(!grade_exercise("{1,2,3,5,4}", canonical));
        // differs only at the ninth character, still accepted
        assert!(grade_exercise("{1,2,3,4!", canonical));
    }

    #[test]
    fn unrelated_answer_is_wrong() {
        assert!(!grade_exercise("{1, 2}", "{..., −4, −1, 2, 5, 8, 11, ...}"));
    }

    #[test]
    fn open_exact_match_ignores_spacing() {
        let p = PracticeProblem::new("q", "P ∧ ¬Q");
        let grade = grade_open_answer("p∧¬q", &p);
        assert_eq!(grade.class, OpenClass::Correct);
        assert_eq!(grade.message, None);
    }

    #[test]
    fn keyword_thresholds() {
        let p = problem(&["a", "b", "c", "d", "e"]);
        assert_eq!(grade_open_answer("a b c", &p).class, OpenClass::Close);
        assert_eq!(grade_open_answer("a b", &p).class, OpenClass::Partial);
        assert_eq!(
            grade_open_answer("a b", &p).message.as_deref(),
            Some(PARTIAL_MESSAGE)
        );
        let wrong = grade_open_answer("a", &p);
        assert_eq!(wrong.class, OpenClass::Wrong);
        assert_eq!(wrong.message, None);
    }

    #[test]
    fn first_declared_trigger_wins() {
        let p = PracticeProblem::new("Simplify ¬(P ⟹ Q)", "P ∧ ¬Q")
            .keywords(["P ∧ ¬Q", "P and not Q", "P∧¬Q"])
            .partial_hint("¬P", "inverse, not negation")
            .partial_hint("∨", "no OR here")
            .partial_hint("¬Q", "what about P?");

        let grade = grade_open_answer("¬P ∨ ¬Q", &p);
        assert_eq!(grade.class, OpenClass::Partial);
        assert_eq!(grade.message.as_deref(), Some("inverse, not negation"));

        let grade = grade_open_answer("Q ∧ ¬Q", &p);
        assert_eq!(grade.message.as_deref(), Some("what about P?"));
    }

    #[test]
    fn trigger_takes_priority_over_keywords() {
        let p = problem(&["3", "4", "5"]).partial_hint("6", "6 is only in B");
        let grade = grade_open_answer("{3, 4, 5, 6}", &p);
        assert_eq!(grade.class, OpenClass::Partial);
        assert_eq!(grade.message.as_deref(), Some("6 is only in B"));
    }

    #[test]
    fn empty_keyword_list_grades_wrong() {
        let p = PracticeProblem::new("q", "answer");
        assert_eq!(grade_open_answer("nope", &p).class, OpenClass::Wrong);
    }

    #[test]
    fn recall_accepts_fragments_and_long_prefixes() {
        assert!(grade_recall("¬P ∨ ¬Q", "¬P ∨ ¬Q"));
        assert!(grade_recall("yes", "YES — always logically equivalent"));
        assert!(grade_recall(
            "only when p is true and q is false, obviously",
            "Only when P is TRUE and Q is FALSE"
        ));
        assert!(!grade_recall("P ∧ Q", "¬P ∨ ¬Q"));
    }

    #[test]
    fn truth_table_rows_graded_against_stored_column() {
        let table =
            TruthTable::parse(&["P", "Q"], "P ∧ Q", &["TTT", "TFF", "FTF", "FFF"]).unwrap();

        let grade = grade_truth_table(&table, &[Some(T), Some(F), Some(F), Some(F)]);
        assert!(grade.is_fully_correct());
        assert_eq!(grade.correct_rows, 4);
        assert_eq!(grade.rows[0].assignment, vec![T, T]);

        let grade = grade_truth_table(&table, &[Some(T), Some(T), None]);
        assert!(!grade.is_fully_correct());
        assert_eq!(grade.correct_rows, 1);
        assert_eq!(grade.total_rows(), 4);
        assert!(!grade.rows[1].correct);
        assert_eq!(grade.rows[3].selected, None);
    }
}
