use crate::model::{Exercise, Variation};

/// Produces a fresh variant of a remixable exercise.
///
/// Fixed exercises come back unchanged. A remixed copy keeps the id, section
/// and part of the original and is flagged with [`Exercise::is_remix`]; its
/// progress is still recorded under the original id.
#[must_use]
pub fn remix(exercise: &Exercise) -> Exercise {
    match exercise.variation() {
        Variation::Fixed => exercise.clone(),
        Variation::Remixable(generate) => exercise.with_remix(generate()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExerciseDraft, ExerciseKind, RemixOutput};

    fn doubled() -> RemixOutput {
        RemixOutput {
            question: "Find |𝒫(A)| for |A| = 5.".into(),
            answer: "32".into(),
            query_hint: "2^5".into(),
        }
    }

    #[test]
    fn remix_keeps_identity_and_replaces_text() {
        let original = ExerciseDraft::new("1.4.A.2", "1.4", "A", ExerciseKind::Cardinality)
            .question("Find |𝒫(A)| for |A| = 3.")
            .answer("8")
            .hint("2ⁿ")
            .query_hint("2^3")
            .remixable(doubled)
            .validate()
            .unwrap();

        let variant = remix(&original);
        assert_eq!(variant.id(), original.id());
        assert_eq!(variant.section(), original.section());
        assert_eq!(variant.part(), original.part());
        assert_eq!(variant.answer(), "32");
        assert_eq!(variant.query_hint(), "2^5");
        assert_eq!(variant.hint(), "2ⁿ");
        assert!(variant.is_remix());
        assert!(!original.is_remix());
    }

    #[test]
    fn fixed_exercise_is_returned_unchanged() {
        let original = ExerciseDraft::new("1.1.A.1", "1.1", "A", ExerciseKind::List)
            .question("List {x ∈ ℕ : x < 3}.")
            .answer("{0, 1, 2}")
            .validate()
            .unwrap();

        let same = remix(&original);
        assert_eq!(same.question(), original.question());
        assert!(!same.is_remix());
    }
}
