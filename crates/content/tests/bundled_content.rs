use std::collections::HashSet;

use content::{catalog, flashcard_decks, matching_pairs, practice_problems};
use proof_core::grading::{grade_exercise, grade_truth_table};
use proof_core::model::ExerciseKind;
use proof_core::remix;

#[test]
fn catalog_builds_in_declaration_order() {
    let catalog = catalog().expect("bundled content should validate");

    assert_eq!(catalog.len(), 74);
    assert_eq!(catalog.sections().len(), 13);
    assert_eq!(catalog.all()[0].id().as_str(), "1.1.A.1");
    assert_eq!(catalog.all()[catalog.len() - 1].id().as_str(), "2.6.A.5");

    let groups = catalog.by_section("1.1");
    let parts: Vec<_> = groups.iter().map(|g| g.part).collect();
    assert_eq!(parts, vec!["A", "B", "C"]);
    assert_eq!(groups[2].exercises.len(), 8);
}

#[test]
fn venn_section_has_definitions_but_no_exercises() {
    let catalog = catalog().unwrap();
    let venn = catalog.section("1.7").unwrap();
    assert_eq!(venn.definitions().len(), 2);
    assert!(catalog.by_section("1.7").is_empty());
}

#[test]
fn every_canonical_answer_grades_as_correct() {
    let catalog = catalog().unwrap();
    for exercise in catalog.all() {
        assert!(
            grade_exercise(exercise.answer(), exercise.answer()),
            "{} rejects its own answer",
            exercise.id()
        );
    }
}

#[test]
fn stored_truth_tables_grade_fully_correct_against_themselves() {
    let catalog = catalog().unwrap();
    let mut tables = 0;
    for exercise in catalog.all() {
        if let ExerciseKind::TruthTable(table) = exercise.kind() {
            tables += 1;
            let picks: Vec<_> = table.rows().iter().map(|r| Some(r.expected())).collect();
            assert!(grade_truth_table(table, &picks).is_fully_correct());
        }
    }
    assert_eq!(tables, 10);
}

#[test]
fn remixable_exercises_keep_their_identity() {
    let catalog = catalog().unwrap();
    let remixable: Vec<_> = catalog.all().iter().filter(|e| e.is_remixable()).collect();
    assert_eq!(remixable.len(), 6);

    for exercise in remixable {
        for _ in 0..10 {
            let variant = remix(exercise);
            assert_eq!(variant.id(), exercise.id());
            assert_eq!(variant.section(), exercise.section());
            assert_eq!(variant.part(), exercise.part());
            assert!(variant.is_remix());
            assert!(grade_exercise(variant.answer(), variant.answer()));
        }
    }
}

#[test]
fn study_decks_have_expected_shape() {
    let decks = flashcard_decks();
    assert_eq!(decks.len(), 5);
    assert!(decks.iter().all(|d| d.cards.len() == 10));

    let pairs = matching_pairs();
    assert_eq!(pairs.len(), 15);
    let prompts: HashSet<_> = pairs.iter().map(|p| p.prompt.as_str()).collect();
    assert_eq!(prompts.len(), pairs.len());

    let problems = practice_problems();
    assert_eq!(problems.len(), 6);
    assert!(problems.iter().all(|p| !p.keywords.is_empty()));
}
