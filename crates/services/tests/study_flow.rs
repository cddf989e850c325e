use content::{catalog, flashcard_decks, matching_pairs, practice_problems};
use proof_core::grading::OpenClass;
use proof_core::time::fixed_clock;
use proof_core::{Direction, MasteryBand, ProgressStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{
    ExerciseBrowser, FlashcardSession, GuidedPractice, MatchOutcome, MatchingGame, RapidFire,
    Rating, Verdict,
};

#[test]
fn browsing_and_answering_updates_progress() {
    let catalog = catalog().unwrap();
    let mut progress = ProgressStore::new();
    let mut browser = ExerciseBrowser::new(&catalog);

    let answer = browser.open("1.1.A.1").unwrap().answer().to_string();
    let feedback = browser.submit(&answer, &mut progress).unwrap().unwrap();
    assert_eq!(feedback.verdict, Verdict::Correct);

    let previous = browser.navigate(Direction::Backward).unwrap();
    assert_eq!(previous.id().as_str(), "2.6.A.5");

    let overall = progress.overall(&catalog);
    assert_eq!((overall.completed, overall.total), (1, 74));
    assert_eq!(overall.percentage, 1);

    let report = progress.section_report(&catalog);
    assert_eq!(report.len(), 13);
    assert_eq!(report[0].key, "1.1");
    assert_eq!(report[0].completed, 1);
    assert_eq!(report[0].band, MasteryBand::Weak);
}

#[test]
fn random_exercise_skips_mastered_ones() {
    let catalog = catalog().unwrap();
    let mut progress = ProgressStore::new();
    let mut browser = ExerciseBrowser::new(&catalog);
    let mut rng = StdRng::seed_from_u64(42);

    for exercise in catalog.all().iter().skip(1) {
        progress.record(exercise.id(), true);
    }
    let picked = browser.random(&progress, &mut rng).unwrap();
    assert_eq!(picked.id().as_str(), "1.1.A.1");
}

#[test]
fn guided_practice_walks_every_problem() {
    let problems = practice_problems();
    let total = problems.len();
    let mut rng = StdRng::seed_from_u64(1);
    let mut practice = GuidedPractice::new(problems).unwrap();

    loop {
        let answer = practice.current().unwrap().answer.clone();
        let feedback = practice.submit(&answer, &mut rng).unwrap().unwrap();
        assert_eq!(feedback.class, OpenClass::Correct);
        if !practice.next() {
            break;
        }
    }
    assert!(practice.is_done());
    assert_eq!(practice.score(), total);
}

#[test]
fn rapid_fire_round_over_bundled_decks() {
    let clock = fixed_clock();
    let mut rng = StdRng::seed_from_u64(2);
    let mut round = RapidFire::new(&flashcard_decks(), &mut rng, &clock).unwrap();
    assert_eq!(round.total(), 20);

    loop {
        let answer = round.current().unwrap().answer.clone();
        assert!(round.submit(&answer, &clock).unwrap().unwrap().correct);
        if !round.next(&clock) {
            break;
        }
    }
    let summary = round.summary();
    assert_eq!(summary.correct, 20);
    assert_eq!(summary.accuracy, 100);
    assert_eq!(summary.rating, Rating::Trophy);
}

#[test]
fn perfect_matching_game_earns_a_trophy() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut game = MatchingGame::new(&matching_pairs(), &mut rng).unwrap();
    assert_eq!(game.total(), 10);

    let prompts: Vec<usize> = game.prompts().map(|(i, _, _)| i).collect();
    for prompt in prompts {
        assert!(game.select_prompt(prompt));
        let wanted = game.pair(prompt).unwrap().answer.clone();
        let slot = game.bank().find(|(_, a)| *a == wanted).unwrap().0;
        assert_eq!(game.select_answer(slot), MatchOutcome::Matched);
    }
    assert!(game.is_done());
    assert_eq!(game.accuracy(), 100);
    assert_eq!(game.rating(), Rating::Trophy);
}

#[test]
fn flashcard_pass_over_each_bundled_deck() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut session = FlashcardSession::new(flashcard_decks(), &mut rng).unwrap();
    assert_eq!(session.decks().len(), 5);

    for deck in 0..5 {
        session.change_deck(deck, &mut rng).unwrap();
        while !session.is_done() {
            session.mark_known();
        }
        assert_eq!(session.known_count(), 10);
    }
}
