use proof_core::model::{Flashcard, FlashcardDeck};

fn deck(name: &str, cards: Vec<Flashcard>) -> FlashcardDeck {
    FlashcardDeck {
        name: name.to_string(),
        cards,
    }
}

/// Five decks of ten cards each, one per review sheet page.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn flashcard_decks() -> Vec<FlashcardDeck> {
    vec![
        deck(
            "Page 1 — Logic Laws & Set Notation",
            vec![
                Flashcard::new("¬(P ∧ Q) ≡ ?", "¬P ∨ ¬Q", "De Morgan: flip AND→OR, negate each", "De Morgan #1 (p.51)"),
                Flashcard::new("¬(P ∨ Q) ≡ ?", "¬P ∧ ¬Q", "De Morgan: flip OR→AND, negate each", "De Morgan #2 (p.51)"),
                Flashcard::new("P ⟹ Q ≡ ? (contrapositive)", "¬Q ⟹ ¬P", "Negate both sides and flip direction", "Contrapositive Law (p.51)"),
                Flashcard::new("P ⟹ Q ≡ ? (as disjunction)", "¬P ∨ Q", "If P fails OR Q holds", "Implication Law (p.51)"),
                Flashcard::new("¬(¬P) ≡ ?", "P", "Two negations cancel", "Double Negation (p.52)"),
                Flashcard::new("P ∧ (Q ∨ R) ≡ ?", "(P ∧ Q) ∨ (P ∧ R)", "Distribute ∧ over ∨", "Distributive Law (p.52)"),
                Flashcard::new("P ∨ (Q ∧ R) ≡ ?", "(P ∨ Q) ∧ (P ∨ R)", "Distribute ∨ over ∧", "Distributive Law (p.52)"),
                Flashcard::new("A ∪ B̄ = ?", "Ā ∩ B̄", "De Morgan for sets: complement of union", "De Morgan for Sets (p.163)"),
                Flashcard::new("A ∩ B̄ = ?", "Ā ∪ B̄", "De Morgan for sets: complement of intersection", "De Morgan for Sets (p.163)"),
                Flashcard::new("What is |𝒫(A)| when |A| = n?", "2ⁿ", "Each element is either IN or OUT", "Power Set Theorem (p.15)"),
            ],
        ),
        deck(
            "Page 2 — Sets & Operations",
            vec![
                Flashcard::new("A ∪ B = ?", "{x : x ∈ A or x ∈ B}", "Union: everything in A, B, or both", "Definition 1.5 (p.18)"),
                Flashcard::new("A ∩ B = ?", "{x : x ∈ A and x ∈ B}", "Intersection: only what's in both", "Definition 1.5 (p.18)"),
                Flashcard::new("A \\ B = ?", "{x : x ∈ A and x ∉ B}", "Difference: in A but NOT in B", "Definition 1.5 (p.18)"),
                Flashcard::new("Ā = ? (complement)", "U \\ A = {x ∈ U : x ∉ A}", "Everything in the universe NOT in A", "Definition 1.6 (p.20)"),
                Flashcard::new("Is ∅ ⊆ A always true?", "Yes — vacuously true for ALL sets A", "No element of ∅ fails to be in A", "p.13"),
                Flashcard::new("A ∩ Ā = ?", "∅", "A set and its complement share nothing", "p.20"),
                Flashcard::new("A ∪ Ā = ?", "U (the universal set)", "Together they cover everything", "p.20"),
                Flashcard::new("A = B if and only if?", "A ⊆ B and B ⊆ A", "Subset in both directions means equal", "p.13"),
                Flashcard::new("If |A| = m and |B| = n, then |A × B| = ?", "mn", "m choices for a, n for b", "p.9"),
                Flashcard::new("A ∪ ∅ = ?", "A", "Adding nothing changes nothing", "p.18"),
            ],
        ),
        deck(
            "Page 3 — Logical Statements",
            vec![
                Flashcard::new("When is P ⟹ Q FALSE?", "Only when P is TRUE and Q is FALSE", "All other rows are true!", "Truth table (p.42)"),
                Flashcard::new("Converse of P ⟹ Q?", "Q ⟹ P", "Swap hypothesis and conclusion", "p.43"),
                Flashcard::new("Contrapositive of P ⟹ Q?", "¬Q ⟹ ¬P", "Negate and flip — equivalent to original", "p.43"),
                Flashcard::new("Is the converse equivalent to P ⟹ Q?", "NO — converse is NOT equivalent", "'If rains → umbrella' ≠ 'If umbrella → rains'", "p.51"),
                Flashcard::new("Is the contrapositive equivalent to P ⟹ Q?", "YES — always logically equivalent", "Same truth table in every row", "p.51"),
                Flashcard::new("∀x ∈ S, P(x) means?", "For EVERY x in S, P(x) holds", "Universal — must hold for all, no exceptions", "p.53"),
                Flashcard::new("∃x ∈ S, P(x) means?", "There EXISTS at least one x in S with P(x)", "Existential — just one witness is enough", "p.54"),
                Flashcard::new("Is 'or' in math inclusive or exclusive?", "INCLUSIVE — P ∨ Q is true when one OR BOTH are true", "Unlike everyday English 'either/or'", "p.40"),
                Flashcard::new("P ⟺ Q is true when?", "When P and Q have the SAME truth value", "Both true, or both false", "p.46"),
                Flashcard::new("Open sentence vs. statement?", "Open sentence depends on a variable; statement is always T or F", "'x > 0' is open; '5 > 0' is a statement", "p.35–36"),
            ],
        ),
        deck(
            "Page 4 — Negations",
            vec![
                Flashcard::new("¬(P ⟹ Q) ≡ ?", "P ∧ ¬Q", "Conditional fails only when hypothesis T and conclusion F", "p.59"),
                Flashcard::new("¬(∀x ∈ S, P(x)) ≡ ?", "∃x ∈ S, ¬P(x)", "'Not all' means 'at least one fails'", "Eq. 2.8 (p.60)"),
                Flashcard::new("¬(∃x ∈ S, P(x)) ≡ ?", "∀x ∈ S, ¬P(x)", "'None exists' means 'all fail'", "Eq. 2.9 (p.60)"),
                Flashcard::new("Negate: 'x is even and x > 0'", "'x is odd OR x ≤ 0'", "Negate a conjunction: De Morgan — AND becomes OR", "p.60"),
                Flashcard::new("Negate: 'All primes are odd'", "'There exists a prime that is NOT odd' (e.g. 2)", "Negate ∀: ∃ with negated predicate", "p.60"),
                Flashcard::new("¬(∀x, ∃y, P(x,y)) ≡ ?", "∃x, ∀y, ¬P(x,y)", "Flip each quantifier, negate the predicate", "p.62"),
                Flashcard::new("Negate: P ∨ Q", "¬P ∧ ¬Q", "De Morgan: OR becomes AND, negate each", "De Morgan #2 (p.51)"),
                Flashcard::new("Negate: P ∧ Q", "¬P ∨ ¬Q", "De Morgan: AND becomes OR, negate each", "De Morgan #1 (p.51)"),
                Flashcard::new("Is ¬(P ⟹ Q) the same as ¬P ⟹ ¬Q?", "NO — ¬(P⟹Q) = P ∧ ¬Q, not ¬P⟹¬Q", "Common mistake! The inverse ¬P⟹¬Q is NOT the negation", "p.59"),
                Flashcard::new("Negate: ∃x ∈ ℝ, x² = -1", "∀x ∈ ℝ, x² ≠ -1  (TRUE)", "Negate ∃ → ∀, negate predicate", "p.60"),
            ],
        ),
        deck(
            "Page 5 — Logical Equivalence",
            vec![
                Flashcard::new("Two statements are logically equivalent when?", "Their truth tables match in EVERY row", "Not just sometimes — every case must agree", "p.50"),
                Flashcard::new("P ⟹ Q ≡ ¬P ∨ Q — true or false?", "TRUE — logically equivalent", "Verify: P=T,Q=F gives F on both sides", "p.51"),
                Flashcard::new("Are P⟹Q and Q⟹P equivalent?", "NO — converse is not equivalent", "P=T,Q=F: P⟹Q is F but Q⟹P is T", "p.51"),
                Flashcard::new("Simplify ¬(¬P ∨ Q)", "P ∧ ¬Q", "De Morgan: ¬(¬P∨Q) = ¬(¬P)∧¬Q = P∧¬Q", "p.51"),
                Flashcard::new("Name the law: P∧Q ≡ Q∧P", "Commutative Law for ∧", "Order doesn't matter for AND", "p.52"),
                Flashcard::new("Name the law: P∧(Q∧R) ≡ (P∧Q)∧R", "Associative Law for ∧", "Grouping doesn't matter", "p.52"),
                Flashcard::new("How do you PROVE two statements are equivalent?", "Build a truth table and verify every row matches", "Systematic: check all 2ⁿ combinations", "p.50"),
                Flashcard::new("¬(¬P) ≡ ?", "P", "Two negatives make a positive", "Double Negation (p.52)"),
                Flashcard::new("P ⟺ Q ≡ ?", "(P ∧ Q) ∨ (¬P ∧ ¬Q)", "True exactly when both match", "p.49"),
                Flashcard::new("P ∧ (Q ∨ R) ≡ ?", "(P ∧ Q) ∨ (P ∧ R)", "Distributive law — ∧ distributes over ∨", "p.52"),
            ],
        ),
    ]
}
