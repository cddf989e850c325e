use proof_core::model::MatchPair;

/// Law/definition pairs for the matching game.
#[must_use]
pub fn matching_pairs() -> Vec<MatchPair> {
    vec![
        MatchPair::new("¬(P ∧ Q)", "¬P ∨ ¬Q", "De Morgan #1"),
        MatchPair::new("¬(P ∨ Q)", "¬P ∧ ¬Q", "De Morgan #2"),
        MatchPair::new("P ⟹ Q (contrapositive)", "¬Q ⟹ ¬P", "Contrapositive Law"),
        MatchPair::new("P ⟹ Q (as disjunction)", "¬P ∨ Q", "Implication Law"),
        MatchPair::new("¬(P ⟹ Q)", "P ∧ ¬Q", "Negation of Conditional"),
        MatchPair::new("¬(∀x, P(x))", "∃x, ¬P(x)", "Quantifier Negation"),
        MatchPair::new("¬(∃x, P(x))", "∀x, ¬P(x)", "Quantifier Negation"),
        MatchPair::new("A ∪ B (complement)", "Ā ∩ B̄", "De Morgan for Sets"),
        MatchPair::new("A ∩ B (complement)", "Ā ∪ B̄", "De Morgan for Sets"),
        MatchPair::new("P ∧ (Q ∨ R)", "(P ∧ Q) ∨ (P ∧ R)", "Distributive Law"),
        MatchPair::new("{x : x ∈ A or x ∈ B}", "A ∪ B", "Union"),
        MatchPair::new("{x : x ∈ A and x ∈ B}", "A ∩ B", "Intersection"),
        MatchPair::new("{x : x ∈ A and x ∉ B}", "A \\ B", "Set Difference"),
        MatchPair::new("U \\ A", "Ā", "Complement"),
        MatchPair::new("Set of all subsets of A", "𝒫(A)", "Power Set"),
    ]
}
