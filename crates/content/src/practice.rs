use proof_core::model::PracticeProblem;

/// Open-ended problems for guided practice, in the order they are presented.
#[must_use]
pub fn practice_problems() -> Vec<PracticeProblem> {
    vec![
        PracticeProblem::new("Negate the statement: ∀x ∈ ℝ, x² ≥ 0", "∃x ∈ ℝ, x² < 0")
            .keywords(["∃", "exists", "x²", "< 0", "negative"])
            .partial_hint("∀", "You kept ∀ — negating ∀ gives ∃! Flip it.")
            .partial_hint("x² > 0", "Almost — ≥ 0 negates to < 0.")
            .partial_hint("< 0", "Good negated predicate! Also flip ∀ to ∃.")
            .hint("Negating ∀ gives ∃, and negate the predicate: ≥ 0 becomes < 0")
            .explanation("¬(∀x ∈ ℝ, x² ≥ 0) = ∃x ∈ ℝ, ¬(x² ≥ 0) = ∃x ∈ ℝ, x² < 0"),
        PracticeProblem::new(
            "Write the contrapositive of: 'If n² is even, then n is even'",
            "If n is odd, then n² is odd",
        )
        .keywords(["odd", "n is odd", "n² is odd", "contrapositive"])
        .partial_hint("even", "Remember the contrapositive negates both. Even becomes odd.")
        .partial_hint("n²", "Good — n² appears. But negate it: n² even becomes n² odd.")
        .hint("Contrapositive: flip and negate. 'If P then Q' becomes 'If ¬Q then ¬P'")
        .explanation("Original: (n² even) ⟹ (n even). Contrapositive: (n odd) ⟹ (n² odd)"),
        PracticeProblem::new(
            "Let A = {1,2,3,4,5} and B = {3,4,5,6,7}. Find A ∩ B.",
            "{3, 4, 5}",
        )
        .keywords(["3", "4", "5"])
        .partial_hint(
            "6",
            "6 is in B but NOT in A — intersection only keeps elements in BOTH.",
        )
        .partial_hint("1", "1 is in A but NOT in B.")
        .hint("Intersection = elements that appear in BOTH A and B")
        .explanation("A ∩ B = {x : x ∈ A AND x ∈ B} = {3,4,5}"),
        PracticeProblem::new("Simplify ¬(P ⟹ Q) using logical equivalences.", "P ∧ ¬Q")
            .keywords(["P ∧ ¬Q", "P and not Q", "P∧¬Q"])
            .partial_hint("¬P", "¬P appears in the inverse, not the negation. P stays positive.")
            .partial_hint("∨", "The negation of P⟹Q doesn't have an OR.")
            .partial_hint("¬Q", "You got ¬Q — now what about P? It stays positive.")
            .hint("P⟹Q fails exactly when P is true AND Q is false")
            .explanation("¬(P⟹Q) = ¬(¬P∨Q) = ¬(¬P)∧¬Q = P∧¬Q  by De Morgan + Double Negation"),
        PracticeProblem::new(
            "Prove that A ∩ B ⊆ A for any sets A and B.",
            "Let x ∈ A ∩ B. Then x ∈ A and x ∈ B. In particular, x ∈ A. Therefore A ∩ B ⊆ A.",
        )
        .keywords(["let x", "x ∈ A", "x ∈ B", "therefore", "particular"])
        .partial_hint("assume", "Good instinct! Try 'Let x ∈ A ∩ B'")
        .partial_hint("x ∈ A ∩ B", "Great start! Now unpack the definition of intersection.")
        .partial_hint("definition", "Use Definition 1.5: x ∈ A∩B means x∈A AND x∈B.")
        .hint("Element-chasing proof: Let x ∈ A∩B, use definition of ∩, conclude x ∈ A")
        .explanation("Let x ∈ A∩B. By definition, x∈A and x∈B. In particular, x∈A. Therefore A∩B ⊆ A. □"),
        PracticeProblem::new(
            "Is P ∧ Q logically equivalent to ¬(¬P ∨ ¬Q)? Justify.",
            "Yes — by De Morgan: ¬(¬P ∨ ¬Q) = ¬(¬P) ∧ ¬(¬Q) = P ∧ Q",
        )
        .keywords(["yes", "de morgan", "double negation", "P ∧ Q"])
        .partial_hint("no", "Actually yes — apply De Morgan's law to ¬(¬P ∨ ¬Q).")
        .partial_hint(
            "truth table",
            "Truth table works! But try the faster route: De Morgan directly.",
        )
        .partial_hint(
            "de morgan",
            "Exactly! Apply De Morgan: ¬(¬P∨¬Q) = ¬(¬P)∧¬(¬Q). Now simplify.",
        )
        .hint("Apply De Morgan to the outer negation, then use Double Negation twice")
        .explanation("¬(¬P∨¬Q) =^{DM} ¬(¬P)∧¬(¬Q) =^{DN} P∧Q  ✓"),
    ]
}
