use proof_core::model::Section;

/// Textbook sections 1.1 through 2.6, in reading order.
#[must_use]
pub fn sections() -> Vec<Section> {
    vec![
        Section::new("1.1", "Introduction to Sets", 3)
            .define("Set", "A collection of things called elements. a ∈ A means a is in A.")
            .define("Empty Set", "∅ = {} — no elements; |∅| = 0.")
            .define("Cardinality", "|A| = number of elements in A.")
            .define(
                "Set-builder",
                "X = {expression : rule} — all values of expression satisfying rule.",
            )
            .define("ℕ", "{1, 2, 3, 4, ...}")
            .define("ℤ", "{..., −2, −1, 0, 1, 2, ...}")
            .define("ℚ", "{m/n : m,n ∈ ℤ, n ≠ 0}")
            .define("ℝ", "All real numbers"),
        Section::new("1.2", "The Cartesian Product", 8)
            .define("Ordered pair", "(a, b) — equals (c,d) iff a=c and b=d.")
            .define("A × B", "{(a,b) : a ∈ A, b ∈ B}; |A×B| = |A|·|B|.")
            .define("ℝ²", "ℝ × ℝ — the real coordinate plane."),
        Section::new("1.3", "Subsets", 12)
            .define("A ⊆ B", "Every element of A is in B (∀x, x∈A ⟹ x∈B).")
            .define("A ⊊ B", "A ⊆ B and A ≠ B (proper subset).")
            .define("∅ rule", "∅ ⊆ A for every set A (vacuously true)."),
        Section::new("1.4", "Power Sets", 15)
            .define("𝒫(A)", "The set of ALL subsets of A.")
            .define("|𝒫(A)|", "If |A| = n, then |𝒫(A)| = 2ⁿ."),
        Section::new("1.5", "Union, Intersection, Difference", 18)
            .define("A ∪ B", "{x : x ∈ A or x ∈ B}")
            .define("A ∩ B", "{x : x ∈ A and x ∈ B}")
            .define("A − B", "{x : x ∈ A and x ∉ B}"),
        Section::new("1.6", "Complement", 20)
            .define("Ā", "U − A = {x ∈ U : x ∉ A}")
            .define("De Morgan (sets) 1", "(A ∪ B)̄ = Ā ∩ B̄")
            .define("De Morgan (sets) 2", "(A ∩ B)̄ = Ā ∪ B̄"),
        Section::new("1.7", "Venn Diagrams", 22)
            .define(
                "Venn diagram",
                "Closed curves; shaded region represents the described set.",
            )
            .define("Key rule", "Parentheses essential when mixing ∪ and ∩."),
        Section::new("2.1", "Statements", 35)
            .define("Statement", "A declarative sentence that is either T or F (not both).")
            .define("Open sentence", "Contains a variable; truth depends on its value."),
        Section::new("2.2", "And, Or, Not", 39)
            .define("P ∧ Q", "True only when both P and Q are true.")
            .define("P ∨ Q", "True when at least one of P, Q is true (inclusive or).")
            .define("¬P", "True when P is false."),
        Section::new("2.3", "Conditional Statements", 42)
            .define("P ⟹ Q", "If P then Q. False ONLY when P=T and Q=F.")
            .define("Contrapositive", "¬Q ⟹ ¬P — logically equivalent to P ⟹ Q.")
            .define("Converse", "Q ⟹ P — NOT equivalent to P ⟹ Q.")
            .define("'P only if Q'", "Means P ⟹ Q.")
            .define("'Q whenever P'", "Means P ⟹ Q."),
        Section::new("2.4", "Biconditional Statements", 46)
            .define("P ⟺ Q", "True when P and Q have the SAME truth value.")
            .define(
                "Iff phrases",
                "'P iff Q', 'necessary and sufficient', 'P is equivalent to Q'.",
            ),
        Section::new("2.5", "Truth Tables for Statements", 48)
            .define("Tautology", "A statement true for every assignment of truth values.")
            .define(
                "Contradiction",
                "A statement false for every assignment of truth values.",
            )
            .define("Compound statement", "Built using ∧, ∨, ¬, ⟹, ⟺."),
        Section::new("2.6", "Logical Equivalence", 50)
            .define("P ≡ Q", "Logically equivalent — same truth table in every row.")
            .define("De Morgan 1", "¬(P ∧ Q) ≡ (¬P) ∨ (¬Q)")
            .define("De Morgan 2", "¬(P ∨ Q) ≡ (¬P) ∧ (¬Q)")
            .define("Contrapositive law", "P ⟹ Q ≡ (¬Q) ⟹ (¬P)")
            .define("Implication as disjunction", "P ⟹ Q ≡ (¬P) ∨ Q")
            .define("Distributive 1", "P ∧ (Q ∨ R) ≡ (P ∧ Q) ∨ (P ∧ R)")
            .define("Distributive 2", "P ∨ (Q ∧ R) ≡ (P ∨ Q) ∧ (P ∨ R)"),
    ]
}
