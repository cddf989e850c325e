use proof_core::model::ExerciseKind::{Builder, Cardinality, List, TrueFalse};
use proof_core::model::{ExerciseDraft, ExerciseKind, TruthTable, TruthTableError};

use crate::remixes;

fn table(variables: &[&str], formula: &str, rows: &[&str]) -> Result<ExerciseKind, TruthTableError> {
    TruthTable::parse(variables, formula, rows).map(ExerciseKind::TruthTable)
}

/// The exercise bank, in catalog order.
///
/// # Errors
///
/// Returns `TruthTableError` if one of the embedded truth tables is malformed.
#[allow(clippy::too_many_lines)]
pub fn exercise_drafts() -> Result<Vec<ExerciseDraft>, TruthTableError> {
    Ok(vec![
        // §1.1 A
        ExerciseDraft::new("1.1.A.1", "1.1", "A", List)
            .question("Write {5x − 1 : x ∈ ℤ} by listing elements.")
            .answer("{..., −11, −6, −1, 4, 9, 14, ...}")
            .hint("Plug in x = ..., −2, −1, 0, 1, 2, ...")
            .query_hint("5x-1 for x = -3,-2,-1,0,1,2,3")
            .remixable(remixes::linear_listing),
        ExerciseDraft::new("1.1.A.2", "1.1", "A", List)
            .question("Write {3x + 2 : x ∈ ℤ} by listing elements.")
            .answer("{..., −4, −1, 2, 5, 8, 11, ...}")
            .hint("Plug in x = ..., −2, −1, 0, 1, 2, ...")
            .query_hint("3x+2 for x=-2,-1,0,1,2,3"),
        ExerciseDraft::new("1.1.A.3", "1.1", "A", List)
            .question("Write {x ∈ ℤ : −2 ≤ x < 7} by listing elements.")
            .answer("{−2, −1, 0, 1, 2, 3, 4, 5, 6}")
            .hint("All integers from −2 up to (not including) 7.")
            .query_hint("integers from -2 to 6"),
        ExerciseDraft::new("1.1.A.4", "1.1", "A", List)
            .question("Write {x ∈ ℕ : −2 < x ≤ 7} by listing elements.")
            .answer("{1, 2, 3, 4, 5, 6, 7}")
            .hint("ℕ starts at 1; take naturals ≤ 7.")
            .query_hint("natural numbers from 1 to 7"),
        ExerciseDraft::new("1.1.A.5", "1.1", "A", List)
            .question("Write {x ∈ ℝ : x² = 3} by listing elements.")
            .answer("{√3, −√3}")
            .hint("Solve x² = 3 over ℝ.")
            .query_hint("solve x^2 = 3"),
        ExerciseDraft::new("1.1.A.6", "1.1", "A", List)
            .question("Write {x ∈ ℝ : x² = 9} by listing elements.")
            .answer("{3, −3}")
            .hint("Solve x² = 9.")
            .query_hint("solve x^2 = 9"),
        ExerciseDraft::new("1.1.A.7", "1.1", "A", List)
            .question("Write {x ∈ ℝ : x² + 5x = −6} by listing elements.")
            .answer("{−2, −3}")
            .hint("Factor x² + 5x + 6 = (x+2)(x+3) = 0.")
            .query_hint("solve x^2 + 5x + 6 = 0"),
        ExerciseDraft::new("1.1.A.8", "1.1", "A", List)
            .question("Write {x ∈ ℝ : x³ + 5x² = −6x} by listing elements.")
            .answer("{0, −2, −3}")
            .hint("Factor: x(x² + 5x + 6) = x(x+2)(x+3) = 0.")
            .query_hint("solve x^3 + 5x^2 + 6x = 0"),
        ExerciseDraft::new("1.1.A.9", "1.1", "A", List)
            .question("Write {x ∈ ℝ : sin(πx) = 0} by listing elements.")
            .answer("{..., −2, −1, 0, 1, 2, ...} = ℤ")
            .hint("sin(πx) = 0 iff x = n for n ∈ ℤ.")
            .query_hint("solve sin(pi*x) = 0"),
        ExerciseDraft::new("1.1.A.10", "1.1", "A", List)
            .question("Write {x ∈ ℝ : cos(x) = 1} by listing elements.")
            .answer("{..., −2π, 0, 2π, 4π, ...} = {2kπ : k ∈ ℤ}")
            .hint("cos(x) = 1 iff x = 2kπ for k ∈ ℤ.")
            .query_hint("solve cos(x) = 1"),
        ExerciseDraft::new("1.1.A.11", "1.1", "A", List)
            .question("Write {x ∈ ℤ : |x| < 5} by listing elements.")
            .answer("{−4, −3, −2, −1, 0, 1, 2, 3, 4}")
            .hint("All integers with absolute value less than 5.")
            .query_hint("integers x with |x| < 5")
            .remixable(remixes::absolute_bound_listing),
        ExerciseDraft::new("1.1.A.12", "1.1", "A", List)
            .question("Write {x ∈ ℤ : |2x| < 5} by listing elements.")
            .answer("{−2, −1, 0, 1, 2}")
            .hint("|2x| < 5 means |x| < 2.5, so x ∈ {−2,−1,0,1,2}.")
            .query_hint("integers x with |2x| < 5"),
        ExerciseDraft::new("1.1.A.13", "1.1", "A", List)
            .question("Write {x ∈ ℤ : |6x| < 5} by listing elements.")
            .answer("{0}")
            .hint("|6x| < 5 means |x| < 5/6 < 1, so x = 0 only.")
            .query_hint("integers x with |6x| < 5"),
        ExerciseDraft::new("1.1.A.14", "1.1", "A", List)
            .question("Write {5x : x ∈ ℤ, |2x| ≤ 8} by listing elements.")
            .answer("{−20, −15, −10, −5, 0, 5, 10, 15, 20}")
            .hint("|2x| ≤ 8 means x ∈ {−4,...,4}; multiply each by 5.")
            .query_hint("5x for x = -4,-3,-2,-1,0,1,2,3,4"),
        ExerciseDraft::new("1.1.A.15", "1.1", "A", List)
            .question("Write {5a + 2b : a, b ∈ ℤ} by listing elements.")
            .answer("ℤ (all integers), since gcd(5, 2) = 1")
            .hint("gcd(5,2)=1 so every integer n = 5a+2b for some a,b ∈ ℤ.")
            .query_hint("gcd(5,2)"),
        ExerciseDraft::new("1.1.A.16", "1.1", "A", List)
            .question("Write {6a + 2b : a, b ∈ ℤ} by listing elements.")
            .answer("2ℤ = {..., −4, −2, 0, 2, 4, ...} (all even integers)")
            .hint("6a+2b = 2(3a+b); since 3a+b runs over all ℤ, the set = 2ℤ.")
            .query_hint("gcd(6,2)"),
        // §1.1 B
        ExerciseDraft::new("1.1.B.17", "1.1", "B", Builder)
            .question("Write {2, 4, 8, 16, 32, 64, ...} in set-builder notation.")
            .answer("{2ⁿ : n ∈ ℕ}")
            .hint("Each element is a power of 2.")
            .query_hint("2^n for n=1,2,3,4,5,6"),
        ExerciseDraft::new("1.1.B.18", "1.1", "B", Builder)
            .question("Write {0, 4, 16, 36, 64, 100, ...} in set-builder notation.")
            .answer("{(2n)² : n ∈ ℕ ∪ {0}} = {4n² : n ≥ 0}")
            .hint("Squares of even numbers: 0=0², 4=2², 16=4², ...")
            .query_hint("(2n)^2 for n=0,1,2,3,4,5"),
        ExerciseDraft::new("1.1.B.19", "1.1", "B", Builder)
            .question("Write {..., −6, −3, 0, 3, 6, 9, 12, 15, ...} in set-builder notation.")
            .answer("{3n : n ∈ ℤ}")
            .hint("Multiples of 3.")
            .query_hint("3n for n=-2,-1,0,1,2,3,4,5"),
        ExerciseDraft::new("1.1.B.20", "1.1", "B", Builder)
            .question("Write {..., −8, −3, 2, 7, 12, 17, ...} in set-builder notation.")
            .answer("{5n + 2 : n ∈ ℤ}")
            .hint("Consecutive terms differ by 5; one value is 2 = 5(0)+2.")
            .query_hint("5n+2 for n=-2,-1,0,1,2,3"),
        ExerciseDraft::new("1.1.B.21", "1.1", "B", Builder)
            .question("Write {0, 1, 4, 9, 16, 25, 36, ...} in set-builder notation.")
            .answer("{n² : n ∈ ℕ ∪ {0}}")
            .hint("Perfect squares starting from 0.")
            .query_hint("n^2 for n=0,1,2,3,4,5,6"),
        ExerciseDraft::new("1.1.B.22", "1.1", "B", Builder)
            .question("Write {3, 6, 11, 18, 27, 38, ...} in set-builder notation.")
            .answer("{n² + 2 : n ∈ ℕ}")
            .hint("1²+2=3, 2²+2=6, 3²+2=11, ...")
            .query_hint("n^2+2 for n=1,2,3,4,5,6"),
        ExerciseDraft::new("1.1.B.23", "1.1", "B", Builder)
            .question("Write {3, 4, 5, 6, 7, 8} in set-builder notation.")
            .answer("{x ∈ ℤ : 3 ≤ x ≤ 8}")
            .hint("Integers from 3 to 8 inclusive.")
            .query_hint("integers from 3 to 8"),
        ExerciseDraft::new("1.1.B.24", "1.1", "B", Builder)
            .question("Write {−4, −3, −2, −1, 0, 1, 2} in set-builder notation.")
            .answer("{x ∈ ℤ : −4 ≤ x ≤ 2}")
            .hint("Integers from −4 to 2 inclusive.")
            .query_hint("integers from -4 to 2"),
        ExerciseDraft::new("1.1.B.25", "1.1", "B", Builder)
            .question("Write {..., 1/8, 1/4, 1/2, 1, 2, 4, 8, ...} in set-builder notation.")
            .answer("{2ⁿ : n ∈ ℤ}")
            .hint("Powers of 2 for all integer exponents.")
            .query_hint("2^n for n=-3,-2,-1,0,1,2,3"),
        ExerciseDraft::new("1.1.B.26", "1.1", "B", Builder)
            .question("Write {..., 1/27, 1/9, 1/3, 1, 3, 9, 27, ...} in set-builder notation.")
            .answer("{3ⁿ : n ∈ ℤ}")
            .hint("Powers of 3 for all integer exponents.")
            .query_hint("3^n for n=-3,-2,-1,0,1,2,3"),
        ExerciseDraft::new("1.1.B.27", "1.1", "B", Builder)
            .question("Write {..., −π, −π/2, 0, π/2, π, 3π/2, 2π, ...} in set-builder notation.")
            .answer("{nπ/2 : n ∈ ℤ}")
            .hint("Multiples of π/2.")
            .query_hint("n*pi/2 for n=-2,-1,0,1,2,3,4"),
        ExerciseDraft::new("1.1.B.28", "1.1", "B", Builder)
            .question("Write {..., −3/2, −3/4, 0, 3/4, 3/2, 9/4, 3, ...} in set-builder notation.")
            .answer("{3n/4 : n ∈ ℤ}")
            .hint("Multiples of 3/4.")
            .query_hint("3n/4 for n=-2,-1,0,1,2,3,4"),
        // §1.1 C
        ExerciseDraft::new("1.1.C.29", "1.1", "C", Cardinality)
            .question("Find |{{1}, {2,{3,4}}, ∅}|.")
            .answer("3")
            .hint("Count the top-level elements (each brace-group = 1 element).")
            .query_hint("cardinality of {{1},{2,{3,4}},{}} = 3 elements")
            .remixable(remixes::plain_cardinality),
        ExerciseDraft::new("1.1.C.30", "1.1", "C", Cardinality)
            .question("Find |{{1,4}, a, b, {{3,4}}, {∅}}|.")
            .answer("5")
            .hint("Five elements: {1,4}, a, b, {{3,4}}, {∅}.")
            .query_hint("5 elements in the set"),
        ExerciseDraft::new("1.1.C.33", "1.1", "C", Cardinality)
            .question("Find |{x ∈ ℤ : |x| < 10}|.")
            .answer("19")
            .hint("Integers from −9 to 9: that's 2(9)+1 = 19.")
            .query_hint("number of integers x with |x| < 10")
            .remixable(remixes::absolute_bound_cardinality),
        ExerciseDraft::new("1.1.C.34", "1.1", "C", Cardinality)
            .question("Find |{x ∈ ℕ : |x| < 10}|.")
            .answer("9")
            .hint("Naturals 1 through 9.")
            .query_hint("natural numbers less than 10"),
        ExerciseDraft::new("1.1.C.35", "1.1", "C", Cardinality)
            .question("Find |{x ∈ ℤ : x² < 10}|.")
            .answer("7")
            .hint("x² < 10 means |x| ≤ 3 in ℤ: {−3,−2,−1,0,1,2,3}.")
            .query_hint("integers x with x^2 < 10"),
        ExerciseDraft::new("1.1.C.36", "1.1", "C", Cardinality)
            .question("Find |{x ∈ ℕ : x² < 10}|.")
            .answer("3")
            .hint("x=1,2,3 work (1,4,9 < 10); x=4 fails (16 ≥ 10).")
            .query_hint("natural numbers x with x^2 < 10"),
        ExerciseDraft::new("1.1.C.37", "1.1", "C", Cardinality)
            .question("Find |{x ∈ ℕ : x² < 0}|.")
            .answer("0 (empty set — |∅| = 0)")
            .hint("x² ≥ 0 for all real x, so no natural satisfies x² < 0.")
            .query_hint("natural numbers x with x^2 < 0"),
        ExerciseDraft::new("1.1.C.38", "1.1", "C", Cardinality)
            .question("Find |{x ∈ ℕ : 5x ≤ 20}|.")
            .answer("4")
            .hint("5x ≤ 20 means x ≤ 4; naturals: {1,2,3,4}.")
            .query_hint("natural numbers x with 5x <= 20"),
        // §1.2
        ExerciseDraft::new("1.2.A.1", "1.2", "A", List)
            .question("Find A × B for A = {1, 2, 3} and B = {a, b}.")
            .answer("{(1,a),(1,b),(2,a),(2,b),(3,a),(3,b)}")
            .hint("Pair each element of A with each element of B.")
            .query_hint("{1,2,3} cross product {a,b}"),
        ExerciseDraft::new("1.2.A.2", "1.2", "A", List)
            .question("If |A| = 4 and |A × B| = 20, find |B|.")
            .answer("|B| = 5, since |A × B| = |A|·|B| = 4·5 = 20.")
            .hint("Use |A × B| = |A|·|B|.")
            .query_hint("20/4 = 5"),
        ExerciseDraft::new("1.2.A.3", "1.2", "A", List)
            .question("Write out {0,1} × {0,1} × {0,1}.")
            .answer("{(0,0,0),(0,0,1),(0,1,0),(0,1,1),(1,0,0),(1,0,1),(1,1,0),(1,1,1)}")
            .hint("All binary triples — 2³ = 8 elements.")
            .query_hint("{0,1}^3 number of elements = 8"),
        // §1.3
        ExerciseDraft::new("1.3.A.1", "1.3", "A", List)
            .question("List all subsets of A = {1, 2, 3}.")
            .answer("∅, {1}, {2}, {3}, {1,2}, {1,3}, {2,3}, {1,2,3}  (2³ = 8 total)")
            .hint("A set with n elements has 2ⁿ subsets.")
            .query_hint("subsets of {1,2,3}")
            .remixable(remixes::subset_count),
        ExerciseDraft::new("1.3.A.2", "1.3", "A", TrueFalse)
            .question("True or False: {2, 3} ⊆ {1, 2, 3, 4}.")
            .answer("TRUE — every element of {2,3} is in {1,2,3,4}.")
            .hint("Check each element: 2 ∈ {1,2,3,4} ✓, 3 ∈ {1,2,3,4} ✓.")
            .query_hint("{2,3} subset of {1,2,3,4}"),
        ExerciseDraft::new("1.3.A.3", "1.3", "A", TrueFalse)
            .question("True or False: {1, 5} ⊆ {1, 2, 3, 4}.")
            .answer("FALSE — 5 ∉ {1,2,3,4}.")
            .hint("5 is not in the second set.")
            .query_hint("{1,5} subset of {1,2,3,4} = false"),
        ExerciseDraft::new("1.3.A.4", "1.3", "A", TrueFalse)
            .question("True or False: ∅ ⊆ {1, 2, 3}.")
            .answer("TRUE — ∅ is a subset of every set (vacuously true).")
            .hint("No element of ∅ fails to be in any set — there are none!")
            .query_hint("empty set is subset of every set"),
        // §1.4
        ExerciseDraft::new("1.4.A.1", "1.4", "A", List)
            .question("Find 𝒫({1, 2}).")
            .answer("{∅, {1}, {2}, {1,2}}  (4 = 2² elements)")
            .hint("Enumerate all subsets of {1,2}.")
            .query_hint("power set of {1,2}"),
        ExerciseDraft::new("1.4.A.2", "1.4", "A", List)
            .question("Find 𝒫(∅).")
            .answer("{∅}  (1 = 2⁰ element)")
            .hint("The only subset of ∅ is ∅ itself.")
            .query_hint("power set of empty set"),
        ExerciseDraft::new("1.4.A.3", "1.4", "A", Cardinality)
            .question("How many elements does 𝒫(𝒫({a,b})) have?")
            .answer("2^(2²) = 2⁴ = 16")
            .hint("|{a,b}|=2, so |𝒫({a,b})|=4, so |𝒫(𝒫({a,b}))|=2⁴=16.")
            .query_hint("2^(2^2)")
            .remixable(remixes::power_set_size),
        // §1.5
        ExerciseDraft::new("1.5.A.1", "1.5", "A", List)
            .question("Let A={4,3,6,7,1,9}, B={5,6,8,4}. Find A∪B and A∩B.")
            .answer("A∪B = {1,3,4,5,6,7,8,9};  A∩B = {4,6}")
            .hint("Union: combine all; Intersection: only common elements.")
            .query_hint("union and intersection of {4,3,6,7,1,9} and {5,6,8,4}"),
        ExerciseDraft::new("1.5.A.2", "1.5", "A", List)
            .question("For intervals: find [2,5] ∪ [3,6],  [2,5] ∩ [3,6],  and [2,5] − [3,6].")
            .answer("[2,5]∪[3,6] = [2,6];  [2,5]∩[3,6] = [3,5];  [2,5]−[3,6] = [2,3)")
            .hint("Sketch both intervals on a number line.")
            .query_hint("[2,5] union [3,6], [2,5] intersect [3,6]"),
        // §1.6
        ExerciseDraft::new("1.6.A.1", "1.6", "A", List)
            .question("Let U={1,...,10}, A={2,4,6,8,10}. Find Ā.")
            .answer("{1,3,5,7,9}")
            .hint("Ā = U − A = all elements of U not in A.")
            .query_hint("{1,2,...,10} minus {2,4,6,8,10}"),
        ExerciseDraft::new("1.6.A.2", "1.6", "A", List)
            .question(
                "Verify De Morgan's law: Let U={1,...,10}, A={2,4,6,8,10}, B={1,2,3,4,5}. \
                 Show (A∪B)̄ = Ā∩B̄.",
            )
            .answer(
                "A∪B={1,2,3,4,5,6,8,10}, (A∪B)̄={7,9}\n\
                 Ā={1,3,5,7,9}, B̄={6,7,8,9,10}, Ā∩B̄={7,9} ✓",
            )
            .hint("Compute each side separately and verify they're equal.")
            .query_hint("complement of ({2,4,6,8,10} union {1,2,3,4,5}) in {1,...,10}"),
        // §2.1
        ExerciseDraft::new("2.1.A.1", "2.1", "A", TrueFalse)
            .question("Is 'The number 3 is odd.' a statement? If so, is it T or F?")
            .answer("Yes, it is a statement. It is TRUE.")
            .hint("Statements are declarative sentences with a definite truth value.")
            .query_hint("3 is odd"),
        ExerciseDraft::new("2.1.A.2", "2.1", "A", TrueFalse)
            .question("Is 'x + 3 = 8' a statement?")
            .answer("No — it is an open sentence. Truth depends on x.")
            .hint("Open sentences contain free variables.")
            .query_hint("x + 3 = 8 is an open sentence"),
        ExerciseDraft::new("2.1.A.3", "2.1", "A", TrueFalse)
            .question("Is 'Every even integer greater than 2 is the sum of two primes.' a statement?")
            .answer(
                "Yes — this is Goldbach's Conjecture. It IS a statement (T or F, even if unknown).",
            )
            .hint("Declarative sentence → statement, regardless of whether we know its truth value.")
            .query_hint("Goldbach's conjecture"),
        // §2.2
        ExerciseDraft::new("2.2.A.1", "2.2", "A", List)
            .question("Symbolize: 'The number 8 is both even and a power of 2.'")
            .answer("P ∧ Q  where P: '8 is even', Q: '8 is a power of 2'.")
            .hint("'Both ... and ...' → conjunction ∧.")
            .query_hint("8 is even AND 8 is a power of 2"),
        ExerciseDraft::new("2.2.A.2", "2.2", "A", List)
            .question("Symbolize: 'At least one of x and y equals 0.'")
            .answer("P ∨ Q  where P: 'x = 0', Q: 'y = 0'.")
            .hint("'At least one' → inclusive or ∨.")
            .query_hint("x=0 or y=0"),
        ExerciseDraft::new("2.2.A.3", "2.2", "A", List)
            .question("Symbolize: 'x ∈ A − B'.")
            .answer("P ∧ ¬Q  where P: 'x ∈ A', Q: 'x ∈ B'.")
            .hint("x ∈ A−B means x ∈ A AND x ∉ B.")
            .query_hint("x in A and x not in B"),
        ExerciseDraft::new(
            "2.2.A.4",
            "2.2",
            "A",
            table(&["P", "Q"], "P ∧ Q", &["TTT", "TFF", "FTF", "FFF"])?,
        )
        .question("Give the truth table for P ∧ Q.")
        .answer("TT→T, TF→F, FT→F, FF→F")
        .hint("True ONLY when both are true.")
        .query_hint("truth table P AND Q"),
        ExerciseDraft::new(
            "2.2.A.5",
            "2.2",
            "A",
            table(&["P", "Q"], "P ∨ Q", &["TTT", "TFT", "FTT", "FFF"])?,
        )
        .question("Give the truth table for P ∨ Q.")
        .answer("TT→T, TF→T, FT→T, FF→F")
        .hint("False ONLY when both are false.")
        .query_hint("truth table P OR Q"),
        // §2.3
        ExerciseDraft::new("2.3.A.1", "2.3", "A", List)
            .question(
                "Convert: 'An integer is divisible by 8 only if it is divisible by 4.' \
                 to 'If P, then Q' form.",
            )
            .answer("If an integer is divisible by 8, then it is divisible by 4.")
            .hint("'P only if Q' means P ⟹ Q.")
            .query_hint("8 divides n implies 4 divides n"),
        ExerciseDraft::new(
            "2.3.A.2",
            "2.3",
            "A",
            table(&["P", "Q"], "P ⟹ Q", &["TTT", "TFF", "FTT", "FFT"])?,
        )
        .question("Give the truth table for P ⟹ Q.")
        .answer("TT→T, TF→F, FT→T, FF→T")
        .hint("The ONLY false row is when P=T and Q=F.")
        .query_hint("truth table P implies Q"),
        ExerciseDraft::new("2.3.A.3", "2.3", "A", List)
            .question("What is the contrapositive of 'If n is even, then n² is even'?")
            .answer("If n² is odd, then n is odd.  (¬Q ⟹ ¬P)")
            .hint("Contrapositive: negate both and flip direction.")
            .query_hint("contrapositive of if n is even then n^2 is even"),
        ExerciseDraft::new("2.3.A.4", "2.3", "A", TrueFalse)
            .question("Is the contrapositive logically equivalent to the original conditional?")
            .answer("YES — P ⟹ Q ≡ ¬Q ⟹ ¬P. They have identical truth tables.")
            .hint("Verify with a 4-row truth table.")
            .query_hint("P implies Q equivalent to not Q implies not P"),
        // §2.4
        ExerciseDraft::new("2.4.A.1", "2.4", "A", List)
            .question("Convert to iff form: 'If xy = 0 then x = 0 or y = 0, and conversely.'")
            .answer("xy = 0 if and only if x = 0 or y = 0.")
            .hint("'and conversely' always indicates an iff statement.")
            .query_hint("xy = 0 iff x=0 or y=0"),
        ExerciseDraft::new(
            "2.4.A.2",
            "2.4",
            "A",
            table(&["P", "Q"], "P ⟺ Q", &["TTT", "TFF", "FTF", "FFT"])?,
        )
        .question("Give the truth table for P ⟺ Q.")
        .answer("TT→T, TF→F, FT→F, FF→T")
        .hint("True exactly when P and Q have the SAME truth value.")
        .query_hint("truth table P iff Q"),
        // §2.5
        ExerciseDraft::new(
            "2.5.A.1",
            "2.5",
            "A",
            table(
                &["P", "Q", "R"],
                "P ∨ (Q ⟹ R)",
                &["TTTT", "TTFT", "TFTT", "TFFT", "FTTT", "FTFF", "FFTT", "FFFT"],
            )?,
        )
        .question("Build the truth table for P ∨ (Q ⟹ R).")
        .answer(
            "(P,Q,R)=(T,T,T)→T; (T,T,F)→T; (T,F,T)→T; (T,F,F)→T; \
             (F,T,T)→T; (F,T,F)→F; (F,F,T)→T; (F,F,F)→T",
        )
        .hint("First build Q⟹R column, then apply P∨(Q⟹R).")
        .query_hint("truth table P OR (Q implies R)"),
        ExerciseDraft::new(
            "2.5.A.2",
            "2.5",
            "A",
            table(&["P", "Q"], "¬(P ⟹ Q)", &["TTF", "TFT", "FTF", "FFF"])?,
        )
        .question("Build the truth table for ¬(P ⟹ Q).")
        .answer("TT→F, TF→T, FT→F, FF→F  (true ONLY in the TF row)")
        .hint("¬(P⟹Q) is true only when P=T, Q=F.")
        .query_hint("truth table NOT (P implies Q)"),
        ExerciseDraft::new(
            "2.5.A.3",
            "2.5",
            "A",
            table(&["P", "Q"], "(P ∧ ¬P) ⟹ Q", &["TTT", "TFT", "FTT", "FFT"])?,
        )
        .question("Build the truth table for (P ∧ ¬P) ⟹ Q.")
        .answer("All four rows → T. This is a tautology (false hypothesis ⟹ anything is T).")
        .hint("P ∧ ¬P is always F; F ⟹ Q is always T.")
        .query_hint("truth table (P AND NOT P) implies Q"),
        ExerciseDraft::new(
            "2.5.A.4",
            "2.5",
            "A",
            table(&["P", "Q"], "¬(¬P ∨ ¬Q)", &["TTT", "TFF", "FTF", "FFF"])?,
        )
        .question("Build the truth table for ¬(¬P ∨ ¬Q).")
        .answer("TT→T, TF→F, FT→F, FF→F  (same as P ∧ Q — De Morgan!)")
        .hint("By De Morgan: ¬(¬P ∨ ¬Q) = ¬¬P ∧ ¬¬Q = P ∧ Q.")
        .query_hint("truth table NOT(NOT P OR NOT Q)"),
        ExerciseDraft::new("2.5.A.5", "2.5", "A", List)
            .question("Suppose ((P∧Q)∨R) ⟹ (R∨S) is false. Find the truth values of P,Q,R,S.")
            .answer(
                "P=T, Q=T, R=F, S=F. (Hypothesis must be T, conclusion F; \
                 R∨S=F requires R=F,S=F; then (T∧T)∨F=T ✓)",
            )
            .hint(
                "A conditional is false only when hypothesis=T and conclusion=F. Work backwards.",
            )
            .query_hint("(P AND Q OR R) implies (R OR S) is false"),
        // §2.6
        ExerciseDraft::new(
            "2.6.A.1",
            "2.6",
            "A",
            table(
                &["P", "Q"],
                "¬(P ∧ Q)  vs  (¬P) ∨ (¬Q)",
                &["TTFF", "TFTT", "FTTT", "FFTT"],
            )?,
        )
        .question("Use a truth table to show ¬(P ∧ Q) ≡ (¬P) ∨ (¬Q). (De Morgan's 1st Law)")
        .answer("Both columns agree on all 4 rows: TT→F/F, TF→T/T, FT→T/T, FF→T/T ✓")
        .hint("Build a 4-row table with columns for both sides and compare.")
        .query_hint("truth table NOT(P AND Q) = (NOT P) OR (NOT Q)"),
        ExerciseDraft::new(
            "2.6.A.2",
            "2.6",
            "A",
            table(
                &["P", "Q"],
                "P ⟹ Q  vs  (¬P) ∨ Q",
                &["TTTT", "TFFF", "FTTT", "FFTT"],
            )?,
        )
        .question("Use a truth table to show P ⟹ Q ≡ (¬P) ∨ Q.")
        .answer("Both columns agree: TT→T/T, TF→F/F, FT→T/T, FF→T/T ✓")
        .hint("'If P then Q' is the same as 'P is false or Q is true.'")
        .query_hint("truth table P implies Q = (NOT P) OR Q"),
        ExerciseDraft::new("2.6.A.3", "2.6", "A", TrueFalse)
            .question("Are P ∨ (Q ∧ R) and (P ∨ Q) ∧ R logically equivalent?")
            .answer("NO — counterexample: P=T, Q=F, R=F gives T vs F.")
            .hint("Try P=T, Q=R=F: LHS = T∨(F∧F)=T, RHS = (T∨F)∧F = F.")
            .query_hint("truth table P OR (Q AND R) vs (P OR Q) AND R"),
        ExerciseDraft::new("2.6.A.4", "2.6", "A", TrueFalse)
            .question("Are ¬(P ⟹ Q) and P ∧ ¬Q logically equivalent?")
            .answer("YES — ¬(P⟹Q) is true only when P=T,Q=F, same as P∧¬Q.")
            .hint("Check all 4 rows — both are true only in the TF row.")
            .query_hint("NOT(P implies Q) equivalent to P AND NOT Q"),
        ExerciseDraft::new("2.6.A.5", "2.6", "A", List)
            .question("State and explain De Morgan's 2nd law for logic.")
            .answer(
                "¬(P ∨ Q) ≡ (¬P) ∧ (¬Q). 'Not (P or Q)' = 'not P and not Q'. \
                 Verified by 4-row truth table.",
            )
            .hint("Flip ∨ to ∧ and negate both sides.")
            .query_hint("De Morgan NOT(P OR Q) = (NOT P) AND (NOT Q)"),
    ])
}
