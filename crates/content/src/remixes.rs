//! Generators for parameterized exercise variants.
//!
//! Each generator draws fresh numbers from the thread-local RNG and rebuilds
//! the question, answer and query text to match.

use rand::Rng;
use rand::seq::IndexedRandom;
use proof_core::model::RemixOutput;

fn pick(options: &[i64]) -> i64 {
    options.choose(&mut rand::rng()).copied().unwrap_or_default()
}

fn join(values: impl IntoIterator<Item = i64>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `{ax ± b : x ∈ ℤ}` listed around zero.
pub fn linear_listing() -> RemixOutput {
    let a = pick(&[2, 3, 4, 6, 7]);
    let b = rand::rng().random_range(-4..=4);
    let sign = if b >= 0 { '+' } else { '−' };
    let query_b = if b >= 0 { format!("+{b}") } else { b.to_string() };
    let values = join((-2..=2).map(|x| a * x + b));

    RemixOutput {
        question: format!(
            "Write {{{a}x {sign} {} : x ∈ ℤ}} by listing elements.",
            b.abs()
        ),
        answer: format!("{{..., {values}, ...}}"),
        query_hint: format!("{a}x{query_b} for x=-2,-1,0,1,2"),
    }
}

/// `{x ∈ ℤ : |x| < n}` listed in full.
pub fn absolute_bound_listing() -> RemixOutput {
    let n = pick(&[4, 5, 6, 7, 8]);
    RemixOutput {
        question: format!("Write {{x ∈ ℤ : |x| < {n}}} by listing elements."),
        answer: format!("{{{}}}", join(-(n - 1)..n)),
        query_hint: format!("integers x with |x| < {n}"),
    }
}

pub fn plain_cardinality() -> RemixOutput {
    let n = pick(&[2, 3, 4, 5]);
    RemixOutput {
        question: format!("A set has {n} elements. What is its cardinality?"),
        answer: n.to_string(),
        query_hint: format!("cardinality {n}"),
    }
}

/// `|{x ∈ ℤ : |x| < n}| = 2n − 1`.
pub fn absolute_bound_cardinality() -> RemixOutput {
    let n = pick(&[5, 6, 7, 8, 10, 12]);
    RemixOutput {
        question: format!("Find |{{x ∈ ℤ : |x| < {n}}}|."),
        answer: (2 * n - 1).to_string(),
        query_hint: format!("number of integers x with |x| < {n}"),
    }
}

pub fn subset_count() -> RemixOutput {
    let n = pick(&[2, 3]);
    let set = join(1..=n).replace(", ", ",");
    RemixOutput {
        question: format!("List all subsets of {{{set}}}."),
        answer: format!("2^{n} = {} subsets total", 1_i64 << n),
        query_hint: format!("subsets of {{{set}}}"),
    }
}

pub fn power_set_size() -> RemixOutput {
    let n = pick(&[1, 2, 3]);
    RemixOutput {
        question: format!("How many elements does 𝒫({{1,...,{n}}}) have?"),
        answer: format!("2^{n} = {}", 1_i64 << n),
        query_hint: format!("2^{n}"),
    }
}
