use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound on variables in a stored table (2^6 = 64 rows).
pub const MAX_VARIABLES: usize = 6;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TruthTableError {
    #[error("invalid truth value: {0:?} (expected T or F)")]
    InvalidValue(String),

    #[error("a truth table needs between 1 and {MAX_VARIABLES} variables, got {0}")]
    VariableCount(usize),

    #[error("expected {expected} rows for the variables given, got {actual}")]
    RowCount { expected: usize, actual: usize },

    #[error("row {row} must hold the {variables} assignment columns plus at least one result")]
    RowWidth { row: usize, variables: usize },

    #[error("row {row} does not follow the T-first enumeration order")]
    RowOrder { row: usize },
}

//
// ─── TRUTH VALUE ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruthValue {
    True,
    False,
}

impl TruthValue {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            TruthValue::True => 'T',
            TruthValue::False => 'F',
        }
    }

    fn from_symbol(symbol: char) -> Result<Self, TruthTableError> {
        match symbol {
            'T' | 't' => Ok(Self::True),
            'F' | 'f' => Ok(Self::False),
            other => Err(TruthTableError::InvalidValue(other.to_string())),
        }
    }
}

impl fmt::Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for TruthValue {
    type Err = TruthTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => match trimmed.to_ascii_lowercase().as_str() {
                "true" => Ok(Self::True),
                "false" => Ok(Self::False),
                _ => Err(TruthTableError::InvalidValue(s.to_string())),
            },
        }
    }
}

/// Enumerates every assignment of `n` variables, most-significant variable first.
///
/// Row `index` gives variable `position` the bit `(index >> (n - 1 - position)) & 1`,
/// where a clear bit reads as `T`. For two variables this yields `TT, TF, FT, FF`,
/// the order textbook tables are written in.
///
/// # Errors
///
/// Returns `TruthTableError::VariableCount` when `n` is zero or above [`MAX_VARIABLES`].
pub fn enumerate_assignments(n: usize) -> Result<Vec<Vec<TruthValue>>, TruthTableError> {
    if n == 0 || n > MAX_VARIABLES {
        return Err(TruthTableError::VariableCount(n));
    }

    let rows = 1usize << n;
    Ok((0..rows)
        .map(|index| {
            (0..n)
                .map(|position| {
                    if (index >> (n - 1 - position)) & 1 == 0 {
                        TruthValue::True
                    } else {
                        TruthValue::False
                    }
                })
                .collect()
        })
        .collect())
}

//
// ─── TABLE ─────────────────────────────────────────────────────────────────────
//

/// One row of a stored table: the assignment and its result column(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthRow {
    pub inputs: Vec<TruthValue>,
    pub outputs: Vec<TruthValue>,
}

impl TruthRow {
    /// The graded value: the last result column.
    #[must_use]
    pub fn expected(&self) -> TruthValue {
        // Validated tables always carry at least one output.
        self.outputs.last().copied().unwrap_or(TruthValue::False)
    }
}

/// Reference truth table for a `truth_table` exercise.
///
/// Equivalence exercises compare two formulas, written `"lhs  vs  rhs"`, and
/// store one result column per side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    variables: Vec<String>,
    formula: String,
    rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Builds a table from compact row strings such as `"TTF"`.
    ///
    /// # Errors
    ///
    /// Returns `TruthTableError` if a symbol is not `T`/`F` or the rows do not
    /// form a complete table in enumeration order.
    pub fn parse(variables: &[&str], formula: &str, rows: &[&str]) -> Result<Self, TruthTableError> {
        let rows = rows
            .iter()
            .map(|row| {
                row.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(TruthValue::from_symbol)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(
            variables.iter().map(|v| (*v).to_string()).collect(),
            formula,
            rows,
        )
    }

    /// Builds a table from full rows (assignment columns followed by results).
    ///
    /// # Errors
    ///
    /// Returns `TruthTableError` if the shape or ordering is wrong.
    pub fn new(
        variables: Vec<String>,
        formula: impl Into<String>,
        rows: Vec<Vec<TruthValue>>,
    ) -> Result<Self, TruthTableError> {
        let n = variables.len();
        let expected = enumerate_assignments(n)?;
        if rows.len() != expected.len() {
            return Err(TruthTableError::RowCount {
                expected: expected.len(),
                actual: rows.len(),
            });
        }

        let width = rows.first().map_or(0, Vec::len);
        let mut parsed = Vec::with_capacity(rows.len());
        for (index, (mut row, assignment)) in rows.into_iter().zip(expected).enumerate() {
            if row.len() <= n || row.len() != width {
                return Err(TruthTableError::RowWidth {
                    row: index,
                    variables: n,
                });
            }
            let outputs = row.split_off(n);
            if row != assignment {
                return Err(TruthTableError::RowOrder { row: index });
            }
            parsed.push(TruthRow {
                inputs: row,
                outputs,
            });
        }

        Ok(Self {
            variables,
            formula: formula.into(),
            rows: parsed,
        })
    }

    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    #[must_use]
    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    /// Column headings for the result columns (one per side of a `vs` comparison).
    #[must_use]
    pub fn result_labels(&self) -> Vec<&str> {
        self.formula.split(" vs ").map(str::trim).collect()
    }
}
