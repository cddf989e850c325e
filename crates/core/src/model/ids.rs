use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Stable identifier of an exercise, formatted `"<section>.<part>.<number>"`.
///
/// The section key itself contains a dot (`"1.1"`), so the id is split from
/// the right: `"1.1.A.12"` is section `"1.1"`, part `"A"`, number `12`.
///
/// Construction is infallible so progress can be keyed by ids that are not in
/// the catalog; use [`ExerciseId::parts`] or `str::parse` when the shape matters.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExerciseId(String);

/// The three components of a well-formed [`ExerciseId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParts<'a> {
    pub section: &'a str,
    pub part: &'a str,
    pub number: u32,
}

impl ExerciseId {
    /// Wraps a raw id without checking its shape.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the id into section, part and number.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if any component is missing or the number is not numeric.
    pub fn parts(&self) -> Result<IdParts<'_>, ParseIdError> {
        let err = || ParseIdError {
            raw: self.0.clone(),
        };

        let mut pieces = self.0.rsplitn(3, '.');
        let number = pieces.next().ok_or_else(err)?;
        let part = pieces.next().ok_or_else(err)?;
        let section = pieces.next().ok_or_else(err)?;

        if section.is_empty() || part.is_empty() || !part.chars().all(char::is_alphanumeric) {
            return Err(err());
        }
        let number = number.parse::<u32>().map_err(|_| err())?;

        Ok(IdParts {
            section,
            part,
            number,
        })
    }

    /// Section key of a well-formed id.
    #[must_use]
    pub fn section(&self) -> Option<&str> {
        self.parts().ok().map(|p| p.section)
    }
}

impl Borrow<str> for ExerciseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExerciseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExerciseId({})", self.0)
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for ids that do not follow `"<section>.<part>.<number>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl ParseIdError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to parse exercise id from {:?} (expected <section>.<part>.<number>)",
            self.raw
        )
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ExerciseId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = ExerciseId::new(s.trim());
        id.parts()?;
        Ok(id)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_dotted_section_from_the_right() {
        let id = ExerciseId::new("1.1.A.12");
        let parts = id.parts().unwrap();
        assert_eq!(parts.section, "1.1");
        assert_eq!(parts.part, "A");
        assert_eq!(parts.number, 12);
    }

    #[test]
    fn display_is_the_raw_id() {
        assert_eq!(ExerciseId::new("2.6.A.3").to_string(), "2.6.A.3");
    }

    #[test]
    fn from_str_rejects_malformed_ids() {
        assert!("1.1.A".parse::<ExerciseId>().is_err());
        assert!("1.1.A.x".parse::<ExerciseId>().is_err());
        assert!("A.1".parse::<ExerciseId>().is_err());
        assert!("..1".parse::<ExerciseId>().is_err());
    }

    #[test]
    fn from_str_accepts_and_trims() {
        let id: ExerciseId = " 1.3.A.4 ".parse().unwrap();
        assert_eq!(id, ExerciseId::new("1.3.A.4"));
        assert_eq!(id.section(), Some("1.3"));
    }

    #[test]
    fn unparseable_ids_can_still_be_constructed() {
        let id = ExerciseId::new("scratch");
        assert!(id.parts().is_err());
        assert_eq!(id.section(), None);
    }
}
