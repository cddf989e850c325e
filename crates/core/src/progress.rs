use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::{ExerciseId, MasteryRecord};

/// Integer percentage, rounded half away from zero. Zero when `total` is zero.
#[must_use]
pub fn percentage(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (100.0 * done as f64 / total as f64).round() as u32;
    pct
}

/// Coarse colouring bucket for a mastery percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryBand {
    Strong,
    Developing,
    Weak,
}

impl MasteryBand {
    #[must_use]
    pub fn for_percentage(pct: u32) -> Self {
        match pct {
            80.. => Self::Strong,
            40..=79 => Self::Developing,
            _ => Self::Weak,
        }
    }
}

/// Mastered vs total for some filter of the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub completed: usize,
    pub total: usize,
}

impl Completion {
    #[must_use]
    pub fn percentage(&self) -> u32 {
        percentage(self.completed, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

/// One line of the per-section progress report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionProgress {
    pub key: String,
    pub title: String,
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
    pub band: MasteryBand,
    pub remaining: Vec<ExerciseId>,
}

impl SectionProgress {
    /// How many ids of `remaining` are listed before collapsing into "+N more".
    pub const PREVIEW: usize = 4;

    /// The first few unmastered ids plus how many were left out.
    #[must_use]
    pub fn remaining_preview(&self) -> (&[ExerciseId], usize) {
        let shown = self.remaining.len().min(Self::PREVIEW);
        (&self.remaining[..shown], self.remaining.len() - shown)
    }
}

/// Session-scoped mastery for every exercise that has been graded.
///
/// The store accepts any id, including ones absent from the catalog, and
/// never fails. Aggregates are computed against a catalog on demand.
#[derive(Debug, Clone, Default)]
pub struct ProgressStore {
    records: HashMap<ExerciseId, MasteryRecord>,
}

impl ProgressStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a graded submission into the record for `id`, creating it if needed.
    pub fn record(&mut self, id: &ExerciseId, was_correct: bool) -> &MasteryRecord {
        let entry = self.records.entry(id.clone()).or_default();
        entry.record(was_correct);
        entry
    }

    #[must_use]
    pub fn query(&self, id: &str) -> Option<&MasteryRecord> {
        self.records.get(id)
    }

    #[must_use]
    pub fn is_mastered(&self, id: &str) -> bool {
        self.query(id).is_some_and(|r| r.correct)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn aggregate_for(&self, catalog: &Catalog, section: &str, part: Option<&str>) -> Completion {
        catalog
            .in_section(section, part)
            .fold(Completion::default(), |mut acc, exercise| {
                acc.total += 1;
                if self.is_mastered(exercise.id().as_str()) {
                    acc.completed += 1;
                }
                acc
            })
    }

    #[must_use]
    pub fn overall(&self, catalog: &Catalog) -> OverallProgress {
        let total = catalog.len();
        let completed = catalog
            .all()
            .iter()
            .filter(|e| self.is_mastered(e.id().as_str()))
            .count();
        OverallProgress {
            completed,
            total,
            percentage: percentage(completed, total),
        }
    }

    #[must_use]
    pub fn section_report(&self, catalog: &Catalog) -> Vec<SectionProgress> {
        catalog
            .sections()
            .iter()
            .map(|section| {
                let completion = self.aggregate_for(catalog, section.key(), None);
                let remaining = catalog
                    .in_section(section.key(), None)
                    .filter(|e| !self.is_mastered(e.id().as_str()))
                    .map(|e| e.id().clone())
                    .collect();
                let pct = completion.percentage();
                SectionProgress {
                    key: section.key().to_string(),
                    title: section.title().to_string(),
                    completed: completion.completed,
                    total: completion.total,
                    percentage: pct,
                    band: MasteryBand::for_percentage(pct),
                    remaining,
                }
            })
            .collect()
    }
}
