//! Keyword-scored dataset selection.
//!
//! 1. Lowercase the input once.
//! 2. Score every dataset by how many of its keywords occur in the input.
//! 3. Wisdom/Inspire modes force Gita/Inspire when that dataset scored > 0.
//! 4. Otherwise the highest score wins; ties go to the lowest priority number.
//! 5. A winning score of 0 falls back to the mode's dataset (Gita for Normal).
//! 6. Inside the dataset the first entry whose keywords occur in the input is
//!    returned; with no match an entry is drawn from the injected [`RandomSource`].
//!
//! Steps 1–5 are deterministic; step 6's random draw is the only variable point.

use super::catalog::{ContentCatalog, DatasetKind};
use super::entry::WisdomEntry;
use super::random::RandomSource;
use crate::shared::Mode;
use std::sync::Arc;

/// Score of one dataset for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetScore {
    pub kind: DatasetKind,
    pub score: usize,
}

/// How an entry was chosen inside its dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPick {
    KeywordMatch,
    Random,
}

/// Outcome of [`DatasetSelector::select`].
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub dataset: DatasetKind,
    pub entry: &'a WisdomEntry,
    pub pick: EntryPick,
}

/// Dataset a mode prefers, if any.
pub fn preferred_dataset(mode: Mode) -> Option<DatasetKind> {
    match mode {
        Mode::Wisdom => Some(DatasetKind::Gita),
        Mode::Inspire => Some(DatasetKind::Inspire),
        Mode::Normal => None,
    }
}

/// Picks one wisdom entry for a message and mode.
#[derive(Clone)]
pub struct DatasetSelector {
    catalog: Arc<ContentCatalog>,
    random: Arc<dyn RandomSource>,
}

impl DatasetSelector {
    pub fn new(catalog: Arc<ContentCatalog>, random: Arc<dyn RandomSource>) -> Self {
        Self { catalog, random }
    }

    /// Scores for every dataset, in priority order. `lowered` must already be lowercase.
    pub fn score_datasets(&self, lowered: &str) -> Vec<DatasetScore> {
        self.catalog
            .datasets()
            .iter()
            .map(|d| DatasetScore {
                kind: d.kind,
                score: d.score(lowered),
            })
            .collect()
    }

    /// Deterministic dataset choice (steps 1–5).
    pub fn choose_dataset(&self, text: &str, mode: Mode) -> DatasetKind {
        let lowered = text.to_lowercase();
        let scores = self.score_datasets(&lowered);

        if let Some(forced) = preferred_dataset(mode) {
            if scores.iter().any(|s| s.kind == forced && s.score > 0) {
                return forced;
            }
        }

        // Scores are in priority order, so a strict `>` keeps the lowest priority on ties.
        let mut best: Option<DatasetScore> = None;
        for s in scores {
            if best.map_or(true, |b| s.score > b.score) {
                best = Some(s);
            }
        }

        match best {
            Some(b) if b.score > 0 => b.kind,
            _ => preferred_dataset(mode).unwrap_or(DatasetKind::Gita),
        }
    }

    /// Full selection: dataset choice plus entry pick.
    pub fn select(&self, text: &str, mode: Mode) -> Selection<'_> {
        let kind = self.choose_dataset(text, mode);
        let dataset = self.catalog.dataset(kind);
        let lowered = text.to_lowercase();

        if let Some(entry) = dataset.first_match(&lowered) {
            return Selection {
                dataset: kind,
                entry,
                pick: EntryPick::KeywordMatch,
            };
        }

        let index = self.random.pick_index(dataset.entries.len());
        // Validated catalogs never hold an empty dataset; clamp anyway for foreign RandomSource impls.
        let index = index.min(dataset.entries.len().saturating_sub(1));
        Selection {
            dataset: kind,
            entry: &dataset.entries[index],
            pick: EntryPick::Random,
        }
    }
}
