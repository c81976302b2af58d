//! Immutable content catalog: eight keyword-scored datasets plus the resource listing.
//!
//! ## Datasets (priority = declaration order, lower wins ties)
//!
//! | Priority | DatasetKind | Shape     | Content                                   |
//! |----------|-------------|-----------|-------------------------------------------|
//! | 1        | Gita        | verse     | Bhagavad Gita verses                      |
//! | 2        | Vedic       | teaching  | Vedic sayings                             |
//! | 3        | Yoga        | principle | Yamas / Niyamas                           |
//! | 4        | Ayurveda    | principle | Dosha balance, Sattva                     |
//! | 5        | Buddhist    | principle | Noble Truths, Eightfold Path              |
//! | 6        | Psychology  | principle | CBT, mindfulness                          |
//! | 7        | Inspire     | quote     | Quotes from inspiring Indian personalities |
//! | 8        | Epic        | story     | Lessons from the epics                    |
//!
//! The catalog is built once at startup (embedded JSON or a file override) and
//! shared read-only behind an `Arc`. Validation happens at load: a dataset
//! holding an entry of the wrong shape aborts loading.

use super::entry::{EntryShape, WisdomEntry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Dataset identifier; the discriminant is the tie-break priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Gita = 1,
    Vedic = 2,
    Yoga = 3,
    Ayurveda = 4,
    Buddhist = 5,
    Psychology = 6,
    Inspire = 7,
    Epic = 8,
}

impl DatasetKind {
    /// Tie-break priority (1–8). Lower is preferred.
    #[inline]
    pub fn priority(&self) -> u8 {
        *self as u8
    }

    /// Shape every entry of this dataset must have.
    pub fn shape(&self) -> EntryShape {
        match self {
            DatasetKind::Gita => EntryShape::Verse,
            DatasetKind::Vedic => EntryShape::Teaching,
            DatasetKind::Yoga
            | DatasetKind::Ayurveda
            | DatasetKind::Buddhist
            | DatasetKind::Psychology => EntryShape::Principle,
            DatasetKind::Inspire => EntryShape::Quote,
            DatasetKind::Epic => EntryShape::Story,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Gita => "gita",
            DatasetKind::Vedic => "vedic",
            DatasetKind::Yoga => "yoga",
            DatasetKind::Ayurveda => "ayurveda",
            DatasetKind::Buddhist => "buddhist",
            DatasetKind::Psychology => "psychology",
            DatasetKind::Inspire => "inspire",
            DatasetKind::Epic => "epic",
        }
    }

    /// Returns all kinds in priority order.
    pub fn all() -> [Self; 8] {
        [
            Self::Gita,
            Self::Vedic,
            Self::Yoga,
            Self::Ayurveda,
            Self::Buddhist,
            Self::Psychology,
            Self::Inspire,
            Self::Epic,
        ]
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named, ordered collection of entries sharing one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub kind: DatasetKind,
    /// Dataset-level scoring keywords (distinct from per-entry keywords).
    pub keywords: Vec<String>,
    pub entries: Vec<WisdomEntry>,
}

impl Dataset {
    /// Number of dataset keywords occurring in `lowered`.
    pub fn score(&self, lowered: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| lowered.contains(k.as_str()))
            .count()
    }

    /// First entry (in declared order) whose keywords occur in `lowered`.
    pub fn first_match(&self, lowered: &str) -> Option<&WisdomEntry> {
        self.entries.iter().find(|e| e.matches(lowered))
    }
}

/// Crisis hotlines by region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisLines {
    pub india: Vec<String>,
    pub international: Vec<String>,
}

/// Therapy platforms and non-crisis helplines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TherapyOptions {
    pub online: Vec<String>,
    pub helplines: Vec<String>,
}

/// Read-only mental-health resource listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentalHealthResources {
    pub crisis: CrisisLines,
    pub therapy: TherapyOptions,
}

/// Catalog loading failures. All of them are startup-time configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset {0} is missing")]
    MissingDataset(DatasetKind),
    #[error("dataset {0} is declared more than once")]
    DuplicateDataset(DatasetKind),
    #[error("dataset {0} has no entries")]
    EmptyDataset(DatasetKind),
    #[error("dataset {0} has no scoring keywords")]
    NoKeywords(DatasetKind),
    #[error("dataset {kind} entry #{index} has shape {found}, expected {expected}")]
    ShapeMismatch {
        kind: DatasetKind,
        index: usize,
        expected: EntryShape,
        found: EntryShape,
    },
}

#[derive(Deserialize)]
struct RawCatalog {
    datasets: Vec<Dataset>,
    resources: MentalHealthResources,
}

/// Immutable wisdom catalog. Datasets are stored in priority order.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    datasets: Vec<Dataset>,
    resources: MentalHealthResources,
}

impl ContentCatalog {
    /// Loads the catalog compiled into the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Loads the file at `path` when given, otherwise the builtin catalog.
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(p) => Self::load_path(p)?,
            None => Self::builtin()?,
        };
        tracing::info!(
            target: "sakha::catalog",
            source = path.unwrap_or("builtin"),
            datasets = catalog.datasets.len(),
            entries = catalog.entry_count(),
            "Wisdom catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses and validates a catalog document.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let parsed: RawCatalog = serde_json::from_str(raw)?;
        Self::from_parts(parsed.datasets, parsed.resources)
    }

    /// Validates datasets and orders them by priority.
    pub fn from_parts(
        datasets: Vec<Dataset>,
        resources: MentalHealthResources,
    ) -> Result<Self, CatalogError> {
        let mut slots: [Option<Dataset>; 8] = Default::default();
        for mut dataset in datasets {
            let kind = dataset.kind;
            let slot = &mut slots[kind.priority() as usize - 1];
            if slot.is_some() {
                return Err(CatalogError::DuplicateDataset(kind));
            }
            normalize_keywords(&mut dataset.keywords);
            if dataset.keywords.is_empty() {
                return Err(CatalogError::NoKeywords(kind));
            }
            if dataset.entries.is_empty() {
                return Err(CatalogError::EmptyDataset(kind));
            }
            let expected = kind.shape();
            for (index, entry) in dataset.entries.iter_mut().enumerate() {
                let found = entry.shape();
                if found != expected {
                    return Err(CatalogError::ShapeMismatch {
                        kind,
                        index,
                        expected,
                        found,
                    });
                }
                normalize_keywords(&mut entry.keywords);
            }
            *slot = Some(dataset);
        }

        let mut ordered = Vec::with_capacity(slots.len());
        for (kind, slot) in DatasetKind::all().into_iter().zip(slots) {
            ordered.push(slot.ok_or(CatalogError::MissingDataset(kind))?);
        }
        Ok(Self {
            datasets: ordered,
            resources,
        })
    }

    /// All datasets in priority order.
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Dataset for `kind`. Every kind is present after validation.
    pub fn dataset(&self, kind: DatasetKind) -> &Dataset {
        &self.datasets[kind.priority() as usize - 1]
    }

    pub fn resources(&self) -> &MentalHealthResources {
        &self.resources
    }

    pub fn entry_count(&self) -> usize {
        self.datasets.iter().map(|d| d.entries.len()).sum()
    }
}

/// Lowercases, trims and de-duplicates keywords; drops empty ones.
fn normalize_keywords(keywords: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(keywords.len());
    for k in keywords.drain(..) {
        let k = k.trim().to_lowercase();
        if !k.is_empty() && !seen.contains(&k) {
            seen.push(k);
        }
    }
    *keywords = seen;
}
