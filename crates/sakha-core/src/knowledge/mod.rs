//! Wisdom content: the 8-dataset catalog and keyword-scored selection.

mod catalog;
mod entry;
mod random;
mod selector;

pub use catalog::{
    CatalogError, ContentCatalog, CrisisLines, Dataset, DatasetKind, MentalHealthResources,
    TherapyOptions,
};
pub use entry::{EntryBody, EntryShape, Principle, Quote, Story, Teaching, Verse, WisdomEntry};
pub use random::{FixedIndex, RandomSource, SeededRandom, ThreadRandom};
pub use selector::{preferred_dataset, DatasetScore, DatasetSelector, EntryPick, Selection};
