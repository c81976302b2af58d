//! sakha-core: wellness-chat engine (classifier, wisdom catalog, composer, dispatcher).
//!
//! Re-exports the engine's public API so the skills crate and the gateway
//! depend on one consistent surface.

mod classifier;
mod composer;
mod knowledge;
mod locale;
mod memory;
mod orchestrator;
mod shared;

// Shared
pub use shared::{CoreConfig, Mode, Mood, DEFAULT_LANGUAGE, DEFAULT_SESSION_ID};

// Classifier
pub use classifier::{
    classify, detect_crisis, detect_greeting, detect_mood, Classification, CRISIS_PHRASES,
    GREETING_PHRASES,
};

// Knowledge
pub use knowledge::{
    preferred_dataset, CatalogError, ContentCatalog, CrisisLines, Dataset, DatasetKind,
    DatasetScore, DatasetSelector, EntryBody, EntryPick, EntryShape, FixedIndex,
    MentalHealthResources, Principle, Quote, RandomSource, SeededRandom, Selection, Story,
    Teaching, TherapyOptions, ThreadRandom, Verse, WisdomEntry,
};

// Composer and locale tables
pub use composer::compose;
pub use locale::{strings, strings_for, Language, LocaleStrings};

// Transcript
pub use memory::{ConversationTranscript, Speaker, TranscriptEntry};

// Orchestrator
pub use orchestrator::{
    now_rfc3339, route, ChatSession, DispatchResult, Dispatcher, GeneratorError, Route,
    TextGenerator, DEFAULT_GENERATOR_TIMEOUT,
};

/// Re-exported so generator implementations need no direct `async-trait` dependency.
pub use async_trait::async_trait;
