//! Wisdom entries: one static record per reply payload, tagged by display shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display shape of an entry. Every dataset holds exactly one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryShape {
    Verse,
    Teaching,
    Principle,
    Quote,
    Story,
}

impl EntryShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryShape::Verse => "verse",
            EntryShape::Teaching => "teaching",
            EntryShape::Principle => "principle",
            EntryShape::Quote => "quote",
            EntryShape::Story => "story",
        }
    }
}

impl fmt::Display for EntryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scripture verse with translation and practical reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Original-script text (Sanskrit).
    pub text: String,
    pub translation: String,
    /// Chapter/verse reference, e.g. "Chapter 2, Verse 47".
    pub reference: String,
    pub context: String,
    pub meaning: String,
    pub application: String,
}

/// A saying attributed to a text or tradition rather than a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teaching {
    pub source: String,
    pub quote: String,
    pub context: String,
    pub lesson: String,
}

/// A named philosophical or therapeutic principle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    pub name: String,
    pub principle: String,
    pub explanation: String,
    pub application: String,
}

/// A quote from a named person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub person: String,
    pub quote: String,
    pub context: String,
    pub lesson: String,
}

/// A short narrative from an epic with its lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub epic: String,
    pub title: String,
    pub lesson: String,
    pub application: String,
    pub insight: String,
}

/// Shape-specific display fields. The JSON tag is `shape`; an unknown tag fails catalog loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum EntryBody {
    Verse(Verse),
    Teaching(Teaching),
    Principle(Principle),
    Quote(Quote),
    Story(Story),
}

/// One catalog record: retrieval keywords plus display body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WisdomEntry {
    /// Lowercase keywords; an entry matches when any of them occurs in the lowercased input.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub body: EntryBody,
}

impl WisdomEntry {
    pub fn shape(&self) -> EntryShape {
        match self.body {
            EntryBody::Verse(_) => EntryShape::Verse,
            EntryBody::Teaching(_) => EntryShape::Teaching,
            EntryBody::Principle(_) => EntryShape::Principle,
            EntryBody::Quote(_) => EntryShape::Quote,
            EntryBody::Story(_) => EntryShape::Story,
        }
    }

    /// True if any entry keyword is a substring of `lowered` (already lowercased input).
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| !k.is_empty() && lowered.contains(k.as_str()))
    }

    /// Short human label for logs ("Chapter 2, Verse 47", "Mahatma Gandhi", ...).
    pub fn label(&self) -> &str {
        match &self.body {
            EntryBody::Verse(v) => &v.reference,
            EntryBody::Teaching(t) => &t.source,
            EntryBody::Principle(p) => &p.name,
            EntryBody::Quote(q) => &q.person,
            EntryBody::Story(s) => &s.title,
        }
    }
}
