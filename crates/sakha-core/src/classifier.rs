//! Keyword classifier over raw user text: mood, crisis risk and bare greetings.
//!
//! All checks lowercase the input once and run substring tests against fixed
//! keyword tables, so a keyword inside a longer word still matches ("stressed"
//! matches "unstressed"). Greeting detection is the exception: it compares the
//! whole trimmed message.

use crate::shared::Mood;
use serde::{Deserialize, Serialize};

/// Mood keyword tables in priority order; the first table with a hit wins.
const MOOD_TABLE: &[(Mood, &[&str])] = &[
    (Mood::Stressed, &["stressed", "anxious", "overwhelmed", "pressure"]),
    (Mood::Sad, &["sad", "depressed", "down", "crying", "hurt"]),
    (Mood::Motivated, &["motivated", "excited", "inspired", "energetic"]),
    (Mood::Peaceful, &["calm", "peaceful", "meditate", "relax"]),
];

/// Phrases indicating acute self-harm risk.
pub const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "no point living",
    "want to die",
    "hurt myself",
    "self harm",
    "overdose",
];

/// Whole-message greetings. Matched after trim + lowercase.
pub const GREETING_PHRASES: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good evening",
    "good afternoon",
    "namaste",
    "how are you",
    "what's up",
    "howdy",
    "greetings",
];

/// Per-message classification. Derived on every call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub mood: Mood,
    pub is_crisis: bool,
    pub is_greeting: bool,
}

/// Runs all three detectors.
pub fn classify(text: &str) -> Classification {
    Classification {
        mood: detect_mood(text),
        is_crisis: detect_crisis(text),
        is_greeting: detect_greeting(text),
    }
}

/// Infers a mood from the first matching keyword table; no match is [`Mood::Neutral`].
pub fn detect_mood(text: &str) -> Mood {
    let lowered = text.to_lowercase();
    MOOD_TABLE
        .iter()
        .find(|(_, words)| words.iter().any(|w| lowered.contains(w)))
        .map(|(mood, _)| *mood)
        .unwrap_or(Mood::Neutral)
}

/// True if any crisis phrase occurs anywhere in the text.
pub fn detect_crisis(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CRISIS_PHRASES.iter().any(|p| lowered.contains(p))
}

/// True only when the whole trimmed message is one of the greeting phrases.
pub fn detect_greeting(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    GREETING_PHRASES.contains(&normalized.as_str())
}
