//! Dispatcher: classify, route, then answer from the catalog or the text generator.
//!
//! Routing order is fixed: crisis, then greeting, then the caller's mode.
//! Crisis preempts every mode, and a message is never checked for a greeting
//! once it has matched a crisis phrase.

mod generator;
mod session;

pub use generator::{GeneratorError, TextGenerator};
pub use session::ChatSession;

use crate::classifier::{classify, Classification};
use crate::composer::compose;
use crate::knowledge::{ContentCatalog, DatasetSelector, MentalHealthResources, RandomSource, SeededRandom, ThreadRandom};
use crate::locale::{self, Language};
use crate::shared::{CoreConfig, Mode, Mood};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Default bound for one generator call.
pub const DEFAULT_GENERATOR_TIMEOUT: Duration = Duration::from_secs(20);

/// Terminal branch for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Crisis,
    Greeting,
    Wisdom,
    Inspire,
    Normal,
}

/// Picks the branch for a classified message.
pub fn route(classification: &Classification, mode: Mode) -> Route {
    if classification.is_crisis {
        return Route::Crisis;
    }
    if classification.is_greeting {
        return Route::Greeting;
    }
    match mode {
        Mode::Wisdom => Route::Wisdom,
        Mode::Inspire => Route::Inspire,
        Mode::Normal => Route::Normal,
    }
}

/// Reply contract returned for every message. `crisis_detected` implies `response`
/// is the crisis-resource text and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResult {
    pub response: String,
    pub mood: Mood,
    pub crisis_detected: bool,
    /// UTC, RFC 3339 with milliseconds.
    pub timestamp: String,
    pub mode: Mode,
    /// The caller's language code, echoed unchanged.
    pub language: String,
}

impl DispatchResult {
    pub fn new(
        response: impl Into<String>,
        mood: Mood,
        crisis_detected: bool,
        mode: Mode,
        language: impl Into<String>,
    ) -> Self {
        Self {
            response: response.into(),
            mood,
            crisis_detected,
            timestamp: now_rfc3339(),
            mode,
            language: language.into(),
        }
    }
}

/// Current UTC time as RFC 3339 with milliseconds.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Message engine. Cheap to share behind an `Arc`; holds no per-conversation state.
pub struct Dispatcher {
    catalog: Arc<ContentCatalog>,
    selector: DatasetSelector,
    random: Arc<dyn RandomSource>,
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
    retries: u8,
}

impl Dispatcher {
    /// Dispatcher with thread RNG, no generator and the default timeout.
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        let random: Arc<dyn RandomSource> = Arc::new(ThreadRandom);
        Self {
            selector: DatasetSelector::new(Arc::clone(&catalog), Arc::clone(&random)),
            catalog,
            random,
            generator: None,
            timeout: DEFAULT_GENERATOR_TIMEOUT,
            retries: 0,
        }
    }

    /// Applies timeout, retry and seed settings from config.
    pub fn with_config(self, config: &CoreConfig) -> Self {
        let this = self
            .with_timeout(config.generator_timeout())
            .with_retries(config.generator_retries);
        match config.rng_seed {
            Some(seed) => this.with_random(Arc::new(SeededRandom::new(seed))),
            None => this,
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.selector = DatasetSelector::new(Arc::clone(&self.catalog), Arc::clone(&random));
        self.random = random;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// At most one retry is honoured.
    pub fn with_retries(mut self, retries: u8) -> Self {
        self.retries = retries.min(1);
        self
    }

    /// Read-only crisis and therapy listing.
    pub fn crisis_resources(&self) -> &MentalHealthResources {
        self.catalog.resources()
    }

    pub fn generator_enabled(&self) -> bool {
        self.generator.is_some()
    }

    pub fn generator_name(&self) -> Option<&str> {
        self.generator.as_deref().map(|g| g.name())
    }

    /// Answers one message. Never fails: every branch yields a well-formed result.
    pub async fn dispatch(&self, message: &str, mode: Mode, language: &str) -> DispatchResult {
        let classification = classify(message);
        let lang = Language::resolve(language);
        let strings = locale::strings(lang);

        match route(&classification, mode) {
            Route::Crisis => {
                tracing::warn!(
                    target: "sakha::dispatch",
                    mode = %mode,
                    message_chars = message.chars().count(),
                    "Crisis phrase detected; replying with crisis resources"
                );
                DispatchResult::new(strings.crisis, classification.mood, true, mode, language)
            }
            Route::Greeting => {
                let idx = self.random.pick_index(strings.greetings.len());
                let reply = strings.greetings[idx.min(strings.greetings.len() - 1)];
                DispatchResult::new(reply, Mood::Neutral, false, mode, language)
            }
            Route::Wisdom | Route::Inspire => {
                let selection = self.selector.select(message, mode);
                tracing::debug!(
                    target: "sakha::dispatch",
                    mode = %mode,
                    dataset = %selection.dataset,
                    entry = selection.entry.label(),
                    pick = ?selection.pick,
                    "Wisdom entry selected"
                );
                let reply = compose(selection.entry, lang);
                DispatchResult::new(reply, classification.mood, false, mode, language)
            }
            Route::Normal => {
                let reply = self.generate_reply(message, lang).await;
                DispatchResult::new(reply, classification.mood, false, mode, language)
            }
        }
    }

    async fn generate_reply(&self, message: &str, lang: Language) -> String {
        let strings = locale::strings(lang);
        let Some(generator) = self.generator.as_deref() else {
            return strings.generator_offline.to_string();
        };

        let prompt = strings.render_prompt(message);
        let attempts = 1 + u32::from(self.retries);
        for attempt in 1..=attempts {
            match self.call_generator(generator, &prompt).await {
                Ok(text) => return text,
                Err(err) => tracing::warn!(
                    target: "sakha::generator",
                    generator = generator.name(),
                    attempt,
                    error = %err,
                    "Text generation failed"
                ),
            }
        }
        strings.generator_failed.to_string()
    }

    async fn call_generator(&self, generator: &dyn TextGenerator, prompt: &str) -> Result<String, GeneratorError> {
        match tokio::time::timeout(self.timeout, generator.generate(prompt)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => Ok(text),
            Ok(Ok(_)) => Err(GeneratorError::EmptyResponse),
            Ok(Err(err)) => Err(err),
            Err(_) => Err(GeneratorError::Timeout(self.timeout)),
        }
    }
}
