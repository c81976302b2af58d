//! One conversation: a shared dispatcher plus this session's transcript.

use super::{DispatchResult, Dispatcher};
use crate::memory::{ConversationTranscript, Speaker, TranscriptEntry};
use crate::shared::Mode;
use std::sync::{Arc, Mutex, MutexGuard};

pub struct ChatSession {
    id: String,
    dispatcher: Arc<Dispatcher>,
    transcript: Mutex<ConversationTranscript>,
}

impl ChatSession {
    pub fn new(id: impl Into<String>, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            id: id.into(),
            dispatcher,
            transcript: Mutex::new(ConversationTranscript::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Dispatches and records the user turn and the reply as one adjacent pair.
    /// Concurrent sends on one session are ordered by completion; the user turn
    /// keeps its arrival timestamp. The lock is never held across the dispatch await.
    pub async fn send(&self, message: &str, mode: Mode, language: &str) -> DispatchResult {
        let asked = TranscriptEntry::now(Speaker::User, message);
        let result = self.dispatcher.dispatch(message, mode, language).await;
        let mut transcript = self.lock();
        transcript.append(asked);
        transcript.append(TranscriptEntry::now(Speaker::System, result.response.as_str()));
        result
    }

    /// Snapshot of the transcript so far.
    pub fn transcript(&self) -> ConversationTranscript {
        self.lock().clone()
    }

    pub fn turns(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, ConversationTranscript> {
        // Appends cannot leave the transcript half-written, so a poisoned lock is still usable.
        self.transcript.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
