//! Chat handler: blank-message short-circuit, per-session dispatch, correlation-id span.
//!
//! Blank messages are answered here with the localized empty-input reply and
//! never reach the engine or a transcript.

use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use sakha_core::{
    strings_for, ChatSession, DispatchResult, Mode, Mood, DEFAULT_LANGUAGE, DEFAULT_SESSION_ID,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::Instrument;

/// Longest accepted `session_id`, in bytes. Sessions are never evicted.
pub(crate) const MAX_SESSION_ID_LEN: usize = 128;

fn default_mode() -> String {
    Mode::Normal.as_str().to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    pub(crate) message: String,
    #[serde(default = "default_mode")]
    pub(crate) mode: String,
    #[serde(default = "default_language")]
    pub(crate) language: String,
    #[serde(default)]
    pub(crate) session_id: Option<String>,
}

/// Session for `id`, created on first use. The map guard is dropped before returning.
pub(crate) fn session_for(state: &AppState, id: &str) -> Arc<ChatSession> {
    state
        .sessions
        .entry(id.to_string())
        .or_insert_with(|| Arc::new(ChatSession::new(id, Arc::clone(&state.dispatcher))))
        .value()
        .clone()
}

/// POST /api/chat
pub(crate) async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> (StatusCode, Json<DispatchResult>) {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!(target: "sakha::gateway", error = %rejection, "Rejected chat request body");
            let reply = DispatchResult::new(
                strings_for(DEFAULT_LANGUAGE).technical_difficulty,
                Mood::Neutral,
                false,
                Mode::Normal,
                DEFAULT_LANGUAGE,
            );
            return (StatusCode::BAD_REQUEST, Json(reply));
        }
    };

    let mode = Mode::parse(&req.mode);
    let session_id = req
        .session_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SESSION_ID)
        .to_string();
    if session_id.len() > MAX_SESSION_ID_LEN {
        tracing::warn!(target: "sakha::gateway", len = session_id.len(), "Rejected oversized session id");
        let reply = DispatchResult::new(
            strings_for(&req.language).technical_difficulty,
            Mood::Neutral,
            false,
            mode,
            req.language,
        );
        return (StatusCode::BAD_REQUEST, Json(reply));
    }
    let correlation_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!(
        target: "sakha::gateway",
        "chat",
        correlation_id = %correlation_id,
        session = %session_id,
        mode = %mode,
        language = %req.language,
    );

    async move {
        if req.message.trim().is_empty() {
            tracing::debug!(target: "sakha::gateway", "Blank message; sending empty-input reply");
            let reply = DispatchResult::new(
                strings_for(&req.language).empty_input,
                Mood::Neutral,
                false,
                mode,
                req.language,
            );
            return (StatusCode::OK, Json(reply));
        }

        tracing::info!(target: "sakha::gateway", chars = req.message.chars().count(), "Chat request received");
        let session = session_for(&state, &session_id);
        let result = session.send(&req.message, mode, &req.language).await;
        tracing::info!(
            target: "sakha::gateway",
            mood = %result.mood,
            crisis = result.crisis_detected,
            "Chat response sent"
        );
        (StatusCode::OK, Json(result))
    }
    .instrument(span)
    .await
}
