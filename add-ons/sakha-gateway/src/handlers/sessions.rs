use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// GET /api/sessions/:session_id/history – transcript snapshot for one session.
pub(crate) async fn history(State(state): State<AppState>, Path(session_id): Path<String>) -> Response {
    let session = match state.sessions.get(&session_id) {
        Some(entry) => entry.value().clone(),
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "unknown session", "session_id": session_id })),
            )
                .into_response();
        }
    };

    let transcript = session.transcript();
    Json(serde_json::json!({
        "session_id": session.id(),
        "turns": transcript.len(),
        "entries": transcript.entries(),
    }))
    .into_response()
}
