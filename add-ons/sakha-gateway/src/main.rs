//! Axum-based API gateway for the Sakha wellness-chat engine. Config-driven via CoreConfig.

mod handlers;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use dashmap::DashMap;
use sakha_core::{now_rfc3339, ChatSession, ContentCatalog, CoreConfig, Dispatcher, MentalHealthResources};
use sakha_skills::{api_key_from_env, ModelRouter};
use std::path::Path as StdPath;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pre-flight check: config parses, catalog validates, port is free.
fn run_verify() -> Result<(), String> {
    print!("Loading config... ");
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;
    println!("OK ({}, llm_mode = {})", config.app_name, config.llm_mode);

    print!("Loading wisdom catalog... ");
    let catalog = ContentCatalog::load(config.catalog_path.as_deref())
        .map_err(|e| format!("Catalog INVALID: {}", e))?;
    println!(
        "OK ({} datasets, {} entries)",
        catalog.datasets().len(),
        catalog.entry_count()
    );

    if config.llm_mode.eq_ignore_ascii_case("live") {
        print!("Checking LLM API key... ");
        match api_key_from_env() {
            Some(_) => println!("OK"),
            None => println!("MISSING (normal mode will answer offline)"),
        }
    }

    if config.frontend_enabled {
        let index = StdPath::new(&config.static_dir).join("index.html");
        print!("Checking {}... ", index.display());
        if !index.exists() {
            return Err(format!("Frontend enabled but {} is missing", index.display()));
        }
        println!("OK");
    }

    let port = config.port;
    print!("Checking port {}... ", port);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    match std::net::TcpListener::bind(addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("Port {} BLOCKED: {}", port, e));
        }
    }

    println!("\n✅ SUCCESS: All systems GO. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[sakha-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("❌ PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load().expect("load CoreConfig"));
    let catalog = Arc::new(
        ContentCatalog::load(config.catalog_path.as_deref()).expect("load wisdom catalog"),
    );

    let mut dispatcher = Dispatcher::new(catalog).with_config(&config);
    let llm_mode = match ModelRouter::from_config(&config, api_key_from_env()) {
        Some(router) => {
            let mode = router.mode().as_str();
            tracing::info!(target: "sakha::generator", mode, model = router.model(), "Text generator ready");
            dispatcher = dispatcher.with_generator(Arc::new(router));
            mode
        }
        None => {
            tracing::info!(target: "sakha::generator", "No text generator; normal mode answers offline");
            "off"
        }
    };

    let app = build_app(AppState {
        config: Arc::clone(&config),
        dispatcher: Arc::new(dispatcher),
        sessions: Arc::new(DashMap::new()),
        llm_mode,
    });

    let port = config.port;
    let app_name = config.app_name.clone();
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!(target: "sakha::gateway", "{} listening on {}", app_name, addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr).await.unwrap(),
        app,
    )
    .await
    .unwrap();
}

fn build_app(state: AppState) -> Router {
    let frontend_enabled = state.config.frontend_enabled;
    let static_dir = std::path::PathBuf::from(&state.config.static_dir);

    // Browser UI may be served from anywhere during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/health", get(health))
        .route("/api/resources", get(resources))
        .route("/api/sessions/:session_id/history", get(handlers::sessions::history))
        .with_state(state);

    if frontend_enabled {
        // Map `/` -> `<static_dir>/index.html`
        app = app.route_service("/", ServeFile::new(static_dir.join("index.html")));
        // Map `/static/*` -> `<static_dir>/*` (app.js, CSS, images)
        app = app.nest_service("/static", ServeDir::new(static_dir));
    }

    app.layer(cors)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) dispatcher: Arc<Dispatcher>,
    pub(crate) sessions: Arc<DashMap<String, Arc<ChatSession>>>,
    /// Effective generator mode: "mock", "live" or "off".
    pub(crate) llm_mode: &'static str,
}

/// GET /api/health – liveness check for UI and scripts.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "app_name": state.config.app_name,
        "ai_enabled": state.dispatcher.generator_enabled(),
        "generator": state.dispatcher.generator_name(),
        "llm_mode": state.llm_mode,
        "sessions": state.sessions.len(),
        "timestamp": now_rfc3339(),
    }))
}

/// GET /api/resources – crisis hotlines and therapy options.
async fn resources(State(state): State<AppState>) -> Json<MentalHealthResources> {
    Json(state.dispatcher.crisis_resources().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sakha_core::{strings, FixedIndex, Language};
    use tower::ServiceExt;

    fn test_state(with_generator: bool) -> AppState {
        let catalog = Arc::new(ContentCatalog::builtin().unwrap());
        let mut dispatcher = Dispatcher::new(catalog).with_random(Arc::new(FixedIndex(0)));
        if with_generator {
            dispatcher = dispatcher.with_generator(Arc::new(ModelRouter::mock()));
        }
        AppState {
            config: Arc::new(CoreConfig {
                app_name: "Test Gateway".to_string(),
                ..CoreConfig::default()
            }),
            dispatcher: Arc::new(dispatcher),
            sessions: Arc::new(DashMap::new()),
            llm_mode: if with_generator { "mock" } else { "off" },
        }
    }

    fn chat_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_crisis_returns_resources_for_any_mode() {
        let app = build_app(test_state(true));
        let res = app
            .oneshot(chat_request(serde_json::json!({
                "message": "I want to die",
                "mode": "inspire",
                "language": "hi"
            })))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["crisis_detected"], true);
        assert_eq!(json["response"], strings(Language::Hi).crisis);
        assert_eq!(json["mode"], "inspire");
        assert_eq!(json["language"], "hi");
    }

    #[tokio::test]
    async fn test_chat_blank_message_skips_engine_and_sessions() {
        let state = test_state(true);
        let app = build_app(state.clone());
        let res = app
            .oneshot(chat_request(serde_json::json!({ "message": "   ", "language": "ta" })))
            .await
            .unwrap();
        let json = json_body(res).await;
        assert_eq!(json["response"], strings(Language::Ta).empty_input);
        assert_eq!(json["mood"], "neutral");
        assert_eq!(json["mode"], "normal");
        assert!(state.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_chat_defaults_and_gita_alias() {
        let app = build_app(test_state(false));
        let res = app
            .clone()
            .oneshot(chat_request(serde_json::json!({ "message": "I feel so stressed and overwhelmed" })))
            .await
            .unwrap();
        let json = json_body(res).await;
        assert_eq!(json["mood"], "stressed");
        assert_eq!(json["mode"], "normal");
        assert_eq!(json["language"], "en");
        assert_eq!(json["response"], strings(Language::En).generator_offline);
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));

        let res = app
            .oneshot(chat_request(serde_json::json!({
                "message": "karma and duty on the battlefield",
                "mode": "gita"
            })))
            .await
            .unwrap();
        let json = json_body(res).await;
        assert_eq!(json["mode"], "wisdom");
        assert!(json["response"].as_str().unwrap().contains("Chapter 1, Verse 1"));
    }

    #[tokio::test]
    async fn test_chat_normal_mode_uses_mock_generator() {
        let app = build_app(test_state(true));
        let res = app
            .oneshot(chat_request(serde_json::json!({ "message": "I had a long day at work" })))
            .await
            .unwrap();
        let json = json_body(res).await;
        let response = json["response"].as_str().unwrap();
        assert!(response.starts_with("[Generated – Mock LLM]"));
        assert!(response.contains("I had a long day at work"));
    }

    #[tokio::test]
    async fn test_history_tracks_sessions_separately() {
        let state = test_state(false);
        let app = build_app(state.clone());
        for (message, session) in [("hi", None), ("tell me about dharma", None), ("hello", Some("other"))] {
            let mut body = serde_json::json!({ "message": message, "mode": "wisdom" });
            if let Some(id) = session {
                body["session_id"] = serde_json::json!(id);
            }
            let res = app.clone().oneshot(chat_request(body)).await.unwrap();
            assert_eq!(res.status(), StatusCode::OK);
        }

        let req = Request::builder()
            .uri("/api/sessions/default/history")
            .body(Body::empty())
            .unwrap();
        let json = json_body(app.clone().oneshot(req).await.unwrap()).await;
        assert_eq!(json["turns"], 4);
        assert_eq!(json["entries"][0]["speaker"], "user");
        assert_eq!(json["entries"][0]["text"], "hi");
        assert_eq!(json["entries"][1]["speaker"], "system");

        let req = Request::builder()
            .uri("/api/sessions/other/history")
            .body(Body::empty())
            .unwrap();
        let json = json_body(app.clone().oneshot(req).await.unwrap()).await;
        assert_eq!(json["turns"], 2);

        let req = Request::builder()
            .uri("/api/sessions/missing/history")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_oversized_session_id_is_rejected() {
        let state = test_state(false);
        let app = build_app(state.clone());
        let res = app
            .clone()
            .oneshot(chat_request(serde_json::json!({
                "message": "hello",
                "language": "fr",
                "session_id": "x".repeat(129)
            })))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = json_body(res).await;
        assert_eq!(json["response"], strings(Language::Fr).technical_difficulty);
        assert!(state.sessions.is_empty());

        let res = app
            .oneshot(chat_request(serde_json::json!({
                "message": "hello",
                "session_id": "y".repeat(128)
            })))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(state.sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_gets_technical_difficulty_reply() {
        let app = build_app(test_state(true));
        let req = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = json_body(res).await;
        assert_eq!(json["response"], strings(Language::En).technical_difficulty);
        assert_eq!(json["crisis_detected"], false);
    }

    #[tokio::test]
    async fn test_health_reports_generator_state() {
        let app = build_app(test_state(true));
        let req = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let json = json_body(app.oneshot(req).await.unwrap()).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["ai_enabled"], true);
        assert_eq!(json["llm_mode"], "mock");
        assert_eq!(json["generator"], "ModelRouter");
        assert_eq!(json["app_name"], "Test Gateway");

        let app = build_app(test_state(false));
        let req = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let json = json_body(app.oneshot(req).await.unwrap()).await;
        assert_eq!(json["ai_enabled"], false);
        assert_eq!(json["llm_mode"], "off");
        assert!(json["generator"].is_null());
    }

    #[tokio::test]
    async fn test_resources_lists_crisis_lines() {
        let app = build_app(test_state(false));
        let req = Request::builder().uri("/api/resources").body(Body::empty()).unwrap();
        let json = json_body(app.oneshot(req).await.unwrap()).await;
        assert!(json["crisis"]["india"].as_array().map_or(false, |a| !a.is_empty()));
        assert!(json["therapy"]["online"].is_array());
    }

    #[tokio::test]
    async fn test_frontend_served_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Sakha</h1>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('sakha');").unwrap();

        let mut state = test_state(false);
        state.config = Arc::new(CoreConfig {
            frontend_enabled: true,
            static_dir: dir.path().to_string_lossy().into_owned(),
            ..CoreConfig::default()
        });
        let app = build_app(state);

        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>Sakha</h1>");

        let req = Request::builder().uri("/static/app.js").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
