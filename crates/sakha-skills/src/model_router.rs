//! Model Router: sends the normal-mode prompt to a mock generator or the Gemini REST API.

use sakha_core::{CoreConfig, GeneratorError, TextGenerator};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ROUTER_NAME: &str = "ModelRouter";
/// Preferred API key variable.
pub const ENV_LLM_API_KEY: &str = "SAKHA_LLM_API_KEY";
/// Fallback API key variable (the Google SDK convention).
pub const ENV_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";

/// Mode for LLM invocation: mock (deterministic local reply) or live (Gemini).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LlmMode {
    #[default]
    Mock,
    Live,
}

impl LlmMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmMode::Mock => "mock",
            LlmMode::Live => "live",
        }
    }
}

/// Reads the API key from `SAKHA_LLM_API_KEY`, then `GOOGLE_API_KEY`. Blank values count as unset.
pub fn api_key_from_env() -> Option<String> {
    [ENV_LLM_API_KEY, ENV_GOOGLE_API_KEY]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|k| k.trim().to_string())
        .find(|k| !k.is_empty())
}

// Gemini generateContent request/response
#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Result<String, GeneratorError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        if text.trim().is_empty() {
            Err(GeneratorError::EmptyResponse)
        } else {
            Ok(text)
        }
    }
}

/// Routes a prompt to a mock LLM or to Gemini.
pub struct ModelRouter {
    mode: LlmMode,
    model: String,
    api_base: String,
    api_key: Option<String>,
    timeout: Duration,
    client: reqwest::Client,
}

impl ModelRouter {
    /// Mock router; never touches the network.
    pub fn mock() -> Self {
        let defaults = CoreConfig::default();
        Self::build(LlmMode::Mock, &defaults, None)
    }

    /// Live Gemini router.
    pub fn live(config: &CoreConfig, api_key: impl Into<String>) -> Self {
        Self::build(LlmMode::Live, config, Some(api_key.into()))
    }

    /// Router for `config.llm_mode`. Returns `None` for "off", and for "live"
    /// without an API key (the engine then answers normal mode offline).
    pub fn from_config(config: &CoreConfig, api_key: Option<String>) -> Option<Self> {
        match config.llm_mode.trim().to_lowercase().as_str() {
            "off" | "none" | "disabled" => None,
            "live" => match api_key {
                Some(key) => Some(Self::live(config, key)),
                None => {
                    tracing::warn!(
                        target: "sakha::generator",
                        "llm_mode is live but neither {} nor {} is set; normal mode runs offline",
                        ENV_LLM_API_KEY,
                        ENV_GOOGLE_API_KEY
                    );
                    None
                }
            },
            _ => Some(Self::build(LlmMode::Mock, config, None)),
        }
    }

    fn build(mode: LlmMode, config: &CoreConfig, api_key: Option<String>) -> Self {
        let timeout = config.generator_timeout();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            mode,
            model: config.llm_model.clone(),
            api_base: config.llm_api_base.trim_end_matches('/').to_string(),
            api_key,
            timeout,
            client,
        }
    }

    pub fn mode(&self) -> LlmMode {
        self.mode
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Mock LLM: a deterministic supportive reply that echoes a preview of the prompt.
    fn mock_generate(&self, prompt: &str) -> String {
        let message = quoted_message(prompt).unwrap_or(prompt);
        let preview: String = message.chars().take(80).collect();
        let ellipsis = if message.chars().count() > 80 { "…" } else { "" };
        format!(
            "[Generated – Mock LLM]\n\nThank you for sharing \"{preview}{ellipsis}\" with me. \
             Whatever you are carrying right now, you don't have to carry it alone. \
             Take a slow breath, and tell me a little more about how you're feeling. 💜"
        )
    }

    /// Gemini `generateContent` call.
    async fn live_generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let key = self.api_key.as_deref().ok_or(GeneratorError::NotConfigured)?;
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let res = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout(self.timeout)
                } else {
                    GeneratorError::Request(e.without_url().to_string())
                }
            })?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GeneratorError::Status { status, body });
        }

        let parsed: GenerateResponse = res
            .json()
            .await
            .map_err(|e| GeneratorError::Request(format!("invalid Gemini response: {}", e.without_url())))?;
        let text = parsed.into_text()?;
        tracing::debug!(target: "sakha::generator", model = %self.model, chars = text.len(), "Gemini call succeeded");
        Ok(text)
    }
}

/// The user text between the first pair of double quotes in a prompt, if any.
fn quoted_message(prompt: &str) -> Option<&str> {
    let start = prompt.find('"')? + 1;
    let len = prompt[start..].find('"')?;
    Some(&prompt[start..start + len])
}

#[async_trait::async_trait]
impl TextGenerator for ModelRouter {
    fn name(&self) -> &str {
        ROUTER_NAME
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        match self.mode {
            LlmMode::Mock => Ok(self.mock_generate(prompt)),
            LlmMode::Live => self.live_generate(prompt).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mode: &str) -> CoreConfig {
        CoreConfig {
            llm_mode: mode.to_string(),
            ..CoreConfig::default()
        }
    }

    #[tokio::test]
    async fn mock_echoes_the_quoted_message() {
        let router = ModelRouter::mock();
        let prompt = sakha_core::strings_for("en").render_prompt("I can't focus on my exams");
        let out = router.generate(&prompt).await.unwrap();
        assert!(out.starts_with("[Generated – Mock LLM]"));
        assert!(out.contains("\"I can't focus on my exams\""));
    }

    #[tokio::test]
    async fn mock_truncates_long_input() {
        let router = ModelRouter::mock();
        let long = "a".repeat(200);
        let out = router.generate(&long).await.unwrap();
        assert!(out.contains(&format!("{}…", "a".repeat(80))));
        assert!(!out.contains(&"a".repeat(81)));
    }

    #[test]
    fn from_config_resolves_mode() {
        assert_eq!(ModelRouter::from_config(&config("mock"), None).map(|r| r.mode()), Some(LlmMode::Mock));
        assert_eq!(
            ModelRouter::from_config(&config("live"), Some("k".into())).map(|r| r.mode()),
            Some(LlmMode::Live)
        );
        assert!(ModelRouter::from_config(&config("live"), None).is_none());
        assert!(ModelRouter::from_config(&config("off"), Some("k".into())).is_none());
    }

    #[test]
    fn request_body_matches_gemini_shape() {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hello" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "contents": [ { "parts": [ { "text": "hello" } ] } ] })
        );
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let raw = serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "You are " }, { "text": "not alone." } ], "role": "model" } },
                { "content": { "parts": [ { "text": "ignored" } ] } }
            ]
        });
        let parsed: GenerateResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.into_text().unwrap(), "You are not alone.");
    }

    #[test]
    fn blocked_or_empty_response_is_an_error() {
        let blocked: GenerateResponse =
            serde_json::from_value(serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } })).unwrap();
        assert_eq!(blocked.into_text(), Err(GeneratorError::EmptyResponse));

        let blank: GenerateResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [ { "content": { "parts": [ { "text": "  " } ] } } ] }))
                .unwrap();
        assert_eq!(blank.into_text(), Err(GeneratorError::EmptyResponse));
    }

    #[tokio::test]
    async fn live_without_key_reports_not_configured() {
        let mut router = ModelRouter::live(&CoreConfig::default(), "k");
        router.api_key = None;
        assert_eq!(router.generate("hi").await, Err(GeneratorError::NotConfigured));
    }
}
