//! Seam to the external text generator used by normal mode.

use std::time::Duration;

/// Why a generator call produced no usable text. Never surfaced to chat callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    #[error("generator timed out after {0:?}")]
    Timeout(Duration),
    #[error("generator request failed: {0}")]
    Request(String),
    #[error("generator returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("generator returned no text")]
    EmptyResponse,
    #[error("generator is not configured")]
    NotConfigured,
}

/// Opaque prompt-to-text function. Implemented by the skills crate (Gemini, mock).
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Name for logs and health output.
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
