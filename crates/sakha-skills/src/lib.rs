//! Concrete text generators behind the core `TextGenerator` seam.

pub use sakha_core::{GeneratorError, TextGenerator};

mod model_router;

pub use model_router::{api_key_from_env, LlmMode, ModelRouter, ENV_GOOGLE_API_KEY, ENV_LLM_API_KEY};
