//! Shared types used across all Sakha crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Language used when the requested one has no authored text.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Session id used when the caller does not name one (single-conversation mode).
pub const DEFAULT_SESSION_ID: &str = "default";

/// Caller-selected response strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Open-ended reply from the external text generator.
    #[default]
    Normal,
    /// Dataset-driven reply, biased towards Bhagavad Gita verses.
    #[serde(alias = "gita")]
    Wisdom,
    /// Dataset-driven reply, biased towards quotes from inspiring people.
    Inspire,
}

impl Mode {
    /// Lenient wire parsing: unknown values resolve to [`Mode::Normal`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "wisdom" | "gita" => Mode::Wisdom,
            "inspire" => Mode::Inspire,
            _ => Mode::Normal,
        }
    }

    /// Wire name (`"normal"`, `"wisdom"`, `"inspire"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Wisdom => "wisdom",
            Mode::Inspire => "inspire",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mood inferred from a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Stressed,
    Sad,
    Motivated,
    Peaceful,
    Neutral,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Stressed => "stressed",
            Mood::Sad => "sad",
            Mood::Motivated => "motivated",
            Mood::Peaceful => "peaceful",
            Mood::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global application configuration (gateway + engine). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity shown by the health endpoint and startup log.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Text generator mode: "mock", "live" (Gemini) or "off".
    pub llm_mode: String,
    /// Model name passed to the live generator.
    pub llm_model: String,
    /// Base URL of the Gemini REST API.
    pub llm_api_base: String,
    /// Upper bound for a single generator call.
    pub generator_timeout_secs: u64,
    /// Extra attempts after a failed generator call. Only 0 or 1 is honoured.
    #[serde(default)]
    pub generator_retries: u8,
    /// Optional JSON catalog replacing the embedded one.
    #[serde(default)]
    pub catalog_path: Option<String>,
    /// Seed for the random source (greetings and fallback entry picks). Unset = thread RNG.
    #[serde(default)]
    pub rng_seed: Option<u64>,

    /// If true, the gateway serves the static UI from `static_dir`. (Config alias: `ui_enabled`)
    #[serde(default, alias = "ui_enabled")]
    pub frontend_enabled: bool,
    /// Directory holding `index.html` and static assets.
    pub static_dir: String,
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `SAKHA_CONFIG` path > `config/gateway.toml` > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("SAKHA_CONFIG").unwrap_or_else(|_| "config/gateway.toml".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "Sakha Gateway")?
            .set_default("port", 8000_i64)?
            .set_default("llm_mode", "mock")?
            .set_default("llm_model", "gemini-1.5-flash")?
            .set_default("llm_api_base", "https://generativelanguage.googleapis.com/v1beta")?
            .set_default("generator_timeout_secs", 20_i64)?
            .set_default("generator_retries", 0_i64)?
            .set_default("frontend_enabled", false)?
            .set_default("static_dir", "static")?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("SAKHA").separator("__"))
            .build()?;

        built.try_deserialize()
    }

    /// Generator timeout as a [`std::time::Duration`] (never zero).
    pub fn generator_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.generator_timeout_secs.max(1))
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "Sakha Gateway".to_string(),
            port: 8000,
            llm_mode: "mock".to_string(),
            llm_model: "gemini-1.5-flash".to_string(),
            llm_api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            generator_timeout_secs: 20,
            generator_retries: 0,
            catalog_path: None,
            rng_seed: None,
            frontend_enabled: false,
            static_dir: "static".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parse_accepts_legacy_gita_alias() {
        assert_eq!(Mode::parse("gita"), Mode::Wisdom);
        assert_eq!(Mode::parse(" Wisdom "), Mode::Wisdom);
        assert_eq!(Mode::parse("inspire"), Mode::Inspire);
        assert_eq!(Mode::parse("whatever"), Mode::Normal);
        assert_eq!(Mode::parse(""), Mode::Normal);
    }

    #[test]
    fn mode_and_mood_serialize_as_wire_names() {
        assert_eq!(serde_json::to_string(&Mode::Wisdom).unwrap(), "\"wisdom\"");
        assert_eq!(serde_json::to_string(&Mood::Peaceful).unwrap(), "\"peaceful\"");
        let m: Mode = serde_json::from_str("\"gita\"").unwrap();
        assert_eq!(m, Mode::Wisdom);
    }

    #[test]
    fn load_layers_toml_file_then_env_over_defaults() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "port = 9001\nrng_seed = 7\ngenerator_retries = 1\nllm_mode = \"off\"").unwrap();

        std::env::set_var("SAKHA_CONFIG", file.path());
        std::env::set_var("SAKHA__PORT", "9100");
        let loaded = CoreConfig::load();
        std::env::remove_var("SAKHA_CONFIG");
        std::env::remove_var("SAKHA__PORT");

        let config = loaded.unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.generator_retries, 1);
        assert_eq!(config.llm_mode, "off");
        assert_eq!(config.app_name, "Sakha Gateway");
        assert_eq!(config.generator_timeout_secs, 20);
        assert!(!config.frontend_enabled);
    }

    #[test]
    fn generator_timeout_is_never_zero() {
        let config = CoreConfig {
            generator_timeout_secs: 0,
            ..CoreConfig::default()
        };
        assert_eq!(config.generator_timeout(), std::time::Duration::from_secs(1));
    }
}
