use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{DEFAULT_SUMMARY_CHAR_BUDGET, QuotaLimits};
use crate::infrastructure::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};

use super::Environment;

const NUMBERED_KEY_SLOTS: usize = 5;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub quota: QuotaSettings,
    pub analysis: AnalysisSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub trusted_proxy_hops: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            trusted_proxy_hops: 1,
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub api_keys: Vec<String>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 1000,
            temperature: 0.2,
            timeout_secs: 30,
            api_keys: Vec::new(),
        }
    }
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_keys", &format_args!("[{} redacted]", self.api_keys.len()))
            .finish()
    }
}

impl LlmSettings {
    /// Fills `api_keys` from `GROQ_API_KEY_1`..`GROQ_API_KEY_5`, then from a
    /// single `GROQ_API_KEY`, when nothing was configured explicitly.
    pub fn apply_key_fallback<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_keys.retain(|key| !key.trim().is_empty());
        if !self.api_keys.is_empty() {
            return;
        }

        self.api_keys = (1..=NUMBERED_KEY_SLOTS)
            .filter_map(|slot| lookup(&format!("GROQ_API_KEY_{}", slot)))
            .filter(|key| !key.trim().is_empty())
            .collect();

        if self.api_keys.is_empty() {
            self.api_keys.extend(
                lookup("GROQ_API_KEY").filter(|key| !key.trim().is_empty()),
            );
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuotaSettings {
    pub account_batch: u32,
    pub account_ai_analysis: u32,
    pub guest_batch: u32,
    pub guest_ai_analysis: u32,
}

impl Default for QuotaSettings {
    fn default() -> Self {
        let limits = QuotaLimits::default();
        Self {
            account_batch: limits.account_batch,
            account_ai_analysis: limits.account_ai_analysis,
            guest_batch: limits.guest_batch,
            guest_ai_analysis: limits.guest_ai_analysis,
        }
    }
}

impl From<&QuotaSettings> for QuotaLimits {
    fn from(settings: &QuotaSettings) -> Self {
        Self {
            account_batch: settings.account_batch,
            account_ai_analysis: settings.account_ai_analysis,
            guest_batch: settings.guest_batch,
            guest_ai_analysis: settings.guest_ai_analysis,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub summary_char_budget: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            summary_char_budget: DEFAULT_SUMMARY_CHAR_BUDGET,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,doclens=debug,tower_http=debug".to_string(),
            enable_json: false,
        }
    }
}

impl Settings {
    /// Layers `appsettings.{environment}` (optional) under `APP_*`
    /// environment variables, e.g. `APP_LLM__API_KEYS=key1,key2`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let mut settings: Settings = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("llm.api_keys")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings
            .llm
            .apply_key_fallback(|name| std::env::var(name).ok());

        Ok(settings)
    }
}
