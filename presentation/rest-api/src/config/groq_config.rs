use std::env;
use std::str::FromStr;
use std::time::Duration;

use business::domain::errors::ConfigurationError;
use business::domain::shared::value_objects::ApiKey;
use groq::client::{
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, GroqSettings,
};

pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Reads the Groq API key from the process environment.
///
/// Fails with `ConfigurationError::Missing` when the variable is unset or blank.
pub fn get_api_key() -> Result<ApiKey, ConfigurationError> {
    read_api_key(|name| env::var(name).ok())
}

pub fn read_api_key(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ApiKey, ConfigurationError> {
    let raw = lookup(API_KEY_VAR).ok_or_else(|| ConfigurationError::missing(API_KEY_VAR))?;
    ApiKey::parse(API_KEY_VAR, raw)
}

/// Configuration for Groq API access.
///
/// Environment variables:
/// - GROQ_API_KEY: API credential (required)
/// - GROQ_API_BASE: Endpoint base (default: "https://api.groq.com/openai/v1")
/// - GROQ_MODEL: Model name (default: "llama3-70b-8192")
/// - GROQ_MAX_TOKENS: Completion token cap (default: 600)
/// - GROQ_TEMPERATURE: Sampling temperature, 0 to 2 (default: 0.7)
/// - GROQ_TIMEOUT_SECS: Request timeout in seconds (default: 30)
pub struct GroqConfig;

impl GroqConfig {
    pub fn from_env() -> Result<GroqSettings, ConfigurationError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<GroqSettings, ConfigurationError> {
        let api_key = read_api_key(&lookup)?;

        let base_url = non_blank(&lookup, "GROQ_API_BASE")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = non_blank(&lookup, "GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let max_tokens: u32 = parse_or(&lookup, "GROQ_MAX_TOKENS", DEFAULT_MAX_TOKENS)?;
        let temperature: f64 = parse_or(&lookup, "GROQ_TEMPERATURE", DEFAULT_TEMPERATURE)?;
        let timeout_secs: u64 = parse_or(&lookup, "GROQ_TIMEOUT_SECS", 30)?;

        if max_tokens == 0 {
            return Err(ConfigurationError::invalid("GROQ_MAX_TOKENS"));
        }
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigurationError::invalid("GROQ_TEMPERATURE"));
        }
        if timeout_secs == 0 {
            return Err(ConfigurationError::invalid("GROQ_TIMEOUT_SECS"));
        }

        Ok(GroqSettings {
            api_key,
            base_url,
            model,
            max_tokens,
            temperature,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn non_blank(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigurationError> {
    match non_blank(lookup, name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigurationError::invalid(name)),
        None => Ok(default),
    }
}
