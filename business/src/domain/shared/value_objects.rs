use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::ConfigurationError;

/// Credential used to authenticate against the inference API.
///
/// Can only hold a non-empty value and never exposes it through `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates the raw value read for `name`. Surrounding whitespace is
    /// ignored when checking emptiness but the value is kept as provided.
    pub fn parse(name: &str, raw: impl Into<String>) -> Result<Self, ConfigurationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ConfigurationError::missing(name));
        }
        Ok(Self(raw))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Identifies one interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_exact_api_key_value() {
        let key = ApiKey::parse("GROQ_API_KEY", "gsk_test-123").unwrap();
        assert_eq!(key.expose(), "gsk_test-123");
    }

    #[test]
    fn should_reject_empty_api_key() {
        let result = ApiKey::parse("GROQ_API_KEY", "");
        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::Missing("GROQ_API_KEY".to_string())
        );
    }

    #[test]
    fn should_reject_whitespace_api_key() {
        assert!(ApiKey::parse("GROQ_API_KEY", "  \t ").is_err());
    }

    #[test]
    fn should_redact_api_key_in_debug_output() {
        let key = ApiKey::parse("GROQ_API_KEY", "gsk_secret").unwrap();
        let printed = format!("{:?}", key);
        assert!(!printed.contains("gsk_secret"));
    }

    #[test]
    fn should_display_session_id_as_uuid() {
        let uuid = Uuid::new_v4();
        let id = SessionId::from(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn should_generate_distinct_session_ids() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }
}
