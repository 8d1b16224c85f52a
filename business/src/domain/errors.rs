/// Configuration errors raised while loading settings at startup.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("configuration.missing: {0}")]
    Missing(String),
    #[error("configuration.invalid: {0}")]
    Invalid(String),
}

impl ConfigurationError {
    pub fn missing(name: impl Into<String>) -> Self {
        ConfigurationError::Missing(name.into())
    }
    pub fn invalid(name: impl Into<String>) -> Self {
        ConfigurationError::Invalid(name.into())
    }
}
