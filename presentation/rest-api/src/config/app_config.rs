use business::domain::errors::ConfigurationError;
use groq::client::GroqSettings;
use poem::middleware::Cors;

use super::{cors_config, groq_config::GroqConfig, server_config::ServerConfig};

/// Everything read from the environment at startup. Immutable afterwards.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub groq: GroqSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Ok(Self {
            groq: GroqConfig::from_env()?,
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
        })
    }
}
