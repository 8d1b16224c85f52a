#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("generation.invalid_input")]
    InvalidInput,
    #[error("generation.inference_failed")]
    Inference {
        /// HTTP status returned upstream, absent for local failures.
        status: Option<u16>,
        /// Upstream error code, or a local one such as `timeout`.
        code: Option<String>,
    },
}

impl GenerationError {
    pub fn upstream(status: u16, code: Option<String>) -> Self {
        GenerationError::Inference {
            status: Some(status),
            code,
        }
    }

    pub fn local(code: &str) -> Self {
        GenerationError::Inference {
            status: None,
            code: Some(code.to_string()),
        }
    }

    /// Message safe to show to an end user. Never includes upstream bodies.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::InvalidInput => "Please enter a question before submitting.".to_string(),
            GenerationError::Inference { status, code } => {
                match (status, code.as_deref()) {
                    (_, Some("timeout")) => {
                        "The AI service took too long to answer. Please try again.".to_string()
                    }
                    (Some(401), _) | (Some(403), _) => {
                        "The AI service rejected our credentials. Please contact the operator."
                            .to_string()
                    }
                    (Some(429), _) => {
                        "The AI service is busy right now. Please wait a moment and try again."
                            .to_string()
                    }
                    (_, Some("empty_completion")) | (_, Some("invalid_response")) => {
                        "The AI service returned an empty or unreadable answer. Please try again."
                            .to_string()
                    }
                    (Some(status), _) => format!(
                        "The AI service could not complete your request (status {}). Please try again.",
                        status
                    ),
                    (None, _) => {
                        "The AI service is unreachable right now. Please try again.".to_string()
                    }
                }
            }
        }
    }
}
