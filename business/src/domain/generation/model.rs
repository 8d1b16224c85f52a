/// Prompt sent to the inference service.
///
/// Immutable once built; see [`super::request_builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    instruction: String,
    user_input: String,
}

impl GenerationRequest {
    pub(crate) fn new(instruction: String, user_input: String) -> Self {
        Self {
            instruction,
            user_input,
        }
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }
}

/// Text generated for a request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResponse {
    text: String,
    model: Option<String>,
}

impl GenerationResponse {
    pub fn new(text: impl Into<String>, model: Option<String>) -> Self {
        Self {
            text: text.into(),
            model,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Model name reported by the provider, when present.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}
