use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::generation::errors::GenerationError;
use business::domain::generation::model::{GenerationRequest, GenerationResponse};
use business::domain::generation::services::InferenceService;

use crate::client::GroqClient;

#[derive(Deserialize)]
struct ChatCompletionResponse {
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: Option<ChatCompletionMessage>,
    /// Legacy completion shape.
    text: Option<String>,
}

#[derive(Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}

pub struct ChatCompletionGroq {
    client: GroqClient,
}

impl ChatCompletionGroq {
    pub fn new(client: GroqClient) -> Self {
        Self { client }
    }

    fn build_body(&self, request: &GenerationRequest) -> serde_json::Value {
        let settings = &self.client.settings;
        json!({
            "model": settings.model,
            "messages": [
                {"role": "system", "content": request.instruction()},
                {"role": "user", "content": request.user_input()},
            ],
            "temperature": settings.temperature,
            "max_tokens": settings.max_tokens,
        })
    }

    fn map_transport_error(err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::local("timeout")
        } else {
            GenerationError::local("transport")
        }
    }

    /// Pulls `error.code` (or `error.type`) out of an OpenAI-style error body.
    fn parse_error_code(body: &str) -> Option<String> {
        let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
        let error = parsed.get("error")?;
        error
            .get("code")
            .and_then(|c| c.as_str())
            .or_else(|| error.get("type").and_then(|t| t.as_str()))
            .map(|c| c.to_string())
    }

    fn extract_content(data: ChatCompletionResponse) -> Option<GenerationResponse> {
        let choice = data.choices.into_iter().next()?;
        let text = choice
            .message
            .and_then(|m| m.content)
            .or(choice.text)
            .filter(|t| !t.is_empty())?;

        Some(GenerationResponse::new(text, data.model))
    }
}

#[async_trait]
impl InferenceService for ChatCompletionGroq {
    async fn complete(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let body = self.build_body(request);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::upstream(
                status.as_u16(),
                Self::parse_error_code(&body),
            ));
        }

        let bytes = response.bytes().await.map_err(Self::map_transport_error)?;
        let data: ChatCompletionResponse = serde_json::from_slice(&bytes).map_err(|_| {
            GenerationError::upstream(status.as_u16(), Some("invalid_response".to_string()))
        })?;

        Self::extract_content(data).ok_or_else(|| {
            GenerationError::upstream(status.as_u16(), Some("empty_completion".to_string()))
        })
    }
}
