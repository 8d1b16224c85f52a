use async_trait::async_trait;

use super::errors::GenerationError;
use super::model::{GenerationRequest, GenerationResponse};

/// Service port for the hosted text-generation API.
///
/// Implementations send exactly one upstream request per call and never
/// retry. Credentials are bound at construction time.
#[async_trait]
pub trait InferenceService: Send + Sync {
    async fn complete(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError>;
}
