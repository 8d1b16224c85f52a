use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::shared::value_objects::SessionId;

pub struct UpdatePersonaParams {
    pub session_id: SessionId,
    pub persona: Option<String>,
}

#[async_trait]
pub trait UpdatePersonaUseCase: Send + Sync {
    async fn execute(&self, params: UpdatePersonaParams) -> Result<Session, SessionError>;
}
