use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::shared::value_objects::SessionId;

pub struct GetSessionParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait GetSessionUseCase: Send + Sync {
    async fn execute(&self, params: GetSessionParams) -> Result<Session, SessionError>;
}
