use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::shared::value_objects::SessionId;

pub struct DeleteSessionParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait DeleteSessionUseCase: Send + Sync {
    async fn execute(&self, params: DeleteSessionParams) -> Result<(), SessionError>;
}
