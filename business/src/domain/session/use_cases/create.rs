use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;

pub struct CreateSessionParams {
    pub persona: Option<String>,
}

#[async_trait]
pub trait CreateSessionUseCase: Send + Sync {
    async fn execute(&self, params: CreateSessionParams) -> Result<Session, SessionError>;
}
