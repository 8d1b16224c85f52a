use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::shared::value_objects::SessionId;

pub struct SubmitPromptParams {
    pub session_id: SessionId,
    pub input: String,
}

/// Runs one request/response cycle for a session.
///
/// Returns the session in `Displayed` or `Errored` state. Invalid input and
/// busy sessions are reported as errors and leave the session untouched.
/// Once the session is pending, dropping the returned future does not stop
/// the cycle: the result is still stored.
#[async_trait]
pub trait SubmitPromptUseCase: Send + Sync {
    async fn execute(&self, params: SubmitPromptParams) -> Result<Session, SessionError>;
}
