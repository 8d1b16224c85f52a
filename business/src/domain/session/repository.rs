use async_trait::async_trait;

use crate::domain::shared::value_objects::SessionId;

use super::errors::SessionError;
use super::model::{Session, SubmissionOutcome};

/// Storage port for live sessions.
///
/// Every change is applied to the stored session in one step, so concurrent
/// writers never overwrite each other with stale snapshots.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: &Session) -> Result<(), SessionError>;
    async fn get_by_id(&self, id: &SessionId) -> Result<Session, SessionError>;
    async fn delete(&self, id: &SessionId) -> Result<(), SessionError>;
    /// Atomically moves the stored session to `Pending` for `prompt`.
    ///
    /// Fails with `Busy` when a request is already in flight.
    async fn begin_submission(
        &self,
        id: &SessionId,
        prompt: &str,
    ) -> Result<Session, SessionError>;
    /// Atomically ends the stored session's pending cycle with `outcome`.
    async fn complete_submission(
        &self,
        id: &SessionId,
        outcome: SubmissionOutcome,
    ) -> Result<Session, SessionError>;
    async fn set_persona(
        &self,
        id: &SessionId,
        persona: Option<String>,
    ) -> Result<Session, SessionError>;
}
