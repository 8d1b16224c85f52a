use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::session::errors::SessionError;
use business::domain::session::model::{Session, SubmissionOutcome};
use business::domain::session::repository::SessionRepository;
use business::domain::shared::value_objects::SessionId;

/// Process-local session storage. Sessions live until deleted or restart.
#[derive(Default)]
pub struct SessionRepositoryInMemory {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl SessionRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryInMemory {
    async fn insert(&self, session: &Session) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &SessionId) -> Result<Session, SessionError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(SessionError::NotFound)
    }

    async fn delete(&self, id: &SessionId) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(SessionError::NotFound)
    }

    async fn begin_submission(
        &self,
        id: &SessionId,
        prompt: &str,
    ) -> Result<Session, SessionError> {
        // Check and transition under one write guard.
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(id).ok_or(SessionError::NotFound)?;
        stored.begin(prompt)?;
        Ok(stored.clone())
    }

    async fn complete_submission(
        &self,
        id: &SessionId,
        outcome: SubmissionOutcome,
    ) -> Result<Session, SessionError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(id).ok_or(SessionError::NotFound)?;
        stored.complete(outcome)?;
        Ok(stored.clone())
    }

    async fn set_persona(
        &self,
        id: &SessionId,
        persona: Option<String>,
    ) -> Result<Session, SessionError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(id).ok_or(SessionError::NotFound)?;
        stored.set_persona(persona);
        Ok(stored.clone())
    }
}
