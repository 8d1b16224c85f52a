use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::create::{CreateSessionParams, CreateSessionUseCase};

pub struct CreateSessionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateSessionUseCase for CreateSessionUseCaseImpl {
    async fn execute(&self, params: CreateSessionParams) -> Result<Session, SessionError> {
        let session = Session::new(params.persona);
        self.repository.insert(&session).await?;

        self.logger
            .info(&format!("Session created with id: {}", session.id));

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::model::{SessionState, SubmissionOutcome};
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;

    mock! {
        pub SessionRepo {}

        #[async_trait]
        impl SessionRepository for SessionRepo {
            async fn insert(&self, session: &Session) -> Result<(), SessionError>;
            async fn get_by_id(&self, id: &SessionId) -> Result<Session, SessionError>;
            async fn delete(&self, id: &SessionId) -> Result<(), SessionError>;
            async fn begin_submission(
                &self,
                id: &SessionId,
                prompt: &str,
            ) -> Result<Session, SessionError>;
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
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_create_idle_session_with_persona() {
        let mut repo = MockSessionRepo::new();
        repo.expect_insert()
            .withf(|s| s.persona() == Some("Nelson Mandela"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateSessionUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(CreateSessionParams {
                persona: Some("Nelson Mandela".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.persona(), Some("Nelson Mandela"));
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut repo = MockSessionRepo::new();
        repo.expect_insert()
            .returning(|_| Err(SessionError::InvalidTransition));

        let use_case = CreateSessionUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(CreateSessionParams { persona: None }).await;

        assert!(result.is_err());
    }
}
