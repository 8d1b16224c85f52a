use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::Session;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::update_persona::{
    UpdatePersonaParams, UpdatePersonaUseCase,
};

pub struct UpdatePersonaUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePersonaUseCase for UpdatePersonaUseCaseImpl {
    async fn execute(&self, params: UpdatePersonaParams) -> Result<Session, SessionError> {
        let session = self
            .repository
            .set_persona(&params.session_id, params.persona)
            .await?;

        self.logger.info(&format!(
            "Session {} persona set to: {}",
            session.id,
            session.persona().unwrap_or("none")
        ));

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::model::SubmissionOutcome;
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
    async fn should_store_new_persona() {
        let session = Session::new(None);
        let session_id = session.id;

        let mut repo = MockSessionRepo::new();
        repo.expect_set_persona()
            .withf(move |id, persona| {
                *id == session_id && persona.as_deref() == Some("Simone de Beauvoir")
            })
            .times(1)
            .returning(move |_, persona| {
                let mut updated = session.clone();
                updated.set_persona(persona);
                Ok(updated)
            });

        let use_case = UpdatePersonaUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdatePersonaParams {
                session_id,
                persona: Some("Simone de Beauvoir".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.persona(), Some("Simone de Beauvoir"));
    }

    #[tokio::test]
    async fn should_clear_persona_when_none_given() {
        let session = Session::new(Some("Seneca".to_string()));
        let session_id = session.id;

        let mut repo = MockSessionRepo::new();
        repo.expect_set_persona()
            .withf(|_, persona| persona.is_none())
            .returning(move |_, persona| {
                let mut updated = session.clone();
                updated.set_persona(persona);
                Ok(updated)
            });

        let use_case = UpdatePersonaUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdatePersonaParams {
                session_id,
                persona: None,
            })
            .await
            .unwrap();

        assert_eq!(result.persona(), None);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_session() {
        let mut repo = MockSessionRepo::new();
        repo.expect_set_persona()
            .returning(|_, _| Err(SessionError::NotFound));

        let use_case = UpdatePersonaUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdatePersonaParams {
                session_id: SessionId::generate(),
                persona: Some("Seneca".to_string()),
            })
            .await;

        assert_eq!(result.unwrap_err(), SessionError::NotFound);
    }
}
