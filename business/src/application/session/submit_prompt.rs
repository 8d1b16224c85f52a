use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::generation::request_builder::{build_request, build_roleplay_request};
use crate::domain::generation::services::InferenceService;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::{Session, SubmissionOutcome};
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::submit_prompt::{SubmitPromptParams, SubmitPromptUseCase};

pub struct SubmitPromptUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub inference: Arc<dyn InferenceService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitPromptUseCase for SubmitPromptUseCaseImpl {
    async fn execute(&self, params: SubmitPromptParams) -> Result<Session, SessionError> {
        self.logger.info(&format!(
            "Submitting prompt for session: {}",
            params.session_id
        ));

        let current = self.repository.get_by_id(&params.session_id).await?;

        let request = match current.persona() {
            Some(persona) => build_roleplay_request(&params.input, persona),
            None => build_request(&params.input),
        }
        .inspect_err(|_| {
            self.logger.warn(&format!(
                "Rejected empty prompt for session: {}",
                params.session_id
            ))
        })?;

        let session_id = params.session_id;
        let repository = Arc::clone(&self.repository);
        let inference = Arc::clone(&self.inference);
        let logger = Arc::clone(&self.logger);

        // Once the session is pending the cycle must reach a final state, even
        // if the caller stops waiting for it.
        let cycle = tokio::spawn(async move {
            repository
                .begin_submission(&session_id, request.user_input())
                .await?;

            let outcome = match inference.complete(&request).await {
                Ok(response) => {
                    logger.info(&format!(
                        "Completion received for session {} ({} chars)",
                        session_id,
                        response.text().len()
                    ));
                    SubmissionOutcome::Displayed(response.text().to_string())
                }
                Err(err) => {
                    logger.error(&format!(
                        "Inference failed for session {}: {:?}",
                        session_id, err
                    ));
                    SubmissionOutcome::Errored(err.user_message())
                }
            };

            repository.complete_submission(&session_id, outcome).await
        });

        cycle.await.map_err(|err| {
            self.logger.error(&format!(
                "Submit cycle for session {} did not finish: {}",
                params.session_id, err
            ));
            SessionError::Interrupted
        })?
    }
}
