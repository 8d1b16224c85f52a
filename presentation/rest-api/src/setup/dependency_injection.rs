use std::sync::Arc;

use logger::TracingLogger;
use session_store::session::repository::SessionRepositoryInMemory;

use groq::chat_completion::ChatCompletionGroq;
use groq::client::{GroqClient, GroqSettings};

use business::application::session::create::CreateSessionUseCaseImpl;
use business::application::session::delete::DeleteSessionUseCaseImpl;
use business::application::session::get_by_id::GetSessionUseCaseImpl;
use business::application::session::submit_prompt::SubmitPromptUseCaseImpl;
use business::application::session::update_persona::UpdatePersonaUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::HealthApi,
    pub session_api: crate::api::session::routes::SessionApi,
}

impl DependencyContainer {
    pub fn new(groq_settings: GroqSettings) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::HealthApi::new();

        // Infrastructure adapters
        let session_repository = Arc::new(SessionRepositoryInMemory::new());
        let inference = Arc::new(ChatCompletionGroq::new(GroqClient::new(groq_settings)?));

        // Session use cases
        let create_use_case = Arc::new(CreateSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let submit_use_case = Arc::new(SubmitPromptUseCaseImpl {
            repository: session_repository.clone(),
            inference,
            logger: logger.clone(),
        });
        let update_persona_use_case = Arc::new(UpdatePersonaUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteSessionUseCaseImpl {
            repository: session_repository,
            logger,
        });

        let session_api = crate::api::session::routes::SessionApi::new(
            create_use_case,
            get_use_case,
            submit_use_case,
            update_persona_use_case,
            delete_use_case,
        );

        Ok(Self {
            health_api,
            session_api,
        })
    }
}
