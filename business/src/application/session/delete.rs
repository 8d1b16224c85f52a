use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::delete::{DeleteSessionParams, DeleteSessionUseCase};

pub struct DeleteSessionUseCaseImpl {
    pub repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteSessionUseCase for DeleteSessionUseCaseImpl {
    async fn execute(&self, params: DeleteSessionParams) -> Result<(), SessionError> {
        self.repository.delete(&params.session_id).await?;

        self.logger
            .info(&format!("Session deleted with id: {}", params.session_id));

        Ok(())
    }
}
