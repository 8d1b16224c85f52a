use crate::domain::generation::errors::GenerationError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("session.not_found")]
    NotFound,
    #[error("session.busy")]
    Busy,
    #[error("session.invalid_transition")]
    InvalidTransition,
    #[error("session.interrupted")]
    Interrupted,
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
