use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::generation::errors::GenerationError;
use business::domain::session::errors::SessionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SessionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SessionError::NotFound => (StatusCode::NOT_FOUND, "NotFoundError", "session.not_found"),
            SessionError::Busy => (StatusCode::CONFLICT, "ConflictError", "session.busy"),
            SessionError::InvalidTransition => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SessionError",
                "session.invalid_transition",
            ),
            SessionError::Interrupted => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SessionError",
                "session.interrupted",
            ),
            SessionError::Generation(GenerationError::InvalidInput) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ValidationError",
                "generation.invalid_input",
            ),
            SessionError::Generation(GenerationError::Inference { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InferenceError",
                "generation.inference_failed",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_invalid_input_to_unprocessable_entity() {
        let (status, json) =
            SessionError::Generation(GenerationError::InvalidInput).into_error_response();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "generation.invalid_input");
    }

    #[test]
    fn should_map_busy_to_conflict() {
        let (status, _) = SessionError::Busy.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn should_map_not_found() {
        let (status, json) = SessionError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.name, "NotFoundError");
    }

    #[test]
    fn should_map_inference_failure_to_internal_error() {
        let (status, json) =
            SessionError::Generation(GenerationError::upstream(503, None)).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InferenceError");
        assert_eq!(json.0.message, "generation.inference_failed");
    }

    #[test]
    fn should_map_interrupted_cycle_to_internal_error() {
        let (status, json) = SessionError::Interrupted.into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "session.interrupted");
    }
}
