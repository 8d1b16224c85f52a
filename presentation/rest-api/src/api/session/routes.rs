use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::session::use_cases::create::{CreateSessionParams, CreateSessionUseCase};
use business::domain::session::use_cases::delete::{DeleteSessionParams, DeleteSessionUseCase};
use business::domain::session::use_cases::get_by_id::{GetSessionParams, GetSessionUseCase};
use business::domain::session::use_cases::submit_prompt::{
    SubmitPromptParams, SubmitPromptUseCase,
};
use business::domain::session::use_cases::update_persona::{
    UpdatePersonaParams, UpdatePersonaUseCase,
};
use business::domain::shared::value_objects::SessionId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::dto::{
    CreateSessionRequest, SessionResponse, SubmitPromptRequest, UpdatePersonaRequest,
};
use crate::api::tags::ApiTags;

pub struct SessionApi {
    create_use_case: Arc<dyn CreateSessionUseCase>,
    get_use_case: Arc<dyn GetSessionUseCase>,
    submit_use_case: Arc<dyn SubmitPromptUseCase>,
    update_persona_use_case: Arc<dyn UpdatePersonaUseCase>,
    delete_use_case: Arc<dyn DeleteSessionUseCase>,
}

impl SessionApi {
    pub fn new(
        create_use_case: Arc<dyn CreateSessionUseCase>,
        get_use_case: Arc<dyn GetSessionUseCase>,
        submit_use_case: Arc<dyn SubmitPromptUseCase>,
        update_persona_use_case: Arc<dyn UpdatePersonaUseCase>,
        delete_use_case: Arc<dyn DeleteSessionUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_use_case,
            submit_use_case,
            update_persona_use_case,
            delete_use_case,
        }
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map(SessionId::from).map_err(|_| {
        Json(ErrorResponse {
            name: "ValidationError".to_string(),
            message: "session.invalid_id".to_string(),
        })
    })
}

/// Session API
///
/// Interactive sessions: each submission runs one request/response cycle
/// against the language model.
#[OpenApi]
impl SessionApi {
    /// Start a session
    ///
    /// Creates an idle session, optionally in role-play mode.
    #[oai(path = "/sessions", method = "post", tag = "ApiTags::Sessions")]
    async fn create_session(&self, body: Json<CreateSessionRequest>) -> CreateSessionResponse {
        match self
            .create_use_case
            .execute(CreateSessionParams {
                persona: body.0.persona,
            })
            .await
        {
            Ok(session) => CreateSessionResponse::Created(Json(session.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateSessionResponse::InternalError(json)
            }
        }
    }

    /// Get a session
    ///
    /// Returns the current state, including the last answer or error.
    #[oai(path = "/sessions/:id", method = "get", tag = "ApiTags::Sessions")]
    async fn get_session(&self, id: Path<String>) -> GetSessionResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return GetSessionResponse::BadRequest(json),
        };

        match self
            .get_use_case
            .execute(GetSessionParams { session_id })
            .await
        {
            Ok(session) => GetSessionResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetSessionResponse::NotFound(json),
                    _ => GetSessionResponse::InternalError(json),
                }
            }
        }
    }

    /// Submit a prompt
    ///
    /// Sends the input to the language model and waits for the answer.
    /// Upstream failures are reported in the returned session with status
    /// "errored" and a user-facing message.
    #[oai(
        path = "/sessions/:id/prompts",
        method = "post",
        tag = "ApiTags::Sessions"
    )]
    async fn submit_prompt(
        &self,
        id: Path<String>,
        body: Json<SubmitPromptRequest>,
    ) -> SubmitPromptResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return SubmitPromptResponse::BadRequest(json),
        };

        match self
            .submit_use_case
            .execute(SubmitPromptParams {
                session_id,
                input: body.0.input,
            })
            .await
        {
            Ok(session) => SubmitPromptResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => SubmitPromptResponse::NotFound(json),
                    409 => SubmitPromptResponse::Conflict(json),
                    422 => SubmitPromptResponse::UnprocessableEntity(json),
                    _ => SubmitPromptResponse::InternalError(json),
                }
            }
        }
    }

    /// Set the role-play persona
    #[oai(
        path = "/sessions/:id/persona",
        method = "put",
        tag = "ApiTags::Sessions"
    )]
    async fn update_persona(
        &self,
        id: Path<String>,
        body: Json<UpdatePersonaRequest>,
    ) -> UpdatePersonaResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return UpdatePersonaResponse::BadRequest(json),
        };

        match self
            .update_persona_use_case
            .execute(UpdatePersonaParams {
                session_id,
                persona: body.0.persona,
            })
            .await
        {
            Ok(session) => UpdatePersonaResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdatePersonaResponse::NotFound(json),
                    _ => UpdatePersonaResponse::InternalError(json),
                }
            }
        }
    }

    /// End a session
    #[oai(path = "/sessions/:id", method = "delete", tag = "ApiTags::Sessions")]
    async fn delete_session(&self, id: Path<String>) -> DeleteSessionResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return DeleteSessionResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteSessionParams { session_id })
            .await
        {
            Ok(()) => DeleteSessionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteSessionResponse::NotFound(json),
                    _ => DeleteSessionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateSessionResponse {
    #[oai(status = 201)]
    Created(Json<SessionResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSessionResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitPromptResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdatePersonaResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteSessionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
