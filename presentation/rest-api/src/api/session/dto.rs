use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::session::model::{Session, SessionState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Enum)]
pub enum SessionStatusDto {
    #[oai(rename = "idle")]
    Idle,
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "displayed")]
    Displayed,
    #[oai(rename = "errored")]
    Errored,
}

#[derive(Debug, Clone, Object)]
pub struct CreateSessionRequest {
    /// Person the assistant should impersonate (role-play mode)
    pub persona: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SubmitPromptRequest {
    /// Question or message typed by the user
    pub input: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdatePersonaRequest {
    /// New persona; omit or leave blank to leave role-play mode
    pub persona: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    /// Session unique identifier
    pub id: String,
    /// Current step of the request/response cycle
    pub status: SessionStatusDto,
    /// Active role-play persona
    #[oai(skip_serializing_if_is_none)]
    pub persona: Option<String>,
    /// Prompt of the current or last cycle
    #[oai(skip_serializing_if_is_none)]
    pub prompt: Option<String>,
    /// Generated answer, present when status is "displayed"
    #[oai(skip_serializing_if_is_none)]
    pub text: Option<String>,
    /// User-facing error, present when status is "errored"
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(s: Session) -> Self {
        let (status, prompt, text, error) = match s.state().clone() {
            SessionState::Idle => (SessionStatusDto::Idle, None, None, None),
            SessionState::Pending { prompt } => (SessionStatusDto::Pending, Some(prompt), None, None),
            SessionState::Displayed { prompt, text } => {
                (SessionStatusDto::Displayed, Some(prompt), Some(text), None)
            }
            SessionState::Errored { prompt, message } => {
                (SessionStatusDto::Errored, Some(prompt), None, Some(message))
            }
        };

        Self {
            id: s.id.to_string(),
            status,
            persona: s.persona().map(|p| p.to_string()),
            prompt,
            text,
            error,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_displayed_text_unchanged() {
        let mut session = Session::new(None);
        session.begin("Tell me about a dragon").unwrap();
        session.display("A dragon is a legendary creature...").unwrap();

        let response = SessionResponse::from(session);

        assert_eq!(response.status, SessionStatusDto::Displayed);
        assert_eq!(response.prompt.as_deref(), Some("Tell me about a dragon"));
        assert_eq!(
            response.text.as_deref(),
            Some("A dragon is a legendary creature...")
        );
        assert!(response.error.is_none());
    }

    #[test]
    fn should_expose_error_message_when_errored() {
        let mut session = Session::new(Some("Seneca".to_string()));
        session.begin("On anger?").unwrap();
        session.fail("The AI service is unreachable right now.").unwrap();

        let response = SessionResponse::from(session);

        assert_eq!(response.status, SessionStatusDto::Errored);
        assert_eq!(response.persona.as_deref(), Some("Seneca"));
        assert!(response.text.is_none());
        assert_eq!(
            response.error.as_deref(),
            Some("The AI service is unreachable right now.")
        );
    }

    #[test]
    fn should_expose_idle_session_without_prompt() {
        let response = SessionResponse::from(Session::new(None));

        assert_eq!(response.status, SessionStatusDto::Idle);
        assert!(response.prompt.is_none());
    }
}
