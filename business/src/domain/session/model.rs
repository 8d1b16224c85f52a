use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::SessionId;

use super::errors::SessionError;

/// Where a session is in its request/response cycle.
///
/// `Idle -> Pending -> {Displayed, Errored} -> Idle`
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Pending { prompt: String },
    Displayed { prompt: String, text: String },
    Errored { prompt: String, message: String },
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Pending { .. } => write!(f, "pending"),
            SessionState::Displayed { .. } => write!(f, "displayed"),
            SessionState::Errored { .. } => write!(f, "errored"),
        }
    }
}

/// Result of the inference call that ends a `Pending` cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Displayed(String),
    Errored(String),
}

/// One user's interactive lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: SessionId,
    persona: Option<String>,
    state: SessionState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(persona: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::generate(),
            persona: normalize_persona(persona),
            state: SessionState::Idle,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn persona(&self) -> Option<&str> {
        self.persona.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SessionState::Pending { .. })
    }

    /// Sets or clears the role-play persona. Blank names clear it.
    pub fn set_persona(&mut self, persona: Option<String>) {
        self.persona = normalize_persona(persona);
        self.touch();
    }

    /// Clears a displayed result or error. Only rejected while pending.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.is_pending() {
            return Err(SessionError::Busy);
        }
        self.state = SessionState::Idle;
        self.touch();
        Ok(())
    }

    /// Starts a request/response cycle for `prompt`.
    pub fn begin(&mut self, prompt: impl Into<String>) -> Result<(), SessionError> {
        self.reset()?;
        self.state = SessionState::Pending {
            prompt: prompt.into(),
        };
        self.touch();
        Ok(())
    }

    pub fn display(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        let prompt = self.take_pending_prompt()?;
        self.state = SessionState::Displayed {
            prompt,
            text: text.into(),
        };
        self.touch();
        Ok(())
    }

    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), SessionError> {
        let prompt = self.take_pending_prompt()?;
        self.state = SessionState::Errored {
            prompt,
            message: message.into(),
        };
        self.touch();
        Ok(())
    }

    /// Ends the pending cycle with `outcome`.
    pub fn complete(&mut self, outcome: SubmissionOutcome) -> Result<(), SessionError> {
        match outcome {
            SubmissionOutcome::Displayed(text) => self.display(text),
            SubmissionOutcome::Errored(message) => self.fail(message),
        }
    }

    fn take_pending_prompt(&mut self) -> Result<String, SessionError> {
        match &self.state {
            SessionState::Pending { prompt } => Ok(prompt.clone()),
            _ => Err(SessionError::InvalidTransition),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn normalize_persona(persona: Option<String>) -> Option<String> {
    persona
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
}
