use crate::contracts::ChatTurn;
use crate::error::BrandError;
use crate::llm::{BackendMessage, GenerateRequest, GenerativeBackend};
use crate::orchestration::prompts::CONSULTANT_PERSONA;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

pub const CONSULTANT_GREETING: &str = "Hello! I am your BrandPulse Consultant. How can I help you \
refine your brand strategy today?";

/// Reply recorded when the backend call fails.
pub const ERROR_REPLY_FALLBACK: &str = "Sorry, I encountered an error. Please try again.";

/// Reply recorded when the backend answers with no text.
pub const EMPTY_REPLY_FALLBACK: &str = "I apologize, but I am unable to answer that right now.";

/// One consultant conversation, alive from tool entry until it is dropped.
///
/// The transcript is what the user sees: the greeting, then every user turn
/// followed by exactly one model turn. The backend is stateless, so each send
/// replays the persona plus `history`, which holds only completed exchanges;
/// the greeting and failed exchanges never reach the backend.
pub struct ChatSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    backend: Arc<dyn GenerativeBackend>,
    model: String,
    persona: String,
    transcript: Vec<ChatTurn>,
    history: Vec<ChatTurn>,
}

impl ChatSession {
    /// Session bound to the brand-strategy consultant persona.
    pub fn start(backend: Arc<dyn GenerativeBackend>, model: impl Into<String>) -> Self {
        Self::with_persona(backend, model, CONSULTANT_PERSONA, CONSULTANT_GREETING)
    }

    pub fn with_persona(
        backend: Arc<dyn GenerativeBackend>,
        model: impl Into<String>,
        persona: impl Into<String>,
        greeting: impl Into<String>,
    ) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            backend,
            model: model.into(),
            persona: persona.into(),
            transcript: vec![ChatTurn::model(greeting)],
            history: Vec::new(),
        };
        tracing::debug!(session = %session.id, "Chat session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn persona(&self) -> &str {
        &self.persona
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    pub fn turn_count(&self) -> usize {
        self.transcript.len()
    }

    fn continuation(&self, pending: &str) -> GenerateRequest {
        let contents = self
            .history
            .iter()
            .map(BackendMessage::from)
            .chain(std::iter::once(BackendMessage::user(pending)))
            .collect();
        GenerateRequest::conversation(&self.model, &self.persona, contents)
    }

    /// Send one user turn and return the reply that was appended.
    ///
    /// Backend failures are not returned as errors: they become the
    /// [`ERROR_REPLY_FALLBACK`] model turn, and an empty reply becomes the
    /// [`EMPTY_REPLY_FALLBACK`] turn. Neither exchange is kept in `history`.
    /// Only blank input is rejected, and it leaves the transcript untouched.
    pub async fn send(&mut self, turn_text: &str) -> Result<String, BrandError> {
        if turn_text.trim().is_empty() {
            return Err(BrandError::precondition("chat message must not be empty"));
        }

        let request = self.continuation(turn_text);
        self.transcript.push(ChatTurn::user(turn_text));

        let reply = match self.backend.generate_content(&request).await {
            Ok(response) => {
                let text = response.text();
                if text.is_empty() {
                    tracing::debug!(session = %self.id, "Empty chat reply, showing fallback");
                    EMPTY_REPLY_FALLBACK.to_string()
                } else {
                    self.history.push(ChatTurn::user(turn_text));
                    self.history.push(ChatTurn::model(text.clone()));
                    text
                }
            }
            Err(e) => {
                tracing::warn!(session = %self.id, "Chat send failed, recording apology: {e:#}");
                ERROR_REPLY_FALLBACK.to_string()
            }
        };

        self.transcript.push(ChatTurn::model(reply.clone()));
        Ok(reply)
    }
}
