//! # Per-document chat
//!
//! A [`Conversation`] is the transcript for one document. [`open`](Conversation::open)
//! loads the document and posts a welcome line; [`ask`](Conversation::ask)
//! appends the user's question and then either the assistant's answer or an
//! apology. The transcript only lives in memory.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use store::KeyValueStore;
use tracing::{debug, warn};

use crate::backend::{ChatBackend, DocumentBackend};
use crate::error::ApiError;
use crate::models::{extract_answer, ChatRequest, Document};
use crate::session::{Navigate, SessionStore};
use crate::shared::Shared;

pub const APOLOGY: &str =
    "Sorry, something went wrong while processing your question. Please try again.";

pub fn welcome(filename: &str) -> String {
    format!("Hi! I'm ready to answer questions about \"{filename}\". How can I help?")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Utc>,
}

/// What [`Conversation::ask`] did with a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asked {
    Sent,
    /// Blank, or another question was still waiting for its answer.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationState {
    pub document: Option<Document>,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub sending: bool,
    pub error: Option<String>,
}

pub struct Conversation<B, S, N> {
    backend: Rc<B>,
    session: SessionStore<S>,
    navigator: N,
    document_id: String,
    state: Shared<ConversationState>,
}

impl<B, S: Clone, N: Clone> Clone for Conversation<B, S, N> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            session: self.session.clone(),
            navigator: self.navigator.clone(),
            document_id: self.document_id.clone(),
            state: self.state.clone(),
        }
    }
}

impl<B, S, N> Conversation<B, S, N>
where
    B: DocumentBackend + ChatBackend,
    S: KeyValueStore,
    N: Navigate,
{
    pub fn new(
        backend: B,
        session: SessionStore<S>,
        navigator: N,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            backend: Rc::new(backend),
            session,
            navigator,
            document_id: document_id.into(),
            state: Shared::new(ConversationState {
                loading: true,
                ..Default::default()
            }),
        }
    }

    pub fn state(&self) -> ConversationState {
        self.state.get()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.with(|s| s.messages.clone())
    }

    pub fn subscribe(&self, listener: impl Fn(&ConversationState) + 'static) {
        self.state.subscribe(listener);
    }

    fn push(&self, sender: Sender, text: String) {
        self.state.update(|s| {
            let id = s.messages.len() as u64 + 1;
            s.messages.push(ChatMessage {
                id,
                text,
                sender,
                sent_at: Utc::now(),
            });
        });
    }

    /// Without a credential the navigator is sent to login and nothing is
    /// requested.
    fn token_or_redirect(&self) -> Option<String> {
        let token = self.session.credential();
        if token.is_none() {
            debug!("no credential, redirecting to login");
            self.navigator.to_login();
        }
        token
    }

    /// Load the document and start the transcript with a welcome message.
    pub async fn open(&self) -> Result<(), ApiError> {
        let Some(token) = self.token_or_redirect() else {
            self.state.update(|s| s.loading = false);
            return Err(ApiError::NotAuthenticated);
        };

        let result = self.backend.get_document(&token, &self.document_id).await;
        match self.session.intercept(result, &token, &self.navigator) {
            Ok(document) => {
                let greeting = welcome(&document.filename);
                self.state.update(|s| {
                    s.document = Some(document);
                    s.messages.clear();
                    s.loading = false;
                });
                self.push(Sender::Assistant, greeting);
                Ok(())
            }
            Err(err) => {
                warn!(document_id = %self.document_id, "Error fetching document: {}", err);
                let message = (!err.is_unauthorized()).then(|| err.to_string());
                self.state.update(|s| {
                    s.error = message;
                    s.loading = false;
                });
                Err(err)
            }
        }
    }

    /// Whether [`ask`](Self::ask) would send `question` right now.
    pub fn accepts(&self, question: &str) -> bool {
        !question.trim().is_empty() && !self.state.with(|s| s.sending)
    }

    /// Send a question about the document.
    ///
    /// Blank input, or a question while another is still waiting, comes back
    /// as [`Asked::Ignored`] without touching the transcript.
    pub async fn ask(&self, question: &str) -> Result<Asked, ApiError> {
        if !self.accepts(question) {
            debug!("question ignored");
            return Ok(Asked::Ignored);
        }
        let Some(token) = self.token_or_redirect() else {
            return Err(ApiError::NotAuthenticated);
        };

        self.push(Sender::User, question.to_string());
        self.state.update(|s| s.sending = true);

        let request = ChatRequest {
            question: question.to_string(),
            document_id: self.document_id.clone(),
        };
        let result = self.backend.ask(&token, &request).await;
        let result = self.session.intercept(result, &token, &self.navigator);
        self.state.update(|s| s.sending = false);

        match result {
            Ok(body) => {
                self.push(Sender::Assistant, extract_answer(&body));
                Ok(Asked::Sent)
            }
            Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized),
            Err(err) => {
                warn!("Error sending message: {}", err);
                self.push(Sender::Assistant, APOLOGY.to_string());
                Err(err)
            }
        }
    }
}
