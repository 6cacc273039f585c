use crate::domain::{FeedbackNotice, MessageId, Sender, Vote};
use crate::infrastructure::backend::Backend;
use std::sync::Arc;
use tracing::debug;

use super::session::{ChatSession, SendReport};

/// Drives a [`ChatSession`] against a [`Backend`], one awaited round-trip per operation.
///
/// The terminal UI performs the same transitions itself so it can keep
/// redrawing while a request is outstanding; this type serves headless
/// callers such as the one-shot CLI mode.
pub struct ChatClient<B: Backend> {
    backend: Arc<B>,
    session: ChatSession,
}

impl<B: Backend> ChatClient<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self::with_session(backend, ChatSession::new())
    }

    pub fn with_session(backend: Arc<B>, session: ChatSession) -> Self {
        Self { backend, session }
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ChatSession {
        &mut self.session
    }

    /// Replace the draft text
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.session.input.set_draft(text);
    }

    pub fn add_message(&mut self, content: impl Into<String>, sender: Sender) -> MessageId {
        self.session.add_message(content, sender)
    }

    /// Send the current draft and wait for the reply.
    ///
    /// Returns `None` when nothing was sent (blank draft or a send already in flight).
    pub async fn send_message(&mut self) -> Option<SendReport> {
        let pending = self.session.begin_send()?;
        let outcome = self.backend.chat(pending.text()).await;
        Some(self.session.complete_send(pending, outcome))
    }

    pub async fn submit_quick_question(&mut self, question: &str) -> Option<SendReport> {
        let pending = self.session.submit_quick_question(question)?;
        let outcome = self.backend.chat(pending.text()).await;
        Some(self.session.complete_send(pending, outcome))
    }

    /// Vote on the bot reply `target`; `None` when it no longer accepts a vote
    pub async fn submit_feedback(&mut self, target: MessageId, vote: Vote) -> Option<FeedbackNotice> {
        let Some(pending) = self.session.begin_feedback(target, vote) else {
            debug!(target = target.0, "No feedback submitted");
            return None;
        };
        let outcome = self.backend.feedback(pending.record()).await;
        Some(self.session.complete_feedback(pending, outcome))
    }
}
