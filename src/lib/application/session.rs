//! Chat session state
//!
//! `ChatSession` owns the transcript and every piece of view state derived from
//! it. It never performs I/O: a send or a vote is split into a `begin_*`
//! transition that returns a single-use token and a `complete_*` transition
//! that consumes it once the backend call has settled.

use crate::constants::CHAT_FALLBACK_TEXT;
use crate::domain::{
    FeedbackNotice, FeedbackRecord, FeedbackState, Message, MessageId, Sender, Vote,
};
use crate::infrastructure::backend::BackendError;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Draft text being composed plus its lock flag
#[derive(Debug, Clone, Default)]
pub struct InputState {
    draft: String,
    /// Cursor position in chars, not bytes
    cursor: usize,
    locked: bool,
}

impl InputState {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_empty(&self) -> bool {
        self.draft.is_empty()
    }

    /// Replace the draft, leaving the cursor at its end
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.locked {
            return;
        }
        self.draft = text.into();
        self.cursor = self.draft.chars().count();
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        if self.locked {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.draft.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.locked || self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.draft.remove(at);
        self.cursor -= 1;
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.locked || self.cursor >= self.draft.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.draft.remove(at);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.draft.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.draft.chars().count();
    }

    /// Clear the draft and reset its sizing
    pub fn clear(&mut self) {
        if self.locked {
            return;
        }
        self.draft.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.draft
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.draft.len())
    }
}

/// Which pane receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Transcript,
}

/// Proof that a chat request may be issued. Consumed by [`ChatSession::complete_send`].
#[derive(Debug)]
#[must_use = "a pending send must be completed or the input stays locked"]
pub struct PendingSend {
    text: String,
    user_message: MessageId,
}

impl PendingSend {
    /// Trimmed text to relay to the backend
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn user_message(&self) -> MessageId {
        self.user_message
    }
}

/// Proof that a vote may be submitted. Consumed by [`ChatSession::complete_feedback`].
#[derive(Debug)]
#[must_use = "a pending vote must be completed or its affordance stays pending"]
pub struct PendingFeedback {
    target: MessageId,
    record: FeedbackRecord,
}

impl PendingFeedback {
    pub fn target(&self) -> MessageId {
        self.target
    }

    pub fn record(&self) -> &FeedbackRecord {
        &self.record
    }
}

/// Outcome of one full send cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendReport {
    pub user_message: MessageId,
    pub bot_message: MessageId,
    /// False when the bot message is the fallback error text
    pub delivered: bool,
}

/// Chat session state
#[derive(Debug)]
pub struct ChatSession {
    transcript: Vec<Message>,
    feedback: BTreeMap<MessageId, FeedbackState>,
    next_id: u64,
    /// Draft and lock flag
    pub input: InputState,
    typing: bool,
    welcome_visible: bool,
    focus: Focus,
    selected_feedback: Option<MessageId>,
    /// Scroll offset for the transcript, `u16::MAX` follows the newest entry
    pub scroll_offset: u16,
    /// Largest useful offset, measured by the renderer
    pub max_scroll: u16,
    /// Transcript rows visible at once, measured by the renderer
    pub viewport_rows: u16,
    /// Typing indicator animation frame
    pub typing_frame: usize,
    /// Hint shown in the status bar
    pub status_message: Option<String>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            feedback: BTreeMap::new(),
            next_id: 1,
            input: InputState::default(),
            typing: false,
            welcome_visible: true,
            focus: Focus::Input,
            selected_feedback: None,
            scroll_offset: 0,
            max_scroll: 0,
            viewport_rows: 0,
            typing_frame: 0,
            status_message: None,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        // ids are assigned in insertion order
        self.transcript
            .binary_search_by_key(&id, Message::id)
            .ok()
            .map(|idx| &self.transcript[idx])
    }

    pub fn typing_visible(&self) -> bool {
        self.typing
    }

    /// True while a chat request is in flight
    pub fn is_busy(&self) -> bool {
        self.input.is_locked()
    }

    pub fn welcome_visible(&self) -> bool {
        self.welcome_visible
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Append a message and scroll to reveal it
    pub fn add_message(&mut self, content: impl Into<String>, sender: Sender) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.transcript.push(Message::new(id, sender, content));
        self.scroll_to_bottom();
        debug!(id = id.0, sender = sender.as_str(), "Message appended");
        id
    }

    /// Permanently hide the welcome panel
    pub fn hide_welcome(&mut self) {
        if self.welcome_visible {
            debug!("Hiding welcome panel");
        }
        self.welcome_visible = false;
    }

    /// Hide the welcome panel, pre-fill the draft with `question` and begin sending it
    pub fn submit_quick_question(&mut self, question: &str) -> Option<PendingSend> {
        self.hide_welcome();
        if self.is_busy() {
            debug!("Quick question ignored: a message is already in flight");
            return None;
        }
        self.input.set_draft(question);
        self.begin_send()
    }

    /// Start a send cycle from the current draft.
    ///
    /// Returns `None` without touching any state when the trimmed draft is
    /// empty or another send is still in flight.
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        if self.is_busy() {
            debug!("Send ignored: a message is already in flight");
            return None;
        }
        let text = self.input.draft().trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.hide_welcome();
        self.status_message = None;
        let user_message = self.add_message(text.clone(), Sender::User);
        self.input.clear();
        self.input.locked = true;
        self.typing = true;
        self.typing_frame = 0;
        self.scroll_to_bottom();
        info!(id = user_message.0, chars = text.chars().count(), "Send started");

        Some(PendingSend { text, user_message })
    }

    /// Finish a send cycle. Always hides the indicator, unlocks input and
    /// returns focus to it, whatever the outcome.
    pub fn complete_send(
        &mut self,
        pending: PendingSend,
        outcome: Result<String, BackendError>,
    ) -> SendReport {
        self.typing = false;

        let (bot_message, delivered) = match outcome {
            Ok(reply) => {
                let id = self.add_message(reply, Sender::Bot);
                self.feedback.insert(id, FeedbackState::Active);
                self.selected_feedback = Some(id);
                (id, true)
            }
            Err(err) => {
                warn!(error = %err, "Chat request failed; showing fallback reply");
                self.status_message = Some(err.user_message());
                (self.add_message(CHAT_FALLBACK_TEXT, Sender::Bot), false)
            }
        };

        self.input.locked = false;
        self.focus = Focus::Input;
        info!(
            user = pending.user_message.0,
            bot = bot_message.0,
            delivered,
            "Send finished"
        );

        SendReport {
            user_message: pending.user_message,
            bot_message,
            delivered,
        }
    }

    pub fn feedback_state(&self, target: MessageId) -> Option<FeedbackState> {
        self.feedback.get(&target).copied()
    }

    /// Bot messages whose affordance still offers voting, oldest first
    pub fn active_feedback_targets(&self) -> Vec<MessageId> {
        self.feedback
            .iter()
            .filter(|(_, state)| state.accepts_vote())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Start submitting a vote for the reply `target`.
    ///
    /// The reply text is read from the transcript now. Returns `None` when
    /// `target` has no affordance that still accepts a vote.
    pub fn begin_feedback(&mut self, target: MessageId, vote: Vote) -> Option<PendingFeedback> {
        match self.feedback_state(target) {
            Some(state) if state.accepts_vote() => {}
            Some(state) => {
                debug!(target = target.0, ?state, "Vote ignored: affordance no longer active");
                return None;
            }
            None => {
                debug!(target = target.0, "Vote ignored: message has no feedback affordance");
                return None;
            }
        }
        let message = self.message(target)?.content().to_string();

        self.feedback.insert(target, FeedbackState::Pending(vote));
        info!(target = target.0, vote = vote.as_str(), "Feedback started");

        Some(PendingFeedback {
            target,
            record: FeedbackRecord { vote, message },
        })
    }

    /// Resolve a vote. The affordance becomes terminal on either outcome.
    pub fn complete_feedback(
        &mut self,
        pending: PendingFeedback,
        outcome: Result<(), BackendError>,
    ) -> FeedbackNotice {
        let notice = match outcome {
            Ok(()) => FeedbackNotice::Thanks,
            Err(err) => {
                warn!(error = %err, target = pending.target.0, "Feedback request failed");
                FeedbackNotice::Failed
            }
        };
        self.feedback
            .insert(pending.target, FeedbackState::Resolved(notice));
        info!(target = pending.target.0, ?notice, "Feedback finished");
        notice
    }

    /// Affordance that `y`/`n` act on: the explicit selection if still active, else the newest
    pub fn selected_feedback(&self) -> Option<MessageId> {
        match self.selected_feedback {
            Some(id) if self.feedback_state(id) == Some(FeedbackState::Active) => Some(id),
            _ => self.active_feedback_targets().last().copied(),
        }
    }

    pub fn select_previous_feedback(&mut self) {
        self.step_feedback_selection(-1);
    }

    pub fn select_next_feedback(&mut self) {
        self.step_feedback_selection(1);
    }

    fn step_feedback_selection(&mut self, step: isize) {
        let targets = self.active_feedback_targets();
        let Some(current) = self.selected_feedback() else {
            return;
        };
        let Some(pos) = targets.iter().position(|id| *id == current) else {
            return;
        };
        let next = pos
            .saturating_add_signed(step)
            .min(targets.len().saturating_sub(1));
        self.selected_feedback = Some(targets[next]);
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_transcript(&mut self) {
        self.focus = Focus::Transcript;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Transcript,
            Focus::Transcript => Focus::Input,
        };
    }

    /// Scroll transcript up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll).saturating_sub(1);
    }

    /// Scroll transcript down
    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Scroll up by one viewport
    pub fn page_up(&mut self) {
        self.scroll_offset = self
            .scroll_offset
            .min(self.max_scroll)
            .saturating_sub(self.page_step());
    }

    /// Scroll down by one viewport
    pub fn page_down(&mut self) {
        let offset = self.scroll_offset.min(self.max_scroll);
        self.scroll_offset = offset.saturating_add(self.page_step()).min(self.max_scroll);
    }

    fn page_step(&self) -> u16 {
        self.viewport_rows.max(1)
    }

    /// Scroll to bottom of transcript
    pub fn scroll_to_bottom(&mut self) {
        // resolved against content height during render
        self.scroll_offset = u16::MAX;
    }

    /// Update typing indicator animation frame
    pub fn tick_typing(&mut self) {
        if self.typing {
            self.typing_frame = (self.typing_frame + 1) % 4;
        }
    }
}
