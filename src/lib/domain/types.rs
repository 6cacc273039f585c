use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-unique identifier of a transcript entry, increasing in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// A transcript entry. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    content: String,
    created_at: DateTime<Local>,
}

impl Message {
    pub fn new(id: MessageId, sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            content: content.into(),
            created_at: Local::now(),
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Yes,
    No,
}

impl Vote {
    pub fn as_str(self) -> &'static str {
        match self {
            Vote::Yes => "yes",
            Vote::No => "no",
        }
    }
}

/// A vote together with the bot reply text it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub vote: Vote,
    pub message: String,
}

/// Terminal outcome shown in place of the vote buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackNotice {
    Thanks,
    Failed,
}

impl FeedbackNotice {
    pub fn text(self) -> &'static str {
        match self {
            FeedbackNotice::Thanks => crate::constants::FEEDBACK_THANKS_TEXT,
            FeedbackNotice::Failed => crate::constants::FEEDBACK_FAILED_TEXT,
        }
    }
}

/// Lifecycle of the feedback affordance attached to one bot reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackState {
    Active,
    Pending(Vote),
    Resolved(FeedbackNotice),
}

impl FeedbackState {
    pub fn accepts_vote(self) -> bool {
        matches!(self, FeedbackState::Active)
    }
}
