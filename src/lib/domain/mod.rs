pub mod types;

pub use types::{
    FeedbackNotice, FeedbackRecord, FeedbackState, Message, MessageId, Sender, Vote,
};
