//! Backend trait

use super::types::BackendError;
use crate::domain::FeedbackRecord;
use async_trait::async_trait;

/// The external service providing chat replies and storing feedback.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Relay a user message and return the reply text
    async fn chat(&self, message: &str) -> Result<String, BackendError>;

    /// Store a vote for a bot reply
    async fn feedback(&self, record: &FeedbackRecord) -> Result<(), BackendError>;
}
