//! HTTP backend speaking the `/chat` and `/feedback` JSON endpoints

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::traits::Backend;
use super::types::BackendError;
use crate::domain::{FeedbackRecord, Vote};

const CHAT_PATH: &str = "/chat";
const FEEDBACK_PATH: &str = "/feedback";

/// Backend reached over plain JSON POST requests
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    http: Client,
}

impl HttpBackend {
    /// Creates a backend without a request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Creates a backend whose requests fail after `timeout`, if one is given.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: base_url.into(),
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build URL from base URL and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    async fn post_json<Req>(&self, url: &str, body: &Req) -> Result<Response, BackendError>
    where
        Req: Serialize,
    {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::status(url, status));
        }
        Ok(response)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn chat(&self, message: &str) -> Result<String, BackendError> {
        let url = self.build_url(CHAT_PATH);
        info!(url = url.as_str(), chars = message.chars().count(), "Sending chat message");

        let result = async {
            let response = self.post_json(&url, &ChatRequestBody { message }).await?;
            let body: ChatResponseBody = response
                .json()
                .await
                .map_err(|e| BackendError::decode(&url, e))?;
            Ok(body.response)
        }
        .await;

        match &result {
            Ok(reply) => debug!(chars = reply.chars().count(), "Received chat reply"),
            Err(err) => warn!(error = %err, "Chat request failed"),
        }
        result
    }

    async fn feedback(&self, record: &FeedbackRecord) -> Result<(), BackendError> {
        let url = self.build_url(FEEDBACK_PATH);
        info!(url = url.as_str(), vote = record.vote.as_str(), "Submitting feedback");

        let body = FeedbackRequestBody {
            feedback: record.vote,
            message: &record.message,
        };
        match self.post_json(&url, &body).await {
            Ok(_) => {
                debug!("Feedback accepted");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Feedback request failed");
                Err(err)
            }
        }
    }
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponseBody {
    response: String,
}

#[derive(Serialize)]
struct FeedbackRequestBody<'a> {
    feedback: Vote,
    message: &'a str,
}
