//! Client for the text-generation endpoint used to reframe reflections.

use crate::config::ReframeConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ReframeError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("endpoint returned status {0}")]
    Status(u16),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GenerateClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    timeout: Option<Duration>,
}

impl GenerateClient {
    pub fn new(config: &ReframeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            timeout: config.timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one non-streaming generation request and returns the raw completion text.
    pub async fn generate(&self, prompt: &str) -> Result<String, ReframeError> {
        debug!(endpoint = %self.endpoint, model = %self.model, prompt_len = prompt.len(), "generate");

        let mut request = self.http.post(&self.endpoint).json(&GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        });
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|err| self.classify(err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReframeError::Status(status.as_u16()));
        }

        let body: GenerateResponse = response.json().await.map_err(|err| {
            if err.is_timeout() {
                self.classify(err)
            } else {
                ReframeError::InvalidResponse(err.to_string())
            }
        })?;

        body.response
            .ok_or_else(|| ReframeError::InvalidResponse("missing `response` field".to_string()))
    }

    fn classify(&self, err: reqwest::Error) -> ReframeError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => ReframeError::Timeout(timeout),
            _ => ReframeError::Network(err),
        }
    }
}
