use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Request timeout - the API took too long to respond")]
    Timeout,
    #[error("Connection error - unable to reach the API")]
    Connect,
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Authentication failed - check your API key")]
    Authentication,
    #[error("Access forbidden - insufficient permissions")]
    Forbidden,
    #[error("Rate limit exceeded - too many requests")]
    RateLimited,
    #[error("Server error ({status}): {body}")]
    Server { status: StatusCode, body: String },
    #[error("HTTP error {status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("Failed to parse API response as JSON: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else if e.is_connect() {
            LlmError::Connect
        } else if e.is_decode() {
            LlmError::Decode(e.to_string())
        } else {
            LlmError::Network(e)
        }
    }
}

impl LlmError {
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status.as_u16() {
            401 => LlmError::Authentication,
            403 => LlmError::Forbidden,
            429 => LlmError::RateLimited,
            500..=599 => LlmError::Server { status, body },
            _ => LlmError::Http { status, body },
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct LLMResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Debug)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl LLMResponse {
    /// Text of the first choice. Missing and empty content are both `None`.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
    }
}

/// Checks the status and decodes a completion response.
pub async fn read_completion(response: Response) -> Result<Option<String>, LlmError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(status = status.as_u16(), "Completion API returned an error status");
        return Err(LlmError::from_status(status, body));
    }

    let body = response.text().await?;
    let parsed: LLMResponse =
        serde_json::from_str(&body).map_err(|e| LlmError::Decode(e.to_string()))?;

    let content = parsed.first_content();
    if content.is_none() {
        debug!("Completion API returned no content");
    }
    Ok(content)
}
