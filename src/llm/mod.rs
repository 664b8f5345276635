//! # Completion client
//!
//! Talks to a role-based chat-completion API (OpenRouter by default).
//!
//! ```text
//! messages → send.rs (POST + auth) → receive.rs (status + body decoding) → answer text
//! ```
//!
//! Handlers depend on the [`CompletionClient`] trait so the HTTP layer can be
//! exercised without a network.

pub mod receive;
pub mod send;

pub use receive::{LLMResponse, LlmError};
pub use send::OpenRouterClient;

use async_trait::async_trait;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct LLMRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one conversation and returns the first choice's text.
    ///
    /// `Ok(None)` means the provider answered but produced no usable content.
    async fn complete(&self, messages: Vec<Message>) -> Result<Option<String>, LlmError>;

    /// Convenience for the common system + user pair.
    async fn ask(&self, system: &str, user: &str) -> Result<Option<String>, LlmError> {
        self.complete(vec![Message::system(system), Message::user(user)])
            .await
    }
}
