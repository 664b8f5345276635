use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use super::receive::{read_completion, LlmError};
use super::{CompletionClient, LLMRequest, Message};
use crate::config::Config;

/// Chat-completion client for OpenRouter or any API with the same shape.
#[derive(Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_url: Url,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    #[instrument(skip(self, messages), fields(model = %self.model, messages = messages.len()))]
    async fn complete(&self, messages: Vec<Message>) -> Result<Option<String>, LlmError> {
        let request_body = LLMRequest {
            model: &self.model,
            messages: &messages,
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        debug!(status = response.status().as_u16(), "Completion API responded");
        read_completion(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        let api_url = format!("{}/api/v1/chat/completions", server.uri());
        Config::from_lookup(move |key| match key {
            "OPENROUTER_API_KEY" => Some("sk-test".to_string()),
            "OPENROUTER_API_URL" => Some(api_url.clone()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn sends_bearer_auth_and_chat_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_json(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "what is 2 + 2?" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "4" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenRouterClient::new(&config_for(&server)).unwrap();
        let answer = client.ask("sys", "what is 2 + 2?").await.unwrap();
        assert_eq!(answer, Some("4".to_string()));
    }

    #[tokio::test]
    async fn empty_choices_yield_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let client = OpenRouterClient::new(&config_for(&server)).unwrap();
        assert_eq!(client.ask("sys", "hi").await.unwrap(), None);
    }

    #[tokio::test]
    async fn unauthorized_maps_to_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("no key"))
            .mount(&server)
            .await;

        let client = OpenRouterClient::new(&config_for(&server)).unwrap();
        let err = client.ask("sys", "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::Authentication));
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = OpenRouterClient::new(&config_for(&server)).unwrap();
        let err = client.ask("sys", "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::Decode(_)));
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "choices": [] }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let mut config = config_for(&server);
        config.request_timeout = Duration::from_millis(50);
        let client = OpenRouterClient::new(&config).unwrap();
        let err = client.ask("sys", "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::Timeout));
    }
}
