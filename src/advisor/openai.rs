// OpenAI-compatible chat completions backend.
use crate::advisor::CompletionBackend;
use crate::config::OpenAiConfig;
use crate::model::AdvisorError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Default chat completions endpoint; overridable through the config for
/// proxies and compatible providers.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

pub struct OpenAiBackend {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    temperature: f64,
    request_timeout: Duration,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiBackend {
    pub fn new(cfg: &OpenAiConfig, api_key: Option<String>) -> Self {
        let request_timeout = Duration::from_secs(cfg.timeout_seconds);
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_url: cfg.api_url.clone(),
            api_key,
            model: cfg.model.clone(),
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
            request_timeout,
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AdvisorError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AdvisorError::MissingCredentials)?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!("Requesting completion from {} ({})", self.api_url, self.model);
        let send = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send();

        let response = match timeout(self.request_timeout, send).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => return Err(AdvisorError::Api(format!("send failed: {e}"))),
            Err(_) => return Err(AdvisorError::Timeout),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".into());
            return Err(AdvisorError::Api(format!("[{status}]: {body}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AdvisorError::Api(format!("malformed reply: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(AdvisorError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_fails_before_any_network_io() {
        let backend = OpenAiBackend::new(&OpenAiConfig::default(), None);
        let result = backend.complete("system", "user").await;
        assert!(matches!(result, Err(AdvisorError::MissingCredentials)));
    }

    #[test]
    fn response_shape_deserializes() {
        let body = r#"{"choices":[{"message":{"content":"Summary text"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Summary text")
        );
    }
}
