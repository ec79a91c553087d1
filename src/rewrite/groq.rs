use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use spdlog::debug;

use crate::error::RewriteError;
use crate::rewrite::{compose_request, Rewriter};

pub const GROQ_BASE_URL: &str = "https://api.groq.com";
pub const GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const GROQ_MAX_TOKENS: u32 = 2000;

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
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

/// OpenAI compatible chat completions API served by Groq.
pub struct GroqClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl GroqClient {
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, RewriteError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: GROQ_BASE_URL.to_string(),
            api_key: api_key.to_string(),
            model: GROQ_MODEL.to_string(),
            max_tokens: GROQ_MAX_TOKENS,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Pulls `error.message` out of an API error body, or falls back to the raw text.
pub(crate) fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl Rewriter for GroqClient {
    async fn rewrite(&self, content: &str) -> Result<String, RewriteError> {
        let prompt = compose_request(content);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: self.max_tokens,
        };

        debug!("Sending {} bytes to Groq model {}", prompt.len(), self.model);
        let resp = self
            .client
            .post(format!("{}/openai/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RewriteError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let resp: ChatResponse = resp.json().await?;
        match resp.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => Err(RewriteError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> GroqClient {
        GroqClient::new("secret-key", Duration::from_secs(5))
            .unwrap()
            .with_base_url(&server.uri())
    }

    #[tokio::test]
    async fn test_rewrite_success() {
        let server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/openai/v1/chat/completions"))
            .and(matchers::header("authorization", "Bearer secret-key"))
            .and(matchers::body_partial_json(serde_json::json!({
                "model": GROQ_MODEL,
                "max_tokens": GROQ_MAX_TOKENS,
                "messages": [{"role": "user", "content": compose_request("<b>hi</b>")}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "**hi**"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let res = client(&server).rewrite("<b>hi</b>").await.unwrap();
        assert_eq!(res, "**hi**");
    }

    #[tokio::test]
    async fn test_rewrite_api_error() {
        let server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"message": "Rate limit exceeded"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        match client(&server).rewrite("x").await {
            Err(RewriteError::Api { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "Rate limit exceeded");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rewrite_without_choices() {
        let server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
            .mount(&server)
            .await;

        assert!(matches!(client(&server).rewrite("x").await, Err(RewriteError::EmptyResponse)));
    }

    #[test]
    fn test_api_error_message() {
        assert_eq!(api_error_message(r#"{"error":{"message":"bad key"}}"#), "bad key");
        assert_eq!(api_error_message("gateway timeout"), "gateway timeout");
    }
}
