use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use spdlog::debug;

use crate::error::RewriteError;
use crate::rewrite::groq::api_error_message;
use crate::rewrite::{compose_request, Rewriter};

pub const OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const OLLAMA_MODEL: &str = "qwen2.5-coder:7b";
const SYSTEM_PROMPT: &str = "You are an expert code analyzer.";

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

/// A local Ollama server. Replies are cleaned up with [`sanitize_response`].
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RewriteError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: OLLAMA_MODEL.to_string(),
        })
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }
}

/// Drops `<think>` blocks and a ```` ```markdown ```` fence wrapped around the whole reply.
pub fn sanitize_response(response: &str) -> String {
    lazy_static! {
        static ref THINK_REGEX: Regex = Regex::new(r"(?s)<think>.*?</think>").unwrap();
    }

    let response = THINK_REGEX.replace_all(response, "");
    strip_markdown_fence(&response)
}

fn strip_markdown_fence(response: &str) -> String {
    let lines: Vec<&str> = response.split('\n').collect();
    if lines.len() < 2 || !lines[0].contains("``markdown") {
        return response.to_string();
    }

    if lines.len() > 2 {
        lines[1..lines.len() - 1].join("\n")
    } else {
        String::new()
    }
}

#[async_trait]
impl Rewriter for OllamaClient {
    async fn rewrite(&self, content: &str) -> Result<String, RewriteError> {
        let prompt = compose_request(content);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            stream: false,
        };

        debug!("Sending {} bytes to Ollama model {}", prompt.len(), self.model);
        let resp = self
            .client
            .post(format!("{}/api/chat", self.base_url))
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
        match resp.message {
            Some(message) => Ok(sanitize_response(&message.content)),
            None => Err(RewriteError::EmptyResponse),
        }
    }
}
