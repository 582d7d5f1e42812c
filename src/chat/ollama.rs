//! Ollama chat API client
//!
//! Talks to a local Ollama server's /api/chat endpoint.
//! Uses a long-lived reqwest::Client for connection pooling.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use crate::chat::history::{ChatRole, TurnWindow};
use crate::chat::ChatModel;
use crate::config::LlmConfig;
use crate::error::BankBotError;

/// Reusable Ollama client (connection-pooled)
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl ChatModel for OllamaClient {
    async fn chat(
        &self,
        system_prompt: &str,
        window: &TurnWindow,
        user_input: &str,
    ) -> crate::Result<String> {
        let url = format!("{}/api/chat", self.base_url);

        let mut messages = Vec::with_capacity(window.len() + 2);
        messages.push(ApiMessage {
            role: "system".to_string(),
            content: system_prompt.to_string(),
        });
        for turn in window.turns() {
            messages.push(ApiMessage {
                role: role_to_api(turn.role).to_string(),
                content: turn.content.clone(),
            });
        }
        messages.push(ApiMessage {
            role: "user".to_string(),
            content: user_input.to_string(),
        });

        let request = ChatRequest {
            model: &self.model,
            messages,
            stream: false,
            options: ChatOptions {
                temperature: self.temperature,
            },
        };

        info!(model = %self.model, "Calling Ollama chat API");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Ollama request failed: {}", e);
                BankBotError::LlmError(format!("Ollama request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Ollama error response: {} {}", status, error_text);
            return Err(BankBotError::LlmError(format!(
                "Ollama returned {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Ollama response: {}", e);
            BankBotError::LlmError(format!("Ollama parse error: {}", e))
        })?;

        let answer = chat_response.message.content;
        if answer.is_empty() {
            return Err(BankBotError::LlmError(
                "Empty response from Ollama".to_string(),
            ));
        }

        Ok(answer)
    }
}

fn role_to_api(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ApiMessage,
}
