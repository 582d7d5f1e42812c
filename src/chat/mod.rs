//! Chat layer
//!
//! Bounded turn history plus the model client behind a trait seam,
//! so the assistant can be exercised without a live model.

pub mod history;
pub mod ollama;

pub use history::{ChatRole, ChatTurn, TurnWindow, DEFAULT_WINDOW_CAPACITY};
pub use ollama::OllamaClient;

use crate::Result;
use async_trait::async_trait;

/// Trait for a chat-capable model backend (LLM controlled)
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send one user message with a system instruction and the retained
    /// turn window; returns the raw assistant text.
    async fn chat(
        &self,
        system_prompt: &str,
        window: &TurnWindow,
        user_input: &str,
    ) -> Result<String>;
}
