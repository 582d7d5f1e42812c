//! Banking assistant
//!
//! Drives the chat model: rebuilds the system instruction with the current
//! balance every turn, sends the bounded turn window for context, and
//! records the exchange only when the model call succeeds.

use tracing::debug;

use crate::chat::{ChatModel, TurnWindow};
use crate::prompts;
use crate::Result;

pub struct BankingAssistant {
    model: Box<dyn ChatModel>,
    window: TurnWindow,
}

impl BankingAssistant {
    pub fn new(model: Box<dyn ChatModel>, max_history: usize) -> Self {
        Self {
            model,
            window: TurnWindow::new(max_history),
        }
    }

    /// Send one user message and return the raw assistant reply.
    ///
    /// A failed call propagates the error and leaves the window untouched,
    /// so the failed turn never becomes model context.
    pub async fn chat(&mut self, user_input: &str, balance: f64, currency: &str) -> Result<String> {
        let system_prompt = prompts::system_prompt(balance, currency);

        let reply = self
            .model
            .chat(&system_prompt, &self.window, user_input)
            .await?;

        self.window.record_exchange(user_input, &reply);

        debug!(
            window_len = self.window.len(),
            "Exchange recorded in turn window"
        );

        Ok(reply)
    }

    pub fn history_len(&self) -> usize {
        self.window.len()
    }

    pub fn clear_history(&mut self) {
        self.window.clear();
    }
}
