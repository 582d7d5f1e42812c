//! Chat turn window
//!
//! Bounded recent-history buffer handed to the model as context.
//! Oldest turns are evicted first once the bound is exceeded.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Role of a turn's author
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single (role, text) turn in the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Default window bound: ten turns, five full exchanges.
pub const DEFAULT_WINDOW_CAPACITY: usize = 10;

/// Fixed-capacity FIFO window over recent turns.
#[derive(Debug, Clone)]
pub struct TurnWindow {
    turns: VecDeque<ChatTurn>,
    capacity: usize,
}

impl TurnWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one turn, evicting from the front while over capacity.
    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.capacity {
            self.turns.pop_front();
        }
    }

    /// Record a completed user/assistant exchange.
    pub fn record_exchange(&mut self, user_input: &str, assistant_reply: &str) {
        self.push(ChatTurn::new(ChatRole::User, user_input));
        self.push(ChatTurn::new(ChatRole::Assistant, assistant_reply));
    }

    /// Iterate over retained turns, oldest first
    pub fn turns(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

impl Default for TurnWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_keeps_everything_under_capacity() {
        let mut window = TurnWindow::new(10);
        window.record_exchange("hi", "hello");
        window.record_exchange("add 50", "done");

        assert_eq!(window.len(), 4);
        let first = window.turns().next().unwrap();
        assert_eq!(first.role, ChatRole::User);
        assert_eq!(first.content, "hi");
    }

    #[test]
    fn test_window_evicts_oldest_first() {
        let mut window = TurnWindow::new(10);

        // Six exchanges produce twelve turns; only the last ten survive.
        for i in 0..6 {
            window.record_exchange(&format!("question {}", i), &format!("answer {}", i));
        }

        assert_eq!(window.len(), 10);

        let contents: Vec<&str> = window.turns().map(|t| t.content.as_str()).collect();
        assert_eq!(contents[0], "question 1");
        assert_eq!(contents[9], "answer 5");
        assert!(!contents.contains(&"question 0"));
        assert!(!contents.contains(&"answer 0"));
    }

    #[test]
    fn test_retained_order_is_oldest_first() {
        let mut window = TurnWindow::new(4);
        for i in 0..4 {
            window.record_exchange(&format!("q{}", i), &format!("a{}", i));
        }

        let contents: Vec<&str> = window.turns().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["q2", "a2", "q3", "a3"]);
    }

    #[test]
    fn test_clear_empties_the_window() {
        let mut window = TurnWindow::default();
        window.record_exchange("hi", "hello");
        window.clear();

        assert!(window.is_empty());
        assert_eq!(window.capacity(), DEFAULT_WINDOW_CAPACITY);
    }
}
