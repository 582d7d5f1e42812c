//! Environment-backed configuration
//!
//! Values load from the process environment (optionally seeded from a .env
//! file by the binary) and fall back to defaults when unset or unparseable.
//! Configuration loading never fails the process.

use std::env;
use std::str::FromStr;
use tracing::warn;

use crate::chat::DEFAULT_WINDOW_CAPACITY;

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Invalid value for {}, falling back to default", key);
            default
        }),
        Err(_) => default,
    }
}

fn env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Chat model settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            model: env_string("LLM_MODEL_NAME", "gemma2:2b"),
            base_url: env_string("LLM_BASE_URL", "http://localhost:11434"),
            temperature: env_or("LLM_TEMPERATURE", 0.7),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemma2:2b".to_string(),
            base_url: "http://localhost:11434".to_string(),
            temperature: 0.7,
        }
    }
}

/// Account and conversation settings
#[derive(Debug, Clone)]
pub struct BankingConfig {
    pub initial_balance: f64,
    pub currency: String,
    pub eur_to_usd_rate: f64,
    pub max_history_messages: usize,
}

impl BankingConfig {
    pub fn from_env() -> Self {
        Self {
            initial_balance: env_or("BANKING_INITIAL_BALANCE", 0.0),
            currency: env_string("BANKING_CURRENCY", "EUR"),
            eur_to_usd_rate: env_or("BANKING_EUR_TO_USD_RATE", 1.1),
            max_history_messages: env_or("BANKING_MAX_HISTORY_MESSAGES", DEFAULT_WINDOW_CAPACITY),
        }
    }
}

impl Default for BankingConfig {
    fn default() -> Self {
        Self {
            initial_balance: 0.0,
            currency: "EUR".to_string(),
            eur_to_usd_rate: 1.1,
            max_history_messages: DEFAULT_WINDOW_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banking_defaults() {
        let config = BankingConfig::default();
        assert_eq!(config.initial_balance, 0.0);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.eur_to_usd_rate, 1.1);
        assert_eq!(config.max_history_messages, 10);
    }

    #[test]
    fn test_llm_defaults() {
        let config = LlmConfig::default();
        assert_eq!(config.model, "gemma2:2b");
        assert_eq!(config.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("BANKBOT_TEST_RATE", "not-a-number");
        let value: f64 = env_or("BANKBOT_TEST_RATE", 1.1);
        assert_eq!(value, 1.1);
        env::remove_var("BANKBOT_TEST_RATE");
    }

    #[test]
    fn test_env_or_parses_valid_values() {
        env::set_var("BANKBOT_TEST_BALANCE", "250.5");
        let value: f64 = env_or("BANKBOT_TEST_BALANCE", 0.0);
        assert_eq!(value, 250.5);
        env::remove_var("BANKBOT_TEST_BALANCE");
    }
}
