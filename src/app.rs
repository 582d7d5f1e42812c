//! Application loop
//!
//! Blocking read-eval-print loop: one line of user input per turn, one
//! model call, at most one conversational print and one action print.

use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::account::BankAccount;
use crate::assistant::BankingAssistant;
use crate::dispatch::ActionDispatcher;
use crate::parser;
use crate::prompts;
use crate::Result;

const EXIT_COMMANDS: &[&str] = &["exit", "quit", "bye", "goodbye"];

pub struct BankBotApp {
    account: BankAccount,
    assistant: BankingAssistant,
    dispatcher: ActionDispatcher,
}

impl BankBotApp {
    pub fn new(
        account: BankAccount,
        assistant: BankingAssistant,
        dispatcher: ActionDispatcher,
    ) -> Self {
        Self {
            account,
            assistant,
            dispatcher,
        }
    }

    pub fn account(&self) -> &BankAccount {
        &self.account
    }

    /// Process one user line and return the lines to print for this turn.
    ///
    /// A failed model call reports a remediation hint and leaves both the
    /// ledger and the turn window untouched.
    pub async fn process_input(&mut self, user_input: &str) -> Vec<String> {
        let balance = self.account.balance();
        let currency = self.account.currency().to_string();

        let reply = match self.assistant.chat(user_input, balance, &currency).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Chat call failed: {}", e);
                return vec![
                    format!("⚠️ Error communicating with LLM: {}", e),
                    "👉 Make sure 'ollama serve' is running in another terminal.".to_string(),
                ];
            }
        };

        let parsed = parser::parse_response(&reply);
        let mut output = Vec::with_capacity(2);

        if let Some(text) = &parsed.conversational {
            output.push(format!("BankBot: {}", text));
        }

        if let Some(envelope) = &parsed.action {
            let outcome = self.dispatcher.dispatch(&mut self.account, envelope);
            if let Some(action_reply) = outcome.reply {
                output.push(action_reply);
            }
        }

        output
    }

    /// Run the interactive loop until an exit command, EOF, or Ctrl-C.
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", prompts::welcome_message());

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            print!("\nYou: ");
            std::io::stdout().flush()?;

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupt received, shutting down");
                    self.print_goodbye();
                    break;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        self.print_goodbye();
                        break;
                    };

                    let user_input = line.trim();
                    if user_input.is_empty() {
                        continue;
                    }

                    if EXIT_COMMANDS.contains(&user_input.to_lowercase().as_str()) {
                        self.print_goodbye();
                        break;
                    }

                    for output_line in self.process_input(user_input).await {
                        println!("\n{}", output_line);
                    }
                }
            }
        }

        Ok(())
    }

    fn print_goodbye(&self) {
        println!(
            "{}",
            prompts::goodbye_message(self.account.balance(), self.account.currency())
        );
    }
}
