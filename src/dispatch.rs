//! Action dispatch
//!
//! Maps a parsed action envelope onto a ledger operation and produces the
//! user-facing reply for it.

use tracing::{debug, warn};

use crate::account::BankAccount;
use crate::parser::ActionEnvelope;

pub const ACTION_CHECK_BALANCE: &str = "check_balance";
pub const ACTION_ADD: &str = "add";
pub const ACTION_WITHDRAW: &str = "withdraw";
pub const ACTION_CONVERT_USD: &str = "convert_usd";

/// Result of dispatching one envelope.
///
/// `reply` is the single message path back to the user; an unrecognized
/// action produces no reply at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub success: bool,
    pub reply: Option<String>,
}

impl ActionOutcome {
    fn ok(reply: String) -> Self {
        Self {
            success: true,
            reply: Some(reply),
        }
    }

    fn failed(reply: String) -> Self {
        Self {
            success: false,
            reply: Some(reply),
        }
    }

    fn ignored() -> Self {
        Self {
            success: false,
            reply: None,
        }
    }
}

/// Dispatches validated envelopes against the ledger.
pub struct ActionDispatcher {
    usd_rate: f64,
}

impl ActionDispatcher {
    pub fn new(usd_rate: f64) -> Self {
        Self { usd_rate }
    }

    pub fn dispatch(&self, account: &mut BankAccount, envelope: &ActionEnvelope) -> ActionOutcome {
        let amount = envelope.amount_or_zero();

        match envelope.action.as_str() {
            ACTION_CHECK_BALANCE => ActionOutcome::ok(format!(
                "💰 Current Balance: {:.2} {}",
                account.balance(),
                account.currency()
            )),

            ACTION_ADD => {
                let transaction = account.deposit(amount);
                if transaction.success {
                    ActionOutcome::ok(format!(
                        "✅ Deposited {:.2} {} → New balance: {:.2} {}",
                        amount,
                        account.currency(),
                        account.balance(),
                        account.currency()
                    ))
                } else {
                    warn!(amount, "Deposit rejected");
                    ActionOutcome::failed(transaction.message)
                }
            }

            ACTION_WITHDRAW => {
                let transaction = account.withdraw(amount);
                if transaction.success {
                    ActionOutcome::ok(format!(
                        "✅ Withdrew {:.2} {} → New balance: {:.2} {}",
                        amount,
                        account.currency(),
                        account.balance(),
                        account.currency()
                    ))
                } else {
                    warn!(amount, "Withdrawal rejected");
                    ActionOutcome::failed(transaction.message)
                }
            }

            ACTION_CONVERT_USD => {
                // Amount is not validated here; the conversion is a pure
                // pass-through at the configured rate.
                let conversion = account.convert_currency(amount, "USD", self.usd_rate);
                ActionOutcome::ok(format!(
                    "💱 {:.2} {} = {:.2} {}",
                    conversion.from_amount,
                    conversion.from_currency,
                    conversion.to_amount,
                    conversion.to_currency
                ))
            }

            other => {
                debug!(action = other, "Unrecognized action, ignoring");
                ActionOutcome::ignored()
            }
        }
    }
}
