//! Account ledger
//!
//! Holds the balance, the account currency, and the transaction history.
//! Every deposit or withdrawal attempt is recorded, successful or not.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
        };
        write!(f, "{}", s)
    }
}

/// A single ledger entry. Never mutated after being recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub balance_before: f64,
    pub balance_after: f64,
    pub success: bool,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    fn record(
        kind: TransactionKind,
        amount: f64,
        balance_before: f64,
        balance_after: f64,
        success: bool,
        message: String,
    ) -> Self {
        Self {
            transaction_id: Uuid::new_v4(),
            kind,
            amount,
            balance_before,
            balance_after,
            success,
            message,
            created_at: Utc::now(),
        }
    }
}

/// Result of a pure currency conversion. The stored balance is untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConversion {
    pub from_amount: f64,
    pub from_currency: String,
    pub to_amount: f64,
    pub to_currency: String,
    pub exchange_rate: f64,
}

/// In-memory account ledger for a single currency.
#[derive(Debug, Clone)]
pub struct BankAccount {
    balance: f64,
    currency: String,
    history: Vec<Transaction>,
}

impl BankAccount {
    pub fn new(initial_balance: f64, currency: impl Into<String>) -> Self {
        Self {
            balance: initial_balance,
            currency: currency.into(),
            history: Vec::new(),
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Transaction history, oldest first.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Add money to the account.
    ///
    /// Non-positive amounts leave the balance unchanged and produce an
    /// unsuccessful transaction.
    pub fn deposit(&mut self, amount: f64) -> Transaction {
        let balance_before = self.balance;

        let transaction = if amount <= 0.0 {
            Transaction::record(
                TransactionKind::Deposit,
                amount,
                balance_before,
                balance_before,
                false,
                "Amount must be positive".to_string(),
            )
        } else {
            self.balance += amount;

            debug!(amount, balance = self.balance, "Deposit applied");

            Transaction::record(
                TransactionKind::Deposit,
                amount,
                balance_before,
                self.balance,
                true,
                format!("Deposited {:.2} {}", amount, self.currency),
            )
        };

        self.history.push(transaction.clone());
        transaction
    }

    /// Take money out of the account.
    ///
    /// Fails on non-positive amounts and on amounts above the current
    /// balance; either way the balance is unchanged.
    pub fn withdraw(&mut self, amount: f64) -> Transaction {
        let balance_before = self.balance;

        let transaction = if amount <= 0.0 {
            Transaction::record(
                TransactionKind::Withdraw,
                amount,
                balance_before,
                balance_before,
                false,
                "Amount must be positive".to_string(),
            )
        } else if amount > self.balance {
            Transaction::record(
                TransactionKind::Withdraw,
                amount,
                balance_before,
                balance_before,
                false,
                format!(
                    "Insufficient funds. Available: {:.2} {}",
                    self.balance, self.currency
                ),
            )
        } else {
            self.balance -= amount;

            debug!(amount, balance = self.balance, "Withdrawal applied");

            Transaction::record(
                TransactionKind::Withdraw,
                amount,
                balance_before,
                self.balance,
                true,
                format!("Withdrew {:.2} {}", amount, self.currency),
            )
        };

        self.history.push(transaction.clone());
        transaction
    }

    /// Convert an amount into another currency at the given rate.
    ///
    /// Pure computation: no balance mutation, no history entry, and no
    /// amount validation (a non-positive amount passes straight through).
    pub fn convert_currency(
        &self,
        amount: f64,
        to_currency: &str,
        exchange_rate: f64,
    ) -> CurrencyConversion {
        CurrencyConversion {
            from_amount: amount,
            from_currency: self.currency.clone(),
            to_amount: amount * exchange_rate,
            to_currency: to_currency.to_string(),
            exchange_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_increases_balance() {
        let mut account = BankAccount::new(50.0, "EUR");
        let transaction = account.deposit(100.0);

        assert!(transaction.success);
        assert_eq!(transaction.balance_before, 50.0);
        assert_eq!(transaction.balance_after, 150.0);
        assert_eq!(account.balance(), 150.0);
    }

    #[test]
    fn test_deposit_rejects_non_positive_amounts() {
        let mut account = BankAccount::new(50.0, "EUR");

        for amount in [0.0, -10.0] {
            let transaction = account.deposit(amount);
            assert!(!transaction.success);
            assert_eq!(account.balance(), 50.0);
        }
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut account = BankAccount::new(100.0, "EUR");
        let transaction = account.withdraw(40.0);

        assert!(transaction.success);
        assert_eq!(transaction.balance_after, 60.0);
        assert_eq!(account.balance(), 60.0);
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut account = BankAccount::new(100.0, "EUR");
        let transaction = account.withdraw(150.0);

        assert!(!transaction.success);
        assert!(transaction.message.contains("Insufficient funds"));
        assert!(transaction.message.contains("100.00 EUR"));
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn test_withdraw_rejects_non_positive_amounts() {
        let mut account = BankAccount::new(100.0, "EUR");
        let transaction = account.withdraw(-5.0);

        assert!(!transaction.success);
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn test_failed_attempts_are_recorded() {
        let mut account = BankAccount::new(0.0, "EUR");
        account.deposit(-1.0);
        account.withdraw(10.0);
        account.deposit(25.0);

        assert_eq!(account.history().len(), 3);
        assert!(!account.history()[0].success);
        assert!(!account.history()[1].success);
        assert!(account.history()[2].success);
    }

    #[test]
    fn test_convert_currency_is_pure() {
        let account = BankAccount::new(100.0, "EUR");
        let conversion = account.convert_currency(100.0, "USD", 1.1);

        assert_eq!(conversion.from_amount, 100.0);
        assert_eq!(conversion.from_currency, "EUR");
        assert!((conversion.to_amount - 110.0).abs() < 1e-9);
        assert_eq!(conversion.to_currency, "USD");
        assert_eq!(account.balance(), 100.0);
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_convert_currency_passes_non_positive_amounts_through() {
        let account = BankAccount::new(100.0, "EUR");
        let conversion = account.convert_currency(-50.0, "USD", 1.1);

        assert!((conversion.to_amount - -55.0).abs() < 1e-9);
        assert_eq!(account.balance(), 100.0);
    }
}
