//! Account domain model

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::result::{Error, Result};

/// How `Account::withdraw` validates the requested amount.
///
/// `Lenient` only checks the amount against the current balance, so a
/// withdrawal of zero is a no-op and a negative withdrawal adds funds.
/// `RequirePositive` rejects non-positive amounts the same way deposits do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalPolicy {
    #[default]
    Lenient,
    RequirePositive,
}

/// A single in-memory account holding an integer balance
///
/// The balance only changes through `deposit` and `withdraw`. No
/// `Deserialize` impl: every account starts at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Account {
    balance: i64,
    policy: WithdrawalPolicy,
}

impl Account {
    /// Create an empty account with the lenient withdrawal policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty account with the given withdrawal policy
    pub fn with_policy(policy: WithdrawalPolicy) -> Self {
        Self { balance: 0, policy }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn policy(&self) -> WithdrawalPolicy {
        self.policy
    }

    /// Add `amount` to the balance
    ///
    /// Fails with `InvalidAmount` when `amount <= 0`. The balance is left
    /// untouched on any error.
    pub fn deposit(&mut self, amount: i64) -> Result<()> {
        if amount <= 0 {
            warn!(operation = "deposit", reason = "invalid_amount", "rejected");
            return Err(Error::InvalidAmount);
        }

        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            warn!(operation = "deposit", reason = "overflow", "rejected");
            Error::Overflow
        })?;

        debug!(operation = "deposit", "applied");
        Ok(())
    }

    /// Subtract `amount` from the balance
    ///
    /// Fails with `InsufficientBalance` when `amount` exceeds the current
    /// balance. Under `WithdrawalPolicy::RequirePositive` a non-positive
    /// amount fails with `InvalidAmount` first.
    pub fn withdraw(&mut self, amount: i64) -> Result<()> {
        if self.policy == WithdrawalPolicy::RequirePositive && amount <= 0 {
            warn!(operation = "withdraw", reason = "invalid_amount", "rejected");
            return Err(Error::InvalidAmount);
        }

        if amount > self.balance {
            warn!(operation = "withdraw", reason = "insufficient_balance", "rejected");
            return Err(Error::InsufficientBalance);
        }

        // Only reachable with a very negative amount under the lenient policy
        self.balance = self.balance.checked_sub(amount).ok_or_else(|| {
            warn!(operation = "withdraw", reason = "overflow", "rejected");
            Error::Overflow
        })?;

        debug!(operation = "withdraw", "applied");
        Ok(())
    }
}
