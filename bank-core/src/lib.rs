//! Bank Core - a single in-memory account with guarded mutation
//!
//! - **domain**: the `Account` entity and its error types
//! - **config**: settings that shape how accounts validate withdrawals

pub mod config;
pub mod domain;

use std::path::Path;

use anyhow::Result;

use config::Config;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Account, WithdrawalPolicy};

/// Main context for bank operations
///
/// Holds the loaded configuration and opens accounts that follow it.
#[derive(Debug, Clone, Default)]
pub struct BankContext {
    pub config: Config,
}

impl BankContext {
    /// Create a context from the settings in `settings_dir`
    pub fn new(settings_dir: &Path) -> Result<Self> {
        let config = Config::load(settings_dir)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Open a new, empty account using the configured withdrawal policy
    pub fn open_account(&self) -> Account {
        Account::with_policy(self.config.withdrawal_policy)
    }
}
