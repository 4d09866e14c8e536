//! Configuration management
//!
//! Settings live in `settings.json` inside the settings directory:
//! ```json
//! {
//!   "account": { "withdrawalPolicy": "require_positive" }
//! }
//! ```
//! Keys this crate doesn't manage are kept untouched when saving.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::result::{self, Error};
use crate::domain::WithdrawalPolicy;

const SETTINGS_FILE: &str = "settings.json";

/// Env var that overrides the configured withdrawal policy
pub const STRICT_WITHDRAWALS_ENV: &str = "BANK_STRICT_WITHDRAWALS";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    account: AccountSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountSettings {
    #[serde(default)]
    withdrawal_policy: WithdrawalPolicy,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Bank configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub withdrawal_policy: WithdrawalPolicy,
}

impl Config {
    /// Load config from the settings directory
    ///
    /// The withdrawal policy can be set via:
    /// 1. Settings file (`account.withdrawalPolicy`)
    /// 2. Environment variable BANK_STRICT_WITHDRAWALS, which wins when set
    ///    to a recognized boolean
    pub fn load(settings_dir: &Path) -> Result<Self> {
        let env_value = std::env::var(STRICT_WITHDRAWALS_ENV).ok();
        Self::load_with_override(settings_dir, env_value.as_deref())
    }

    /// Load config, treating `env_value` as the BANK_STRICT_WITHDRAWALS value
    ///
    /// A missing or unparseable settings file yields defaults; a file that
    /// exists but can't be read is an error.
    pub fn load_with_override(settings_dir: &Path, env_value: Option<&str>) -> Result<Self> {
        let settings_path = settings_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = match read_settings_content(&settings_path)? {
            Some(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                debug!(
                    path = %settings_path.display(),
                    error = %e,
                    "malformed settings, using defaults"
                );
                SettingsFile::default()
            }),
            None => SettingsFile::default(),
        };

        let withdrawal_policy =
            policy_override(env_value).unwrap_or(raw.account.withdrawal_policy);

        Ok(Self { withdrawal_policy })
    }

    /// Save config to the settings directory
    /// Preserves other settings that this crate doesn't manage
    pub fn save(&self, settings_dir: &Path) -> Result<()> {
        if !settings_dir.is_dir() {
            return Err(Error::config(format!(
                "settings directory does not exist: {}",
                settings_dir.display()
            ))
            .into());
        }

        let settings_path = settings_dir.join(SETTINGS_FILE);
        // Refuse to overwrite a settings file we can't parse
        let mut settings: SettingsFile = match read_settings_content(&settings_path)? {
            Some(content) => serde_json::from_str(&content).map_err(Error::from)?,
            None => SettingsFile::default(),
        };
        settings.account.withdrawal_policy = self.withdrawal_policy;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    pub fn with_withdrawal_policy(mut self, policy: WithdrawalPolicy) -> Self {
        self.withdrawal_policy = policy;
        self
    }
}

/// Raw settings.json content, `None` when the file doesn't exist
fn read_settings_content(path: &Path) -> result::Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(std::fs::read_to_string(path)?))
}

/// Map the env var value to a policy; unrecognized values defer to the file
fn policy_override(value: Option<&str>) -> Option<WithdrawalPolicy> {
    match value {
        Some("true" | "1" | "yes" | "TRUE" | "YES") => Some(WithdrawalPolicy::RequirePositive),
        Some("false" | "0" | "no" | "FALSE" | "NO") => Some(WithdrawalPolicy::Lenient),
        _ => None,
    }
}
