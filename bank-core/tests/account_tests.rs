//! Integration tests for account operations
//!
//! Covers the documented account scenarios end to end through the public API.

use bank_core::config::Config;
use bank_core::{Account, BankContext, Error, WithdrawalPolicy};

// ============================================================================
// Test Helpers
// ============================================================================

/// Open an account holding `amount`
fn account_with(amount: i64) -> Account {
    let mut account = Account::new();
    account.deposit(amount).unwrap();
    account
}

// ============================================================================
// Balance Scenarios
// ============================================================================

#[test]
fn test_new_account_balance_is_zero() {
    let account = Account::new();
    assert_eq!(account.balance(), 0);
    assert!(account.balance() <= 0);
}

#[test]
fn test_deposit_100() {
    let account = account_with(100);
    assert_eq!(account.balance(), 100);
    assert!(account.balance() > 0);
}

#[test]
fn test_deposit_200_withdraw_50() {
    let mut account = account_with(200);
    account.withdraw(50).unwrap();
    assert_eq!(account.balance(), 150);
}

#[test]
fn test_deposit_500_withdraw_200() {
    let mut account = account_with(500);
    account.withdraw(200).unwrap();

    assert!(account.balance() > 0);
    assert_eq!(account.balance(), 300);
}

// ============================================================================
// Rejected Operations
// ============================================================================

#[test]
fn test_withdraw_more_than_available() {
    let mut account = account_with(50);

    let err = account.withdraw(100).unwrap_err();
    assert!(matches!(err, Error::InsufficientBalance));
    assert_eq!(err.to_string(), "Insufficient balance");
    assert_eq!(account.balance(), 50);
}

#[test]
fn test_deposit_negative() {
    let mut account = Account::new();

    let err = account.deposit(-10).unwrap_err();
    assert!(matches!(err, Error::InvalidAmount));
    assert_eq!(err.to_string(), "Amount must be positive");
    assert_eq!(account.balance(), 0);
}

#[test]
fn test_deposit_zero() {
    let mut account = Account::new();

    match account.deposit(0) {
        Ok(()) => panic!("Deposit of 0 should fail"),
        Err(e) => assert_eq!(e.to_string(), "Amount must be positive"),
    }
}

#[test]
fn test_rejected_operation_keeps_account_usable() {
    let mut account = account_with(30);
    assert!(account.withdraw(31).is_err());

    account.deposit(1).unwrap();
    account.withdraw(31).unwrap();
    assert_eq!(account.balance(), 0);
}

// ============================================================================
// Context
// ============================================================================

#[test]
fn test_context_opens_accounts_with_configured_policy() {
    let config = Config::default().with_withdrawal_policy(WithdrawalPolicy::RequirePositive);
    let ctx = BankContext::from_config(config);

    let mut account = ctx.open_account();
    assert_eq!(account.balance(), 0);
    assert_eq!(account.policy(), WithdrawalPolicy::RequirePositive);
    assert!(matches!(account.withdraw(0), Err(Error::InvalidAmount)));
}

#[test]
fn test_default_context_is_lenient() {
    let mut account = BankContext::default().open_account();
    account.withdraw(0).unwrap();
    assert_eq!(account.balance(), 0);
}
