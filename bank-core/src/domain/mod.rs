//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O.

mod account;
pub mod result;

pub use account::{Account, WithdrawalPolicy};
