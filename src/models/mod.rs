//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expense records, money amounts, and month keys.

pub mod expense;
pub mod money;
pub mod month;

pub use expense::{Expense, ExpenseValidationError, NewExpense, DEFAULT_CATEGORY};
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
