//! Service layer for spendlog
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, the budget-alert check on insert, and CSV import.

pub mod expense;

pub use expense::{AddExpenseInput, ExpenseFilter, ExpenseService};
