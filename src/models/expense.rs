//! Expense model
//!
//! An expense is one recorded monetary outflow. Records are immutable once
//! stored: there is no update or delete operation, only insert and query.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::Month;

/// Category assigned when the user leaves the category blank at the prompt
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A stored expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the database on insert
    pub id: i64,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category label
    pub category: String,

    /// Date of the expense
    pub date: NaiveDate,

    /// Free-text description (may be empty)
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// The month this expense falls in
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// A validated expense awaiting insertion
///
/// Construction goes through [`NewExpense::new`], which enforces the insert
/// invariants: amount > 0 and category non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

impl NewExpense {
    /// Validate the fields and build a new expense
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<Self, ExpenseValidationError> {
        let category = category.into();

        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(amount));
        }
        if category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(Self {
            amount,
            category,
            date,
            description: description.into(),
        })
    }
}

/// Validation errors for expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Category must not be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
