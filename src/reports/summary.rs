//! Monthly summary aggregation
//!
//! Pure computation over expense slices: total spend per month, category
//! breakdowns within each month, and budget alerts against a configured
//! threshold. Nothing here touches the store; callers pass a snapshot of
//! records and get derived views back.

use std::collections::BTreeMap;

use crate::models::{Expense, Money, Month};

/// Total spend for one category within some period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category label
    pub category: String,
    /// Summed amount
    pub total: Money,
    /// Number of expenses
    pub count: usize,
}

/// Aggregated spend for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    /// The month this summary covers
    pub month: Month,
    /// Total spend across all categories
    pub total: Money,
    /// Per-category totals, sorted alphabetically by category
    pub categories: Vec<CategoryTotal>,
}

/// Result of checking one month's total against the budget threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetAlert {
    pub month: Month,
    pub total: Money,
    pub threshold: Money,
    /// True when total is strictly greater than the threshold. A total equal
    /// to the threshold does not alert.
    pub exceeded: bool,
}

impl BudgetAlert {
    /// Evaluate a month total against a threshold
    pub fn evaluate(month: Month, total: Money, threshold: Money) -> Self {
        Self {
            month,
            total,
            threshold,
            exceeded: total > threshold,
        }
    }
}

/// Compute per-month summaries with category breakdowns
///
/// Months are returned in ascending chronological order; categories within a
/// month are sorted alphabetically for deterministic display. An empty input
/// yields an empty vec.
pub fn monthly_summaries(expenses: &[Expense]) -> Vec<MonthlySummary> {
    // BTreeMap keeps months chronological and categories alphabetical for free
    let mut by_month: BTreeMap<Month, BTreeMap<String, (Money, usize)>> = BTreeMap::new();

    for expense in expenses {
        let entry = by_month
            .entry(expense.month())
            .or_default()
            .entry(expense.category.clone())
            .or_insert((Money::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    by_month
        .into_iter()
        .map(|(month, categories)| {
            let mut total = Money::zero();
            let categories: Vec<CategoryTotal> = categories
                .into_iter()
                .map(|(category, (subtotal, count))| {
                    total += subtotal;
                    CategoryTotal {
                        category,
                        total: subtotal,
                        count,
                    }
                })
                .collect();

            MonthlySummary {
                month,
                total,
                categories,
            }
        })
        .collect()
}

/// Compute the summary for a single month, if it has any expenses
pub fn summary_for_month(expenses: &[Expense], month: Month) -> Option<MonthlySummary> {
    monthly_summaries(expenses)
        .into_iter()
        .find(|s| s.month == month)
}

/// Compute overall category totals across all months
///
/// Sorted by total descending (largest spend first), ties broken
/// alphabetically. This is the ordering used by the pie chart and the PDF
/// breakdown table.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut by_category: BTreeMap<String, (Money, usize)> = BTreeMap::new();

    for expense in expenses {
        let entry = by_category
            .entry(expense.category.clone())
            .or_insert((Money::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut totals: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category,
            total,
            count,
        })
        .collect();

    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    totals
}

/// Total spend across all expenses
pub fn grand_total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Evaluate the budget alert for the month containing the given expenses
///
/// Returns an alert with zero total (never exceeded, assuming a non-negative
/// threshold) when the month has no expenses.
pub fn alert_for_month(expenses: &[Expense], month: Month, threshold: Money) -> BudgetAlert {
    let total = expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.amount)
        .sum();
    BudgetAlert::evaluate(month, total, threshold)
}

/// Evaluate budget alerts for every summarized month
pub fn budget_alerts(summaries: &[MonthlySummary], threshold: Money) -> Vec<BudgetAlert> {
    summaries
        .iter()
        .map(|s| BudgetAlert::evaluate(s.month, s.total, threshold))
        .collect()
}
