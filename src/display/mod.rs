//! Console display formatting
//!
//! Formats expenses, monthly summaries, and budget alerts for terminal
//! output using tabled.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;
use crate::reports::{BudgetAlert, CategoryTotal, MonthlySummary};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Count")]
    count: usize,
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id,
            date: e.date.format("%Y-%m-%d").to_string(),
            category: e.category.clone(),
            amount: e.amount.format_with_symbol(currency_symbol),
            description: e.description.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format monthly totals as a table
pub fn format_summary_table(summaries: &[MonthlySummary], currency_symbol: &str) -> String {
    if summaries.is_empty() {
        return "No expenses to summarize.".to_string();
    }

    let rows: Vec<SummaryRow> = summaries
        .iter()
        .map(|s| SummaryRow {
            month: s.month.to_string(),
            total: s.total.format_with_symbol(currency_symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format a category breakdown as a table
pub fn format_breakdown_table(categories: &[CategoryTotal], currency_symbol: &str) -> String {
    let rows: Vec<BreakdownRow> = categories
        .iter()
        .map(|c| BreakdownRow {
            category: c.category.clone(),
            total: c.total.format_with_symbol(currency_symbol),
            count: c.count,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// One-line budget status for a month
pub fn format_alert_line(alert: &BudgetAlert, currency_symbol: &str) -> String {
    if alert.exceeded {
        format!(
            "ALERT: {} spend {} exceeds monthly budget of {}",
            alert.month,
            alert.total.format_with_symbol(currency_symbol),
            alert.threshold.format_with_symbol(currency_symbol)
        )
    } else {
        format!(
            "{} spend {} is within the monthly budget of {}",
            alert.month,
            alert.total.format_with_symbol(currency_symbol),
            alert.threshold.format_with_symbol(currency_symbol)
        )
    }
}
