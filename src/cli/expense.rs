//! CLI commands for recording and listing expenses

use std::fs::File;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::{format_alert_line, format_expense_table};
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Money;
use crate::services::{AddExpenseInput, ExpenseFilter, ExpenseService};
use crate::storage::Store;

/// Arguments for recording a new expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. "250" or "12.50")
    pub amount: String,

    /// Category label (defaults to "Uncategorized")
    pub category: Option<String>,

    /// Expense date, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Free-text description
    #[arg(short = 'm', long, default_value = "")]
    pub description: String,
}

/// Arguments for listing expenses
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show only expenses with this exact category (case-sensitive)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Show only expenses on this exact date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for importing expenses from CSV
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to a CSV file previously produced by `spendlog export csv`
    pub file: PathBuf,
}

/// Handle the `add` command
pub fn handle_add(store: &Store, settings: &Settings, args: AddArgs) -> SpendlogResult<()> {
    let amount = Money::parse(&args.amount)
        .map_err(|e| SpendlogError::Validation(e.to_string()))?;

    let service = ExpenseService::new(store);
    let (expense, alert) = service.add(
        AddExpenseInput {
            amount,
            category: args.category,
            date: args.date,
            description: args.description,
        },
        settings,
    )?;

    println!(
        "Recorded expense #{}: {} {} on {}",
        expense.id,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.category,
        expense.date.format(&settings.date_format),
    );

    if alert.exceeded {
        println!("{}", format_alert_line(&alert, &settings.currency_symbol));
    }

    Ok(())
}

/// Handle the `list` command
pub fn handle_list(store: &Store, settings: &Settings, args: ListArgs) -> SpendlogResult<()> {
    let mut filter = ExpenseFilter::new();
    if let Some(category) = args.category {
        filter = filter.category(category);
    }
    if let Some(date) = args.date {
        filter = filter.date(date);
    }

    let service = ExpenseService::new(store);
    let expenses = service.list(&filter)?;

    println!("{}", format_expense_table(&expenses, &settings.currency_symbol));
    Ok(())
}

/// Handle the `import` command
pub fn handle_import(store: &Store, args: ImportArgs) -> SpendlogResult<()> {
    let file = File::open(&args.file).map_err(|e| {
        SpendlogError::Import(format!("Failed to open {}: {}", args.file.display(), e))
    })?;

    let service = ExpenseService::new(store);
    let imported = service.import_csv(file)?;

    println!(
        "Imported {} expense(s) from {}",
        imported.len(),
        args.file.display()
    );
    Ok(())
}
