//! Expense service
//!
//! Provides business logic on top of the store: input validation, the
//! post-insert budget check, filtered views, and CSV re-import.

use std::io::Read;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, Money, Month, NewExpense, DEFAULT_CATEGORY};
use crate::reports::{alert_for_month, BudgetAlert};
use crate::storage::Store;

/// Filter options for listing expenses
///
/// Category and date matching is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Filter by exact category
    pub category: Option<String>,
    /// Filter by exact date
    pub date: Option<NaiveDate>,
}

impl ExpenseFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct AddExpenseInput {
    pub amount: Money,
    /// Falls back to [`DEFAULT_CATEGORY`] when None
    pub category: Option<String>,
    /// Falls back to today when None
    pub date: Option<NaiveDate>,
    pub description: String,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a Store,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Validate and insert an expense, then evaluate the budget alert for
    /// the month it falls in
    pub fn add(
        &self,
        input: AddExpenseInput,
        settings: &Settings,
    ) -> SpendlogResult<(Expense, BudgetAlert)> {
        let category = match input.category {
            Some(c) => c,
            None => DEFAULT_CATEGORY.to_string(),
        };
        let date = input
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let new = NewExpense::new(input.amount, category, date, input.description)
            .map_err(|e| SpendlogError::Validation(e.to_string()))?;

        let expense = self.store.insert(&new)?;

        let month = Month::from_date(expense.date);
        let alert = alert_for_month(&self.store.all()?, month, settings.monthly_budget);

        Ok((expense, alert))
    }

    /// List expenses matching a filter, newest first
    pub fn list(&self, filter: &ExpenseFilter) -> SpendlogResult<Vec<Expense>> {
        match (&filter.category, &filter.date) {
            (Some(category), None) => self.store.by_category(category),
            (None, Some(date)) => self.store.on_date(*date),
            (None, None) => self.store.all(),
            (Some(category), Some(date)) => {
                let mut expenses = self.store.by_category(category)?;
                expenses.retain(|e| e.date == *date);
                Ok(expenses)
            }
        }
    }

    /// All stored expenses, newest first
    pub fn all(&self) -> SpendlogResult<Vec<Expense>> {
        self.store.all()
    }

    /// Re-import expenses from a previously exported CSV
    ///
    /// Columns are located by header name; the `id` column is ignored and
    /// fresh identifiers are assigned. Every row is validated the same way
    /// as interactive input, and the whole import aborts on the first bad
    /// row, reporting its line number.
    pub fn import_csv<R: Read>(&self, reader: R) -> SpendlogResult<Vec<Expense>> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column = |name: &str| -> SpendlogResult<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| SpendlogError::Import(format!("Missing column '{}'", name)))
        };
        let amount_col = column("amount")?;
        let category_col = column("category")?;
        let date_col = column("date")?;
        let description_col = column("description")?;

        let mut imported = Vec::new();

        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            // Header is line 1
            let line = index + 2;

            let field = |col: usize| record.get(col).unwrap_or("");

            let amount = Money::parse(field(amount_col))
                .map_err(|e| SpendlogError::Import(format!("Line {}: {}", line, e)))?;
            let date = NaiveDate::parse_from_str(field(date_col), "%Y-%m-%d").map_err(|_| {
                SpendlogError::Import(format!(
                    "Line {}: Invalid date '{}' (expected YYYY-MM-DD)",
                    line,
                    field(date_col)
                ))
            })?;

            let new = NewExpense::new(amount, field(category_col), date, field(description_col))
                .map_err(|e| SpendlogError::Import(format!("Line {}: {}", line, e)))?;

            imported.push(self.store.insert(&new)?);
        }

        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> Store {
        Store::open_in_memory().unwrap()
    }

    fn add_input(amount_cents: i64, category: &str, date: &str) -> AddExpenseInput {
        AddExpenseInput {
            amount: Money::from_cents(amount_cents),
            category: Some(category.into()),
            date: Some(date.parse().unwrap()),
            description: String::new(),
        }
    }

    #[test]
    fn test_add_and_list() {
        let store = test_store();
        let service = ExpenseService::new(&store);
        let settings = Settings::default();

        let (expense, alert) = service
            .add(add_input(25_000, "Groceries", "2025-08-15"), &settings)
            .unwrap();

        assert!(expense.id > 0);
        assert!(!alert.exceeded);

        let all = service.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category, "Groceries");
    }

    #[test]
    fn test_add_defaults_category_and_date() {
        let store = test_store();
        let service = ExpenseService::new(&store);

        let input = AddExpenseInput {
            amount: Money::from_cents(100),
            category: None,
            date: None,
            description: String::new(),
        };
        let (expense, _) = service.add(input, &Settings::default()).unwrap();

        assert_eq!(expense.category, DEFAULT_CATEGORY);
        assert_eq!(expense.date, chrono::Local::now().date_naive());
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let store = test_store();
        let service = ExpenseService::new(&store);
        let settings = Settings::default();

        let result = service.add(add_input(0, "Groceries", "2025-08-15"), &settings);
        assert!(matches!(result, Err(SpendlogError::Validation(_))));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_add_raises_alert_when_month_exceeds_budget() {
        let store = test_store();
        let service = ExpenseService::new(&store);
        let mut settings = Settings::default();
        settings.monthly_budget = Money::from_cents(100_000);

        let (_, alert) = service
            .add(add_input(90_000, "Rent", "2025-08-01"), &settings)
            .unwrap();
        assert!(!alert.exceeded);

        let (_, alert) = service
            .add(add_input(20_000, "Groceries", "2025-08-15"), &settings)
            .unwrap();
        assert!(alert.exceeded);
        assert_eq!(alert.total.cents(), 110_000);
    }

    #[test]
    fn test_filter_by_category() {
        let store = test_store();
        let service = ExpenseService::new(&store);
        let settings = Settings::default();

        service.add(add_input(100, "Groceries", "2025-08-01"), &settings).unwrap();
        service.add(add_input(200, "Rent", "2025-08-01"), &settings).unwrap();

        let filter = ExpenseFilter::new().category("Rent");
        let matched = service.list(&filter).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].category, "Rent");
    }

    #[test]
    fn test_filter_by_date() {
        let store = test_store();
        let service = ExpenseService::new(&store);
        let settings = Settings::default();

        service.add(add_input(100, "Groceries", "2025-08-01"), &settings).unwrap();
        service.add(add_input(200, "Groceries", "2025-08-15"), &settings).unwrap();

        let filter = ExpenseFilter::new().date("2025-08-15".parse().unwrap());
        let matched = service.list(&filter).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].amount.cents(), 200);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let store = test_store();
        let service = ExpenseService::new(&store);

        let filter = ExpenseFilter::new().category("Travel");
        assert!(service.list(&filter).unwrap().is_empty());
    }

    #[test]
    fn test_import_csv() {
        let store = test_store();
        let service = ExpenseService::new(&store);

        let csv_data = "id,amount,category,date,description\n\
                        1,250.00,Groceries,2025-08-15,weekly shop\n\
                        2,1200.00,Rent,2025-08-01,\n";

        let imported = service.import_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(imported.len(), 2);
        assert_eq!(imported[0].amount.cents(), 25_000);
        assert_eq!(imported[0].description, "weekly shop");
        assert_eq!(imported[1].category, "Rent");
    }

    #[test]
    fn test_import_reports_bad_row_with_line_number() {
        let store = test_store();
        let service = ExpenseService::new(&store);

        let csv_data = "id,amount,category,date,description\n\
                        1,250.00,Groceries,2025-08-15,\n\
                        2,not-a-number,Rent,2025-08-01,\n";

        let err = service.import_csv(csv_data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Line 3"));
    }

    #[test]
    fn test_import_rejects_missing_column() {
        let store = test_store();
        let service = ExpenseService::new(&store);

        let csv_data = "amount,category\n250.00,Groceries\n";
        let err = service.import_csv(csv_data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Missing column 'date'"));
    }

    #[test]
    fn test_export_import_round_trip() {
        let store = test_store();
        let service = ExpenseService::new(&store);
        let settings = Settings::default();

        let mut input = add_input(25_000, "Groceries", "2025-08-15");
        input.description = "weekly shop".into();
        service.add(input, &settings).unwrap();
        service.add(add_input(120_000, "Rent", "2025-08-01"), &settings).unwrap();

        let mut csv_output = Vec::new();
        crate::export::export_expenses_csv(&service.all().unwrap(), &mut csv_output).unwrap();

        let second_store = test_store();
        let second_service = ExpenseService::new(&second_store);
        second_service.import_csv(csv_output.as_slice()).unwrap();

        let original = service.all().unwrap();
        let reimported = second_service.all().unwrap();
        assert_eq!(original.len(), reimported.len());
        for (a, b) in original.iter().zip(reimported.iter()) {
            assert_eq!(a.amount, b.amount);
            assert_eq!(a.category, b.category);
            assert_eq!(a.date, b.date);
            assert_eq!(a.description, b.description);
        }
    }
}
