//! CSV export
//!
//! Writes one row per expense plus a header. The column set matches what
//! [`crate::services::ExpenseService::import_csv`] reads back, so an
//! exported file round-trips losslessly.

use std::io::Write;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Expense;

/// Header row shared by export and import
pub const CSV_HEADERS: [&str; 5] = ["id", "amount", "category", "date", "description"];

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> SpendlogResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(export_err)?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.amount.to_string(),
                expense.category.clone(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.description.clone(),
            ])
            .map_err(export_err)?;
    }

    csv_writer.flush().map_err(|e| SpendlogError::Export(e.to_string()))?;
    Ok(())
}

fn export_err(err: csv::Error) -> SpendlogError {
    SpendlogError::Export(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense(id: i64, amount_cents: i64, category: &str, date: &str, desc: &str) -> Expense {
        Expense {
            id,
            amount: Money::from_cents(amount_cents),
            category: category.into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: desc.into(),
        }
    }

    #[test]
    fn test_export_header_plus_one_row_per_expense() {
        let expenses = vec![
            expense(1, 25_000, "Groceries", "2025-08-15", ""),
            expense(2, 120_000, "Rent", "2025-08-01", "august rent"),
        ];

        let mut output = Vec::new();
        export_expenses_csv(&expenses, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,amount,category,date,description");
        assert_eq!(lines[1], "1,250.00,Groceries,2025-08-15,");
        assert_eq!(lines[2], "2,1200.00,Rent,2025-08-01,august rent");
    }

    #[test]
    fn test_export_empty_set_is_header_only() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let expenses = vec![expense(1, 1000, "Dining, Out", "2025-08-15", "a, b")];

        let mut output = Vec::new();
        export_expenses_csv(&expenses, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"Dining, Out\""));
        assert!(text.contains("\"a, b\""));
    }
}
