//! Storage layer for spendlog
//!
//! A thin persistence wrapper around a single SQLite database file holding
//! one `expenses` table. The store handle is constructed explicitly and
//! passed to each operation; there is no global connection state. Records
//! are insert-only: the schema exposes no update or delete path.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, Money, NewExpense};

/// Handle to the expense database
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database at the given path and ensure the schema exists
    pub fn open(path: &Path) -> SpendlogResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| SpendlogError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
        Self::with_connection(conn)
    }

    /// Open an in-memory database (useful for testing)
    pub fn open_in_memory() -> SpendlogResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> SpendlogResult<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount_cents INTEGER NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT ''
            );
            "#,
        )?;
        Ok(Self { conn })
    }

    /// Insert a validated expense and return the stored record with its assigned id
    pub fn insert(&self, new: &NewExpense) -> SpendlogResult<Expense> {
        self.conn.execute(
            "INSERT INTO expenses (amount_cents, category, date, description) VALUES (?1, ?2, ?3, ?4)",
            params![new.amount.cents(), new.category, new.date, new.description],
        )?;

        Ok(Expense {
            id: self.conn.last_insert_rowid(),
            amount: new.amount,
            category: new.category.clone(),
            date: new.date,
            description: new.description.clone(),
        })
    }

    /// Get all expenses, newest first (date descending, then id descending)
    pub fn all(&self) -> SpendlogResult<Vec<Expense>> {
        self.query(
            "SELECT id, amount_cents, category, date, description FROM expenses \
             ORDER BY date DESC, id DESC",
            params![],
        )
    }

    /// Get expenses with an exactly matching category (case-sensitive)
    pub fn by_category(&self, category: &str) -> SpendlogResult<Vec<Expense>> {
        self.query(
            "SELECT id, amount_cents, category, date, description FROM expenses \
             WHERE category = ?1 ORDER BY date DESC, id DESC",
            params![category],
        )
    }

    /// Get expenses on an exact date
    pub fn on_date(&self, date: NaiveDate) -> SpendlogResult<Vec<Expense>> {
        self.query(
            "SELECT id, amount_cents, category, date, description FROM expenses \
             WHERE date = ?1 ORDER BY id DESC",
            params![date],
        )
    }

    /// Count stored expenses
    pub fn count(&self) -> SpendlogResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn query(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> SpendlogResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, map_expense)?;
        let mut expenses = Vec::new();
        for row in rows {
            expenses.push(row?);
        }
        Ok(expenses)
    }
}

fn map_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        amount: Money::from_cents(row.get(1)?),
        category: row.get(2)?,
        date: row.get(3)?,
        description: row.get(4)?,
    })
}
