//! Export functionality for spendlog
//!
//! Provides CSV and PDF report generation. Both exporters consume a snapshot
//! of expense records and never write back to the store.

pub mod csv;
pub mod pdf;

pub use csv::{export_expenses_csv, CSV_HEADERS};
pub use pdf::export_pdf;
