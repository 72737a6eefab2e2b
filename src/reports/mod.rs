//! Report generation for spendlog
//!
//! Aggregation of expense records into the derived views that feed the
//! console summary, the charts, and the PDF report. All computation is pure
//! and recomputed on demand; nothing here is persisted.

pub mod summary;

pub use summary::{
    alert_for_month, budget_alerts, category_totals, grand_total, monthly_summaries,
    summary_for_month, BudgetAlert, CategoryTotal, MonthlySummary,
};
