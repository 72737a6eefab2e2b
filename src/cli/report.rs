//! CLI commands for summaries, charts, and report export

use std::path::PathBuf;

use chrono::Local;
use clap::{Args, Subcommand};

use crate::charts;
use crate::config::{Settings, SpendlogPaths};
use crate::display::{format_alert_line, format_breakdown_table, format_summary_table};
use crate::error::{SpendlogError, SpendlogResult};
use crate::export;
use crate::models::{Money, Month};
use crate::reports;
use crate::storage::Store;

/// Arguments for the monthly summary
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Restrict the summary to one month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<Month>,

    /// Override the configured monthly budget for the alert check
    #[arg(short, long)]
    pub budget: Option<String>,
}

/// Chart subcommands
#[derive(Subcommand, Debug)]
pub enum ChartCommands {
    /// Pie chart of spend by category
    Pie {
        /// Output PNG path (defaults to the charts directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Bar chart of monthly totals
    Bar {
        /// Output PNG path (defaults to the charts directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all expenses to CSV
    Csv {
        /// Output file path (defaults to the reports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the full PDF report, including freshly rendered charts
    Pdf {
        /// Output file path (defaults to the reports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle the `summary` command
pub fn handle_summary(store: &Store, settings: &Settings, args: SummaryArgs) -> SpendlogResult<()> {
    let threshold = match &args.budget {
        Some(raw) => Money::parse(raw).map_err(|e| SpendlogError::Validation(e.to_string()))?,
        None => settings.monthly_budget,
    };

    let expenses = store.all()?;
    if expenses.is_empty() {
        println!("No expenses to summarize.");
        return Ok(());
    }

    let symbol = &settings.currency_symbol;

    if let Some(month) = args.month {
        match reports::summary_for_month(&expenses, month) {
            Some(summary) => {
                println!("Summary for {}", summary.month);
                println!("{}", format_breakdown_table(&summary.categories, symbol));
                let alert = reports::BudgetAlert::evaluate(summary.month, summary.total, threshold);
                println!("{}", format_alert_line(&alert, symbol));
            }
            None => println!("No expenses recorded in {}.", month),
        }
        return Ok(());
    }

    let summaries = reports::monthly_summaries(&expenses);
    println!("{}", format_summary_table(&summaries, symbol));

    // Alert check on the most recent month, matching the add-time check
    if let Some(latest) = summaries.last() {
        let alert = reports::BudgetAlert::evaluate(latest.month, latest.total, threshold);
        println!("{}", format_alert_line(&alert, symbol));
    }

    Ok(())
}

/// Handle the `chart` command
pub fn handle_chart(
    store: &Store,
    paths: &SpendlogPaths,
    cmd: ChartCommands,
) -> SpendlogResult<()> {
    let expenses = store.all()?;
    if expenses.is_empty() {
        println!("No expenses to plot.");
        return Ok(());
    }

    paths.ensure_directories()?;

    let output = match cmd {
        ChartCommands::Pie { output } => {
            let path = output.unwrap_or_else(|| paths.charts_dir().join(charts::pie_chart_filename()));
            let totals = reports::category_totals(&expenses);
            charts::render_pie_chart(&totals, &path)?;
            path
        }
        ChartCommands::Bar { output } => {
            let path = output.unwrap_or_else(|| paths.charts_dir().join(charts::bar_chart_filename()));
            let summaries = reports::monthly_summaries(&expenses);
            charts::render_bar_chart(&summaries, &path)?;
            path
        }
    };

    println!("Chart saved to {}", output.display());
    Ok(())
}

/// Handle the `export` command
pub fn handle_export(
    store: &Store,
    settings: &Settings,
    paths: &SpendlogPaths,
    cmd: ExportCommands,
) -> SpendlogResult<()> {
    let expenses = store.all()?;
    if expenses.is_empty() {
        println!("No expenses to export.");
        return Ok(());
    }

    paths.ensure_directories()?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    match cmd {
        ExportCommands::Csv { output } => {
            let path = output
                .unwrap_or_else(|| paths.reports_dir().join(format!("expenses_{}.csv", timestamp)));
            let file = std::fs::File::create(&path).map_err(|e| {
                SpendlogError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            export::export_expenses_csv(&expenses, file)?;
            println!("Data exported to {}", path.display());
        }
        ExportCommands::Pdf { output } => {
            let path = output
                .unwrap_or_else(|| paths.reports_dir().join(format!("expenses_{}.pdf", timestamp)));

            // Render fresh charts for embedding
            let pie_path = paths.charts_dir().join(charts::pie_chart_filename());
            let bar_path = paths.charts_dir().join(charts::bar_chart_filename());
            charts::render_pie_chart(&reports::category_totals(&expenses), &pie_path)?;
            charts::render_bar_chart(&reports::monthly_summaries(&expenses), &bar_path)?;

            export::export_pdf(
                &expenses,
                &settings.currency_symbol,
                &[pie_path, bar_path],
                &path,
            )?;
            println!("PDF exported to {}", path.display());
        }
    }

    Ok(())
}
