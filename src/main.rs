use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_add, handle_chart, handle_export, handle_import, handle_list, handle_summary, AddArgs,
    ChartCommands, ExportCommands, ImportArgs, ListArgs, SummaryArgs,
};
use spendlog::config::{paths::SpendlogPaths, settings::Settings};
use spendlog::storage::Store;

#[derive(Parser)]
#[command(
    name = "spendlog",
    author = "Kaylee Beyene",
    version,
    about = "Console expense tracker with budget alerts, charts, and CSV/PDF reports",
    long_about = "spendlog records expenses into a local database, shows filtered views \
                  and monthly summaries with budget alerts, renders pie/bar charts, and \
                  exports CSV and PDF reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses, optionally filtered by category or date
    #[command(alias = "ls")]
    List(ListArgs),

    /// Monthly summary with budget alert
    Summary(SummaryArgs),

    /// Render a chart to PNG
    #[command(subcommand)]
    Chart(ChartCommands),

    /// Export expenses to CSV or a full PDF report
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import expenses from a previously exported CSV
    Import(ImportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendlogPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Open storage (creates the database and schema on first run)
    paths.ensure_directories()?;
    let store = Store::open(&paths.db_file())?;

    match cli.command {
        Commands::Add(args) => handle_add(&store, &settings, args)?,
        Commands::List(args) => handle_list(&store, &settings, args)?,
        Commands::Summary(args) => handle_summary(&store, &settings, args)?,
        Commands::Chart(cmd) => handle_chart(&store, &paths, cmd)?,
        Commands::Export(cmd) => handle_export(&store, &settings, &paths, cmd)?,
        Commands::Import(args) => handle_import(&store, args)?,
        Commands::Config => {
            println!("spendlog Configuration");
            println!("======================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Database file:    {}", paths.db_file().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!("Charts directory:  {}", paths.charts_dir().display());
            println!();
            println!("Settings:");
            println!(
                "  Monthly budget: {}",
                settings.monthly_budget.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format: {}", settings.date_format);
        }
    }

    Ok(())
}
