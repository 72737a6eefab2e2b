//! CLI command handlers for spendlog
//!
//! Each handler takes the store handle (and settings/paths where needed)
//! explicitly, keeping the handlers independent of how the binary wires
//! things up.

pub mod expense;
pub mod report;

pub use expense::{handle_add, handle_import, handle_list, AddArgs, ImportArgs, ListArgs};
pub use report::{
    handle_chart, handle_export, handle_summary, ChartCommands, ExportCommands, SummaryArgs,
};
