//! spendlog - Console expense tracker
//!
//! This library provides the core functionality for the spendlog expense
//! tracking application: recording expenses into a local SQLite database,
//! filtered views, monthly summaries with budget alerts, chart rendering,
//! and CSV/PDF report export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, months)
//! - `storage`: SQLite storage layer
//! - `services`: Business logic layer
//! - `reports`: Monthly aggregation and budget alerts
//! - `charts`: PNG chart rendering
//! - `export`: CSV and PDF report generation
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::{paths::SpendlogPaths, settings::Settings};
//! use spendlog::storage::Store;
//!
//! let paths = SpendlogPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = Store::open(&paths.db_file())?;
//! ```

pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::SpendlogError;
