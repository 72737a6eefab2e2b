//! Configuration module for spendlog
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (monthly budget, currency, date format)

pub mod paths;
pub mod settings;

pub use paths::SpendlogPaths;
pub use settings::Settings;
