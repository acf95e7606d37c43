#![doc(test(attr(deny(warnings))))]

//! Expense Core keeps a session's transactions and category budgets in memory
//! and derives the spending summaries a dashboard shows: totals per category
//! and per month, budget usage, and over/under budget alerts.

pub mod config;
pub mod core;
pub mod errors;
pub mod format;
pub mod ledger;
pub mod utils;

pub use crate::config::{Config, ConfigManager};
pub use crate::core::services::{
    DashboardService, InsightService, InsightThresholds, SpendingInsights, SummaryService,
};
pub use crate::errors::{InputError, TrackerError};
pub use crate::ledger::{Budget, Category, CategorySet, Ledger, NewTransaction, Transaction};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
