pub mod dashboard_service;
pub mod insight_service;
pub mod summary_service;

pub use dashboard_service::{BudgetRow, CategorySlice, Dashboard, DashboardService};
pub use insight_service::{
    AlertKind, BudgetAlert, InsightService, InsightThresholds, SpendingInsights,
};
pub use summary_service::SummaryService;

#[cfg(test)]
mod tests;
