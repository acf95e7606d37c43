//! Assembles everything the dashboard renders into one snapshot.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::{InsightService, SpendingInsights, SummaryService};
use crate::config::Config;
use crate::ledger::{BudgetComparison, Category, Ledger, MonthlyTotal, Transaction};

/// A pie-chart slice: one category's spend and its share of all spend.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategorySlice {
    pub category: Category,
    pub total: Decimal,
    /// Percent of total spend, rounded to two decimals.
    pub share: Decimal,
}

/// A budget progress bar.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BudgetRow {
    pub comparison: BudgetComparison,
    /// `percentage` clamped to `0..=100`.
    pub bar_width: Decimal,
    pub over_budget: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub total_spent: Decimal,
    pub total_budgeted: Decimal,
    pub category_slices: Vec<CategorySlice>,
    pub monthly: Vec<MonthlyTotal>,
    pub budget_rows: Vec<BudgetRow>,
    pub insights: SpendingInsights,
    pub recent: Vec<Transaction>,
    pub alert_messages: Vec<String>,
}

pub struct DashboardService;

impl DashboardService {
    pub fn snapshot(ledger: &Ledger, config: &Config) -> Dashboard {
        let transactions = ledger.transactions();
        let totals = SummaryService::category_totals(transactions);
        let total_spent = SummaryService::total_spent(transactions);
        let comparisons = SummaryService::budget_comparisons(ledger.budgets(), &totals);
        let insights = InsightService::insights(&comparisons, &config.thresholds());

        let category_slices = totals
            .into_vec()
            .into_iter()
            .map(|entry| CategorySlice {
                share: share_of(entry.total, total_spent),
                category: entry.category,
                total: entry.total,
            })
            .collect();

        let budget_rows = comparisons
            .into_iter()
            .map(|comparison| BudgetRow {
                bar_width: comparison
                    .percentage
                    .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
                over_budget: comparison.is_over_budget(),
                comparison,
            })
            .collect();

        let alert_messages = insights
            .over_budget
            .iter()
            .chain(insights.under_budget.iter())
            .map(|alert| alert.message(&config.currency_symbol))
            .collect();

        let dashboard = Dashboard {
            total_spent,
            total_budgeted: SummaryService::total_budgeted(ledger.budgets()),
            category_slices,
            monthly: SummaryService::monthly_totals(transactions),
            budget_rows,
            insights,
            recent: ledger
                .transactions_newest_first()
                .into_iter()
                .cloned()
                .collect(),
            alert_messages,
        };
        tracing::trace!(
            transactions = transactions.len(),
            budgets = ledger.budgets().len(),
            "dashboard snapshot built"
        );
        dashboard
    }
}

fn share_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percent| percent.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}
