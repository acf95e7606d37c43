//! Flags categories that ran over budget or are well under it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_amount;
use crate::ledger::{BudgetComparison, Category};

/// Tunables for the under-budget rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct InsightThresholds {
    /// Spend below `budget * underspend_ratio` raises an under-budget alert.
    /// Values outside `0..=1` are clamped when the rule is applied.
    pub underspend_ratio: Decimal,
}

impl InsightThresholds {
    /// Builds thresholds with the ratio clamped to `0..=1`.
    pub fn new(underspend_ratio: Decimal) -> Self {
        Self {
            underspend_ratio: underspend_ratio.clamp(Decimal::ZERO, Decimal::ONE),
        }
    }

    /// Half the budget.
    pub fn default_underspend_ratio() -> Decimal {
        Decimal::new(5, 1)
    }
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            underspend_ratio: Self::default_underspend_ratio(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlertKind {
    OverBudget,
    UnderBudget,
}

/// A single insight line. `amount` is the overspend for
/// [`AlertKind::OverBudget`] and what is left for [`AlertKind::UnderBudget`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetAlert {
    pub kind: AlertKind,
    pub category: Category,
    pub amount: Decimal,
}

impl BudgetAlert {
    pub fn message(&self, currency_symbol: &str) -> String {
        let amount = format_amount(self.amount, currency_symbol);
        match self.kind {
            AlertKind::OverBudget => format!("{}: {} over budget", self.category, amount),
            AlertKind::UnderBudget => format!("{}: {} remaining", self.category, amount),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpendingInsights {
    pub over_budget: Vec<BudgetAlert>,
    pub under_budget: Vec<BudgetAlert>,
}

impl SpendingInsights {
    pub fn is_empty(&self) -> bool {
        self.over_budget.is_empty() && self.under_budget.is_empty()
    }
}

pub struct InsightService;

impl InsightService {
    /// Comparisons whose spend exceeds the budget.
    pub fn over_budget(comparisons: &[BudgetComparison]) -> Vec<&BudgetComparison> {
        comparisons
            .iter()
            .filter(|comparison| comparison.is_over_budget())
            .collect()
    }

    /// Comparisons whose spend is below the underspend ratio of the budget.
    pub fn under_budget<'a>(
        comparisons: &'a [BudgetComparison],
        thresholds: &InsightThresholds,
    ) -> Vec<&'a BudgetComparison> {
        comparisons
            .iter()
            .filter(|comparison| comparison.is_below(thresholds.underspend_ratio))
            .collect()
    }

    pub fn insights(
        comparisons: &[BudgetComparison],
        thresholds: &InsightThresholds,
    ) -> SpendingInsights {
        let over_budget = Self::over_budget(comparisons)
            .into_iter()
            .map(|comparison| BudgetAlert {
                kind: AlertKind::OverBudget,
                category: comparison.category.clone(),
                amount: comparison.spent.saturating_sub(comparison.budget),
            })
            .collect();
        let under_budget = Self::under_budget(comparisons, thresholds)
            .into_iter()
            .map(|comparison| BudgetAlert {
                kind: AlertKind::UnderBudget,
                category: comparison.category.clone(),
                amount: comparison.remaining,
            })
            .collect();
        SpendingInsights {
            over_budget,
            under_budget,
        }
    }
}
