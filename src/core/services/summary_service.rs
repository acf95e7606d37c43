//! Aggregates transactions and budgets into the totals the dashboard shows.
//! Sums saturate at the `Decimal` bounds rather than overflow.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::ledger::{
    saturating_sum, Budget, BudgetComparison, CategoryTotals, MonthlyTotal, Transaction,
    YearMonth,
};

/// Stateless aggregation over transaction and budget slices.
pub struct SummaryService;

impl SummaryService {
    /// Sums transaction amounts per category. Categories without
    /// transactions do not appear.
    pub fn category_totals(transactions: &[Transaction]) -> CategoryTotals {
        let mut totals = CategoryTotals::new();
        for txn in transactions {
            totals.add(&txn.category, txn.amount);
        }
        totals
    }

    /// Sums transaction amounts per calendar month, oldest month first.
    pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
        let mut by_month: BTreeMap<YearMonth, Decimal> = BTreeMap::new();
        for txn in transactions {
            let total = by_month.entry(txn.month()).or_default();
            *total = total.saturating_add(txn.amount);
        }
        by_month
            .into_iter()
            .map(|(month, amount)| MonthlyTotal { month, amount })
            .collect()
    }

    /// One comparison per budget, in budget order. Spend in categories
    /// without a budget is ignored.
    pub fn budget_comparisons(
        budgets: &[Budget],
        totals: &CategoryTotals,
    ) -> Vec<BudgetComparison> {
        budgets
            .iter()
            .map(|budget| {
                let spent = totals.spent(budget.category.as_str());
                BudgetComparison::new(budget.category.clone(), spent, budget.amount)
            })
            .collect()
    }

    pub fn total_spent(transactions: &[Transaction]) -> Decimal {
        saturating_sum(transactions.iter().map(|txn| txn.amount))
    }

    pub fn total_budgeted(budgets: &[Budget]) -> Decimal {
        saturating_sum(budgets.iter().map(|budget| budget.amount))
    }
}
