use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    budget::Budget,
    summary::{BudgetComparison, CategoryTotals, MonthlyTotal},
    transaction::{NewTransaction, Transaction},
};
use crate::core::services::{InsightService, InsightThresholds, SpendingInsights, SummaryService};
use crate::errors::TrackerError;

/// Session state: every recorded transaction and the budget for each category.
///
/// Nothing derived is cached here; each summary method recomputes from the
/// collections. Deserializing rejects repeated budget categories and
/// repeated transaction ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "LedgerParts")]
pub struct Ledger {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
}

#[derive(Deserialize)]
struct LedgerParts {
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    budgets: Vec<Budget>,
}

impl TryFrom<LedgerParts> for Ledger {
    type Error = TrackerError;

    fn try_from(parts: LedgerParts) -> Result<Self, Self::Error> {
        let mut ids = HashSet::with_capacity(parts.transactions.len());
        if let Some(txn) = parts.transactions.iter().find(|txn| !ids.insert(txn.id)) {
            return Err(TrackerError::DuplicateTransaction(txn.id));
        }
        let mut categories = HashSet::with_capacity(parts.budgets.len());
        if let Some(budget) = parts
            .budgets
            .iter()
            .find(|budget| !categories.insert(&budget.category))
        {
            return Err(TrackerError::DuplicateBudget(budget.category.clone()));
        }
        Ok(Self {
            transactions: parts.transactions,
            budgets: parts.budgets,
        })
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the transaction under a fresh identifier and returns the stored record.
    pub fn add_transaction(&mut self, input: NewTransaction) -> Transaction {
        let transaction = input.with_id(Uuid::new_v4());
        tracing::debug!(
            id = %transaction.id,
            category = %transaction.category,
            amount = %transaction.amount,
            "transaction recorded"
        );
        self.transactions.push(transaction.clone());
        transaction
    }

    /// Replaces the budget for the same category in place, or appends it.
    pub fn upsert_budget(&mut self, budget: Budget) {
        match self
            .budgets
            .iter_mut()
            .find(|existing| existing.category == budget.category)
        {
            Some(existing) => {
                tracing::debug!(category = %budget.category, amount = %budget.amount, "budget replaced");
                *existing = budget;
            }
            None => {
                tracing::debug!(category = %budget.category, amount = %budget.amount, "budget added");
                self.budgets.push(budget);
            }
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn budget_for(&self, category: &str) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|budget| budget.category.as_str() == category)
    }

    /// Most recent date first; same-day entries keep the order they were added.
    pub fn transactions_newest_first(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn category_totals(&self) -> CategoryTotals {
        SummaryService::category_totals(&self.transactions)
    }

    pub fn monthly_totals(&self) -> Vec<MonthlyTotal> {
        SummaryService::monthly_totals(&self.transactions)
    }

    pub fn budget_comparisons(&self) -> Vec<BudgetComparison> {
        SummaryService::budget_comparisons(&self.budgets, &self.category_totals())
    }

    pub fn insights(&self, thresholds: &InsightThresholds) -> SpendingInsights {
        InsightService::insights(&self.budget_comparisons(), thresholds)
    }

    pub fn total_spent(&self) -> Decimal {
        SummaryService::total_spent(&self.transactions)
    }

    pub fn total_budgeted(&self) -> Decimal {
        SummaryService::total_budgeted(&self.budgets)
    }
}
