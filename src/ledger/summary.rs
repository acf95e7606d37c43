//! Derived views over ledger data. None of these are stored; they are rebuilt
//! from the transaction and budget collections on every read.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{category::Category, month::YearMonth};

/// Reported as the percentage of a zero budget that has any spend against it.
pub const SATURATED_PERCENTAGE: Decimal = Decimal::MAX;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Spend per category, iterated in order of first appearance.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
    #[serde(skip)]
    index: HashMap<Category, usize>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the running total for `category`, saturating at the
    /// `Decimal` bounds.
    pub fn add(&mut self, category: &Category, amount: Decimal) {
        match self.index.get(category) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                entry.total = entry.total.saturating_add(amount);
            }
            None => {
                self.index.insert(category.clone(), self.entries.len());
                self.entries.push(CategoryTotal {
                    category: category.clone(),
                    total: amount,
                });
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.index
            .get(category)
            .map(|&position| self.entries[position].total)
    }

    /// The total for `category`, zero when nothing was spent there.
    pub fn spent(&self, category: &str) -> Decimal {
        self.get(category).unwrap_or(Decimal::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over every category.
    pub fn grand_total(&self) -> Decimal {
        saturating_sum(self.entries.iter().map(|entry| entry.total))
    }

    pub fn into_vec(self) -> Vec<CategoryTotal> {
        self.entries
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: YearMonth,
    pub amount: Decimal,
}

/// Budget against actual spend for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetComparison {
    pub category: Category,
    pub spent: Decimal,
    pub budget: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
}

impl BudgetComparison {
    pub fn new(category: Category, spent: Decimal, budget: Decimal) -> Self {
        Self {
            category,
            spent,
            budget,
            remaining: budget.saturating_sub(spent),
            percentage: percentage_of(spent, budget),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }

    /// Spend below `ratio` of the budget. `ratio` is clamped to `0..=1`, so
    /// an over-budget comparison is never also below.
    pub fn is_below(&self, ratio: Decimal) -> bool {
        let ratio = ratio.clamp(Decimal::ZERO, Decimal::ONE);
        self.spent < self.budget.saturating_mul(ratio)
    }
}

/// Adds up `amounts`, pinning the result at `Decimal::MAX` / `Decimal::MIN`
/// instead of overflowing.
pub fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(amount))
}

/// `spent / budget * 100`, with zero budgets mapped to `0` (no spend) or
/// [`SATURATED_PERCENTAGE`] (any spend). Overflow also saturates.
pub fn percentage_of(spent: Decimal, budget: Decimal) -> Decimal {
    if budget.is_zero() {
        return if spent.is_zero() {
            Decimal::ZERO
        } else {
            SATURATED_PERCENTAGE
        };
    }
    spent
        .checked_div(budget)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(SATURATED_PERCENTAGE)
}
