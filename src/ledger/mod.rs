//! Expense domain models and the session ledger that owns them.

pub mod budget;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod month;
pub mod summary;
pub mod transaction;

pub use budget::Budget;
pub use category::{Category, CategorySet, DEFAULT_CATEGORIES};
pub use ledger::Ledger;
pub use month::YearMonth;
pub use summary::{
    percentage_of, saturating_sum, BudgetComparison, CategoryTotal, CategoryTotals, MonthlyTotal,
    SATURATED_PERCENTAGE,
};
pub use transaction::{NewTransaction, Transaction};
