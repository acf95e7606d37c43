pub mod input;
pub mod services;

pub use input::{BudgetForm, TransactionForm};
