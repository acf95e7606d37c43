#![allow(dead_code)]

use chrono::NaiveDate;
use expense_core::{Ledger, NewTransaction};
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn spend(category: &str, amount: Decimal, on: NaiveDate) -> NewTransaction {
    NewTransaction::new(format!("{category} spend"), amount, on, category)
}

/// Ledger with a handful of transactions across a year boundary.
pub fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add_transaction(spend("Food & Dining", Decimal::new(4250, 2), date(2024, 12, 14)));
    ledger.add_transaction(spend("Transportation", Decimal::new(1800, 2), date(2025, 1, 3)));
    ledger.add_transaction(spend("Food & Dining", Decimal::new(7750, 2), date(2025, 1, 9)));
    ledger.add_transaction(spend("Entertainment", Decimal::new(1500, 2), date(2025, 2, 1)));
    ledger
}
