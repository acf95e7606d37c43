
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::{NewTransaction, Transaction};

fn txn(category: &str, amount: Decimal, (y, m, d): (i32, u32, u32)) -> Transaction {
    NewTransaction::new(
        format!("{category} purchase"),
        amount,
        NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        category,
    )
    .with_id(uuid::Uuid::new_v4())
}
