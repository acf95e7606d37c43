//! Validation for raw form input. The ledger trusts whatever it is given, so
//! this is the only place malformed values are turned away.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::InputError;
use crate::ledger::{Budget, Category, CategorySet, NewTransaction};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field values exactly as the transaction form submitted them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub date: String,
    pub category: String,
}

impl TransactionForm {
    pub fn validate(&self, categories: &CategorySet) -> Result<NewTransaction, InputError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(InputError::EmptyDescription);
        }
        let amount = parse_amount(&self.amount)?;
        if amount <= Decimal::ZERO {
            return Err(InputError::NonPositiveAmount);
        }
        let date = parse_date(&self.date)?;
        let category = known_category(&self.category, categories)?;
        Ok(NewTransaction::new(description, amount, date, category))
    }
}

/// Field values exactly as the budget form submitted them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetForm {
    pub category: String,
    pub amount: String,
}

impl BudgetForm {
    pub fn validate(&self, categories: &CategorySet) -> Result<Budget, InputError> {
        let category = known_category(&self.category, categories)?;
        let amount = parse_amount(&self.amount)?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(InputError::NegativeAmount);
        }
        Ok(Budget::new(category, amount))
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingAmount);
    }
    Decimal::from_str(trimmed).map_err(|_| InputError::InvalidAmount(trimmed.to_string()))
}

fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(trimmed.to_string()))
}

fn known_category(raw: &str, categories: &CategorySet) -> Result<Category, InputError> {
    categories
        .get(raw)
        .cloned()
        .ok_or_else(|| InputError::UnknownCategory(raw.to_string()))
}
