use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// A monthly spending ceiling for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Budget {
    pub category: Category,
    pub amount: Decimal,
}

impl Budget {
    pub fn new(category: impl Into<Category>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}
