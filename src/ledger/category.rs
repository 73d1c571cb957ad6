use serde::{Deserialize, Serialize};

use super::entry::Classification;
use super::format::LineFormat;

/// Canonical order of the household categories captured by a fixed-expense pass.
pub const FIXED_CATEGORY_NAMES: [&str; 10] = [
    "House Rent",
    "House Maintenance",
    "Electricity Bills",
    "Transportation",
    "Food Expenses",
    "Utilities Bills",
    "Other Essential Bills",
    "Entertainment",
    "Shopping",
    "Gifts",
];

pub const FIXED_CATEGORY_COUNT: usize = FIXED_CATEGORY_NAMES.len();

/// A spending line with a fixed amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseCategory {
    pub name: String,
    pub amount: f64,
    pub is_essential: bool,
}

impl ExpenseCategory {
    pub fn new(name: impl Into<String>, amount: f64, is_essential: bool) -> Self {
        Self {
            name: name.into(),
            amount,
            is_essential,
        }
    }

    /// One of the fixed household categories.
    pub fn essential(name: impl Into<String>, amount: f64) -> Self {
        Self::new(name, amount, true)
    }

    /// A discretionary wish-list purchase.
    pub fn wish_list(name: impl Into<String>, amount: f64) -> Self {
        Self::new(name, amount, false)
    }

    pub fn classification(&self) -> Classification {
        if self.is_essential {
            Classification::Essential
        } else {
            Classification::NonEssential
        }
    }

    pub fn display_line(&self, format: &LineFormat) -> String {
        format.amount_line(&self.name, self.amount)
    }
}
