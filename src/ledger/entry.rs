use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

use super::{category::ExpenseCategory, format::LineFormat, goal::FinancialGoal};

/// A named, amount-bearing line item.
///
/// The ledger itself only stores `Category` entries; goals are kept in their own collection and
/// become entries through `From<FinancialGoal>` when a caller wants them listed alongside
/// expenses, where they count with their saved amount and the `Goal` classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BudgetEntry {
    Category(ExpenseCategory),
    Goal(FinancialGoal),
}

impl BudgetEntry {
    pub fn name(&self) -> &str {
        match self {
            BudgetEntry::Category(category) => &category.name,
            BudgetEntry::Goal(goal) => &goal.name,
        }
    }

    /// Amount that counts towards expenses: the category amount, or what a goal has saved.
    pub fn amount(&self) -> f64 {
        match self {
            BudgetEntry::Category(category) => category.amount,
            BudgetEntry::Goal(goal) => goal.current_amount,
        }
    }

    pub fn classification(&self) -> Classification {
        match self {
            BudgetEntry::Category(category) => category.classification(),
            BudgetEntry::Goal(_) => Classification::Goal,
        }
    }

    pub fn is_essential(&self) -> bool {
        matches!(self, BudgetEntry::Category(category) if category.is_essential)
    }

    pub fn display_line(&self, format: &LineFormat) -> Result<String> {
        match self {
            BudgetEntry::Category(category) => Ok(category.display_line(format)),
            BudgetEntry::Goal(goal) => goal.display_line(format),
        }
    }
}

impl From<ExpenseCategory> for BudgetEntry {
    fn from(category: ExpenseCategory) -> Self {
        BudgetEntry::Category(category)
    }
}

impl From<FinancialGoal> for BudgetEntry {
    fn from(goal: FinancialGoal) -> Self {
        BudgetEntry::Goal(goal)
    }
}

/// Label used by the expense analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Essential,
    NonEssential,
    Goal,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Essential => "Essential",
            Classification::NonEssential => "Non-Essential",
            Classification::Goal => "Goal",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
