use serde::{Deserialize, Serialize};

use crate::errors::{BudgetError, Result};

use super::format::LineFormat;

/// A savings target whose progress accumulates through contributions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialGoal {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
}

impl FinancialGoal {
    pub fn new(name: impl Into<String>, target_amount: f64) -> Self {
        Self {
            name: name.into(),
            target_amount,
            current_amount: 0.0,
        }
    }

    /// Share of the target reached so far, in percent.
    ///
    /// Fails with [`BudgetError::DivisionByZero`] when the target is zero rather than
    /// reporting an infinite or undefined value.
    pub fn progress_percent(&self) -> Result<f64> {
        if self.target_amount == 0.0 {
            return Err(BudgetError::DivisionByZero("goal progress"));
        }
        Ok(self.current_amount / self.target_amount * 100.0)
    }

    pub fn is_achieved(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    /// Adds `amount` to the saved balance. Non-positive amounts are rejected untouched.
    pub fn contribute(&mut self, amount: f64) -> Result<()> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(BudgetError::invalid(format!(
                "contribution to `{}` must be a positive amount",
                self.name
            )));
        }
        self.current_amount += amount;
        Ok(())
    }

    pub fn display_line(&self, format: &LineFormat) -> Result<String> {
        let progress = self.progress_percent()?;
        Ok(format!(
            "{}: {} / {} (Progress: {:.2}%)",
            format.label(&self.name),
            format.money(self.current_amount),
            format.money(self.target_amount),
            progress
        ))
    }
}
